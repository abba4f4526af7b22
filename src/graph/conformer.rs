use super::error::Error;
use super::topology::MolecularTopology;
use super::warning::Warning;
use crate::model::conformer::Conformer;

/// Outcome of checking a conformer against a molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct ConformerCheck {
    pub atoms: usize,
    pub positions: usize,
    pub warnings: Vec<Warning>,
}

impl ConformerCheck {
    /// True iff the conformer has exactly one position per atom.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.atoms == self.positions
    }

    /// Converts an inconsistent check into [`Error::ConformerSizeMismatch`].
    pub fn into_result(self) -> Result<Vec<Warning>, Error> {
        if self.is_consistent() {
            Ok(self.warnings)
        } else {
            Err(Error::ConformerSizeMismatch {
                atoms: self.atoms,
                positions: self.positions,
            })
        }
    }
}

/// Checks a conformer for size consistency and degenerate geometry.
///
/// Geometry problems (a flat Z axis, atoms parked at the origin) are only
/// warnings and are logged as they are found; the size comparison is what
/// decides whether the conformer may be used.
pub fn check_conformer<M>(molecule: &M, conformer: &Conformer) -> ConformerCheck
where
    M: MolecularTopology + ?Sized,
{
    let mut warnings = Vec::new();

    if !conformer.is_empty() {
        if conformer.positions.iter().all(|p| p[2] == 0.0) {
            log::warn!("Conformer has no Z coordinates. Continuing ...");
            warnings.push(Warning::PlanarConformer);
        }

        let at_origin: Vec<usize> = conformer
            .positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.iter().all(|&c| c == 0.0))
            .map(|(i, _)| i)
            .collect();
        if !at_origin.is_empty() {
            log::warn!(
                "Conformer has atom(s) with invalid coordinates (0.0, 0.0, 0.0): {:?}. Continuing ...",
                at_origin
            );
            warnings.push(Warning::AtomsAtOrigin { atoms: at_origin });
        }
    }

    ConformerCheck {
        atoms: molecule.atom_count(),
        positions: conformer.len(),
        warnings,
    }
}
