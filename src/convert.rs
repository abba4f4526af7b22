//! Conversions of built-in [`Molecule`]s through the built-in catalog.

use crate::catalog;
use crate::graph::{Assembly, Error, FeatureSelection, assemble, assemble_batch};
use crate::model::conformer::Conformer;
use crate::model::molecule::Molecule;

/// Converts one molecule using features named in `selection`.
///
/// # Errors
///
/// Fails if a name is not in the built-in catalog, or for any of the
/// reasons listed on [`assemble`].
pub fn convert(
    molecule: &Molecule,
    conformer: Option<&Conformer>,
    selection: &FeatureSelection,
) -> Result<Assembly, Error> {
    let resolved = selection.resolve(catalog::builtin())?;
    assemble(
        molecule,
        conformer,
        &resolved.atom_features,
        &resolved.bond_features,
        &resolved.options,
    )
}

/// Converts many molecules in parallel, without conformers.
///
/// The selection is resolved once up front; an unknown feature name fails
/// the whole batch. Per-molecule failures are reported in place, and the
/// output keeps the input order.
pub fn convert_batch(
    molecules: &[Molecule],
    selection: &FeatureSelection,
) -> Result<Vec<Result<Assembly, Error>>, Error> {
    let resolved = selection.resolve(catalog::builtin())?;
    let results = assemble_batch(
        molecules,
        &resolved.atom_features,
        &resolved.bond_features,
        &resolved.options,
    );
    Ok(results)
}
