use std::fmt;

use super::error::Scope;

/// A recoverable data-quality problem noticed while building a graph.
///
/// Warnings never stop construction; each one names the fallback that was
/// applied. They are also emitted through [`log::warn!`] as they occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Every atom has a Z coordinate of exactly zero.
    PlanarConformer,

    /// These atoms sit exactly at the origin.
    AtomsAtOrigin { atoms: Vec<usize> },

    /// A categorical value was outside its domain under one-hot encoding;
    /// its segment was left all-zero.
    OutOfDomain {
        scope: Scope,
        item: usize,
        feature: String,
        value: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::PlanarConformer => {
                f.write_str("conformer has no Z coordinates (2D layout?)")
            }
            Warning::AtomsAtOrigin { atoms } => write!(
                f,
                "conformer places {} atom(s) at (0.0, 0.0, 0.0): {:?}",
                atoms.len(),
                atoms
            ),
            Warning::OutOfDomain {
                scope,
                item,
                feature,
                value,
            } => write!(
                f,
                "{scope} {item}: value '{value}' of feature '{feature}' is outside its domain; encoded as all zeros"
            ),
        }
    }
}
