//! Error types for graph construction.
//!
//! Every variant here is fatal: the call that produced it returns no graph.
//! Recoverable data-quality problems are reported as
//! [`Warning`](super::Warning)s instead.

use std::fmt;

use thiserror::Error;

/// Which half of the molecule a feature or diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Atom,
    Bond,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Atom => f.write_str("atom"),
            Scope::Bond => f.write_str("bond"),
        }
    }
}

/// Errors that abort graph construction.
#[derive(Debug, Error)]
pub enum Error {
    /// The conformer does not supply exactly one position per atom.
    #[error("conformer has {positions} positions but the molecule has {atoms} atoms")]
    ConformerSizeMismatch {
        /// Atom count of the molecule.
        atoms: usize,
        /// Position count of the conformer.
        positions: usize,
    },

    /// A categorical value fell outside its domain under index encoding.
    #[error("{scope} {item}: value '{value}' of feature '{feature}' is outside its categorical domain")]
    OutOfDomain {
        scope: Scope,
        /// Atom or bond index.
        item: usize,
        feature: String,
        value: String,
    },

    /// An extractor produced a value of the wrong kind for its domain.
    #[error("{scope} {item}: feature '{feature}' expects a {expected} value but got {found}")]
    KindMismatch {
        scope: Scope,
        item: usize,
        feature: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A bond references an atom index outside the molecule.
    #[error("bond {bond} references atoms ({begin}, {end}) but the molecule has {atom_count} atoms")]
    InvalidBond {
        bond: usize,
        begin: usize,
        end: usize,
        atom_count: usize,
    },

    /// No feature with this name is registered.
    #[error("unknown {scope} feature '{name}'")]
    UnknownFeature { scope: Scope, name: String },

    /// A feature with this name is already registered.
    #[error("{scope} feature '{name}' is already registered")]
    DuplicateFeature { scope: Scope, name: String },

    /// A categorical domain lists the same value twice.
    #[error("categorical domain lists '{0}' more than once")]
    DuplicateCategory(String),

    /// Failed to parse a feature selection TOML document.
    #[error("failed to parse feature selection: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// Creates an [`OutOfDomain`](Error::OutOfDomain) error.
    pub fn out_of_domain(
        scope: Scope,
        item: usize,
        feature: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::OutOfDomain {
            scope,
            item,
            feature: feature.into(),
            value: value.into(),
        }
    }

    /// Creates an [`UnknownFeature`](Error::UnknownFeature) error.
    pub fn unknown_feature(scope: Scope, name: impl Into<String>) -> Self {
        Self::UnknownFeature {
            scope,
            name: name.into(),
        }
    }

    /// Returns `true` for errors caused by the molecule or conformer data
    /// rather than by how the conversion was configured.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::ConformerSizeMismatch { .. }
                | Error::OutOfDomain { .. }
                | Error::KindMismatch { .. }
                | Error::InvalidBond { .. }
        )
    }
}
