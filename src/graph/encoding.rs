//! Categorical encoding.
//!
//! A categorical value becomes either a one-hot indicator block as wide as
//! its domain, or a single column holding its domain position. Both are pure
//! functions of `(value, domain)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::feature::CategoricalDomain;

/// How categorical features are laid out in feature rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingMode {
    /// One indicator column per domain value.
    #[default]
    OneHot,
    /// A single column holding the value's domain position.
    Index,
}

/// An encoded categorical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoded {
    /// Indicator block of `width` columns; `hot` is `None` when the value
    /// was outside the domain and the block is all zeros.
    OneHot { hot: Option<usize>, width: usize },
    Index(usize),
}

impl Encoded {
    #[inline]
    pub fn width(&self) -> usize {
        match self {
            Encoded::OneHot { width, .. } => *width,
            Encoded::Index(_) => 1,
        }
    }

    /// Whether the all-zero fallback was used.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Encoded::OneHot { hot: None, .. })
    }

    /// Appends the encoded columns to `row`.
    pub fn write_into(&self, row: &mut Vec<f32>) {
        match *self {
            Encoded::OneHot { hot, width } => {
                let start = row.len();
                row.resize(start + width, 0.0);
                if let Some(pos) = hot {
                    row[start + pos] = 1.0;
                }
            }
            Encoded::Index(pos) => row.push(pos as f32),
        }
    }

    pub fn to_vec(&self) -> Vec<f32> {
        let mut row = Vec::with_capacity(self.width());
        self.write_into(&mut row);
        row
    }
}

/// A value missing from its domain under index encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value '{value}' is not one of the {domain_len} values of its categorical domain")]
pub struct OutOfDomain {
    pub value: String,
    pub domain_len: usize,
}

/// Encodes `value` against `domain`.
///
/// Under [`EncodingMode::OneHot`] an unknown value is not an error: the
/// result is an all-zero block and a warning is logged. Under
/// [`EncodingMode::Index`] an unknown value has no position to report.
///
/// # Errors
///
/// Returns [`OutOfDomain`] only in index mode.
pub fn encode(
    value: &str,
    domain: &CategoricalDomain,
    mode: EncodingMode,
) -> Result<Encoded, OutOfDomain> {
    let position = domain.position(value);
    match mode {
        EncodingMode::OneHot => {
            if position.is_none() {
                log::warn!("Feature value {value} is not one of all possible values: {domain}");
            }
            Ok(Encoded::OneHot {
                hot: position,
                width: domain.len(),
            })
        }
        EncodingMode::Index => position.map(Encoded::Index).ok_or_else(|| OutOfDomain {
            value: value.to_string(),
            domain_len: domain.len(),
        }),
    }
}
