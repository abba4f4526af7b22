//! Feature selection configuration.
//!
//! A [`FeatureSelection`] names the atom and bond features to extract, in
//! column order, plus the layout options. It can be written by hand or
//! loaded from TOML:
//!
//! ```toml
//! atom_features = ["atomic_number", "hybridization", "is_aromatic"]
//! bond_features = ["bond_type", "is_conjugated"]
//! encoding = "one-hot"
//! master_node = true
//! ```

use serde::{Deserialize, Serialize};

use super::assembler::GraphOptions;
use super::encoding::EncodingMode;
use super::error::{Error, Scope};
use super::feature::FeatureDescriptor;
use super::registry::FeatureRegistry;

/// Feature names and layout options for a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureSelection {
    #[serde(default = "default_atom_features")]
    pub atom_features: Vec<String>,
    #[serde(default = "default_bond_features")]
    pub bond_features: Vec<String>,
    #[serde(default)]
    pub encoding: EncodingMode,
    #[serde(default = "default_master_node")]
    pub master_node: bool,
}

fn default_atom_features() -> Vec<String> {
    [
        "atomic_number",
        "formal_charge",
        "hybridization",
        "is_aromatic",
        "total_num_hs",
    ]
    .map(String::from)
    .to_vec()
}

fn default_bond_features() -> Vec<String> {
    ["bond_type", "is_conjugated", "is_in_ring"]
        .map(String::from)
        .to_vec()
}

fn default_master_node() -> bool {
    true
}

impl Default for FeatureSelection {
    fn default() -> Self {
        Self {
            atom_features: default_atom_features(),
            bond_features: default_bond_features(),
            encoding: EncodingMode::default(),
            master_node: default_master_node(),
        }
    }
}

/// A selection whose names have been looked up in a registry.
#[derive(Debug, Clone)]
pub struct ResolvedSelection<M: ?Sized> {
    pub atom_features: Vec<FeatureDescriptor<M>>,
    pub bond_features: Vec<FeatureDescriptor<M>>,
    pub options: GraphOptions,
}

impl FeatureSelection {
    /// Parses a selection from TOML. Missing keys take their defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        Ok(toml::from_str(toml)?)
    }

    pub fn options(&self) -> GraphOptions {
        GraphOptions {
            encoding: self.encoding,
            master_node: self.master_node,
        }
    }

    /// Looks every name up in `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFeature`] for the first name not registered
    /// in its scope.
    pub fn resolve<M: ?Sized>(
        &self,
        registry: &FeatureRegistry<M>,
    ) -> Result<ResolvedSelection<M>, Error> {
        Ok(ResolvedSelection {
            atom_features: registry.resolve(Scope::Atom, &self.atom_features)?,
            bond_features: registry.resolve(Scope::Bond, &self.bond_features)?,
            options: self.options(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::feature::{NumericKind, Value};

    #[test]
    fn empty_toml_gives_defaults() {
        let selection = FeatureSelection::from_toml_str("").unwrap();
        assert_eq!(selection, FeatureSelection::default());
        assert_eq!(selection.encoding, EncodingMode::OneHot);
        assert!(selection.master_node);
        assert_eq!(selection.atom_features.len(), 5);
    }

    #[test]
    fn toml_overrides_fields() {
        let selection = FeatureSelection::from_toml_str(
            r#"
            atom_features = ["degree"]
            bond_features = []
            encoding = "index"
            master_node = false
            "#,
        )
        .unwrap();
        assert_eq!(selection.atom_features, vec!["degree".to_string()]);
        assert!(selection.bond_features.is_empty());
        assert_eq!(
            selection.options(),
            GraphOptions {
                encoding: EncodingMode::Index,
                master_node: false
            }
        );
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let err = FeatureSelection::from_toml_str("master_atom = true").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn bad_encoding_is_a_parse_error() {
        let err = FeatureSelection::from_toml_str(r#"encoding = "binary""#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn resolve_against_registry() {
        let mut registry = FeatureRegistry::<[i64]>::new();
        registry
            .register(
                Scope::Atom,
                FeatureDescriptor::numeric("value", NumericKind::Integer, |m: &[i64], i| {
                    Value::Int(m[i])
                }),
            )
            .unwrap();

        let selection = FeatureSelection {
            atom_features: vec!["value".into()],
            bond_features: vec![],
            ..Default::default()
        };
        let resolved = selection.resolve(&registry).unwrap();
        assert_eq!(resolved.atom_features.len(), 1);
        assert!(resolved.options.master_node);

        let missing = FeatureSelection {
            bond_features: vec!["bond_type".into()],
            ..selection
        };
        assert!(matches!(
            missing.resolve(&registry),
            Err(Error::UnknownFeature {
                scope: Scope::Bond,
                ..
            })
        ));
    }
}
