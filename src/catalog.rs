//! The built-in feature catalog for [`Molecule`].
//!
//! Atom and bond features mirror the usual cheminformatics accessors. The
//! categorical domains list every variant of the corresponding model
//! enumeration in declaration order.

use std::sync::OnceLock;

use crate::graph::{
    CategoricalDomain, FeatureDescriptor, FeatureRegistry, NumericKind, Scope, Value,
};
use crate::model::molecule::Molecule;
use crate::model::types::{BondDir, BondStereo, BondType, ChiralTag, Hybridization};

static BUILTIN: OnceLock<FeatureRegistry<Molecule>> = OnceLock::new();

/// The process-wide built-in registry, built on first use.
pub fn builtin() -> &'static FeatureRegistry<Molecule> {
    BUILTIN.get_or_init(build)
}

type Feature = FeatureDescriptor<Molecule>;

fn domain(labels: impl Iterator<Item = &'static str>) -> CategoricalDomain {
    CategoricalDomain::new(labels).expect("model enumerations have distinct labels")
}

fn int<F>(name: &'static str, f: F) -> Feature
where
    F: Fn(&Molecule, usize) -> i64 + Send + Sync + 'static,
{
    Feature::numeric(name, NumericKind::Integer, move |m, i| Value::Int(f(m, i)))
}

fn real<F>(name: &'static str, f: F) -> Feature
where
    F: Fn(&Molecule, usize) -> f64 + Send + Sync + 'static,
{
    Feature::numeric(name, NumericKind::Real, move |m, i| Value::Real(f(m, i)))
}

fn flag<F>(name: &'static str, f: F) -> Feature
where
    F: Fn(&Molecule, usize) -> bool + Send + Sync + 'static,
{
    Feature::numeric(name, NumericKind::Boolean, move |m, i| {
        Value::Bool(f(m, i))
    })
}

fn atom_features() -> Vec<Feature> {
    vec![
        int("atomic_number", |m, i| {
            i64::from(m.atom(i).element.atomic_number())
        }),
        Feature::categorical("chiral_tag", domain(ChiralTag::labels()), |m, i| {
            Value::category(m.atom(i).chiral_tag.label())
        }),
        int("degree", |m, i| m.degree(i) as i64),
        int("explicit_valence", |m, i| m.explicit_valence(i)),
        int("formal_charge", |m, i| i64::from(m.atom(i).formal_charge)),
        Feature::categorical("hybridization", domain(Hybridization::labels()), |m, i| {
            Value::category(m.atom(i).hybridization.label())
        }),
        int("implicit_valence", |m, i| m.implicit_valence(i)),
        flag("is_aromatic", |m, i| m.atom(i).is_aromatic),
        flag("is_in_ring", |m, i| m.atom_in_ring(i)),
        real("mass", |m, i| m.atom(i).element.atomic_mass()),
        flag("no_implicit", |m, i| m.atom(i).no_implicit),
        int("num_explicit_hs", |m, i| {
            i64::from(m.atom(i).num_explicit_hs)
        }),
        int("num_implicit_hs", |m, i| i64::from(m.atom(i).implicit_hs())),
        int("num_radical_electrons", |m, i| {
            i64::from(m.atom(i).num_radical_electrons)
        }),
        int("total_degree", |m, i| m.total_degree(i) as i64),
        int("total_num_hs", |m, i| i64::from(m.atom(i).total_hs())),
        int("total_valence", |m, i| m.total_valence(i)),
    ]
}

fn bond_features() -> Vec<Feature> {
    vec![
        Feature::categorical("bond_dir", domain(BondDir::labels()), |m, i| {
            Value::category(m.bond(i).dir.label())
        }),
        Feature::categorical("bond_type", domain(BondType::labels()), |m, i| {
            Value::category(m.bond(i).bond_type.label())
        }),
        real("bond_type_as_double", |m, i| m.bond(i).bond_type.as_f64()),
        flag("is_aromatic", |m, i| m.bond(i).is_aromatic()),
        flag("is_conjugated", |m, i| m.bond(i).is_conjugated),
        flag("is_in_ring", |m, i| m.bond_in_ring(i)),
        Feature::categorical("stereo", domain(BondStereo::labels()), |m, i| {
            Value::category(m.bond(i).stereo.label())
        }),
        // Contribution to the begin atom's valence.
        real("valence_contrib", |m, i| {
            let bond = m.bond(i);
            bond.valence_contrib(bond.begin)
        }),
    ]
}

fn build() -> FeatureRegistry<Molecule> {
    let mut registry = FeatureRegistry::new();
    for feature in atom_features() {
        registry
            .register(Scope::Atom, feature)
            .expect("built-in atom feature names are unique");
    }
    for feature in bond_features() {
        registry
            .register(Scope::Bond, feature)
            .expect("built-in bond feature names are unique");
    }
    registry
}
