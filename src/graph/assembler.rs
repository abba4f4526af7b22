use rayon::prelude::*;

use super::conformer::check_conformer;
use super::encoding::{EncodingMode, encode};
use super::error::{Error, Scope};
use super::feature::{Domain, FeatureDescriptor, Value};
use super::generic::{FeatureMatrix, GenericGraph};
use super::topology::MolecularTopology;
use super::warning::Warning;
use crate::model::conformer::Conformer;

/// Options controlling graph layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// How categorical features are encoded.
    pub encoding: EncodingMode,
    /// Whether to append a master node linked to every atom.
    pub master_node: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            encoding: EncodingMode::OneHot,
            master_node: true,
        }
    }
}

/// A constructed graph together with the warnings raised while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub graph: GenericGraph,
    pub warnings: Vec<Warning>,
}

/// Builds a [`GenericGraph`] from a molecule.
///
/// Node rows concatenate the encoded `atom_features` in the order given,
/// edge rows do the same with `bond_features`; that order fixes the column
/// layout. Positions come from `conformer`, or are all zero without one.
///
/// # Errors
///
/// - [`Error::ConformerSizeMismatch`] if the conformer does not have one
///   position per atom.
/// - [`Error::InvalidBond`] if a bond points outside the atom range.
/// - [`Error::OutOfDomain`] if a categorical value is unknown under
///   [`EncodingMode::Index`]. Under one-hot encoding the same situation is
///   a [`Warning::OutOfDomain`] and an all-zero block.
/// - [`Error::KindMismatch`] if an extractor returns a categorical value for
///   a numeric feature or vice versa.
pub fn assemble<M>(
    molecule: &M,
    conformer: Option<&Conformer>,
    atom_features: &[FeatureDescriptor<M>],
    bond_features: &[FeatureDescriptor<M>],
    options: &GraphOptions,
) -> Result<Assembly, Error>
where
    M: MolecularTopology + ?Sized,
{
    let mut warnings = Vec::new();

    let node_pos = resolve_positions(molecule, conformer, &mut warnings)?;
    let edge_index = collect_edges(molecule)?;

    let mut rows = RowEncoder {
        mode: options.encoding,
        warnings: &mut warnings,
    };
    let node_attr = rows.encode_all(molecule, Scope::Atom, molecule.atom_count(), atom_features)?;
    let edge_attr = rows.encode_all(molecule, Scope::Bond, molecule.bond_count(), bond_features)?;

    let graph = GenericGraph::new(node_attr, node_pos, edge_index, edge_attr);
    let graph = if options.master_node {
        graph.with_master_node()
    } else {
        graph
    };

    log::debug!(
        "assembled graph: {} nodes x {} features, {} edges x {} features, {} warning(s)",
        graph.num_nodes(),
        graph.node_attr().width(),
        graph.num_edges(),
        graph.edge_attr().width(),
        warnings.len()
    );

    Ok(Assembly { graph, warnings })
}

/// Runs [`assemble`] over many molecules in parallel, without conformers.
///
/// Each molecule is independent: one failure does not stop the others, and
/// the results keep the input order.
pub fn assemble_batch<M>(
    molecules: &[M],
    atom_features: &[FeatureDescriptor<M>],
    bond_features: &[FeatureDescriptor<M>],
    options: &GraphOptions,
) -> Vec<Result<Assembly, Error>>
where
    M: MolecularTopology + Sync,
{
    let results: Vec<_> = molecules
        .par_iter()
        .map(|molecule| {
            assemble(molecule, None, atom_features, bond_features, options)
        })
        .collect();
    log::debug!("assembled a batch of {} molecule(s)", results.len());
    results
}

fn resolve_positions<M>(
    molecule: &M,
    conformer: Option<&Conformer>,
    warnings: &mut Vec<Warning>,
) -> Result<Vec<[f32; 3]>, Error>
where
    M: MolecularTopology + ?Sized,
{
    match conformer {
        Some(conformer) => {
            warnings.extend(check_conformer(molecule, conformer).into_result()?);
            Ok(conformer
                .positions
                .iter()
                .map(|p| [p[0] as f32, p[1] as f32, p[2] as f32])
                .collect())
        }
        None => Ok(vec![[0.0; 3]; molecule.atom_count()]),
    }
}

fn collect_edges<M>(molecule: &M) -> Result<Vec<(usize, usize)>, Error>
where
    M: MolecularTopology + ?Sized,
{
    let atom_count = molecule.atom_count();
    (0..molecule.bond_count())
        .map(|bond| {
            let (begin, end) = molecule.bond_atoms(bond);
            if begin >= atom_count || end >= atom_count {
                return Err(Error::InvalidBond {
                    bond,
                    begin,
                    end,
                    atom_count,
                });
            }
            Ok((begin, end))
        })
        .collect()
}

struct RowEncoder<'w> {
    mode: EncodingMode,
    warnings: &'w mut Vec<Warning>,
}

impl RowEncoder<'_> {
    fn encode_all<M>(
        &mut self,
        molecule: &M,
        scope: Scope,
        count: usize,
        features: &[FeatureDescriptor<M>],
    ) -> Result<FeatureMatrix, Error>
    where
        M: ?Sized,
    {
        let width = features.iter().map(|f| f.width(self.mode)).sum();
        let mut matrix = FeatureMatrix::with_capacity(width, count);
        let mut row = Vec::with_capacity(width);
        for item in 0..count {
            row.clear();
            for feature in features {
                self.encode_one(molecule, scope, item, feature, &mut row)?;
            }
            matrix.push_row(&row);
        }
        Ok(matrix)
    }

    fn encode_one<M>(
        &mut self,
        molecule: &M,
        scope: Scope,
        item: usize,
        feature: &FeatureDescriptor<M>,
        row: &mut Vec<f32>,
    ) -> Result<(), Error>
    where
        M: ?Sized,
    {
        let value = feature.extract(molecule, item);
        let kind_mismatch = |found: &Value| Error::KindMismatch {
            scope,
            item,
            feature: feature.name().to_string(),
            expected: feature.domain().kind_name(),
            found: found.kind_name(),
        };

        match (feature.domain(), &value) {
            (Domain::Categorical(domain), Value::Category(label)) => {
                let encoded = encode(label, domain, self.mode).map_err(|e| {
                    Error::out_of_domain(scope, item, feature.name(), e.value)
                })?;
                if encoded.is_fallback() {
                    self.warnings.push(Warning::OutOfDomain {
                        scope,
                        item,
                        feature: feature.name().to_string(),
                        value: label.to_string(),
                    });
                }
                encoded.write_into(row);
            }
            (Domain::Categorical(_), other) => return Err(kind_mismatch(other)),
            (Domain::Numeric(_), other) => {
                let scalar = other.as_scalar().ok_or_else(|| kind_mismatch(other))?;
                row.push(scalar);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::feature::{CategoricalDomain, NumericKind};
    use proptest::prelude::*;

    /// Minimal molecule: per-atom (aromatic, hybridization) and per-bond
    /// (begin, end, type) tuples.
    #[derive(Debug, Clone)]
    struct Toy {
        atoms: Vec<(bool, &'static str)>,
        bonds: Vec<(usize, usize, &'static str)>,
    }

    impl MolecularTopology for Toy {
        fn atom_count(&self) -> usize {
            self.atoms.len()
        }
        fn bond_count(&self) -> usize {
            self.bonds.len()
        }
        fn bond_atoms(&self, bond: usize) -> (usize, usize) {
            (self.bonds[bond].0, self.bonds[bond].1)
        }
    }

    fn atom_features() -> Vec<FeatureDescriptor<Toy>> {
        vec![
            FeatureDescriptor::numeric("is_aromatic", NumericKind::Boolean, |m: &Toy, i| {
                Value::Bool(m.atoms[i].0)
            }),
            FeatureDescriptor::categorical(
                "hybridization",
                CategoricalDomain::new(["S", "SP", "SP2", "SP3"]).unwrap(),
                |m: &Toy, i| Value::category(m.atoms[i].1),
            ),
        ]
    }

    fn bond_features() -> Vec<FeatureDescriptor<Toy>> {
        vec![FeatureDescriptor::categorical(
            "bond_type",
            CategoricalDomain::new(["SINGLE", "DOUBLE", "AROMATIC"]).unwrap(),
            |m: &Toy, i| Value::category(m.bonds[i].2),
        )]
    }

    fn three_atoms() -> Toy {
        Toy {
            atoms: vec![(false, "SP3"), (true, "SP2"), (false, "SP")],
            bonds: vec![(0, 1, "SINGLE"), (2, 1, "DOUBLE")],
        }
    }

    fn options(encoding: EncodingMode, master_node: bool) -> GraphOptions {
        GraphOptions {
            encoding,
            master_node,
        }
    }

    #[test]
    fn default_options_match_one_hot_with_master() {
        let opts = GraphOptions::default();
        assert_eq!(opts.encoding, EncodingMode::OneHot);
        assert!(opts.master_node);
    }

    #[test]
    fn three_atom_scenario_with_master_node() {
        let toy = three_atoms();
        let out = assemble(
            &toy,
            None,
            &atom_features(),
            &bond_features(),
            &options(EncodingMode::OneHot, true),
        )
        .unwrap();
        let g = &out.graph;

        assert_eq!(g.node_attr().width(), 6);
        assert_eq!(g.node_attr().rows(), 4);
        assert_eq!(g.num_edges(), 5);
        assert_eq!(g.edge_attr().width(), 4);
        assert!(out.warnings.is_empty());

        assert_eq!(
            g.node_attr().row(1),
            Some(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0][..])
        );
        assert_eq!(
            g.node_attr().row(3),
            Some(&[0.0, 0.0, 0.0, 0.0, 0.0, 1.0][..])
        );
        assert_eq!(g.edge_index(), &[(0, 1), (2, 1), (0, 3), (1, 3), (2, 3)]);
        assert_eq!(g.edge_attr().row(1), Some(&[0.0, 1.0, 0.0, 0.0][..]));
        assert_eq!(g.edge_attr().row(4), Some(&[0.0, 0.0, 0.0, 1.0][..]));
        assert!(g.node_pos().iter().all(|p| *p == [0.0; 3]));
    }

    #[test]
    fn bond_endpoints_are_not_resorted() {
        let toy = three_atoms();
        let out = assemble(
            &toy,
            None,
            &[],
            &[],
            &options(EncodingMode::OneHot, false),
        )
        .unwrap();
        assert_eq!(out.graph.edge_index(), &[(0, 1), (2, 1)]);
    }

    #[test]
    fn index_mode_writes_positions() {
        let toy = three_atoms();
        let out = assemble(
            &toy,
            None,
            &atom_features(),
            &bond_features(),
            &options(EncodingMode::Index, false),
        )
        .unwrap();
        assert_eq!(
            out.graph.node_attr().to_rows(),
            vec![vec![0.0, 3.0], vec![1.0, 2.0], vec![0.0, 1.0]]
        );
        assert_eq!(out.graph.edge_attr().to_rows(), vec![vec![0.0], vec![1.0]]);
    }

    #[test]
    fn short_conformer_is_fatal() {
        let toy = three_atoms();
        let conformer = Conformer::new(vec![[1.0, 1.0, 1.0], [2.0, 2.0, 2.0]]);
        let err = assemble(
            &toy,
            Some(&conformer),
            &atom_features(),
            &bond_features(),
            &GraphOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::ConformerSizeMismatch {
                atoms: 3,
                positions: 2
            }
        ));
    }

    #[test]
    fn conformer_positions_and_warnings_flow_through() {
        let toy = three_atoms();
        let conformer = Conformer::new(vec![[0.0, 0.0, 0.0], [1.5, 0.0, 0.0], [2.5, 1.0, 0.0]]);
        let out = assemble(
            &toy,
            Some(&conformer),
            &atom_features(),
            &bond_features(),
            &GraphOptions::default(),
        )
        .unwrap();
        assert_eq!(out.graph.node_pos()[1], [1.5, 0.0, 0.0]);
        assert_eq!(out.graph.node_pos()[3], [0.0, 0.0, 0.0]);
        assert_eq!(
            out.warnings,
            vec![
                Warning::PlanarConformer,
                Warning::AtomsAtOrigin { atoms: vec![0] }
            ]
        );
    }

    #[test]
    fn out_of_domain_one_hot_is_zero_segment_with_warning() {
        let toy = Toy {
            atoms: vec![(true, "SP3D"), (false, "SP2")],
            bonds: vec![],
        };
        let out = assemble(
            &toy,
            None,
            &atom_features(),
            &[],
            &options(EncodingMode::OneHot, false),
        )
        .unwrap();
        assert_eq!(
            out.graph.node_attr().row(0),
            Some(&[1.0, 0.0, 0.0, 0.0, 0.0][..])
        );
        assert_eq!(
            out.graph.node_attr().row(1),
            Some(&[0.0, 0.0, 0.0, 1.0, 0.0][..])
        );
        assert_eq!(
            out.warnings,
            vec![Warning::OutOfDomain {
                scope: Scope::Atom,
                item: 0,
                feature: "hybridization".into(),
                value: "SP3D".into(),
            }]
        );
    }

    #[test]
    fn out_of_domain_index_mode_is_fatal() {
        let toy = Toy {
            atoms: vec![(false, "SP3"), (false, "SP3")],
            bonds: vec![(0, 1, "TRIPLE")],
        };
        let err = assemble(
            &toy,
            None,
            &atom_features(),
            &bond_features(),
            &options(EncodingMode::Index, true),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfDomain { scope: Scope::Bond, item: 0, ref value, .. } if value == "TRIPLE"
        ));
    }

    #[test]
    fn invalid_bond_is_fatal() {
        let toy = Toy {
            atoms: vec![(false, "SP3")],
            bonds: vec![(0, 4, "SINGLE")],
        };
        let err = assemble(&toy, None, &[], &[], &GraphOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidBond {
                bond: 0,
                begin: 0,
                end: 4,
                atom_count: 1
            }
        ));
    }

    #[test]
    fn kind_mismatch_is_fatal() {
        let toy = three_atoms();
        let wrong = vec![FeatureDescriptor::numeric(
            "hybridization",
            NumericKind::Integer,
            |m: &Toy, i| Value::category(m.atoms[i].1),
        )];
        let err = assemble(&toy, None, &wrong, &[], &GraphOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::KindMismatch {
                expected: "integer",
                found: "categorical",
                ..
            }
        ));
    }

    #[test]
    fn zero_bonds_without_master_node_has_no_edges() {
        let toy = Toy {
            atoms: vec![(false, "S"), (false, "S")],
            bonds: vec![],
        };
        let out = assemble(
            &toy,
            None,
            &atom_features(),
            &bond_features(),
            &options(EncodingMode::OneHot, false),
        )
        .unwrap();
        assert!(out.graph.edge_index().is_empty());
        assert!(out.graph.edge_attr().is_empty());
    }

    #[test]
    fn zero_bonds_with_master_node_links_every_atom() {
        let toy = Toy {
            atoms: vec![(false, "S"), (false, "SP"), (true, "SP2")],
            bonds: vec![],
        };
        let out = assemble(
            &toy,
            None,
            &atom_features(),
            &bond_features(),
            &options(EncodingMode::OneHot, true),
        )
        .unwrap();
        let g = &out.graph;
        assert_eq!(g.edge_index(), &[(0, 3), (1, 3), (2, 3)]);
        assert_eq!(g.edge_attr().width(), 1);
        assert!(g.edge_attr().iter().all(|row| row == [1.0]));
    }

    #[test]
    fn batch_keeps_input_order_and_isolates_failures() {
        let molecules: Vec<Toy> = (1..=6)
            .map(|n| Toy {
                atoms: vec![(false, "SP3"); n],
                bonds: if n == 4 {
                    vec![(0, 9, "SINGLE")]
                } else {
                    (1..n).map(|i| (i - 1, i, "SINGLE")).collect()
                },
            })
            .collect();
        let results = assemble_batch(
            &molecules,
            &atom_features(),
            &bond_features(),
            &options(EncodingMode::OneHot, false),
        );

        assert_eq!(results.len(), 6);
        for (n, result) in (1..=6).zip(&results) {
            if n == 4 {
                assert!(matches!(result, Err(Error::InvalidBond { bond: 0, .. })));
            } else {
                let graph = &result.as_ref().unwrap().graph;
                assert_eq!(graph.num_nodes(), n);
                assert_eq!(graph.num_edges(), n - 1);
            }
        }
    }

    #[test]
    fn empty_batch_is_empty() {
        let results = assemble_batch::<Toy>(&[], &[], &[], &GraphOptions::default());
        assert!(results.is_empty());
    }

    fn toy_strategy() -> impl Strategy<Value = Toy> {
        let hyb = prop::sample::select(vec!["S", "SP", "SP2", "SP3", "SP3D"]);
        let kind = prop::sample::select(vec!["SINGLE", "DOUBLE", "AROMATIC"]);
        prop::collection::vec((any::<bool>(), hyb), 1..12).prop_flat_map(move |atoms| {
            let n = atoms.len();
            let bonds = prop::collection::vec((0..n, 0..n, kind.clone()), 0..16);
            (Just(atoms), bonds).prop_map(|(atoms, bonds)| Toy { atoms, bonds })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(96))]

        #[test]
        fn rows_share_summed_width(toy in toy_strategy(), master in any::<bool>()) {
            let out = assemble(
                &toy,
                None,
                &atom_features(),
                &bond_features(),
                &options(EncodingMode::OneHot, master),
            ).unwrap();
            let extra = usize::from(master);
            let g = &out.graph;

            prop_assert_eq!(g.node_attr().width(), 1 + 4 + extra);
            prop_assert!(g.node_attr().iter().all(|r| r.len() == 5 + extra));
            prop_assert_eq!(g.node_attr().rows(), g.node_pos().len());
            prop_assert_eq!(g.edge_attr().rows(), g.edge_index().len());
            prop_assert_eq!(g.num_nodes(), toy.atoms.len() + extra);
            prop_assert_eq!(g.num_edges(), toy.bonds.len() + extra * toy.atoms.len());
        }

        #[test]
        fn master_node_preserves_existing_rows(toy in toy_strategy()) {
            let plain = assemble(
                &toy,
                None,
                &atom_features(),
                &bond_features(),
                &options(EncodingMode::OneHot, false),
            ).unwrap().graph;
            let augmented = plain.with_master_node();

            for (before, after) in plain.node_attr().iter().zip(augmented.node_attr().iter()) {
                prop_assert_eq!(&after[..before.len()], before);
                prop_assert_eq!(after[before.len()], 0.0);
            }
            prop_assert_eq!(&augmented.node_pos()[..plain.num_nodes()], plain.node_pos());
            prop_assert_eq!(&augmented.edge_index()[..plain.num_edges()], plain.edge_index());
        }
    }
}
