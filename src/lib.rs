//! Turn molecules into generic attributed graphs for graph-learning frameworks.
//!
//! A molecule (atoms, bonds, optionally a 3D conformer) becomes a
//! [`GenericGraph`]: a node feature matrix, node positions, an edge index with
//! one `(begin, end)` pair per bond, and an edge feature matrix. Framework
//! specific wrappers only need to copy these buffers.
//!
//! # Features
//!
//! - **Feature registry**: named atom and bond extractors, each tagged with a
//!   numeric or ordered categorical [`Domain`]
//! - **Categorical encoding**: one-hot blocks or domain indices, chosen per
//!   conversion with [`EncodingMode`]
//! - **Conformer checks**: size mismatches are fatal, flat or origin-placed
//!   geometry is reported as a [`Warning`]
//! - **Master node**: an optional synthetic node linked to every atom, flagged
//!   by a trailing indicator column
//!
//! # Quick Start
//!
//! ```
//! use biochem_graph::{Atom, Bond, BondType, Element, Hybridization, Molecule};
//! use biochem_graph::{FeatureSelection, GraphError, convert};
//!
//! // Acetaldehyde, hydrogens implicit
//! let mut mol = Molecule::new();
//! mol.add_atom(Atom::new(Element::C).with_hybridization(Hybridization::Sp3).with_implicit_hs(3));
//! mol.add_atom(Atom::new(Element::C).with_hybridization(Hybridization::Sp2).with_implicit_hs(1));
//! mol.add_atom(Atom::new(Element::O).with_hybridization(Hybridization::Sp2));
//! mol.add_bond(Bond::new(0, 1, BondType::Single));
//! mol.add_bond(Bond::new(1, 2, BondType::Double));
//!
//! let selection = FeatureSelection::from_toml_str(r#"
//!     atom_features = ["is_aromatic", "hybridization"]
//!     bond_features = ["bond_type"]
//! "#)?;
//! let out = convert(&mol, None, &selection)?;
//! let graph = &out.graph;
//!
//! // 3 atoms + master node; 1 flag + 8 hybridization slots + master column
//! assert_eq!(graph.num_nodes(), 4);
//! assert_eq!(graph.node_attr().width(), 10);
//!
//! // 2 bonds + 3 master edges; 22 bond type slots + master column
//! assert_eq!(graph.num_edges(), 5);
//! assert_eq!(graph.edge_attr().width(), 23);
//! assert_eq!(graph.edge_index()[1], (1, 2));
//!
//! // No conformer: every position is the origin, nothing to warn about
//! assert!(graph.node_pos().iter().all(|p| *p == [0.0; 3]));
//! assert!(out.warnings.is_empty());
//! # Ok::<(), GraphError>(())
//! ```
//!
//! # Module Organization
//!
//! - Core conversion over any [`MolecularTopology`] with [`assemble`] and
//!   [`assemble_batch`]
//! - Conversions of [`Molecule`]s through the [`builtin`] catalog with
//!   [`convert`] and [`convert_batch`]
//! - Random molecules filtered by predicates in [`faker`]
//!
//! # Data Types
//!
//! - Input structures: [`Molecule`], [`Atom`], [`Bond`], [`Conformer`]
//! - Feature catalog: [`FeatureDescriptor`], [`FeatureRegistry`]
//! - Output records: [`GenericGraph`], [`FeatureMatrix`], [`DirectedGraph`]
//! - Fatal and recoverable diagnostics: [`GraphError`], [`Warning`]

mod catalog;
mod convert;
mod graph;
mod model;

pub mod faker;

pub use model::atom::Atom;
pub use model::conformer::Conformer;
pub use model::molecule::{Bond, Molecule};
pub use model::types::{
    BondDir, BondStereo, BondType, ChiralTag, Element, Hybridization, ParseElementError,
    ParseLabelError,
};

pub use graph::{
    Assembly, CategoricalDomain, ConformerCheck, DirectedGraph, Domain, Encoded, EncodingMode,
    Extractor, FeatureDescriptor, FeatureMatrix, FeatureRegistry, FeatureSelection, GenericGraph,
    GraphOptions, MolecularTopology, NumericKind, OutOfDomain, ResolvedSelection, Scope, Value,
    Warning, assemble, assemble_batch, check_conformer, encode,
};

pub use graph::Error as GraphError;

pub use catalog::builtin;
pub use convert::{convert, convert_batch};
