mod assembler;
mod config;
mod conformer;
mod directed;
mod encoding;
mod error;
mod feature;
mod generic;
mod registry;
mod topology;
mod warning;

pub use assembler::{Assembly, GraphOptions, assemble, assemble_batch};
pub use config::{FeatureSelection, ResolvedSelection};
pub use conformer::{ConformerCheck, check_conformer};
pub use directed::DirectedGraph;
pub use encoding::{Encoded, EncodingMode, OutOfDomain, encode};
pub use error::{Error, Scope};
pub use feature::{CategoricalDomain, Domain, Extractor, FeatureDescriptor, NumericKind, Value};
pub use generic::{FeatureMatrix, GenericGraph};
pub use registry::FeatureRegistry;
pub use topology::MolecularTopology;
pub use warning::Warning;
