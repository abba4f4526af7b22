//! In-memory molecular structures consumed by the graph pipeline.
//!
//! - [`types`] – Elements and the closed chemistry enumerations (hybridization,
//!   chirality, bond type, bond direction, bond stereo) whose variant order is
//!   the canonical categorical encoding order.
//! - [`atom`] – Per-atom intrinsic properties.
//! - [`molecule`] – Ordered atoms and bonds, with lazily perceived
//!   connectivity (degree, valence, ring membership).
//! - [`conformer`] – Optional 3D coordinates, kept apart from the molecule so
//!   a single topology can be paired with several geometries.

pub mod atom;
pub mod conformer;
pub mod molecule;
pub mod types;
