//! Entity graph of a timeline tree.
//!
//! The structure layer holds the entities of one layout pass, the
//! prerequisite links between them and the lookups the layout needs:
//!
//! - [`Entity`] - one record with its mutable layout state
//! - [`Link`] - a directed prerequisite edge, referenced by index
//! - [`EntityGraphBuilder`] - incremental construction in processing order
//! - [`rotation_group`] - the entities that turn together with a given one

mod entity;
mod graph;
mod link;
pub mod rotation;

pub use entity::{Entity, EntityIndex, Segments};
pub use graph::{EntityGraph, EntityGraphBuilder, Extent};
pub use link::{Link, LinkIndex};
pub use rotation::rotation_group;
