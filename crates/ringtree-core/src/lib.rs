//! Ringtree Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Ringtree record
//! reader, layout engine and exporters. It includes:
//!
//! - **Identifiers**: Interned entity identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Cartesian and polar points ([`geometry`] module)
//! - **Records**: The typed input row consumed by the layout ([`record::Record`])
//! - **Scale**: The power-law time-to-radius mapping ([`scale::RadialScale`])
//! - **Segments**: Radial intervals of an entity bar ([`segment::RangeSegment`])

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod record;
pub mod scale;
pub mod segment;
