//! Link endpoint geometry.

use ringtree_core::geometry::{Point, PolarPoint};

use crate::structure::{EntityGraph, Link};

/// Drawing-space endpoints of a link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkEndpoints {
    from: Point,
    to: Point,
}

impl LinkEndpoints {
    /// Outer end of the prerequisite's bar.
    pub fn from(&self) -> Point {
        self.from
    }

    /// Inner end of the dependent's bar.
    pub fn to(&self) -> Point {
        self.to
    }
}

/// Computes where `link` starts and ends, from finished segments and angles.
pub fn endpoints(graph: &EntityGraph, link: &Link) -> LinkEndpoints {
    let source = graph.entity(link.source());
    let target = graph.entity(link.target());

    LinkEndpoints {
        from: PolarPoint::new(source.segments().total().end(), source.angle()).to_point(),
        to: PolarPoint::new(target.segments().total().start(), target.angle()).to_point(),
    }
}
