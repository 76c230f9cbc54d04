//! Radial layout of timeline trees.
//!
//! One pass over time-sorted records:
//!
//! ```text
//! records ──sort──▶ extent scan ──▶ RadialScale
//!    │
//!    └─ for each record:
//!         fracture ──▶ graph builder (links, preferred angle) ──▶ lane packer
//!                                                                   │
//!                                               AngleObserver ◀─────┘
//! ```
//!
//! Link endpoints are derived afterwards from finished segments and angles.

mod fracture;
mod lanes;
mod links;
mod report;

pub use fracture::fracture;
pub use lanes::{
    LaneKey, LaneOccupant, LanePacker, LaneRegistry, lane_count_at_radius, ring_at_radius,
};
pub use links::{LinkEndpoints, endpoints};
pub use report::{LayoutDiagnostic, LayoutReport};

use indexmap::IndexSet;
use log::{debug, info};

use ringtree_core::{identifier::Id, record::Record, scale::RadialScale};

use crate::{
    config::LayoutConfig,
    error::LayoutError,
    structure::{Entity, EntityGraph, EntityGraphBuilder, EntityIndex, Extent, Link},
};

/// Receives every final angle decided during a pass.
///
/// Called once per entity, right after lane placement, with the entity in
/// its final state for the pass. `()` ignores all notifications.
pub trait AngleObserver {
    fn angle_assigned(&mut self, index: EntityIndex, entity: &Entity);
}

impl AngleObserver for () {
    fn angle_assigned(&mut self, _index: EntityIndex, _entity: &Entity) {}
}

/// The result of a layout pass.
#[derive(Debug, Clone)]
pub struct Layout {
    graph: EntityGraph,
    lanes: LaneRegistry,
    scale: RadialScale,
    report: LayoutReport,
}

impl Layout {
    pub fn graph(&self) -> &EntityGraph {
        &self.graph
    }

    /// Entities in processing order.
    pub fn entities(&self) -> &[Entity] {
        self.graph.entities()
    }

    pub fn get(&self, id: impl Into<Id>) -> Option<&Entity> {
        self.graph.get(id.into())
    }

    pub fn links(&self) -> &[Link] {
        self.graph.links()
    }

    /// Every link with its endpoints.
    pub fn link_endpoints(&self) -> impl Iterator<Item = (&Link, LinkEndpoints)> {
        self.graph
            .links()
            .iter()
            .map(|link| (link, endpoints(&self.graph, link)))
    }

    pub fn lanes(&self) -> &LaneRegistry {
        &self.lanes
    }

    pub fn scale(&self) -> &RadialScale {
        &self.scale
    }

    pub fn extent(&self) -> Extent {
        self.graph.extent()
    }

    pub fn report(&self) -> &LayoutReport {
        &self.report
    }
}

/// Runs layout passes with a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'c> {
    config: &'c LayoutConfig,
}

impl<'c> Engine<'c> {
    pub fn new(config: &'c LayoutConfig) -> Self {
        Self { config }
    }

    /// Lays out `records`.
    ///
    /// # Errors
    ///
    /// See [`Engine::run_with_observer`].
    pub fn run(&self, records: &[Record]) -> Result<Layout, LayoutError> {
        self.run_with_observer(records, &mut ())
    }

    /// Lays out `records`, reporting every final angle to `observer`.
    ///
    /// Records are processed in ascending start order; records with equal
    /// starts keep their input order.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, a duplicate id, or unusable time
    /// bounds. No partial layout is returned.
    pub fn run_with_observer(
        &self,
        records: &[Record],
        observer: &mut dyn AngleObserver,
    ) -> Result<Layout, LayoutError> {
        self.config.validate()?;

        let mut ordered: Vec<&Record> = records.iter().collect();
        ordered.sort_by(|a, b| a.start().total_cmp(&b.start()));

        let extent = Extent::of_records(records);
        let scale = RadialScale::new(
            extent.max_end(),
            self.config.center_radius(),
            self.config.outer_radius(),
        );
        let type_count = records.iter().map(Record::kind).collect::<IndexSet<_>>().len();
        info!(
            records = records.len(),
            types = type_count,
            max_time = extent.max_end();
            "Starting layout pass"
        );

        let mut builder = EntityGraphBuilder::new(type_count, extent);
        let mut packer = LanePacker::new(self.config);
        let mut report = LayoutReport::default();

        for record in ordered {
            if builder.contains(record.id()) {
                return Err(LayoutError::DuplicateId {
                    entity: record.id(),
                });
            }

            let segments = fracture(record, &scale, self.config.min_visual_length())?;
            let span = *segments.total();
            let index = builder.add(record.clone(), segments, &mut report);
            let preferred = builder.entity(index).angle();

            match packer.place(index, &span, preferred) {
                Some(lane) => {
                    let entity = builder.entity_mut(index);
                    entity.assign_angle(lane.angle());
                    entity.assign_lane(lane);
                }
                None => report.push(LayoutDiagnostic::LaneExhausted {
                    entity: record.id(),
                }),
            }

            observer.angle_assigned(index, builder.entity(index));
        }

        let layout = Layout {
            graph: builder.build(),
            lanes: packer.into_registry(),
            scale,
            report,
        };
        debug!(
            lanes = layout.lanes.len(),
            diagnostics = layout.report.diagnostics().len();
            "Layout pass finished"
        );
        Ok(layout)
    }
}
