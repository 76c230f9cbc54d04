//! The entity graph and its incremental builder.

use indexmap::IndexMap;
use log::{debug, trace};

use ringtree_core::{identifier::Id, record::Record};

use super::{Entity, EntityIndex, Link, LinkIndex, Segments};
use crate::layout::{LayoutDiagnostic, LayoutReport};

/// Time range covered by a set of records.
///
/// `max_end` is the largest `actual_end`, floored at zero because the radial
/// scale always starts at time zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    min_start: f32,
    max_end: f32,
}

impl Extent {
    pub fn new(min_start: f32, max_end: f32) -> Self {
        Self { min_start, max_end }
    }

    /// Scans `records` for their earliest start and latest end.
    ///
    /// An empty slice yields `[0, 0]`.
    pub fn of_records(records: &[Record]) -> Self {
        let Some(first) = records.first() else {
            return Self::default();
        };

        records.iter().fold(
            Self::new(first.start(), 0.0),
            |extent, record| Self {
                min_start: extent.min_start.min(record.start()),
                max_end: extent.max_end.max(record.actual_end()),
            },
        )
    }

    pub fn min_start(&self) -> f32 {
        self.min_start
    }

    pub fn max_end(&self) -> f32 {
        self.max_end
    }
}

/// Entities, links and lookups produced by one layout pass.
#[derive(Debug, Clone, Default)]
pub struct EntityGraph {
    entities: Vec<Entity>,
    links: Vec<Link>,
    lookup: IndexMap<Id, EntityIndex>,
    groups: IndexMap<String, Vec<EntityIndex>>,
    extent: Extent,
}

impl EntityGraph {
    /// Entities in processing order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the entity at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not produced by this graph.
    pub fn entity(&self, index: EntityIndex) -> &Entity {
        &self.entities[index.index()]
    }

    /// Looks an entity up by id.
    pub fn get(&self, id: Id) -> Option<&Entity> {
        self.index_of(id).map(|index| self.entity(index))
    }

    pub fn index_of(&self, id: Id) -> Option<EntityIndex> {
        self.lookup.get(&id).copied()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns the link at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not produced by this graph.
    pub fn link(&self, index: LinkIndex) -> &Link {
        &self.links[index.index()]
    }

    /// Type groups in order of first appearance.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[EntityIndex])> {
        self.groups
            .iter()
            .map(|(kind, members)| (kind.as_str(), members.as_slice()))
    }

    /// Direct prerequisites of `index`, in prerequisite order.
    pub fn parents(&self, index: EntityIndex) -> impl Iterator<Item = EntityIndex> + '_ {
        self.entity(index)
            .parent_links()
            .iter()
            .map(|&link| self.link(link).source())
    }

    /// Direct dependents of `index`.
    pub fn children(&self, index: EntityIndex) -> impl Iterator<Item = EntityIndex> + '_ {
        self.entity(index)
            .child_links()
            .iter()
            .map(|&link| self.link(link).target())
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Builds an [`EntityGraph`] one record at a time.
///
/// Records must arrive in ascending start order. Prerequisites can only
/// resolve to entities that were added earlier.
#[derive(Debug)]
pub struct EntityGraphBuilder {
    graph: EntityGraph,
    type_count: usize,
}

impl EntityGraphBuilder {
    /// Creates a builder for a pass over `type_count` distinct types.
    pub fn new(type_count: usize, extent: Extent) -> Self {
        Self {
            graph: EntityGraph {
                extent,
                ..EntityGraph::default()
            },
            type_count: type_count.max(1),
        }
    }

    /// Returns `true` if an entity with `id` was already added.
    pub fn contains(&self, id: Id) -> bool {
        self.graph.lookup.contains_key(&id)
    }

    /// Adds an entity, links it to its resolved prerequisites and seeds its
    /// preferred angle.
    ///
    /// The preferred angle is, in order of precedence:
    /// 1. the current angle of the first resolved prerequisite;
    /// 2. the angle of the first member of the entity's type group;
    /// 3. `360 / type_count * n` for the `n`-th new type group.
    ///
    /// Prerequisites that do not resolve are reported to `report` and
    /// produce no link.
    pub fn add(
        &mut self,
        record: Record,
        segments: Segments,
        report: &mut LayoutReport,
    ) -> EntityIndex {
        let index = EntityIndex::new(self.graph.entities.len());
        let id = record.id();
        let kind = record.kind().to_owned();
        let prerequisites = record.prerequisites().to_vec();

        self.graph.entities.push(Entity::new(record, segments));

        for prerequisite in prerequisites {
            let Some(source) = self.graph.index_of(prerequisite) else {
                report.push(LayoutDiagnostic::UnresolvedPrerequisite {
                    entity: id,
                    prerequisite,
                });
                continue;
            };

            let link = LinkIndex::new(self.graph.links.len());
            self.graph.links.push(Link::new(source, index));
            self.graph.entities[source.index()].add_child_link(link);
            self.graph.entities[index.index()].add_parent_link(link);
        }

        let preferred = self.preferred_angle(index, &kind);
        self.graph.entities[index.index()].assign_angle(preferred);
        trace!(entity:% = id, angle = preferred; "Seeded preferred angle");

        self.graph.lookup.insert(id, index);
        self.graph.groups.entry(kind).or_default().push(index);

        index
    }

    fn preferred_angle(&self, index: EntityIndex, kind: &str) -> f32 {
        if let Some(parent) = self.graph.parents(index).next() {
            return self.graph.entity(parent).angle();
        }

        match self.graph.groups.get(kind).and_then(|members| members.first()) {
            Some(&first) => self.graph.entity(first).angle(),
            None => 360.0 / self.type_count as f32 * self.graph.groups.len() as f32,
        }
    }

    pub fn entity(&self, index: EntityIndex) -> &Entity {
        self.graph.entity(index)
    }

    pub fn entity_mut(&mut self, index: EntityIndex) -> &mut Entity {
        &mut self.graph.entities[index.index()]
    }

    pub fn build(self) -> EntityGraph {
        debug!(
            entities = self.graph.entities.len(),
            links = self.graph.links.len(),
            groups = self.graph.groups.len();
            "Entity graph built"
        );
        self.graph
    }
}
