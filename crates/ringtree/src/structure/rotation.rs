//! Rotation groups over the prerequisite graph.
//!
//! Turning an entity should turn its whole neighbourhood with it: every
//! entity hanging off one of its ancestors, except its own subtree, which
//! follows it anyway. Intermediate ancestors hang off the ones above them and
//! so belong to the group; a root ancestor does not. This is a pure query; it
//! never changes any angle.

use std::collections::HashSet;

use petgraph::{
    graphmap::DiGraphMap,
    visit::{Dfs, Reversed, Walker},
};

use super::{EntityGraph, EntityIndex, LinkIndex};

/// Builds a directed graph with one node per entity and one edge per link.
pub fn link_graph(graph: &EntityGraph) -> DiGraphMap<EntityIndex, LinkIndex> {
    let mut links = DiGraphMap::with_capacity(graph.len(), graph.links().len());
    for index in 0..graph.len() {
        links.add_node(EntityIndex::new(index));
    }
    for (index, link) in graph.links().iter().enumerate() {
        links.add_edge(link.source(), link.target(), LinkIndex::new(index));
    }
    links
}

/// Returns `entity` followed by every descendant of its ancestors that is not
/// a descendant of `entity`, in ascending index order.
///
/// An entity without ancestors forms a group of its own.
pub fn rotation_group(graph: &EntityGraph, entity: EntityIndex) -> Vec<EntityIndex> {
    let links = link_graph(graph);
    if !links.contains_node(entity) {
        return vec![entity];
    }

    let descendants: HashSet<EntityIndex> = Dfs::new(&links, entity).iter(&links).collect();
    let reversed = Reversed(&links);
    let ancestors: HashSet<EntityIndex> = Dfs::new(reversed, entity)
        .iter(reversed)
        .filter(|&node| node != entity)
        .collect();

    let mut others: Vec<EntityIndex> = ancestors
        .iter()
        .flat_map(|&ancestor| {
            Dfs::new(&links, ancestor)
                .iter(&links)
                .filter(move |&node| node != ancestor)
        })
        .filter(|node| !descendants.contains(node))
        .collect();
    others.sort();
    others.dedup();

    let mut group = Vec::with_capacity(others.len() + 1);
    group.push(entity);
    group.extend(others);
    group
}

#[cfg(test)]
mod tests {
    use ringtree_core::{record::Record, segment::RangeSegment};

    use super::*;
    use crate::{
        layout::LayoutReport,
        structure::{EntityGraphBuilder, Extent, Segments},
    };

    /// ```text
    ///        root
    ///       /    \
    ///      a      b
    ///     / \      \
    ///    a1  a2     b1
    /// ```
    fn family() -> EntityGraph {
        let mut report = LayoutReport::default();
        let mut builder = EntityGraphBuilder::new(1, Extent::default());
        let segments = || Segments::new(RangeSegment::new(0.0, 1.0));
        for (id, prerequisites) in [
            ("root", ""),
            ("a", "root"),
            ("b", "root"),
            ("a1", "a"),
            ("a2", "a"),
            ("b1", "b"),
            ("loner", ""),
        ] {
            builder.add(
                Record::new(id, id, "t", 0.0).with_prerequisites(prerequisites),
                segments(),
                &mut report,
            );
        }
        builder.build()
    }

    fn ids(graph: &EntityGraph, group: &[EntityIndex]) -> Vec<String> {
        group
            .iter()
            .map(|&index| graph.entity(index).id().to_string())
            .collect()
    }

    #[test]
    fn test_group_of_inner_node() {
        let graph = family();
        let a = graph.index_of("a".into()).unwrap();
        let group = rotation_group(&graph, a);
        assert_eq!(ids(&graph, &group), vec!["a", "b", "b1"]);
    }

    #[test]
    fn test_group_of_leaf() {
        let graph = family();
        let a1 = graph.index_of("a1".into()).unwrap();
        let group = rotation_group(&graph, a1);
        assert_eq!(ids(&graph, &group), vec!["a1", "a", "b", "a2", "b1"]);
    }

    #[test]
    fn test_group_of_chain_includes_intermediate_ancestor() {
        let mut report = LayoutReport::default();
        let mut builder = EntityGraphBuilder::new(1, Extent::default());
        for (id, prerequisites) in [("root", ""), ("a", "root"), ("a1", "a")] {
            builder.add(
                Record::new(id, id, "t", 0.0).with_prerequisites(prerequisites),
                Segments::new(RangeSegment::new(0.0, 1.0)),
                &mut report,
            );
        }
        let graph = builder.build();

        let a1 = graph.index_of("a1".into()).unwrap();
        assert_eq!(ids(&graph, &rotation_group(&graph, a1)), vec!["a1", "a"]);

        let a = graph.index_of("a".into()).unwrap();
        assert_eq!(rotation_group(&graph, a), vec![a]);
    }

    #[test]
    fn test_group_of_root_and_loner() {
        let graph = family();
        let root = graph.index_of("root".into()).unwrap();
        assert_eq!(rotation_group(&graph, root), vec![root]);

        let loner = graph.index_of("loner".into()).unwrap();
        assert_eq!(rotation_group(&graph, loner), vec![loner]);
    }

    #[test]
    fn test_link_graph_mirrors_links() {
        let graph = family();
        let links = link_graph(&graph);
        assert_eq!(links.node_count(), 7);
        assert_eq!(links.edge_count(), 5);
    }
}
