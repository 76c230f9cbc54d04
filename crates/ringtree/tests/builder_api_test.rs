//! Integration tests for the TreeBuilder API
//!
//! These tests go through the public API only: parse, layout, render.

use float_cmp::assert_approx_eq;
use proptest::prelude::*;

use ringtree::{
    RingtreeError, TreeBuilder,
    config::{AppConfig, LayoutConfig, StyleConfig},
    identifier::Id,
    layout::{Layout, lane_count_at_radius},
    record::Record,
};

fn builder_with(layout: LayoutConfig) -> TreeBuilder {
    TreeBuilder::new(AppConfig::new(layout, StyleConfig::default()))
}

#[test]
fn test_builder_api_exists() {
    let _builder = TreeBuilder::default();
}

#[test]
fn test_parse_layout_render() {
    let source = "\
id,name,type,start,end,maxEnd,prerequisites
ownership,Ownership,rust,0,6,,
borrowck,Borrow checker,rust,6,18,24,ownership
tokio,Tokio,async,12,30,,
";
    let builder = TreeBuilder::default();
    let records = builder.parse(source).expect("Failed to parse table");
    assert_eq!(records.len(), 3);

    let layout = builder.layout(&records).expect("Failed to lay out");
    assert!(layout.report().is_clean());
    assert_eq!(layout.links().len(), 1);

    let svg = builder.render_svg(&layout).expect("Failed to render");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("Borrow checker"));
    assert_eq!(svg.matches("<line class=\"link\"").count(), 1);
}

#[test]
fn test_parse_invalid_table_returns_error() {
    let builder = TreeBuilder::default();
    let result = builder.parse("id,name,type\na,A,t\n");

    match result {
        Err(RingtreeError::Parse { err, src }) => {
            assert!(!err.diagnostics().is_empty());
            assert!(src.starts_with("id,name,type"));
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_builder_reusability() {
    let builder = TreeBuilder::default();
    for source in ["id,name,type,start\na,A,t,0\n", "id,name,type,start\nb,B,u,3\n"] {
        let records = builder.parse(source).unwrap();
        let layout = builder.layout(&records).unwrap();
        assert!(builder.render_svg(&layout).is_ok());
    }
}

#[test]
fn test_overlapping_entities_split_and_later_entity_reuses_lane() {
    let config = LayoutConfig::default()
        .with_slot_width(5.0)
        .with_slot_margin(4.0)
        .with_lane_margin(2.0)
        .with_min_visual_length(1.0)
        .with_center_radius(10.0)
        .with_width(1000.0);
    let records = vec![
        Record::new("a", "A", "skill", 0.0).with_end(10.0),
        Record::new("b", "B", "skill", 0.0).with_end(10.0),
        Record::new("c", "C", "skill", 30.0).with_end(40.0),
    ];

    let layout = builder_with(config.clone()).layout(&records).unwrap();
    let a = layout.get("a").unwrap();
    let b = layout.get("b").unwrap();
    let c = layout.get("c").unwrap();

    // The innermost ring has four lanes; with 0 taken the next closest by
    // plain difference is 90, not 270.
    assert_eq!(lane_count_at_radius(a.segments().total().start(), &config), 4);
    assert_eq!(a.angle(), 0.0);
    assert_eq!(b.angle(), 90.0);
    assert_ne!(a.lane(), b.lane());

    assert_approx_eq!(f32, c.segments().total().start(), 434.3467, epsilon = 1e-3);
    assert_eq!(lane_count_at_radius(c.segments().total().start(), &config), 256);
    assert_eq!(c.angle(), 0.0);
    assert_eq!(c.lane(), a.lane());

    let lane = layout.lanes().lane(a.lane().unwrap());
    assert_eq!(lane.len(), 2);
    assert_eq!(lane[0].entity(), layout.graph().index_of("a".into()).unwrap());
    assert_eq!(lane[1].entity(), layout.graph().index_of("c".into()).unwrap());
}

#[test]
fn test_closest_lane_does_not_wrap_past_zero() {
    let config = LayoutConfig::default()
        .with_lane_margin(2.0)
        .with_min_visual_length(1.0);
    // Six types seed preferences 0, 60, 120, 180, 240 and 300. `z` stretches
    // the timeline to 10000, so every other bar starts in the four-lane ring.
    let records = vec![
        Record::new("a", "A", "t0", 0.0).with_end(1.0),
        Record::new("b", "B", "t1", 0.0).with_end(100.0),
        Record::new("c", "C", "t2", 0.0).with_end(1.0),
        Record::new("d", "D", "t3", 0.0).with_end(100.0),
        Record::new("e", "E", "t4", 0.0).with_end(100.0),
        Record::new("f", "F", "t5", 4.0).with_end(10.0),
        Record::new("z", "Z", "t0", 5000.0).with_end(10000.0),
    ];

    let layout = builder_with(config.clone()).layout(&records).unwrap();
    let f = layout.get("f").unwrap();
    assert_eq!(lane_count_at_radius(f.segments().total().start(), &config), 4);

    assert_eq!(layout.get("a").unwrap().angle(), 0.0);
    assert_eq!(layout.get("b").unwrap().angle(), 90.0);
    assert_eq!(layout.get("c").unwrap().angle(), 180.0);
    assert_eq!(layout.get("d").unwrap().angle(), 270.0);
    assert!(!layout.get("e").unwrap().is_placed());

    // `f` prefers 300. 270 is still taken; 0 and 180 are free again. 0 is
    // only 60 away around the circle, but 300 away by plain difference.
    assert_eq!(f.angle(), 180.0);
}

#[test]
fn test_unresolved_prerequisite_is_reported() {
    let records = vec![
        Record::new("A", "A", "t", 0.0).with_end(5.0),
        Record::new("X", "X", "t", 2.0)
            .with_end(8.0)
            .with_prerequisites("A,B"),
        Record::new("B", "B", "t", 4.0).with_end(9.0),
    ];

    let layout = TreeBuilder::default().layout(&records).unwrap();
    let x = layout.graph().index_of("X".into()).unwrap();
    let a = layout.graph().index_of("A".into()).unwrap();

    let parents: Vec<_> = layout.graph().parents(x).collect();
    assert_eq!(parents, vec![a]);
    assert_eq!(layout.links().len(), 1);

    let unresolved: Vec<_> = layout.report().unresolved().collect();
    assert_eq!(unresolved, vec![(Id::new("X"), Id::new("B"))]);
}

#[test]
fn test_zero_length_timeline() {
    let records = vec![Record::new("only", "Only", "t", 0.0).with_end(0.0)];
    let config = LayoutConfig::default();

    let layout = TreeBuilder::default().layout(&records).unwrap();
    assert!(layout.scale().is_degenerate());

    let entity = layout.get("only").unwrap();
    assert_eq!(entity.record().actual_end(), 0.0);
    let total = entity.segments().total();
    assert_eq!(total.start(), config.center_radius());
    assert_approx_eq!(f32, total.length(), config.min_visual_length());
    assert!(entity.segments().parts().all(|part| part.start().is_finite()));
    assert!(entity.is_placed());
}

#[test]
fn test_lane_exhaustion_leaves_entity_unplaced() {
    let config = LayoutConfig::default()
        .with_initial_lane_count(1)
        .with_slot_width(100.0);
    let records = vec![
        Record::new("a", "A", "t", 0.0).with_end(10.0),
        Record::new("b", "B", "t", 0.0).with_end(10.0),
    ];

    let builder = builder_with(config);
    let layout = builder.layout(&records).unwrap();
    assert!(layout.get("a").unwrap().is_placed());
    assert!(!layout.get("b").unwrap().is_placed());
    assert_eq!(layout.report().unplaced().collect::<Vec<_>>(), vec![Id::new("b")]);

    let svg = builder.render_svg(&layout).unwrap();
    assert!(svg.contains("node unplaced"));
}

#[test]
fn test_inverted_bounds_fail_layout() {
    let records = vec![Record::new("a", "A", "t", 10.0).with_end(5.0)];
    let result = TreeBuilder::default().layout(&records);
    assert!(matches!(result, Err(RingtreeError::Layout(_))));
}

#[test]
fn test_invalid_style_fails_render() {
    let style = StyleConfig::default().with_bar_color("not a color");
    let builder = TreeBuilder::new(AppConfig::new(LayoutConfig::default(), style));
    let layout = builder.layout(&[Record::new("a", "A", "t", 0.0)]).unwrap();
    assert!(matches!(
        builder.render_svg(&layout),
        Err(RingtreeError::Export(_))
    ));
}

/// Random record tables: ids `e0..eN`, a few types, optional fuzzy bounds
/// and prerequisites pointing at any other entity.
fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    let record = (
        0usize..3,
        0.0f32..100.0,
        proptest::option::of(0.0f32..10.0),
        proptest::option::of(0.0f32..40.0),
        proptest::option::of(0.0f32..10.0),
        proptest::collection::vec(0usize..24, 0..3),
    );
    proptest::collection::vec(record, 1..24).prop_map(|rows| {
        let count = rows.len();
        rows.into_iter()
            .enumerate()
            .map(|(i, (kind, start, fuzzy_start, length, fuzzy_end, prerequisites))| {
                let mut record =
                    Record::new(&format!("e{i}"), format!("E{i}"), format!("type{kind}"), start);
                let mut bound = start;
                if let Some(fuzzy) = fuzzy_start {
                    bound += fuzzy;
                    record = record.with_max_start(bound);
                }
                if let Some(length) = length {
                    bound += length;
                    record = record.with_end(bound);
                    if let Some(fuzzy) = fuzzy_end {
                        record = record.with_max_end(bound + fuzzy);
                    }
                }
                let prerequisites: Vec<String> = prerequisites
                    .into_iter()
                    .filter(|&p| p < count && p != i)
                    .map(|p| format!("e{p}"))
                    .collect();
                record.with_prerequisites(&prerequisites.join(","))
            })
            .collect()
    })
}

fn run(records: &[Record]) -> Layout {
    TreeBuilder::default().layout(records).unwrap()
}

proptest! {
    #[test]
    fn lanes_never_overlap(records in records_strategy()) {
        let layout = run(&records);
        let margin = LayoutConfig::default().lane_margin();
        for (_, occupants) in layout.lanes().lanes() {
            for pair in occupants.windows(2) {
                prop_assert!(pair[0].span().end() + margin <= pair[1].span().start());
            }
        }
    }

    #[test]
    fn parts_lie_within_total(records in records_strategy()) {
        let layout = run(&records);
        for entity in layout.entities() {
            let segments = entity.segments();
            for part in segments.parts() {
                prop_assert!(part.length() >= 0.0);
                prop_assert!(segments.total().contains(part));
            }
            if let (Some(start), Some(main)) = (segments.start(), segments.main()) {
                prop_assert!(start.end() <= main.start());
            }
            if let (Some(main), Some(end)) = (segments.main(), segments.end()) {
                prop_assert!(main.end() <= end.start());
            }
        }
    }

    #[test]
    fn total_respects_min_visual_length(records in records_strategy()) {
        let layout = run(&records);
        let min = LayoutConfig::default().min_visual_length();
        for entity in layout.entities() {
            prop_assert!(entity.segments().total().length() >= min - 1e-3);
        }
    }

    #[test]
    fn layout_is_deterministic(records in records_strategy()) {
        let first = run(&records);
        let second = run(&records);
        prop_assert_eq!(first.entities().len(), second.entities().len());
        for (a, b) in first.entities().iter().zip(second.entities()) {
            prop_assert_eq!(a.id(), b.id());
            prop_assert_eq!(a.angle(), b.angle());
            prop_assert_eq!(a.lane(), b.lane());
            prop_assert_eq!(a.segments(), b.segments());
        }
    }

    #[test]
    fn child_keeps_parent_angle_unless_blocked(records in records_strategy()) {
        let layout = run(&records);
        let config = LayoutConfig::default();
        let graph = layout.graph();

        for entity in graph.entities() {
            let Some(lane) = entity.lane() else {
                continue;
            };
            prop_assert_eq!(entity.angle(), lane.angle());

            let index = graph.index_of(entity.id()).unwrap();
            let Some(parent) = graph.parents(index).next() else {
                continue;
            };
            let Some(parent_lane) = graph.entity(parent).lane() else {
                continue;
            };
            if lane == parent_lane {
                continue;
            }

            // The parent's lane was skipped: it is not offered at this radius,
            // or its last earlier occupant blocks the entity.
            let span = entity.segments().total();
            let count = lane_count_at_radius(span.start(), &config);
            if count % parent_lane.denominator() != 0 {
                continue;
            }
            let blocker = layout
                .lanes()
                .lane(parent_lane)
                .iter()
                .rev()
                .find(|occupant| occupant.entity() < index);
            prop_assert!(
                blocker.is_some_and(|o| o.span().end() + config.lane_margin() > span.start()),
                "entity {} left free parent lane {}",
                entity.id(),
                parent_lane
            );
        }
    }
}
