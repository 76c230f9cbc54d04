//! Splitting an entity's time bounds into drawable radial segments.

use ringtree_core::{record::Record, scale::RadialScale, segment::RangeSegment};

use crate::{error::LayoutError, structure::Segments};

/// Checks that every present bound is finite and that
/// `start <= max_start <= end <= max_end` over the bounds that are set.
fn validate_bounds(record: &Record) -> Result<(), LayoutError> {
    let bounds = [
        ("start", Some(record.start())),
        ("maxStart", record.max_start()),
        ("end", record.end()),
        ("maxEnd", record.max_end()),
    ];

    let mut previous: Option<f32> = None;
    for (field, value) in bounds {
        let Some(value) = value else {
            continue;
        };
        if !value.is_finite() {
            return Err(LayoutError::NonFiniteBound {
                entity: record.id(),
                field,
            });
        }
        if let Some(previous) = previous {
            if value < previous {
                return Err(LayoutError::InvertedBounds {
                    entity: record.id(),
                    field,
                    value,
                    previous,
                });
            }
        }
        previous = Some(value);
    }
    Ok(())
}

/// Computes the bar segments of `record` under `scale`.
///
/// The total bar spans `start..actual_end`, stretched to at least
/// `min_visual_length` radial units. The firm and fuzzy parts are mapped
/// without stretching, so all of them lie inside the total.
///
/// # Errors
///
/// Fails with [`LayoutError::NonFiniteBound`] or
/// [`LayoutError::InvertedBounds`] when the bounds are unusable.
///
/// # Examples
///
/// ```
/// # use ringtree::layout::fracture;
/// # use ringtree_core::{record::Record, scale::RadialScale};
/// let scale = RadialScale::new(100.0, 10.0, 510.0);
/// let record = Record::new("a", "A", "t", 0.0).with_end(25.0);
///
/// let segments = fracture(&record, &scale, 45.0).unwrap();
/// assert_eq!(segments.total().start(), 10.0);
/// assert_eq!(segments.total().end(), 260.0);
/// assert_eq!(segments.main().unwrap().end(), 260.0);
/// assert!(segments.start().is_none());
/// ```
pub fn fracture(
    record: &Record,
    scale: &RadialScale,
    min_visual_length: f32,
) -> Result<Segments, LayoutError> {
    validate_bounds(record)?;

    let start = record.start();
    let start_radius = scale.forward(start);
    let end_radius = scale.forward(record.actual_end());

    let total = RangeSegment::new(start_radius, end_radius.max(start_radius + min_visual_length));

    let mut segments = Segments::new(total);
    if let Some(end) = record.end() {
        let main_start = record.max_start().unwrap_or(start);
        segments = segments.with_main(RangeSegment::from_times(scale, main_start, end));
    }
    if let Some(max_start) = record.max_start() {
        segments = segments.with_start(RangeSegment::from_times(scale, start, max_start));
    }
    if let (Some(end), Some(max_end)) = (record.end(), record.max_end()) {
        segments = segments.with_end(RangeSegment::from_times(scale, end, max_end));
    }

    Ok(segments)
}
