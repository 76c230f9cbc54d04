//! Example: Laying out a tree built from records in code
//!
//! This example builds records directly, without parsing a table, and
//! prints the resulting SVG.

use ringtree::{
    TreeBuilder,
    config::{AppConfig, LayoutConfig, StyleConfig},
    record::Record,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = vec![
        Record::new("ownership", "Ownership", "rust", 0.0).with_end(6.0),
        Record::new("borrowck", "Borrow checker", "rust", 6.0)
            .with_max_start(8.0)
            .with_end(18.0)
            .with_max_end(24.0)
            .with_prerequisites("ownership"),
        Record::new("traits", "Traits", "rust", 4.0)
            .with_end(14.0)
            .with_prerequisites("ownership"),
        Record::new("futures", "Futures", "async", 12.0)
            .with_end(20.0)
            .with_prerequisites("traits"),
        Record::new("tokio", "Tokio", "async", 18.0)
            .with_end(30.0)
            .with_max_end(36.0)
            .with_prerequisites("futures"),
    ];

    let config = AppConfig::new(
        LayoutConfig::default().with_width(800.0),
        StyleConfig::default().with_background_color("white"),
    );
    let builder = TreeBuilder::new(config);

    let layout = builder.layout(&records)?;
    for entity in layout.entities() {
        eprintln!("{:>10} at {:>6.1}°", entity.id().to_string(), entity.angle());
    }

    let svg = builder.render_svg(&layout)?;
    println!("{svg}");

    Ok(())
}
