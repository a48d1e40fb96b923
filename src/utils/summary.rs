use crate::models::layer::{EarthquakeLayer, LayerBuild};
use crate::scale::{BUCKET_COUNT, BUCKETS};
use comfy_table::{Attribute, Cell, CellAlignment, Table};

/// Skipped records listed individually before collapsing into a count.
const MAX_LISTED_SKIPS: usize = 10;

fn swatch(hex: &str) -> String {
    match colorgrad::Color::from_html(hex) {
        Ok(colour) => {
            let [r, g, b, _] = colour.to_rgba8();
            format!("\x1b[38;2;{};{};{}m████\x1b[0m", r, g, b)
        }
        Err(_) => "????".to_string(),
    }
}

fn bucket_label(index: usize) -> String {
    let lower = index
        .checked_sub(1)
        .and_then(|i| BUCKETS[i].upper)
        .map(|v| format!("({}", v))
        .unwrap_or_else(|| "(-∞".to_string());
    let upper = BUCKETS[index]
        .upper
        .map(|v| format!("{}]", v))
        .unwrap_or_else(|| "∞)".to_string());
    format!("{}, {}", lower, upper)
}

/// Markers per magnitude bucket, lightest first.
pub fn bucket_counts(layer: &EarthquakeLayer) -> [usize; BUCKET_COUNT] {
    let mut counts = [0; BUCKET_COUNT];
    for marker in &layer.markers {
        if let Some(i) = BUCKETS.iter().position(|b| b.color == marker.fill_color) {
            counts[i] += 1;
        }
    }
    counts
}

pub fn layer_summary_table(layer: &EarthquakeLayer) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("Magnitude")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Markers")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Colour")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for (i, count) in bucket_counts(layer).into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(bucket_label(i)),
            Cell::new(count).set_alignment(CellAlignment::Center),
            Cell::new(BUCKETS[i].color).set_alignment(CellAlignment::Center),
            Cell::new(swatch(BUCKETS[i].color)),
        ]);
    }
    table
}

pub fn print_layer_summary(build: &LayerBuild<EarthquakeLayer>) {
    println!(
        "\nEarthquake summary ({} markers):\n{}",
        build.layer.len(),
        layer_summary_table(&build.layer)
    );

    if !build.skipped.is_empty() {
        println!("\nWarnings:");
        for skip in build.skipped.iter().take(MAX_LISTED_SKIPS) {
            println!("  ⚠️ feature #{}: {}", skip.index, skip.reason);
        }
        if build.skipped.len() > MAX_LISTED_SKIPS {
            println!(
                "  ⚠️ … and {} more skipped features",
                build.skipped.len() - MAX_LISTED_SKIPS
            );
        }
    }

    println!();
}
