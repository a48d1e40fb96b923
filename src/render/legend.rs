use crate::models::legend::LegendEntry;
use crate::scale::color_for_magnitude;

pub const LEGEND_BOUNDARIES: [u8; 6] = [0, 1, 2, 3, 4, 5];

/// One entry per bucket boundary. Each entry is coloured by the magnitude one
/// unit above its boundary, which is the colour markers in that range get.
pub fn legend_entries() -> Vec<LegendEntry> {
    let top = LEGEND_BOUNDARIES[LEGEND_BOUNDARIES.len() - 1];

    LEGEND_BOUNDARIES
        .iter()
        .map(|&g| {
            let range_label = if g < top {
                format!("{}\u{2013}{}", g, g + 1)
            } else {
                format!("{}+", g)
            };
            LegendEntry {
                range_label,
                color: color_for_magnitude(f64::from(g) + 1.0),
            }
        })
        .collect()
}

/// Inner markup of the legend panel: a swatch and a label per entry.
pub fn legend_html(entries: &[LegendEntry]) -> String {
    entries
        .iter()
        .map(|e| format!(r#"<i style="background:{}"></i> {}"#, e.color, e.range_label))
        .collect::<Vec<_>>()
        .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_entries() {
        assert_eq!(legend_entries().len(), 6);
    }

    #[test]
    fn test_colour_is_taken_one_unit_above_boundary() {
        for (g, entry) in LEGEND_BOUNDARIES.iter().zip(legend_entries()) {
            assert_eq!(entry.color, color_for_magnitude(f64::from(*g) + 1.0));
        }
    }

    #[test]
    fn test_legend_colours_match_marker_buckets() {
        let colours: Vec<&str> = legend_entries().iter().map(|e| e.color).collect();
        assert_eq!(
            colours,
            vec!["#ffcca5", "#ffb37e", "#ff9143", "#ff6f08", "#cc5500", "#a54500"]
        );
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = legend_entries().into_iter().map(|e| e.range_label).collect();
        assert_eq!(labels, vec!["0–1", "1–2", "2–3", "3–4", "4–5", "5+"]);
        assert!(labels[5].ends_with('+'));
        for (g, label) in labels.iter().take(5).enumerate() {
            assert!(label.ends_with(&format!("–{}", g + 1)));
        }
    }

    #[test]
    fn test_html_panel() {
        let html = legend_html(&legend_entries());
        assert!(html.starts_with(r#"<i style="background:#ffcca5"></i> 0–1<br>"#));
        assert!(html.ends_with(r#"<i style="background:#a54500"></i> 5+"#));
        assert_eq!(html.matches("<br>").count(), 5);
    }
}
