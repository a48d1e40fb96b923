use crate::models::{earthquake::EarthquakeRecord, marker::VisualMarker};
use crate::scale::{color_for_magnitude, radius_for_magnitude};
use chrono::{Local, TimeZone};
use std::fmt::Display;

/// Turn one earthquake into its circle marker and popup.
pub fn render_feature(record: &EarthquakeRecord) -> VisualMarker {
    VisualMarker {
        longitude: record.longitude,
        latitude: record.latitude,
        radius: radius_for_magnitude(record.magnitude),
        fill_color: color_for_magnitude(record.magnitude),
        popup_text: popup_text(record, &Local),
    }
}

/// Magnitude and place headings, a rule, then the event time in `tz`.
pub fn popup_text<Tz>(record: &EarthquakeRecord, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let place = record.place.as_deref().map(escape_html).unwrap_or_default();
    let time = record
        .timestamp_millis
        .and_then(|ms| format_timestamp(ms, tz))
        .unwrap_or_default();

    format!(
        "<h3>Magnitude: {}</h3><h3>Location: {}</h3><hr><p>{}</p>",
        record.magnitude, place, time
    )
}

/// Browser `Date`-style rendering, e.g. `Fri Jan 01 2021 00:00:00 GMT+0000`.
pub fn format_timestamp<Tz>(millis: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tz.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%a %b %d %Y %H:%M:%S GMT%z").to_string())
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
