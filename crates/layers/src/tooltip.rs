//! Hover/select attribute panel for a point.

use formats::FraPoint;
use serde::Serialize;

/// `(label, column)` pairs shown in the panel, in display order.
pub const PANEL_FIELDS: [(&str, &str); 15] = [
    ("Latitude", "FRA Point Latitude"),
    ("Longitude", "FRA Point Longitude"),
    ("Change Status", "Change Status"),
    ("Point Type", "Point Type"),
    ("FRA Name", "FRA Name"),
    ("En-route", "FRA Status En-Route"),
    ("ARR/DEP", "FRA Status ARR/DEP"),
    ("Arrival Airport(s)", "Arrival Airport(s)"),
    ("Departure Airport(s)", "Departure Airport(s)"),
    ("FLOS", "FLOS"),
    ("Level Availability", "Level Availability"),
    ("Time Availability", "Time Availability"),
    ("Airspace Loc.", "Airspace Location Indicators"),
    ("Cross-Border States", "Cross-Border FRA States"),
    ("Remarks", "Remarks"),
];

/// Shown for missing or empty values.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributePanel {
    pub title: String,
    pub rows: Vec<AttributeRow>,
}

impl AttributePanel {
    pub fn for_point(point: &FraPoint) -> Self {
        let rows = PANEL_FIELDS
            .iter()
            .map(|&(label, column)| {
                let value = match point.attribute(column) {
                    Some(v) if !v.is_empty() => v.to_string(),
                    _ => PLACEHOLDER.to_string(),
                };
                AttributeRow { label, value }
            })
            .collect();
        Self {
            title: point.name.clone(),
            rows,
        }
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format!("  {}: {}\n", row.label, row.value));
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from(
            "<div style=\"font-family: sans-serif; font-size: 12px; line-height: 1.4;\">",
        );
        out.push_str(&format!(
            "<div style=\"font-weight: bold; font-size: 14px; margin-bottom: 8px; \
             border-bottom: 1px solid #666; padding-bottom: 4px;\">{}</div>",
            escape_html(&self.title)
        ));
        for row in &self.rows {
            out.push_str(&format!(
                "<div style=\"margin-bottom:2px\"><span style=\"color:#aaa; font-weight:bold; \
                 margin-right: 5px;\">{}:</span><span>{}</span></div>",
                escape_html(row.label),
                escape_html(&row.value)
            ));
        }
        out.push_str("</div>");
        out
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::{AttributePanel, PANEL_FIELDS, PLACEHOLDER};
    use formats::{FraPoint, GeoPoint, Properties};
    use pretty_assertions::assert_eq;

    fn komib() -> FraPoint {
        let properties: Properties = [
            ("FRA Point", "KOMIB"),
            ("FRA Point Latitude", "N404519"),
            ("FRA Point Longitude", "E0183830"),
            ("Point Type", "EX"),
            ("Airspace Location Indicators", "LAAA"),
            ("Remarks", "<see AIP>"),
            ("FLOS", ""),
        ]
        .into_iter()
        .collect();
        FraPoint {
            name: "KOMIB".to_string(),
            coordinates: GeoPoint::new(18.64, 40.75),
            point_type: "EX".to_string(),
            airspace_location: "LAAA".to_string(),
            cross_border_states: String::new(),
            properties,
        }
    }

    #[test]
    fn rows_follow_fixed_order_with_placeholders() {
        let panel = AttributePanel::for_point(&komib());
        assert_eq!(panel.title, "KOMIB");
        let labels: Vec<&str> = panel.rows.iter().map(|r| r.label).collect();
        let expected: Vec<&str> = PANEL_FIELDS.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, expected);

        assert_eq!(panel.value("Latitude"), Some("N404519"));
        assert_eq!(panel.value("Airspace Loc."), Some("LAAA"));
        assert_eq!(panel.value("FLOS"), Some(PLACEHOLDER));
        assert_eq!(panel.value("Cross-Border States"), Some(PLACEHOLDER));
    }

    #[test]
    fn html_escapes_values() {
        let html = AttributePanel::for_point(&komib()).to_html();
        assert!(html.contains("&lt;see AIP&gt;"));
        assert!(!html.contains("<see AIP>"));
        assert!(html.contains(">KOMIB</div>"));
    }

    #[test]
    fn text_lists_every_row() {
        let text = AttributePanel::for_point(&komib()).to_text();
        assert!(text.starts_with("KOMIB\n"));
        assert!(text.contains("  Point Type: EX\n"));
        assert_eq!(text.lines().count(), 1 + PANEL_FIELDS.len());
    }
}
