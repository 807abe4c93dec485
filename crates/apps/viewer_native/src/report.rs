use layers::AttributePanel;
use render::{HomeView, RenderFrame};
use runtime::{Session, StatusLine};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HomeReport {
    FitBounds { min: [f64; 2], max: [f64; 2] },
    Overview { lon_deg: f64, lat_deg: f64, zoom: f64 },
}

impl From<HomeView> for HomeReport {
    fn from(home: HomeView) -> Self {
        match home {
            HomeView::FitBounds(b) => HomeReport::FitBounds {
                min: b.min,
                max: b.max,
            },
            HomeView::Overview {
                lon_deg,
                lat_deg,
                zoom,
            } => HomeReport::Overview {
                lon_deg,
                lat_deg,
                zoom,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerReport {
    pub name: String,
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub fill: String,
    pub border: String,
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderReport {
    pub status: StatusLine,
    pub backend: &'static str,
    pub theme: &'static str,
    pub basemap: &'static str,
    pub query: String,
    /// `None` when no filter is active.
    pub highlighted: Option<Vec<String>>,
    pub dimmed: usize,
    /// Images held by the backend that drew the frame.
    pub marker_images: usize,
    pub home: HomeReport,
    pub markers: Vec<MarkerReport>,
    pub inspected: Vec<AttributePanel>,
    pub not_found: Vec<String>,
}

impl RenderReport {
    pub fn build(session: &Session, frame: &RenderFrame, inspect: &[String]) -> Self {
        let mut inspected = Vec::new();
        let mut not_found = Vec::new();
        for name in inspect {
            let panels = session.inspect(name);
            if panels.is_empty() {
                not_found.push(name.clone());
            }
            inspected.extend(panels);
        }

        let state = session.state();
        let markers = frame
            .markers
            .iter()
            .map(|m| MarkerReport {
                name: m.name.clone(),
                lon_deg: m.position.lon_deg,
                lat_deg: m.position.lat_deg,
                fill: m.style.colors.fill.to_hex(),
                border: m.style.colors.border.to_hex(),
                opacity: m.style.opacity,
                scale: m.style.scale,
            })
            .collect();

        Self {
            status: state.status(),
            backend: frame.backend.as_str(),
            theme: frame.theme.as_str(),
            basemap: frame.basemap.template,
            query: state.query_text().to_string(),
            highlighted: state
                .highlight()
                .as_option()
                .map(|set| set.iter().cloned().collect()),
            dimmed: frame.dimmed_count(),
            marker_images: session.renderers().get(frame.backend).image_count(),
            home: frame.home.into(),
            markers,
            inspected,
            not_found,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.status);
        out.push_str(&format!("backend: {}\n", self.backend));
        out.push_str(&format!("theme: {}\n", self.theme));
        out.push_str(&format!("basemap: {}\n", self.basemap));
        out.push_str(&format!(
            "markers: {} ({} dimmed)\n",
            self.markers.len(),
            self.dimmed
        ));
        if let Some(names) = &self.highlighted {
            out.push_str(&format!("highlighted: {}\n", names.join(", ")));
        }
        out.push_str(&format!("marker images: {}\n", self.marker_images));
        match &self.home {
            HomeReport::FitBounds { min, max } => out.push_str(&format!(
                "home: fit [{:.4}, {:.4}] .. [{:.4}, {:.4}]\n",
                min[0], min[1], max[0], max[1]
            )),
            HomeReport::Overview {
                lon_deg,
                lat_deg,
                zoom,
            } => out.push_str(&format!(
                "home: overview lon {lon_deg} lat {lat_deg} zoom {zoom}\n"
            )),
        }
        for panel in &self.inspected {
            out.push('\n');
            out.push_str(&panel.to_text());
        }
        for name in &self.not_found {
            out.push_str(&format!("\n{name}: no such point\n"));
        }
        out
    }
}
