use std::sync::Arc;

use foundation::bounds::Aabb2;
use foundation::math::Ecef;
use formats::{Catalog, FraPoint, GeoPoint};
use layers::labels::PointLabel;
use layers::{AttributePanel, HighlightSet, MarkerStyle, Theme, TileTemplate};

use crate::globe::GlobeRenderer;
use crate::icon_layers::IconLayerRenderer;
use crate::textures::MarkerImage;

/// Which rendering backend draws the catalog.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Billboards on the WGS84 globe.
    #[default]
    Globe,
    /// Border and fill icon layers over a globe view.
    IconLayers,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Globe => "globe",
            Backend::IconLayers => "icon-layers",
        }
    }
}

/// Initial camera placement for a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HomeView {
    /// Fly to the drawn markers.
    FitBounds(Aabb2),
    /// Nothing to fit: fixed overview of Europe.
    Overview { lon_deg: f64, lat_deg: f64, zoom: f64 },
}

impl HomeView {
    pub const OVERVIEW: HomeView = HomeView::Overview {
        lon_deg: 10.0,
        lat_deg: 45.0,
        zoom: 2.0,
    };

    pub fn for_markers(markers: &[MarkerDraw]) -> Self {
        Aabb2::from_points(markers.iter().map(|m| m.position.as_lon_lat()))
            .map(HomeView::FitBounds)
            .unwrap_or(Self::OVERVIEW)
    }
}

/// Backend-specific drawable for one marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Sprite {
    /// Composite border+fill image, tinted white with the marker opacity.
    Billboard {
        image: Arc<MarkerImage>,
        position_ecef: Ecef,
        tint: [f32; 4],
        scale: f32,
    },
    /// Shared mask drawn twice: a large border-tinted icon under a smaller
    /// fill-tinted one.
    IconPair {
        mask: Arc<MarkerImage>,
        border_rgba: [u8; 4],
        fill_rgba: [u8; 4],
        border_size_px: f32,
        fill_size_px: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDraw {
    /// Index of the point in the catalog.
    pub index: usize,
    pub name: String,
    pub position: GeoPoint,
    pub style: MarkerStyle,
    pub label: PointLabel,
    pub sprite: Sprite,
}

#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub backend: Backend,
    pub theme: Theme,
    pub basemap: TileTemplate,
    pub markers: Vec<MarkerDraw>,
    pub home: HomeView,
}

impl RenderFrame {
    pub fn dimmed_count(&self) -> usize {
        self.markers.iter().filter(|m| m.style.is_dimmed()).count()
    }
}

/// A backend that turns the catalog into a frame.
///
/// Implementations must agree on everything except [`Sprite`]: marker
/// positions, colours, opacity/scale, labels and basemap.
pub trait MarkerRenderer {
    fn backend(&self) -> Backend;

    /// Marker images this backend currently holds.
    fn image_count(&self) -> usize;

    fn render(&mut self, points: &Catalog, theme: Theme, highlight: &HighlightSet) -> RenderFrame;

    /// Attribute panels for every point named `name` (hover/select).
    fn inspect(&self, points: &Catalog, name: &str) -> Vec<AttributePanel> {
        points.by_name(name).map(AttributePanel::for_point).collect()
    }
}

/// Shared frame assembly; `sprite` supplies the backend-specific drawable.
pub(crate) fn assemble_frame<F>(
    backend: Backend,
    points: &Catalog,
    theme: Theme,
    highlight: &HighlightSet,
    mut sprite: F,
) -> RenderFrame
where
    F: FnMut(&FraPoint, &MarkerStyle) -> Sprite,
{
    let markers: Vec<MarkerDraw> = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let style = MarkerStyle::for_point(point, highlight);
            MarkerDraw {
                index,
                name: point.name.clone(),
                position: point.coordinates,
                style,
                label: PointLabel::for_point(point),
                sprite: sprite(point, &style),
            }
        })
        .collect();

    let home = HomeView::for_markers(&markers);
    RenderFrame {
        backend,
        theme,
        basemap: TileTemplate::for_theme(theme),
        markers,
        home,
    }
}

/// One instance of each backend, so switching keeps their caches warm.
#[derive(Debug, Default)]
pub struct RendererSet {
    pub globe: GlobeRenderer,
    pub icon_layers: IconLayerRenderer,
}

impl RendererSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, backend: Backend) -> &dyn MarkerRenderer {
        match backend {
            Backend::Globe => &self.globe,
            Backend::IconLayers => &self.icon_layers,
        }
    }

    pub fn get_mut(&mut self, backend: Backend) -> &mut dyn MarkerRenderer {
        match backend {
            Backend::Globe => &mut self.globe,
            Backend::IconLayers => &mut self.icon_layers,
        }
    }

    pub fn render(
        &mut self,
        backend: Backend,
        points: &Catalog,
        theme: Theme,
        highlight: &HighlightSet,
    ) -> RenderFrame {
        self.get_mut(backend).render(points, theme, highlight)
    }
}
