//! Billboard renderer: one composite marker image per point, placed on the
//! WGS84 ellipsoid.

use foundation::math::ecef_from_lon_lat_deg;
use formats::Catalog;
use layers::{HighlightSet, Theme};

use crate::renderer::{Backend, MarkerRenderer, RenderFrame, Sprite, assemble_frame};
use crate::textures::MarkerImageCache;

#[derive(Debug, Default)]
pub struct GlobeRenderer {
    images: MarkerImageCache,
}

impl GlobeRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkerRenderer for GlobeRenderer {
    fn backend(&self) -> Backend {
        Backend::Globe
    }

    /// One composite image per distinct colour pair drawn so far.
    fn image_count(&self) -> usize {
        self.images.len()
    }

    fn render(&mut self, points: &Catalog, theme: Theme, highlight: &HighlightSet) -> RenderFrame {
        let images = &mut self.images;
        assemble_frame(Backend::Globe, points, theme, highlight, |point, style| {
            let c = point.coordinates;
            Sprite::Billboard {
                image: images.get_or_rasterize(style.colors),
                position_ecef: ecef_from_lon_lat_deg(c.lon_deg, c.lat_deg),
                tint: [1.0, 1.0, 1.0, style.opacity],
                scale: style.scale,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::GlobeRenderer;
    use crate::renderer::{MarkerRenderer, Sprite};
    use foundation::math::WGS84_A;
    use formats::{Catalog, FraPoint, GeoPoint, Properties};
    use layers::{HighlightSet, Theme, highlight};
    use std::sync::Arc;

    fn point(name: &str, lon: f64, lat: f64, airspace: &str) -> FraPoint {
        FraPoint {
            name: name.to_string(),
            coordinates: GeoPoint::new(lon, lat),
            point_type: String::new(),
            airspace_location: airspace.to_string(),
            cross_border_states: String::new(),
            properties: Properties::default(),
        }
    }

    #[test]
    fn shares_one_image_per_color_pair() {
        let catalog = Catalog::new(vec![
            point("A", 0.0, 0.0, "LDZO"),
            point("B", 1.0, 1.0, "LDZO"),
            point("C", 2.0, 2.0, "LJLA"),
        ]);
        let mut r = GlobeRenderer::new();
        let frame = r.render(&catalog, Theme::Dark, &HighlightSet::NoFilter);
        assert_eq!(r.image_count(), 2);

        let image = |i: usize| match &frame.markers[i].sprite {
            Sprite::Billboard { image, .. } => image.clone(),
            other => panic!("unexpected sprite {other:?}"),
        };
        assert!(Arc::ptr_eq(&image(0), &image(1)));
        assert!(!Arc::ptr_eq(&image(0), &image(2)));

        // Re-rendering reuses the cached images.
        let again = r.render(&catalog, Theme::Light, &HighlightSet::NoFilter);
        assert_eq!(r.image_count(), 2);
        match &again.markers[0].sprite {
            Sprite::Billboard { image: img, .. } => assert!(Arc::ptr_eq(img, &image(0))),
            other => panic!("unexpected sprite {other:?}"),
        }
    }

    #[test]
    fn billboards_sit_on_the_ellipsoid_and_fade_when_dimmed() {
        let catalog = Catalog::new(vec![point("A", 0.0, 0.0, "LDZO"), point("B", 1.0, 1.0, "LDZO")]);
        let mut r = GlobeRenderer::new();
        let frame = r.render(&catalog, Theme::Dark, &highlight("a", &catalog));

        match &frame.markers[0].sprite {
            Sprite::Billboard {
                position_ecef,
                tint,
                scale,
                ..
            } => {
                assert!((position_ecef.x - WGS84_A).abs() < 1e-6);
                assert_eq!(*tint, [1.0, 1.0, 1.0, 1.0]);
                assert_eq!(*scale, 1.0);
            }
            other => panic!("unexpected sprite {other:?}"),
        }
        match &frame.markers[1].sprite {
            Sprite::Billboard { tint, scale, .. } => {
                assert_eq!(tint[3], 0.05);
                assert_eq!(*scale, 0.5);
            }
            other => panic!("unexpected sprite {other:?}"),
        }
    }
}
