//! Rasterised triangle markers and their colour-pair cache.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use foundation::color::Rgb8;
use image::{Rgba, RgbaImage};
use layers::MarkerColors;
use tracing::trace;

/// Edge length of composite billboard markers.
pub const COMPOSITE_SIZE_PX: u32 = 32;
/// Border thickness of composite markers (the apex is inset 1.5x this).
pub const COMPOSITE_INSET_PX: f64 = 6.0;
/// Edge length of the shared mask icon.
pub const MASK_SIZE_PX: u32 = 64;

/// Straight (non-premultiplied) RGBA8 marker image.
pub type MarkerImage = RgbaImage;

fn fill_triangle(img: &mut MarkerImage, tri: [[f64; 2]; 3], color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    for y in 0..height {
        for x in 0..width {
            let p = [x as f64 + 0.5, y as f64 + 0.5];
            if triangle_contains(tri, p) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Upward triangle (apex top centre, base on the bottom edge) inset by
/// `inset` pixels, with the apex inset by `1.5 * inset`.
fn upward_triangle(size: f64, inset: f64) -> [[f64; 2]; 3] {
    [
        [size / 2.0, inset * 1.5],
        [size - inset, size - inset],
        [inset, size - inset],
    ]
}

fn triangle_contains(tri: [[f64; 2]; 3], p: [f64; 2]) -> bool {
    fn edge(a: [f64; 2], b: [f64; 2], p: [f64; 2]) -> f64 {
        (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
    }
    let d0 = edge(tri[0], tri[1], p);
    let d1 = edge(tri[1], tri[2], p);
    let d2 = edge(tri[2], tri[0], p);
    let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
    !(has_neg && has_pos)
}

fn opaque(c: Rgb8) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}

/// Border-coloured triangle with a fill-coloured triangle inset inside it.
pub fn rasterize_composite(colors: MarkerColors) -> MarkerImage {
    let size = COMPOSITE_SIZE_PX as f64;
    let mut img = MarkerImage::new(COMPOSITE_SIZE_PX, COMPOSITE_SIZE_PX);
    fill_triangle(&mut img, upward_triangle(size, 0.0), opaque(colors.border));
    fill_triangle(
        &mut img,
        upward_triangle(size, COMPOSITE_INSET_PX),
        opaque(colors.fill),
    );
    img
}

/// White triangle used as a tint mask; rasterised once per process.
pub fn mask_triangle() -> Arc<MarkerImage> {
    static MASK: OnceLock<Arc<MarkerImage>> = OnceLock::new();
    MASK.get_or_init(|| {
        let mut img = MarkerImage::new(MASK_SIZE_PX, MASK_SIZE_PX);
        fill_triangle(
            &mut img,
            upward_triangle(MASK_SIZE_PX as f64, 0.0),
            Rgba([255, 255, 255, 255]),
        );
        Arc::new(img)
    })
    .clone()
}

/// Composite marker images keyed by colour pair.
///
/// Entries are created on first use and live for the whole session; a hit
/// returns the same `Arc` that was handed out on the miss.
#[derive(Debug, Default)]
pub struct MarkerImageCache {
    images: BTreeMap<MarkerColors, Arc<MarkerImage>>,
}

impl MarkerImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_rasterize(&mut self, colors: MarkerColors) -> Arc<MarkerImage> {
        self.images
            .entry(colors)
            .or_insert_with(|| {
                trace!(?colors, "rasterising marker");
                Arc::new(rasterize_composite(colors))
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
