//! Two-layer icon renderer: a shared white mask drawn as a large
//! border-tinted icon with a smaller fill-tinted icon on top.

use std::sync::Arc;

use foundation::color::Rgb8;
use formats::Catalog;
use layers::{HighlightSet, Theme};

use crate::renderer::{Backend, MarkerRenderer, RenderFrame, Sprite, assemble_frame};
use crate::textures::{MarkerImage, mask_triangle};

pub const BORDER_SIZE_SCALE: f32 = 20.0;
pub const FILL_SIZE_SCALE: f32 = 10.0;

#[derive(Debug, Default)]
pub struct IconLayerRenderer {
    /// Acquired with the first marker drawn.
    mask: Option<Arc<MarkerImage>>,
}

impl IconLayerRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

fn tint(c: Rgb8, opacity: f32) -> [u8; 4] {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    [c.r, c.g, c.b, a]
}

impl MarkerRenderer for IconLayerRenderer {
    fn backend(&self) -> Backend {
        Backend::IconLayers
    }

    fn image_count(&self) -> usize {
        usize::from(self.mask.is_some())
    }

    fn render(&mut self, points: &Catalog, theme: Theme, highlight: &HighlightSet) -> RenderFrame {
        let mask = &mut self.mask;
        assemble_frame(Backend::IconLayers, points, theme, highlight, |_, style| {
            Sprite::IconPair {
                mask: mask.get_or_insert_with(mask_triangle).clone(),
                border_rgba: tint(style.colors.border, style.opacity),
                fill_rgba: tint(style.colors.fill, style.opacity),
                border_size_px: BORDER_SIZE_SCALE * style.scale,
                fill_size_px: FILL_SIZE_SCALE * style.scale,
            }
        })
    }
}
