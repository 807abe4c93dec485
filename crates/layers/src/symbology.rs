use foundation::color::{Rgb8, color_of};
use formats::FraPoint;

use crate::search::HighlightSet;

/// Opacity of points outside an active highlight.
pub const DIM_OPACITY: f32 = 0.05;
/// Size factor of points outside an active highlight.
pub const DIM_SCALE: f32 = 0.5;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerColors {
    pub fill: Rgb8,
    pub border: Rgb8,
}

impl MarkerColors {
    /// Fill follows the airspace; the border follows the cross-border states
    /// when the point has any, otherwise the airspace.
    pub fn for_point(point: &FraPoint) -> Self {
        let fill = color_of(&point.airspace_location);
        let border = if point.cross_border_states.trim().is_empty() {
            fill
        } else {
            color_of(&point.cross_border_states)
        };
        Self { fill, border }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    pub colors: MarkerColors,
    pub opacity: f32,
    pub scale: f32,
}

impl MarkerStyle {
    pub fn for_point(point: &FraPoint, highlight: &HighlightSet) -> Self {
        let colors = MarkerColors::for_point(point);
        if highlight.is_dimmed(&point.name) {
            Self {
                colors,
                opacity: DIM_OPACITY,
                scale: DIM_SCALE,
            }
        } else {
            Self {
                colors,
                opacity: 1.0,
                scale: 1.0,
            }
        }
    }

    pub fn is_dimmed(&self) -> bool {
        self.opacity < 1.0
    }
}
