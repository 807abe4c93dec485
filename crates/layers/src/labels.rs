use formats::FraPoint;

/// Labels are hidden once the camera is farther than this from the point.
pub const LABEL_MAX_DISTANCE_M: f64 = 500_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub font: &'static str,
    pub halo_width_px: f32,
    /// Offset above the marker anchor (negative is up).
    pub pixel_offset_y: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: "10px sans-serif",
            halo_width_px: 2.0,
            pixel_offset_y: -9.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    pub text: String,
    pub max_distance_m: f64,
    pub style: LabelStyle,
}

impl PointLabel {
    pub fn for_point(point: &FraPoint) -> Self {
        Self {
            text: point.name.clone(),
            max_distance_m: LABEL_MAX_DISTANCE_M,
            style: LabelStyle::default(),
        }
    }

    pub fn visible_at(&self, camera_distance_m: f64) -> bool {
        camera_distance_m <= self.max_distance_m
    }
}
