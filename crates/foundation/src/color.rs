/// 8-bit RGB colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form used in reports and legends.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour returned for an empty key.
pub const NEUTRAL_GREY: Rgb8 = Rgb8::new(200, 200, 200);

/// Deterministic colour for a category string.
///
/// Palette-compatible with the viewer's existing legend: a 32-bit
/// `hash * 31 + c` rolling hash with wraparound, masked to 24 bits and split
/// into `0xRRGGBB`. Distinct keys may collide.
pub fn color_of(key: &str) -> Rgb8 {
    if key.is_empty() {
        return NEUTRAL_GREY;
    }

    let mut hash: i32 = 0;
    for c in key.chars() {
        hash = (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }

    let c = (hash & 0x00FF_FFFF) as u32;
    Rgb8::new((c >> 16) as u8, (c >> 8) as u8, c as u8)
}
