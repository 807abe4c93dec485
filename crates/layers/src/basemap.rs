//! Basemap raster tiles keyed by theme.

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

pub const DARK_TILES: &str = "https://basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
pub const LIGHT_TILES: &str = "https://basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";

/// XYZ tile URL template with `{z}`, `{x}`, `{y}` and `{r}` (retina suffix)
/// placeholders.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TileTemplate {
    pub template: &'static str,
    pub tile_size_px: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl TileTemplate {
    pub fn for_theme(theme: Theme) -> Self {
        let template = match theme {
            Theme::Dark => DARK_TILES,
            Theme::Light => LIGHT_TILES,
        };
        Self {
            template,
            tile_size_px: 256,
            min_zoom: 0,
            max_zoom: 19,
        }
    }

    pub fn url(&self, z: u8, x: u32, y: u32, retina: bool) -> String {
        self.template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", if retina { "@2x" } else { "" })
    }
}
