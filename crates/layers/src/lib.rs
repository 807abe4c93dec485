pub mod basemap;
pub mod labels;
pub mod search;
pub mod symbology;
pub mod tooltip;

pub use basemap::{Theme, TileTemplate};
pub use search::{HighlightSet, highlight};
pub use symbology::{MarkerColors, MarkerStyle};
pub use tooltip::AttributePanel;
