pub mod globe;
pub mod icon_layers;
pub mod renderer;
pub mod textures;

pub use globe::GlobeRenderer;
pub use icon_layers::IconLayerRenderer;
pub use renderer::*;
