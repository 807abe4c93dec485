pub mod fra_points;
pub mod geo_point;

pub use fra_points::*;
pub use geo_point::*;
