pub mod event_bus;
pub mod session;
pub mod view_state;

pub use event_bus::*;
pub use session::Session;
pub use view_state::*;
