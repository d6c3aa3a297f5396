mod display;
mod map_style;
mod place;
mod plan;
mod route;
mod session;

pub use display::*;
pub use map_style::*;
pub use place::*;
pub use plan::*;
pub use route::*;
pub use session::*;
