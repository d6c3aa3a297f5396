mod config;
mod geo;
mod lookup;
pub mod plan;
mod selection;

pub use config::*;
pub use geo::*;
pub use lookup::*;
pub use plan::*;
pub use selection::*;
