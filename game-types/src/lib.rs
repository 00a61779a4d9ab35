pub mod api;
pub mod country;
pub mod errors;
pub mod game;
pub mod geo;
pub mod stats;

// Re-export all types
pub use api::*;
pub use country::*;
pub use errors::*;
pub use game::*;
pub use geo::*;
pub use stats::*;
