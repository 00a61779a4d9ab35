pub mod geodesy;
pub mod scoring;
pub mod session;
pub mod stats;

// Re-export main components
pub use geodesy::*;
pub use scoring::*;
pub use session::*;
pub use stats::*;
