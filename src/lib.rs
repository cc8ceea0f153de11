//! ModStatus - Panel Status Board Library
//!
//! This library provides the catalog data model and the row-level panel
//! state machine behind the ModStatus desktop status board.

pub mod config;
pub mod catalog;
pub mod logging;
pub mod settings;
pub mod helper_functions;
pub mod status_row;
pub mod app;
pub mod gui;

// Re-export commonly used items
pub use config::*;
pub use catalog::*;
pub use settings::*;
pub use helper_functions::*;
pub use status_row::*;
pub use app::*;
