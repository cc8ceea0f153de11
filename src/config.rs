//! Configuration constants for the ModStatus status board
//!
//! This module contains application-wide configuration values including
//! external link targets, the video embed base address, and UI settings.

/// The current application version (keep in sync with Cargo.toml)
pub const APP_VERSION: &str = "1.2.0";

/// Display name shown in the header and window title
pub const APP_NAME: &str = "ModStatus";

/// Project page linked from the header title
pub static PROJECT_URL: &str = "https://github.com/modstatus/modstatus";

/// Community invite linked from the header
pub static DISCORD_URL: &str = "https://discord.gg/K6X79nHqRH";

/// Static trial key handed to every user. Leave empty ("") to generate a
/// random per-session key instead.
pub static FREE_TRIAL_KEY: &str = "MODSTATUS-FREE";

/// Base address for embedded setup-guide videos
pub static EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

/// How long the "Copied!" acknowledgement stays visible, in seconds
pub static COPY_FEEDBACK_SECS: f32 = 1.5;

/// Default window size
pub static WINDOW_SIZE: [f32; 2] = [900.0, 640.0];

/// Minimum window size
pub static MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];
