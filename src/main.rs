//! ModStatus - Panel Status Board
//!
//! A desktop application showing release status, feature safety
//! classifications and download links for supported game-modification panels.
//! Built with Rust and egui for cross-platform (Windows, Linux & macOS)

// Import all modules
mod config;
mod catalog;
mod logging;
mod settings;
mod helper_functions;
mod status_row;
mod app;
mod gui;

// Re-export commonly used items
pub use config::*;
pub use catalog::*;
pub use settings::*;
pub use helper_functions::*;
pub use status_row::*;
pub use app::*;

use crate::logging::LOGGER;

// Third-party crate imports
use eframe::egui;

// Platform-specific imports
#[cfg(windows)]
use windows::Win32::Foundation::POINT;
#[cfg(windows)]
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MonitorFromPoint, MONITORINFO, MONITOR_DEFAULTTONEAREST,
};
#[cfg(windows)]
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

/// Initialize the application with logging
fn initialize_app() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = logging::setup_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting {} application", APP_NAME);
    Ok(())
}

/// Calculate window position to center on the currently used monitor
fn calculate_window_position(window_size: [f32; 2]) -> egui::Pos2 {
    #[cfg(windows)]
    {
        unsafe {
            let mut point = POINT { x: 0, y: 0 };
            if GetCursorPos(&mut point).is_ok() {
                let monitor = MonitorFromPoint(point, MONITOR_DEFAULTTONEAREST);
                let mut info = MONITORINFO {
                    cbSize: std::mem::size_of::<MONITORINFO>() as u32,
                    ..Default::default()
                };
                if GetMonitorInfoW(monitor, &mut info).as_bool() {
                    let work_left = info.rcWork.left;
                    let work_top = info.rcWork.top;
                    let work_width = (info.rcWork.right - info.rcWork.left) as f32;
                    let work_height = (info.rcWork.bottom - info.rcWork.top) as f32;
                    let x = work_left as f32 + (work_width - window_size[0]) / 2.0;
                    let y = work_top as f32 + (work_height - window_size[1]) / 2.0;
                    egui::Pos2::new(x, y)
                } else {
                    egui::Pos2::new(100.0, 100.0)
                }
            } else {
                egui::Pos2::new(100.0, 100.0)
            }
        }
    }

    #[cfg(not(windows))]
    {
        // Let the window manager place us; a fixed offset works with most
        let _ = window_size;
        egui::Pos2::new(100.0, 100.0)
    }
}

/// Configure the application window
fn configure_window() -> eframe::NativeOptions {
    let window_size = WINDOW_SIZE;
    let center_pos = calculate_window_position(window_size);

    let viewport_builder = egui::ViewportBuilder::default()
        .with_inner_size(window_size)
        .with_position(center_pos)
        .with_decorations(true)
        .with_resizable(true)
        .with_min_inner_size(MIN_WINDOW_SIZE); // Minimum window size to prevent UI elements from disappearing

    eframe::NativeOptions {
        viewport: viewport_builder,
        ..Default::default()
    }
}

/// Apply the dark board theme
fn configure_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    // Dark zinc palette with the brand green accent
    visuals.override_text_color = Some(egui::Color32::from_rgb(244, 244, 245)); // #f4f4f5 (light gray)
    visuals.panel_fill = egui::Color32::from_rgb(24, 24, 27); // #18181b (zinc-900)
    visuals.widgets.active.bg_fill = egui::Color32::from_rgb(34, 197, 94); // #22c55e (green)
    visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(63, 63, 70); // #3f3f46 (zinc-700)
    visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(39, 39, 42); // #27272a (zinc-800)
    visuals.selection.bg_fill = egui::Color32::from_rgb(22, 163, 74); // #16a34a (darker green)
    visuals.hyperlink_color = egui::Color32::from_rgb(84, 178, 250); // #54b2fa (blue)
    visuals.warn_fg_color = egui::Color32::from_rgb(250, 204, 21); // #facc15 (yellow)
    visuals.error_fg_color = egui::Color32::from_rgb(239, 68, 68); // #ef4444 (red)
    visuals.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(39, 39, 42); // #27272a
    visuals.widgets.active.fg_stroke.color = egui::Color32::from_rgb(24, 24, 27); // dark text on green
    visuals.widgets.hovered.fg_stroke.color = egui::Color32::from_rgb(244, 244, 245); // light text on zinc

    ctx.set_visuals(visuals);
}

/// Cleanup resources when the application exits
fn cleanup_on_exit() {
    // Shutdown logger when app exits
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(logger) = guard.take() {
            logger.shutdown();
        }
    }
}

fn main() {
    // Initialize the application
    if let Err(e) = initialize_app() {
        eprintln!("Failed to initialize application: {}", e);
        return;
    }

    // A catalog that fails validation is a configuration error, not a
    // recoverable runtime condition
    let catalog = match Catalog::load() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Invalid catalog: {}", e);
            eprintln!("Invalid catalog: {}", e);
            cleanup_on_exit();
            return;
        }
    };

    // Load saved UI preferences
    let settings = Settings::load();

    // Configure window
    let native_options = configure_window();

    info!(
        "Initializing GUI with window size: {}x{}",
        WINDOW_SIZE[0], WINDOW_SIZE[1]
    );

    // Run the application
    let result = eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| {
            // Configure visuals
            configure_visuals(&cc.egui_ctx);

            info!("GUI initialized successfully");
            Box::new(StatusBoard::new(catalog, settings))
        }),
    );

    // Cleanup on exit
    cleanup_on_exit();

    result.expect("Failed to start eframe");
}
