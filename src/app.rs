//! Application state for the ModStatus status board
//!
//! This module owns the validated catalog, the per-row panel states, and the
//! board-wide single-selection invariant: at most one row may have its
//! features panel open at any time.

use std::collections::HashMap;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::config::FREE_TRIAL_KEY;
use crate::helper_functions::Utils;
use crate::settings::Settings;
use crate::status_row::RowState;
use crate::{debug, info};

/// Main application state
pub struct StatusBoard {
    pub catalog: Catalog,
    pub settings: Settings,

    // Per-row video-guide state, keyed by product id
    pub(crate) rows: HashMap<String, RowState>,

    // Which row's features panel is open; None when all are collapsed.
    // Rows never write this directly, they request a flip through the
    // callback handed to them each frame.
    pub(crate) open_features: Option<String>,

    // Session trial key shown in the header
    trial_key: String,
    key_copied: bool,
    key_copy_time: Option<Instant>,

    // One-shot anchor target, consumed after the first frame
    pub(crate) scroll_target: Option<String>,
}

impl StatusBoard {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        info!(
            "Initializing StatusBoard with {} products",
            catalog.products.len()
        );

        let rows = catalog
            .products
            .iter()
            .map(|p| (p.id.to_string(), RowState::default()))
            .collect();

        let trial_key = if FREE_TRIAL_KEY.is_empty() {
            info!("No static trial key configured, generating a session key");
            Utils::session_trial_key()
        } else {
            FREE_TRIAL_KEY.to_string()
        };

        let scroll_target = settings.last_product.clone();

        Self {
            catalog,
            settings,
            rows,
            open_features: None,
            trial_key,
            key_copied: false,
            key_copy_time: None,
            scroll_target,
        }
    }

    pub fn trial_key(&self) -> &str {
        &self.trial_key
    }

    /// Whether the given row's features panel is currently open
    pub fn features_open_for(&self, product_id: &str) -> bool {
        self.open_features.as_deref() == Some(product_id)
    }

    /// Jump the board to a product: scroll it into view this frame and
    /// remember it as the launch anchor for the next session.
    pub fn jump_to_product(&mut self, product_id: &str) {
        debug!("Jumping to product {}", product_id);
        self.scroll_target = Some(product_id.to_string());
        self.settings.last_product = Some(product_id.to_string());
        if let Err(e) = self.settings.save() {
            crate::warn!("{}", e);
        }
    }

    pub fn is_key_copied(&self) -> bool {
        self.key_copied
    }

    pub fn mark_key_copied(&mut self) {
        self.key_copied = true;
        self.key_copy_time = Some(Instant::now());
    }

    /// Drop the "Copied!" acknowledgement once it has been shown long enough
    pub fn expire_key_copied(&mut self) {
        if self.key_copied {
            if let Some(t) = self.key_copy_time {
                if t.elapsed().as_secs_f32() > crate::config::COPY_FEEDBACK_SECS {
                    self.key_copied = false;
                    self.key_copy_time = None;
                }
            }
        }
    }
}

/// Flip the features selection for one row. Opening a row implicitly closes
/// whichever other row held the selection. Returns true when the row ends up
/// open. This is the only place the selection is ever written.
pub(crate) fn flip_selection(open_features: &mut Option<String>, product_id: &str) -> bool {
    if open_features.as_deref() == Some(product_id) {
        *open_features = None;
        false
    } else {
        debug!("Features selection moved to {}", product_id);
        *open_features = Some(product_id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> StatusBoard {
        let catalog = Catalog::load().unwrap();
        StatusBoard::new(catalog, Settings::default())
    }

    #[test]
    fn panels_start_collapsed() {
        let board = board();
        assert!(!board.features_open_for("main_panel"));
        assert!(board.open_features.is_none());
    }

    #[test]
    fn flip_opens_then_closes() {
        let mut selection = None;
        assert!(flip_selection(&mut selection, "main_panel"));
        assert_eq!(selection.as_deref(), Some("main_panel"));
        assert!(!flip_selection(&mut selection, "main_panel"));
        assert!(selection.is_none());
    }

    #[test]
    fn at_most_one_row_holds_the_selection() {
        let mut selection = None;
        flip_selection(&mut selection, "row_a");
        flip_selection(&mut selection, "row_b");
        assert_eq!(selection.as_deref(), Some("row_b"));
    }

    #[test]
    fn static_trial_key_is_used_when_configured() {
        let board = board();
        assert_eq!(board.trial_key(), crate::config::FREE_TRIAL_KEY);
    }

    #[test]
    fn jump_remembers_the_product_as_launch_anchor() {
        let mut board = board();
        board.jump_to_product("main_panel");
        assert_eq!(board.scroll_target.as_deref(), Some("main_panel"));
        assert_eq!(board.settings.last_product.as_deref(), Some("main_panel"));
    }

    #[test]
    fn scroll_target_comes_from_settings() {
        let catalog = Catalog::load().unwrap();
        let settings = Settings {
            show_announcements: true,
            last_product: Some("main_panel".to_string()),
        };
        let board = StatusBoard::new(catalog, settings);
        assert_eq!(board.scroll_target.as_deref(), Some("main_panel"));
    }
}
