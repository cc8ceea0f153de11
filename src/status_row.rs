//! Product row rendering and per-row panel state
//!
//! Each product row shows its summary plus up to two expandable panels: the
//! feature list and the setup-guide video. The features panel flag is owned by
//! the list controller (so at most one row across the whole board can have it
//! open); the video flag lives here. The two panels are mutually exclusive
//! within a row, enforced from both directions.

use eframe::egui;

use crate::catalog::{Feature, Indicator, Product};
use crate::helper_functions::Utils;

/// Action controls a row can expose. Each one is rendered iff the backing
/// catalog field is present; there is no disabled state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Capability {
    Features,
    VideoGuide,
    Requirement,
    RecommendedEmulator,
    CleanEmulator,
    Download,
}

impl Capability {
    /// The controls this product gets, in display order
    pub fn for_product(product: &Product) -> Vec<Capability> {
        let mut caps = Vec::new();
        if product.features.map_or(false, |f| !f.is_empty()) {
            caps.push(Capability::Features);
        }
        if product.video_guide_id.is_some() {
            caps.push(Capability::VideoGuide);
        }
        if product.requirement_url.is_some() {
            caps.push(Capability::Requirement);
        }
        if product.recommended_emulator_url.is_some() {
            caps.push(Capability::RecommendedEmulator);
        }
        if product.clean_emulator_url.is_some() {
            caps.push(Capability::CleanEmulator);
        }
        if product.download_url.is_some() {
            caps.push(Capability::Download);
        }
        caps
    }
}

/// Per-row UI state. Only the video-guide flag is owned here; the features
/// flag is passed in every frame by the list controller.
#[derive(Default)]
pub struct RowState {
    video_guide_open: bool,
    // Last externally observed features flag, for edge detection
    last_features_open: bool,
}

impl RowState {
    pub fn video_guide_open(&self) -> bool {
        self.video_guide_open
    }

    /// Flip the video guide. If the features panel is currently open, ask the
    /// controller to close it; the callback is assumed to be a pure flip, so
    /// it is only invoked when the externally reported state is open.
    pub fn toggle_video_guide(&mut self, features_open: bool, on_toggle_features: &mut dyn FnMut()) {
        self.video_guide_open = !self.video_guide_open;
        if features_open {
            on_toggle_features();
        }
    }

    /// Flip the features panel through the controller callback and force the
    /// video guide closed, whatever state either panel was in.
    pub fn toggle_features(&mut self, on_toggle_features: &mut dyn FnMut()) {
        on_toggle_features();
        self.video_guide_open = false;
    }

    /// React to an externally driven change of the features flag (another row
    /// taking the selection, or a controller forcing this row open). Fires
    /// only on the false-to-true edge, so repeated open observations are
    /// idempotent.
    pub fn sync_features_open(&mut self, features_open: bool) {
        if features_open && !self.last_features_open {
            self.video_guide_open = false;
        }
        self.last_features_open = features_open;
    }

    /// Render one product row. `scroll_to` brings the row into view, used for
    /// anchoring a row from the jump selector.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        product: &Product,
        features_open: bool,
        on_toggle_features: &mut dyn FnMut(),
        scroll_to: bool,
    ) {
        self.sync_features_open(features_open);
        let caps = Capability::for_product(product);

        let response = ui.group(|ui| {
            ui.set_width(ui.available_width());

            self.render_summary(ui, product);
            // A toggle click handled above must already affect this frame's
            // panel sections; the external flag only catches up next frame
            let features_visible =
                self.render_actions(ui, product, &caps, features_open, on_toggle_features);

            if features_visible {
                if let Some(features) = product.features {
                    ui.separator();
                    self.render_features_panel(ui, product.id, features);
                }
            }

            if self.video_guide_open {
                if let Some(video_id) = product.video_guide_id {
                    ui.separator();
                    self.render_video_panel(ui, video_id);
                }
            }
        });

        if scroll_to {
            response.response.scroll_to_me(Some(egui::Align::TOP));
        }
    }

    fn render_summary(&self, ui: &mut egui::Ui, product: &Product) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(Utils::truncate_string(product.name, 48))
                    .heading()
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                egui::RichText::new(product.category)
                    .monospace()
                    .color(egui::Color32::from_rgb(161, 161, 170)),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let style = product.status.style();
                egui::Frame::none()
                    .fill(style.bg_color)
                    .stroke(egui::Stroke::new(1.0, style.border_color))
                    .rounding(4.0)
                    .inner_margin(egui::Margin::symmetric(8.0, 3.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(format!("{} {}", style.icon, style.label))
                                .color(style.color),
                        );
                    });
            });
        });

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(product.version).monospace().weak());
            ui.label(egui::RichText::new("•").weak());
            ui.label(
                egui::RichText::new(format!("Updated {}", product.last_updated))
                    .monospace()
                    .weak(),
            );
        });

        if let Some(description) = product.description {
            ui.add_space(2.0);
            ui.label(egui::RichText::new(description).color(egui::Color32::from_rgb(161, 161, 170)));
        }
    }

    /// Returns the features-panel visibility for the rest of the frame,
    /// accounting for any toggle click handled here.
    fn render_actions(
        &mut self,
        ui: &mut egui::Ui,
        product: &Product,
        caps: &[Capability],
        features_open: bool,
        on_toggle_features: &mut dyn FnMut(),
    ) -> bool {
        let mut features_toggled = false;
        let mut video_toggled = false;
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for cap in caps {
                match cap {
                    Capability::Features => {
                        let arrow = if features_open { "⏶" } else { "⏷" };
                        if ui
                            .selectable_label(features_open, format!("☰ Features {}", arrow))
                            .clicked()
                        {
                            crate::debug!("Features toggled for {}", product.id);
                            features_toggled = true;
                            self.toggle_features(on_toggle_features);
                        }
                    }
                    Capability::VideoGuide => {
                        if ui
                            .selectable_label(self.video_guide_open, "▶ Setup Guide")
                            .clicked()
                        {
                            crate::debug!("Video guide toggled for {}", product.id);
                            video_toggled = true;
                            self.toggle_video_guide(features_open, on_toggle_features);
                        }
                    }
                    Capability::Requirement => {
                        if let Some(url) = product.requirement_url {
                            if ui.button("📄 Requirement file").clicked() {
                                Self::open_external(ui, product.id, url);
                            }
                        }
                    }
                    Capability::RecommendedEmulator => {
                        if let Some(url) = product.recommended_emulator_url {
                            if ui.button("🖥 Recommended Emulator").clicked() {
                                Self::open_external(ui, product.id, url);
                            }
                        }
                    }
                    Capability::CleanEmulator => {
                        if let Some(url) = product.clean_emulator_url {
                            if ui.button("📱 Clean Emulator").clicked() {
                                Self::open_external(ui, product.id, url);
                            }
                        }
                    }
                    Capability::Download => {
                        if let Some(url) = product.download_url {
                            let download = egui::Button::new(
                                egui::RichText::new("⬇ Download")
                                    .color(egui::Color32::WHITE)
                                    .strong(),
                            )
                            .fill(egui::Color32::from_rgb(22, 163, 74));
                            if ui.add(download).clicked() {
                                crate::info!("Download requested for {}", product.id);
                                Self::open_external(ui, product.id, url);
                            }
                        }
                    }
                }
            }
        });
        Self::features_open_after_click(features_open, features_toggled, video_toggled)
    }

    /// Features-panel visibility for the remainder of a frame in which a
    /// toggle click may have been handled. The externally owned flag only
    /// updates on the next frame, so the click outcome is applied locally
    /// before the panel sections are painted.
    fn features_open_after_click(
        features_open: bool,
        features_toggled: bool,
        video_toggled: bool,
    ) -> bool {
        if video_toggled {
            false
        } else if features_toggled {
            !features_open
        } else {
            features_open
        }
    }

    // Fresh browsing context, no opener access, no referrer leak
    fn open_external(ui: &egui::Ui, product_id: &str, url: &str) {
        crate::debug!("Opening external link for {}: {}", product_id, url);
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }

    /// The rows the features panel paints, one per feature in catalog order
    pub(crate) fn feature_panel_rows(features: &[Feature]) -> Vec<(&str, Indicator)> {
        features
            .iter()
            .map(|f| (f.name, Indicator::for_status(f.status)))
            .collect()
    }

    fn render_features_panel(&self, ui: &mut egui::Ui, product_id: &str, features: &[Feature]) {
        // Legend on top, as on the original board
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                Self::legend_entry(ui, Indicator::Negative, "Detected/Unsafe");
                Self::legend_entry(ui, Indicator::Cautionary, "Use with caution");
                Self::legend_entry(ui, Indicator::Affirmative, "Safe");
            });
        });
        ui.separator();

        egui::Grid::new(("features_grid", product_id))
            .num_columns(3)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for (idx, (name, indicator)) in
                    Self::feature_panel_rows(features).into_iter().enumerate()
                {
                    ui.horizontal(|ui| {
                        Self::indicator_dot(ui, indicator);
                        ui.label(egui::RichText::new(name).monospace());
                    });
                    if idx % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
    }

    fn render_video_panel(&self, ui: &mut egui::Ui, video_id: &str) {
        let embed = Utils::embed_url(video_id);
        ui.label(
            egui::RichText::new("$ playing setup_guide.mp4")
                .monospace()
                .color(egui::Color32::from_rgb(34, 197, 94)),
        );
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            ui.label("Setup guide:");
            ui.hyperlink_to(egui::RichText::new(&embed).monospace(), &embed);
        });
        if ui.button("▶ Open guide in browser").clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(&embed));
        }
    }

    fn legend_entry(ui: &mut egui::Ui, indicator: Indicator, label: &str) {
        ui.label(egui::RichText::new(label).weak().small());
        Self::indicator_dot(ui, indicator);
        ui.add_space(8.0);
    }

    fn indicator_dot(ui: &mut egui::Ui, indicator: Indicator) {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 4.0, indicator.color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Feature, FeatureStatus, ProductStatus};

    fn product(
        features: Option<&'static [Feature]>,
        video_guide_id: Option<&'static str>,
    ) -> Product {
        Product {
            id: "test_panel",
            name: "Test Panel",
            category: "Panel",
            status: ProductStatus::Testing,
            version: "v0.1.0",
            last_updated: "today",
            description: None,
            download_url: None,
            requirement_url: None,
            recommended_emulator_url: None,
            clean_emulator_url: None,
            video_guide_id,
            features,
        }
    }

    static ONE_FEATURE: &[Feature] = &[Feature {
        name: "Draw Fov",
        status: Some(FeatureStatus::Safe),
    }];

    static NO_FEATURES: &[Feature] = &[];

    #[test]
    fn capabilities_follow_field_presence() {
        let mut full = product(Some(ONE_FEATURE), Some("abc"));
        full.download_url = Some("https://example.com/d");
        full.requirement_url = Some("https://example.com/r");
        full.recommended_emulator_url = Some("https://example.com/e");
        full.clean_emulator_url = Some("https://example.com/c");
        assert_eq!(
            Capability::for_product(&full),
            vec![
                Capability::Features,
                Capability::VideoGuide,
                Capability::Requirement,
                Capability::RecommendedEmulator,
                Capability::CleanEmulator,
                Capability::Download,
            ]
        );

        let bare = product(None, None);
        assert!(Capability::for_product(&bare).is_empty());
    }

    #[test]
    fn empty_feature_list_yields_no_features_control() {
        let p = product(Some(NO_FEATURES), None);
        assert!(!Capability::for_product(&p).contains(&Capability::Features));
    }

    #[test]
    fn opening_video_closes_features_via_callback() {
        let mut row = RowState::default();
        let mut features_open = true;
        row.sync_features_open(features_open);

        let mut flip = || features_open = !features_open;
        row.toggle_video_guide(true, &mut flip);

        assert!(row.video_guide_open());
        assert!(!features_open);
    }

    #[test]
    fn opening_video_with_features_closed_leaves_callback_alone() {
        let mut row = RowState::default();
        let mut calls = 0;
        let mut count = || calls += 1;
        row.toggle_video_guide(false, &mut count);
        assert!(row.video_guide_open());
        assert_eq!(calls, 0);
    }

    #[test]
    fn toggling_features_always_closes_video() {
        let mut row = RowState::default();
        let mut features_open = false;

        // Open the video first
        let open = features_open;
        let mut flip = || features_open = !features_open;
        row.toggle_video_guide(open, &mut flip);
        assert!(row.video_guide_open());

        let mut flip = || features_open = !features_open;
        row.toggle_features(&mut flip);
        assert!(features_open);
        assert!(!row.video_guide_open());
    }

    #[test]
    fn video_toggle_is_idempotent_over_two_actions() {
        let mut row = RowState::default();
        let mut features_open = false;
        let before = row.video_guide_open();

        let open = features_open;
        let mut flip = || features_open = !features_open;
        row.toggle_video_guide(open, &mut flip);
        let open = features_open;
        let mut flip = || features_open = !features_open;
        row.toggle_video_guide(open, &mut flip);

        assert_eq!(row.video_guide_open(), before);
        assert!(!features_open);
    }

    #[test]
    fn external_features_open_closes_video() {
        let mut row = RowState::default();
        let mut noop = || {};
        row.toggle_video_guide(false, &mut noop);
        assert!(row.video_guide_open());

        // Controller opened this row's features without going through the
        // row's own toggle handler
        row.sync_features_open(true);
        assert!(!row.video_guide_open());
    }

    #[test]
    fn repeated_external_open_signals_are_idempotent() {
        let mut row = RowState::default();
        row.sync_features_open(true);

        // Features stay open; a later video open must survive repeated "still
        // open" observations only through a real edge
        row.sync_features_open(true);
        let mut features_open = true;
        let mut flip = || features_open = !features_open;
        row.toggle_video_guide(true, &mut flip);
        assert!(row.video_guide_open());
        row.sync_features_open(features_open);
        assert!(row.video_guide_open());
    }

    #[test]
    fn panels_never_both_open_across_action_sequences() {
        let mut row = RowState::default();
        let mut features_open = false;

        // Frame-by-frame action script; 0 = toggle features, 1 = toggle video
        for action in [0, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0] {
            row.sync_features_open(features_open);
            match action {
                0 => {
                    let mut flip = || features_open = !features_open;
                    row.toggle_features(&mut flip);
                }
                _ => {
                    let open = features_open;
                    let mut flip = || features_open = !features_open;
                    row.toggle_video_guide(open, &mut flip);
                }
            }
            assert!(
                !(features_open && row.video_guide_open()),
                "both panels open after action {}",
                action
            );
        }
    }

    #[test]
    fn click_frame_paints_at_most_one_panel() {
        // Opening the video while features are open must hide the features
        // panel within the same frame, before the external flag catches up
        let mut row = RowState::default();
        row.sync_features_open(true);
        let mut features_open = true;
        let mut flip = || features_open = !features_open;
        row.toggle_video_guide(true, &mut flip);

        let features_visible = RowState::features_open_after_click(true, false, true);
        assert!(row.video_guide_open());
        assert!(!features_visible);
    }

    #[test]
    fn click_outcome_drives_same_frame_visibility() {
        // Features click flips the panel within the frame
        assert!(RowState::features_open_after_click(false, true, false));
        assert!(!RowState::features_open_after_click(true, true, false));
        // Video click always hides the features panel
        assert!(!RowState::features_open_after_click(true, false, true));
        assert!(!RowState::features_open_after_click(false, false, true));
        // No click leaves the external state as-is
        assert!(RowState::features_open_after_click(true, false, false));
        assert!(!RowState::features_open_after_click(false, false, false));
    }

    #[test]
    fn full_feature_list_renders_without_video_control() {
        // A 27-feature product with no video id gets exactly 27 panel rows
        // and no video-guide control at all
        let catalog = crate::catalog::Catalog::load().unwrap();
        let panel = catalog.product("main_panel").unwrap();
        let mut p = panel.clone();
        p.video_guide_id = None;
        let caps = Capability::for_product(&p);
        assert!(caps.contains(&Capability::Features));
        assert!(!caps.contains(&Capability::VideoGuide));

        // One painted row per catalog feature, order preserved
        let rows = RowState::feature_panel_rows(p.features.unwrap());
        assert_eq!(rows.len(), 27);
        assert_eq!(rows[0], ("Aim Sight", Indicator::Affirmative));
        assert_eq!(rows[26], ("Down Player", Indicator::Affirmative));
    }
}
