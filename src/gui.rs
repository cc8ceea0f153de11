//! GUI rendering for the ModStatus status board
//!
//! This module contains all the UI rendering methods and the eframe glue.

use eframe::egui;

use crate::app::{flip_selection, StatusBoard};
use crate::catalog::AnnouncementKind;
use crate::config::{APP_NAME, APP_VERSION, DISCORD_URL, PROJECT_URL};
use crate::{info, warn};

impl StatusBoard {
    /// Render the application header
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let title = format!("{} v{} - Panel Status Board", APP_NAME, APP_VERSION);
            let title_response = ui.hyperlink_to(
                egui::RichText::new(title)
                    .color(egui::Color32::from_rgb(34, 197, 94))
                    .heading(),
                PROJECT_URL,
            );
            if title_response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let link_response = ui.hyperlink_to(
                    egui::RichText::new("Join the Discord")
                        .color(egui::Color32::from_rgb(84, 178, 250)),
                    DISCORD_URL,
                );
                if link_response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
            });
        });
        ui.add_space(5.0);
    }

    /// Render the free trial key with a copy-to-clipboard control
    pub fn render_trial_key(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Free trial key:");
            let key = self.trial_key().to_string();
            let mut key_edit = key.clone();
            ui.add(
                egui::TextEdit::singleline(&mut key_edit)
                    .desired_width(220.0)
                    .interactive(false)
                    .font(egui::TextStyle::Monospace),
            );
            let copy_icon = egui::RichText::new("📋").size(18.0);
            if ui
                .add(egui::Button::new(copy_icon))
                .on_hover_text("Copy to clipboard")
                .clicked()
            {
                ui.output_mut(|o| o.copied_text = key.clone());
                info!("Trial key copied to clipboard");
                self.mark_key_copied();
            }
            if self.is_key_copied() {
                ui.label(
                    egui::RichText::new("Copied!").color(egui::Color32::from_rgb(80, 250, 123)),
                );
            }
        });
    }

    /// Render the announcement feed, collapsible and persisted
    pub fn render_announcements(&mut self, ui: &mut egui::Ui) {
        let response = egui::CollapsingHeader::new(
            egui::RichText::new("Announcements").strong(),
        )
        .default_open(self.settings.show_announcements)
        .show(ui, |ui| {
            for announcement in &self.catalog.announcements {
                let title_color = match announcement.kind {
                    AnnouncementKind::Warning => egui::Color32::from_rgb(250, 204, 21),
                    AnnouncementKind::Success => egui::Color32::from_rgb(80, 250, 123),
                    AnnouncementKind::Info => egui::Color32::from_rgb(84, 178, 250),
                };
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(announcement.title)
                            .color(title_color)
                            .strong(),
                    );
                    ui.label(egui::RichText::new(announcement.date).weak().small());
                });
                // Content is authored with newline-delimited bullet lines;
                // render it verbatim, line by line
                for line in announcement.content.lines() {
                    ui.label(line);
                }
            }
        });

        if response.header_response.clicked() {
            self.settings.show_announcements = !self.settings.show_announcements;
            if let Err(e) = self.settings.save() {
                warn!("{}", e);
            }
        }
    }

    /// Render the jump-to-product selector, which doubles as the writer of
    /// the persisted launch anchor
    fn render_jump_selector(&mut self, ui: &mut egui::Ui) {
        if self.catalog.products.len() < 2 {
            return;
        }
        // Product ids are 'static, so the click can be applied after the
        // catalog borrow ends
        let mut clicked = None;
        egui::ComboBox::from_id_source("jump_to_product")
            .selected_text("Jump to product")
            .show_ui(ui, |ui| {
                for product in &self.catalog.products {
                    if ui.selectable_label(false, product.name).clicked() {
                        clicked = Some(product.id);
                    }
                }
            });
        if let Some(id) = clicked {
            self.jump_to_product(id);
        }
        ui.add_space(4.0);
    }

    /// Render the product rows and enforce the one-open-features-panel rule
    pub fn render_product_list(&mut self, ui: &mut egui::Ui) {
        self.render_jump_selector(ui);

        let Self {
            catalog,
            settings,
            rows,
            open_features,
            scroll_target,
            ..
        } = self;

        let mut selection_changed = false;
        for product in &catalog.products {
            let features_open = open_features.as_deref() == Some(product.id);
            let scroll_to = scroll_target.as_deref() == Some(product.id);
            let row = rows.entry(product.id.to_string()).or_default();

            let mut on_toggle = || {
                selection_changed = true;
                if flip_selection(open_features, product.id) {
                    settings.last_product = Some(product.id.to_string());
                }
            };
            row.show(ui, product, features_open, &mut on_toggle, scroll_to);
            ui.add_space(6.0);
        }

        if selection_changed {
            if let Err(e) = settings.save() {
                warn!("{}", e);
            }
        }

        // Anchor targets are one-shot
        *scroll_target = None;
    }
}

impl eframe::App for StatusBoard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.expire_key_copied();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            self.render_trial_key(ui);
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_announcements(ui);
                    ui.separator();
                    self.render_product_list(ui);
                });
        });

        if self.is_key_copied() {
            // Keep repainting so the acknowledgement disappears on time
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(1000));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.settings.save() {
            warn!("{}", e);
        }
        info!("Application closed by user");
        info!("");
        info!("---------------------------------------------------------------");
        info!("");
    }
}
