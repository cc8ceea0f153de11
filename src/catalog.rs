//! Product and announcement catalog for the ModStatus status board
//!
//! This module contains the hand-authored catalog data plus the types it is
//! made of: products with their release status, optional download/requirement
//! links, safety-classified feature lists, and the announcement feed. The
//! catalog is built and validated once at startup and never mutated afterwards.

use eframe::egui::Color32;
use thiserror::Error;

/// Release status of a product, manually curated
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProductStatus {
    Undetected,
    Detected,
    Updating,
    Testing,
    Offline,
}

impl ProductStatus {
    /// Every status variant, in display order
    pub const ALL: [ProductStatus; 5] = [
        ProductStatus::Undetected,
        ProductStatus::Detected,
        ProductStatus::Updating,
        ProductStatus::Testing,
        ProductStatus::Offline,
    ];

    /// Presentation tuple for this status. Exhaustive by construction, so a
    /// status without a style is a compile error rather than a runtime one.
    pub fn style(self) -> StatusStyle {
        match self {
            ProductStatus::Undetected => StatusStyle {
                color: Color32::from_rgb(34, 197, 94),
                bg_color: Color32::from_rgba_premultiplied(34, 197, 94, 25),
                border_color: Color32::from_rgba_premultiplied(34, 197, 94, 50),
                icon: "🛡",
                label: "Undetected",
            },
            ProductStatus::Detected => StatusStyle {
                color: Color32::from_rgb(239, 68, 68),
                bg_color: Color32::from_rgba_premultiplied(239, 68, 68, 25),
                border_color: Color32::from_rgba_premultiplied(239, 68, 68, 50),
                icon: "❌",
                label: "Detected",
            },
            ProductStatus::Updating => StatusStyle {
                color: Color32::from_rgb(249, 115, 22),
                bg_color: Color32::from_rgba_premultiplied(249, 115, 22, 25),
                border_color: Color32::from_rgba_premultiplied(249, 115, 22, 50),
                icon: "🔨",
                label: "Updating",
            },
            ProductStatus::Testing => StatusStyle {
                color: Color32::from_rgb(250, 204, 21),
                bg_color: Color32::from_rgba_premultiplied(250, 204, 21, 25),
                border_color: Color32::from_rgba_premultiplied(250, 204, 21, 50),
                icon: "⚡",
                label: "Testing",
            },
            ProductStatus::Offline => StatusStyle {
                color: Color32::from_rgb(113, 113, 122),
                bg_color: Color32::from_rgba_premultiplied(113, 113, 122, 25),
                border_color: Color32::from_rgba_premultiplied(113, 113, 122, 50),
                icon: "⚠",
                label: "Offline",
            },
        }
    }
}

/// Styling tuple for a product status badge
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StatusStyle {
    pub color: Color32,
    pub bg_color: Color32,
    pub border_color: Color32,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Safety classification of a single feature
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeatureStatus {
    Safe,
    Unsafe,
    Risk,
}

/// Visual indicator class derived from a feature's safety status
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Indicator {
    Affirmative,
    Negative,
    Cautionary,
    Neutral,
}

impl Indicator {
    /// Classify an optional feature status; anything unset falls back to the
    /// neutral indicator.
    pub fn for_status(status: Option<FeatureStatus>) -> Indicator {
        match status {
            Some(FeatureStatus::Safe) => Indicator::Affirmative,
            Some(FeatureStatus::Unsafe) => Indicator::Negative,
            Some(FeatureStatus::Risk) => Indicator::Cautionary,
            None => Indicator::Neutral,
        }
    }

    /// Dot color used in the features panel
    pub fn color(self) -> Color32 {
        match self {
            Indicator::Affirmative => Color32::from_rgb(34, 197, 94),
            Indicator::Negative => Color32::from_rgb(239, 68, 68),
            Indicator::Cautionary => Color32::from_rgb(250, 204, 21),
            Indicator::Neutral => Color32::from_rgb(113, 113, 122),
        }
    }
}

/// One capability of a product, shown in the features panel
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Feature {
    pub name: &'static str,
    pub status: Option<FeatureStatus>,
}

/// One product row of the status board.
///
/// Every `Option` field gates the matching action control: absent field,
/// absent control. There is no hidden or disabled state.
#[derive(Clone, PartialEq, Debug)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub status: ProductStatus,
    pub version: &'static str,
    pub last_updated: &'static str,
    pub description: Option<&'static str>,
    pub download_url: Option<&'static str>,
    pub requirement_url: Option<&'static str>,
    pub recommended_emulator_url: Option<&'static str>,
    pub clean_emulator_url: Option<&'static str>,
    pub video_guide_id: Option<&'static str>,
    pub features: Option<&'static [Feature]>,
}

/// Severity/kind of an announcement, used only for title coloring
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnnouncementKind {
    Warning,
    Success,
    Info,
}

/// One entry of the announcement feed. Content is rendered verbatim and may
/// contain newline-delimited bullet lines.
#[derive(Clone, PartialEq, Debug)]
pub struct Announcement {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub content: &'static str,
    pub kind: AnnouncementKind,
}

/// Configuration errors caught while building the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateProductId(String),

    #[error("product {id}: field '{field}' must not be empty")]
    EmptyProductField { id: String, field: &'static str },

    #[error("product {id}: feature at index {index} has an empty name")]
    EmptyFeatureName { id: String, index: usize },

    #[error("duplicate announcement id: {0}")]
    DuplicateAnnouncementId(String),

    #[error("announcement {id}: field '{field}' must not be empty")]
    EmptyAnnouncementField { id: String, field: &'static str },
}

/// The immutable catalog consumed by the GUI
pub struct Catalog {
    pub products: Vec<Product>,
    pub announcements: Vec<Announcement>,
}

impl Catalog {
    /// Build the built-in catalog and validate it. A validation failure is a
    /// configuration error and aborts startup.
    pub fn load() -> Result<Catalog, CatalogError> {
        let catalog = Catalog {
            products: builtin_products(),
            announcements: builtin_announcements(),
        };
        catalog.validate()?;
        crate::info!(
            "Catalog loaded: {} products, {} announcements",
            catalog.products.len(),
            catalog.announcements.len()
        );
        Ok(catalog)
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = Vec::new();
        for product in &self.products {
            if seen.contains(&product.id) {
                return Err(CatalogError::DuplicateProductId(product.id.to_string()));
            }
            seen.push(product.id);

            for (field, value) in [
                ("id", product.id),
                ("name", product.name),
                ("category", product.category),
                ("version", product.version),
                ("last_updated", product.last_updated),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::EmptyProductField {
                        id: product.id.to_string(),
                        field,
                    });
                }
            }

            if let Some(features) = product.features {
                for (index, feature) in features.iter().enumerate() {
                    if feature.name.trim().is_empty() {
                        return Err(CatalogError::EmptyFeatureName {
                            id: product.id.to_string(),
                            index,
                        });
                    }
                }
            }
        }

        let mut seen = Vec::new();
        for announcement in &self.announcements {
            if seen.contains(&announcement.id) {
                return Err(CatalogError::DuplicateAnnouncementId(
                    announcement.id.to_string(),
                ));
            }
            seen.push(announcement.id);

            for (field, value) in [
                ("id", announcement.id),
                ("title", announcement.title),
                ("date", announcement.date),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::EmptyAnnouncementField {
                        id: announcement.id.to_string(),
                        field,
                    });
                }
            }
        }

        Ok(())
    }
}

static MAIN_PANEL_FEATURES: &[Feature] = &[
    Feature { name: "Aim Sight", status: Some(FeatureStatus::Safe) },
    Feature { name: "Aim Rage", status: Some(FeatureStatus::Unsafe) },
    Feature { name: "Aim Silent", status: Some(FeatureStatus::Unsafe) },
    Feature { name: "Aim External", status: Some(FeatureStatus::Safe) },
    Feature { name: "Avoid Fallen", status: Some(FeatureStatus::Safe) },
    Feature { name: "Draw Fov", status: Some(FeatureStatus::Safe) },
    Feature { name: "Mouse Assist", status: Some(FeatureStatus::Safe) },
    Feature { name: "All Esp", status: Some(FeatureStatus::Safe) },
    Feature { name: "All Chams", status: Some(FeatureStatus::Safe) },
    Feature { name: "Steady Aim", status: Some(FeatureStatus::Safe) },
    Feature { name: "Infinite Ammo", status: Some(FeatureStatus::Risk) },
    Feature { name: "Camera Hack", status: Some(FeatureStatus::Risk) },
    Feature { name: "Aim Lock", status: Some(FeatureStatus::Risk) },
    Feature { name: "Fast Switch", status: Some(FeatureStatus::Risk) },
    Feature { name: "Ultimate Fire", status: Some(FeatureStatus::Unsafe) },
    Feature { name: "Wall Vision 1", status: Some(FeatureStatus::Unsafe) },
    Feature { name: "Wall Vision 2", status: Some(FeatureStatus::Unsafe) },
    Feature { name: "Fly To Roof", status: Some(FeatureStatus::Unsafe) },
    Feature { name: "Standard Speed", status: Some(FeatureStatus::Unsafe) },
    Feature { name: "Hyper Speed", status: Some(FeatureStatus::Unsafe) },
    Feature { name: "Front Player", status: Some(FeatureStatus::Safe) },
    Feature { name: "Side Player", status: Some(FeatureStatus::Safe) },
    Feature { name: "Enemy Pull", status: Some(FeatureStatus::Risk) },
    Feature { name: "Teleport To Spawn", status: Some(FeatureStatus::Safe) },
    Feature { name: "Teleport To Car", status: Some(FeatureStatus::Safe) },
    Feature { name: "Up Player", status: Some(FeatureStatus::Safe) },
    Feature { name: "Down Player", status: Some(FeatureStatus::Safe) },
];

fn builtin_products() -> Vec<Product> {
    vec![Product {
        id: "main_panel",
        name: "MODSTATUS INTERNAL PANEL",
        category: "Panel",
        status: ProductStatus::Undetected,
        version: "v2.4.0",
        last_updated: "1 hour ago",
        description: Some(
            "The comprehensive internal solution. If you face Error 153, \
             please check the requirements file and run as admin.",
        ),
        download_url: Some("https://example.com/releases/panel-v2.4.0.rar"),
        requirement_url: Some("https://example.com/releases/requirements.zip"),
        recommended_emulator_url: Some("https://example.com/emulator/recommended.exe"),
        clean_emulator_url: Some("https://example.com/emulator/clean.zip"),
        video_guide_id: Some("KgGXx_bcuHM?start=69"),
        features: Some(MAIN_PANEL_FEATURES),
    }]
}

fn builtin_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "ann_error_153_fix",
            title: "⚠ Fix for Error 153",
            date: "15 Nov 2025",
            content: "• Download and install all \"Requirement file\" drivers\n\
                      • Turn off Antivirus / Windows Defender\n\
                      • Right click and \"Run as Administrator\"",
            kind: AnnouncementKind::Warning,
        },
        Announcement {
            id: "ann_update_1",
            title: "🚀 Update — 14 Nov 2025",
            date: "14 Nov 2025",
            content: "• Added Enemy Pull (Risk Status)\n\
                      • Added Fast Switch\n\
                      • Added Hyper Speed\n\
                      • Added Camera Hack\n\
                      • Updated For OB51",
            kind: AnnouncementKind::Success,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::load().expect("built-in catalog must validate");
        assert!(!catalog.products.is_empty());
        assert!(!catalog.announcements.is_empty());
    }

    #[test]
    fn status_style_lookup_is_total() {
        for status in ProductStatus::ALL {
            let style = status.style();
            assert!(!style.label.is_empty(), "{:?} has no label", status);
            assert!(!style.icon.is_empty(), "{:?} has no icon", status);
        }
    }

    #[test]
    fn status_labels_are_distinct() {
        let labels: Vec<_> = ProductStatus::ALL.iter().map(|s| s.style().label).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label), "duplicate label {}", label);
        }
    }

    #[test]
    fn indicator_classification_covers_fallback() {
        assert_eq!(
            Indicator::for_status(Some(FeatureStatus::Safe)),
            Indicator::Affirmative
        );
        assert_eq!(
            Indicator::for_status(Some(FeatureStatus::Unsafe)),
            Indicator::Negative
        );
        assert_eq!(
            Indicator::for_status(Some(FeatureStatus::Risk)),
            Indicator::Cautionary
        );
        assert_eq!(Indicator::for_status(None), Indicator::Neutral);
    }

    #[test]
    fn main_panel_has_full_feature_list() {
        let catalog = Catalog::load().unwrap();
        let panel = catalog.product("main_panel").expect("main_panel exists");
        assert_eq!(panel.features.map(|f| f.len()), Some(27));
    }

    #[test]
    fn duplicate_product_ids_are_rejected() {
        let mut products = builtin_products();
        products.push(products[0].clone());
        let catalog = Catalog {
            products,
            announcements: Vec::new(),
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateProductId(_))
        ));
    }

    #[test]
    fn empty_display_strings_are_rejected() {
        let mut products = builtin_products();
        products[0].version = "  ";
        let catalog = Catalog {
            products,
            announcements: Vec::new(),
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptyProductField { field: "version", .. })
        ));
    }

    #[test]
    fn empty_feature_names_are_rejected() {
        static BAD: &[Feature] = &[Feature { name: "", status: None }];
        let mut products = builtin_products();
        products[0].features = Some(BAD);
        let catalog = Catalog {
            products,
            announcements: Vec::new(),
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptyFeatureName { index: 0, .. })
        ));
    }
}
