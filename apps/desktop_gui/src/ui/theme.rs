use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};

pub const SETTINGS_STORAGE_KEY: &str = "course_manager.ui_settings";

const MIN_TEXT_SCALE: f32 = 0.8;
const MAX_TEXT_SCALE: f32 = 1.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub dark_mode: bool,
    pub text_scale: f32,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            text_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedUiSettings {
    dark_mode: bool,
    text_scale: f32,
}

impl Default for PersistedUiSettings {
    fn default() -> Self {
        Self::from_runtime(ThemeSettings::default())
    }
}

impl PersistedUiSettings {
    pub fn into_runtime(self) -> ThemeSettings {
        ThemeSettings {
            dark_mode: self.dark_mode,
            text_scale: self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
        }
    }

    pub fn from_runtime(theme: ThemeSettings) -> Self {
        Self {
            dark_mode: theme.dark_mode,
            text_scale: theme.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
        }
    }

    pub fn load(storage: Option<&dyn eframe::Storage>) -> Option<Self> {
        let text = storage?.get_string(SETTINGS_STORAGE_KEY)?;
        match serde_json::from_str::<Self>(&text) {
            Ok(settings) => Some(settings),
            Err(err) => {
                tracing::warn!(%err, "ignoring unreadable ui settings");
                None
            }
        }
    }
}

pub fn text_scale_range() -> std::ops::RangeInclusive<f32> {
    MIN_TEXT_SCALE..=MAX_TEXT_SCALE
}

pub fn visuals_for_theme(theme: ThemeSettings) -> egui::Visuals {
    let mut visuals = if theme.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6);
    visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    visuals
}

pub fn editing_highlight(theme: ThemeSettings) -> egui::Color32 {
    if theme.dark_mode {
        egui::Color32::from_rgb(44, 62, 92)
    } else {
        egui::Color32::from_rgb(214, 228, 250)
    }
}

pub fn notice_fill(theme: ThemeSettings) -> egui::Color32 {
    if theme.dark_mode {
        egui::Color32::from_rgb(111, 53, 53)
    } else {
        egui::Color32::from_rgb(250, 222, 222)
    }
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    use egui::{FontFamily, FontId, TextStyle};

    [
        (TextStyle::Small, FontId::new(10.0 * text_scale, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0 * text_scale, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(14.0 * text_scale, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(20.0 * text_scale, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0 * text_scale, FontFamily::Monospace)),
    ]
    .into()
}
