//! # GUI Theme
//!
//! Dark theme for the chat window. High contrast, soft panel surfaces, and
//! a blue accent for user-authored bubbles.

use egui::{Color32, Context};

/// Color palette for the chat UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Window background
    pub background: Color32,
    /// Panel / input surfaces
    pub panel: Color32,
    /// Normal text color
    pub text: Color32,
    /// Dimmed/secondary text (hints, thinking indicator)
    pub dim: Color32,
    /// Accent color (user bubbles, selection)
    pub accent: Color32,
    /// Fill for user-authored message bubbles
    pub user_bubble: Color32,
    /// Fill for AI-authored message bubbles
    pub ai_bubble: Color32,
    /// Border color
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(18, 18, 22),
            panel: Color32::from_rgb(28, 28, 34),
            text: Color32::from_rgb(235, 235, 240),
            dim: Color32::from_rgb(140, 140, 150),
            accent: Color32::from_rgb(0, 110, 220),
            user_bubble: Color32::from_rgb(0, 92, 185),
            ai_bubble: Color32::from_rgb(44, 44, 52),
            border: Color32::from_rgb(58, 58, 66),
        }
    }
}

/// Apply the theme to the egui context.
///
/// Called once at startup from the eframe creation closure.
pub fn apply_visuals(ctx: &Context) {
    let theme = Theme::default();

    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.override_text_color = Some(theme.text);
    style.visuals.panel_fill = theme.background;
    style.visuals.window_fill = theme.panel;
    style.visuals.extreme_bg_color = theme.panel;
    style.visuals.selection.bg_fill = theme.accent;
    style.visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, theme.border);
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    ctx.set_style(style);
}
