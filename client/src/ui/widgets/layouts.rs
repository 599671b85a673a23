//! # Layout Components
//!
//! Reusable layout patterns for consistent screen organization

use egui;

/// Render a grouped panel with optional heading
pub fn render_panel<F>(ui: &mut egui::Ui, heading: Option<&str>, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.group(|ui| {
        if let Some(heading_text) = heading {
            ui.heading(heading_text);
            ui.add_space(10.0);
        }
        content(ui);
    });
}
