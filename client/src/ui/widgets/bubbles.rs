//! # Message Bubbles
//!
//! Renders a chat message as a bubble, visually distinct by sender: user
//! messages right-aligned with the accent fill, AI messages left-aligned
//! with the neutral fill.

use egui;

use crate::app::{ChatMessage, MessageSender};
use crate::ui::theme::Theme;

/// Render a single message bubble.
pub fn message_bubble(ui: &mut egui::Ui, theme: &Theme, message: &ChatMessage) {
    let (align, fill) = match message.sender {
        MessageSender::User => (egui::Align::Max, theme.user_bubble),
        MessageSender::Ai => (egui::Align::Min, theme.ai_bubble),
    };

    // Bubbles take at most 3/4 of the row so alignment stays readable
    let max_width = ui.available_width() * 0.75;

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::default()
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(egui::RichText::new(&message.text).color(theme.text));
            });
    });
    ui.add_space(4.0);
}
