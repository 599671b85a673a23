//! # Chat Screen
//!
//! The main (and only) screen: scrollable message history, a thinking
//! indicator while a request is in flight, and the input row.
//!
//! ## Interaction Flow
//!
//! ```text
//! TextEdit + Enter ──┐
//!                    ├──> App::handle_send_click()
//! Send button ───────┘
//! ```
//!
//! Rendering takes a snapshot of the message list under a short read lock
//! so the async task layer is never blocked behind the frame.

use egui;

use crate::app::{App, ChatMessage};
use crate::ui::theme::Theme;
use crate::ui::widgets::{bubbles, layouts};

/// Height reserved below the scroll area for the input row.
const INPUT_ROW_HEIGHT: f32 = 90.0;

/// Render the chat screen.
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();

    // Snapshot under a short read lock, then render lock-free
    let (messages, loading): (Vec<ChatMessage>, bool) = {
        let state = app.state.read();
        (state.chat.messages.clone(), state.chat.loading)
    };

    ui.heading("Greenstein AI");
    ui.separator();

    let history_height = (ui.available_height() - INPUT_ROW_HEIGHT).max(0.0);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .max_height(history_height)
        .show(ui, |ui| {
            if messages.is_empty() {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("Ask me anything to get started.").color(theme.dim),
                );
            }
            for message in &messages {
                bubbles::message_bubble(ui, &theme, message);
            }
            if loading {
                ui.label(egui::RichText::new("Thinking...").color(theme.dim).italics());
            }
        });

    ui.separator();
    render_input_row(ui, app, &theme, loading);
}

/// Input row: single-line text edit plus the send button.
fn render_input_row(ui: &mut egui::Ui, app: &mut App, theme: &Theme, loading: bool) {
    let mut should_send = false;

    layouts::render_panel(ui, None, |ui| {
        ui.horizontal(|ui| {
            let edit_width = ui.available_width() - 90.0;

            // Write lock only for the duration of the TextEdit widget
            let response = {
                let mut state = app.state.write();
                ui.add_enabled(
                    !loading,
                    egui::TextEdit::singleline(&mut state.chat.message_input)
                        .desired_width(edit_width)
                        .hint_text("Type your message..."),
                )
            };

            let submitted =
                response.lost_focus() && ui.ctx().input(|i| i.key_pressed(egui::Key::Enter));

            let button_label = if loading { "Sending..." } else { "Send" };
            let clicked = ui
                .add_enabled(
                    !loading,
                    egui::Button::new(egui::RichText::new(button_label).color(theme.text)),
                )
                .clicked();

            if submitted || clicked {
                should_send = true;
                // Keep the keyboard in the input after an Enter submit
                response.request_focus();
            }
        });
    });

    if should_send {
        app.handle_send_click();
    }
}
