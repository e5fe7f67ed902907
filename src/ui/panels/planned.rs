//! Planned instances - Card grid and empty state

use egui::Ui;

use crate::core::AppState;
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::components::ImageCard;
use crate::ui::theme::{Icons, Palette};

fn render_empty(ui: &mut Ui, palette: &Palette) {
    egui::Frame::none()
        .fill(palette.bg_card)
        .rounding(egui::Rounding::same(16.0))
        .stroke(egui::Stroke::new(1.0, palette.border))
        .inner_margin(egui::Margin::same(48.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(Icons::SEARCH).size(32.0).color(palette.text_muted));
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("No images registered")
                        .size(20.0)
                        .strong()
                        .color(palette.text_primary),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(
                        "Find LXC or VM images and adjust the resources allocation.",
                    )
                    .color(palette.text_secondary),
                );
            });
        });
}

pub fn render(
    ui: &mut Ui,
    palette: &Palette,
    state: &mut AppState,
    notifications: &mut Vec<Notification>,
) {
    if state.instance_count() == 0 {
        render_empty(ui, palette);
        return;
    }

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(24.0, 24.0);
        for (index, instance) in state.instances().iter().enumerate() {
            ui.push_id(index, |ui| {
                if ImageCard::show(ui, palette, instance).clicked() {
                    clicked = Some(index);
                }
            });
        }
    });

    // Removal happens after the loop so indices stay valid while rendering
    if let Some(index) = clicked {
        match state.remove_at(index) {
            Ok(removed) => notifications.push(Notification::new(
                format!("Removed {} {}", removed.name, removed.image_type),
                NotificationLevel::Info,
            )),
            Err(e) => notifications.push(Notification::new(e.to_string(), NotificationLevel::Error)),
        }
    }
}
