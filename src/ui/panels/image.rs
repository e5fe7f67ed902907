//! Image panel - Search, allocation pickers, Add button and totals

use std::sync::Arc;

use egui::{Color32, Ui};

use crate::core::{AppState, Resource};
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::components::AllocationPicker;
use crate::ui::theme::{Icons, Palette};

/// Typeahead search over catalog labels
fn render_search(
    ui: &mut Ui,
    palette: &Palette,
    state: &mut AppState,
    search_query: &mut String,
    notifications: &mut Vec<Notification>,
) {
    egui::Frame::none()
        .fill(palette.bg_card)
        .rounding(egui::Rounding::same(12.0))
        .stroke(egui::Stroke::new(1.0, palette.text_muted))
        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(Icons::SEARCH)
                        .size(16.0)
                        .color(palette.text_muted),
                );
                let response = ui.add(
                    egui::TextEdit::singleline(&mut *search_query)
                        .hint_text("Search LXC or VM")
                        .desired_width(f32::INFINITY)
                        .frame(false),
                );

                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    let key = search_query.clone();
                    if let Err(e) = state.choose(&key) {
                        notifications.push(Notification::new(e.to_string(), NotificationLevel::Error));
                    }
                }
            });
        });

    // Suggestions only while the text differs from the chosen image
    if search_query.trim().is_empty() || *search_query == state.selection().search_key() {
        return;
    }

    let catalog = Arc::clone(&state.catalog);
    let suggestions = catalog.suggest(search_query, state.settings.max_suggestions);

    ui.add_space(4.0);
    egui::Frame::none()
        .fill(palette.bg_card)
        .rounding(egui::Rounding::same(8.0))
        .stroke(egui::Stroke::new(1.0, palette.border))
        .inner_margin(egui::Margin::same(6.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if suggestions.is_empty() {
                ui.label(egui::RichText::new("No options").color(palette.text_muted));
                return;
            }
            for label in suggestions {
                if ui
                    .selectable_label(false, egui::RichText::new(label).color(palette.text_primary))
                    .clicked()
                {
                    match state.choose(label) {
                        Ok(()) => *search_query = label.to_string(),
                        Err(e) => notifications
                            .push(Notification::new(e.to_string(), NotificationLevel::Error)),
                    }
                }
            }
        });
}

pub fn render(
    ui: &mut Ui,
    palette: &Palette,
    state: &mut AppState,
    search_query: &mut String,
    notifications: &mut Vec<Notification>,
) {
    egui::Frame::none()
        .fill(palette.bg_card)
        .rounding(egui::Rounding::same(16.0))
        .stroke(egui::Stroke::new(1.0, palette.border))
        .inner_margin(egui::Margin::same(24.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            // Header
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(Icons::DISC).size(18.0).color(palette.accent));
                ui.label(
                    egui::RichText::new("Image")
                        .size(20.0)
                        .strong()
                        .color(palette.text_primary),
                );
            });
            ui.add_space(24.0);

            render_search(ui, palette, state, search_query, notifications);

            ui.add_space(20.0);

            // Allocation pickers
            ui.columns(3, |columns| {
                for (ui, &resource) in columns.iter_mut().zip(Resource::all()) {
                    let current = state.selection().get(resource);
                    if let Some(value) = AllocationPicker::show(ui, palette, resource, current) {
                        if let Err(e) = state.set_allocation(resource, value) {
                            notifications
                                .push(Notification::new(e.to_string(), NotificationLevel::Error));
                        }
                    }
                }
            });

            ui.add_space(20.0);

            // Add button
            let can_add = state.can_add_from(search_query);
            let add_btn = egui::Button::new(
                egui::RichText::new("Add").strong().color(Color32::WHITE),
            )
            .fill(if can_add {
                palette.accent
            } else {
                palette.text_muted.linear_multiply(0.5)
            })
            .rounding(egui::Rounding::same(12.0))
            .min_size(egui::vec2(ui.available_width(), 40.0));

            if ui
                .add_enabled(can_add, add_btn)
                .on_disabled_hover_text("Pick an image from the search first")
                .clicked()
            {
                match state.add_selected() {
                    Ok(instance) => {
                        search_query.clear();
                        notifications.push(Notification::new(
                            format!("Added {} {}", instance.name, instance.image_type),
                            NotificationLevel::Success,
                        ));
                    }
                    Err(e) => {
                        notifications.push(Notification::new(e.to_string(), NotificationLevel::Error))
                    }
                }
            }

            ui.add_space(20.0);

            // Divider before totals
            let (rect, _) = ui
                .allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 0.0, palette.border);

            ui.add_space(16.0);

            // Totals line
            let totals = state.totals();
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                let value = |text: String| {
                    egui::RichText::new(text)
                        .size(13.0)
                        .strong()
                        .color(palette.text_primary)
                };
                let unit =
                    |text: &str| egui::RichText::new(text).size(13.0).color(palette.text_secondary);

                ui.label(value(totals.cpu.to_string()));
                ui.label(unit("vCPU,"));
                ui.label(value(format!("{} GB", totals.ram_gb())));
                ui.label(unit("RAM,"));
                ui.label(value(format!("{} GB", totals.disk_gb())));
                ui.label(unit("Disk"));
            });
        });
}
