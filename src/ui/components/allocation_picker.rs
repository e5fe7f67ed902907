//! Drop-down picker for one resource's allocation choices

use egui::Ui;

use crate::core::Resource;
use crate::ui::theme::{Icons, Palette};

pub struct AllocationPicker;

impl AllocationPicker {
    /// Show the picker; returns the value the user clicked, if any
    pub fn show(ui: &mut Ui, palette: &Palette, resource: Resource, current: u32) -> Option<u32> {
        let mut picked = None;

        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(resource.label())
                    .size(12.0)
                    .color(palette.text_muted),
            );
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(Icons::for_resource(resource))
                        .size(16.0)
                        .color(palette.text_muted),
                );
                egui::ComboBox::from_id_salt(("allocation", resource))
                    .width(ui.available_width())
                    .selected_text(resource.format(current))
                    .show_ui(ui, |ui| {
                        for &value in resource.choices() {
                            if ui
                                .selectable_label(value == current, resource.format(value))
                                .clicked()
                            {
                                picked = Some(value);
                            }
                        }
                    });
            });
        });

        picked
    }
}
