//! Label/value row used on planned instance cards

use egui::Ui;

use crate::ui::theme::Palette;

pub struct SpecRow;

impl SpecRow {
    /// "Label:" on the left, bold value on the right
    pub fn show(ui: &mut Ui, palette: &Palette, label: &str, value: &str) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{}:", label))
                    .size(13.0)
                    .color(palette.text_secondary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(value)
                        .size(13.0)
                        .strong()
                        .color(palette.text_primary),
                );
            });
        });
    }
}
