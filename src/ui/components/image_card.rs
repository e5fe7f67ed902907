//! Planned instance card; clicking the card removes it from the plan

use egui::{Color32, Response, Ui};

use crate::core::AllocatedInstance;
use crate::ui::theme::{Icons, Palette};

use super::spec_row::SpecRow;
use super::type_badge::TypeBadge;

pub const CARD_WIDTH: f32 = 400.0;
const ICON_SIZE: f32 = 144.0;

pub struct ImageCard;

impl ImageCard {
    /// Square icon area on the left of the card
    fn icon(ui: &mut Ui, palette: &Palette, instance: &AllocatedInstance) {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE), egui::Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter();
        painter.rect_filled(
            rect,
            egui::Rounding {
                nw: 16.0,
                ne: 0.0,
                sw: 16.0,
                se: 0.0,
            },
            palette.bg_icon,
        );

        match Icons::for_image(&instance.id) {
            Some(glyph) => {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    glyph,
                    egui::FontId::proportional(64.0),
                    Color32::from_rgb(51, 65, 85),
                );
            }
            None => {
                painter.text(
                    rect.center() - egui::vec2(0.0, 10.0),
                    egui::Align2::CENTER_CENTER,
                    Icons::BOX,
                    egui::FontId::proportional(36.0),
                    Color32::from_rgb(148, 163, 184),
                );
                painter.text(
                    rect.center() + egui::vec2(0.0, 24.0),
                    egui::Align2::CENTER_CENTER,
                    "No Icon",
                    egui::FontId::proportional(11.0),
                    Color32::from_rgb(100, 116, 139),
                );
            }
        }
    }

    /// Render a planned instance as a clickable card
    pub fn show(ui: &mut Ui, palette: &Palette, instance: &AllocatedInstance) -> Response {
        let frame = egui::Frame::none()
            .fill(palette.bg_card)
            .rounding(egui::Rounding::same(16.0))
            .stroke(egui::Stroke::new(1.0, palette.border))
            .shadow(egui::Shadow {
                offset: egui::vec2(0.0, 4.0),
                blur: 12.0,
                spread: 0.0,
                color: Color32::from_black_alpha(25),
            });

        let inner = frame.show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                Self::icon(ui, palette, instance);

                egui::Frame::none()
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.set_width(CARD_WIDTH - ICON_SIZE - 32.0);
                        ui.spacing_mut().item_spacing.x = 8.0;
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&instance.name)
                                    .size(15.0)
                                    .strong()
                                    .color(palette.text_primary),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    TypeBadge::show(ui, &instance.image_type);
                                },
                            );
                        });
                        ui.add_space(12.0);
                        SpecRow::show(ui, palette, "CPU", &instance.cpu_string());
                        SpecRow::show(ui, palette, "RAM", &instance.ram_string());
                        SpecRow::show(ui, palette, "Disk", &instance.disk_string());
                    });
            });
        });

        let response = inner.response.interact(egui::Sense::click());
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        response.on_hover_text("Click to remove")
    }
}
