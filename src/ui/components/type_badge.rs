//! Image type badge component

use egui::{Color32, Response, Rounding, Ui, Vec2};

use crate::core::ImageType;
use crate::ui::theme::Theme;

pub struct TypeBadge;

impl TypeBadge {
    /// Render a filled badge with the image type, e.g. "LXC"
    pub fn show(ui: &mut Ui, image_type: &ImageType) -> Response {
        let color = Theme::type_color(image_type);
        let font = egui::FontId::proportional(13.0);
        let galley =
            ui.painter()
                .layout_no_wrap(image_type.to_string(), font.clone(), Color32::WHITE);
        let size = Vec2::new(galley.size().x + 24.0, 26.0);

        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, Rounding::same(8.0), color);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                image_type.as_str(),
                font,
                Color32::WHITE,
            );
        }

        if image_type.is_known() {
            response
        } else {
            response.on_hover_text("Unknown image type")
        }
    }
}
