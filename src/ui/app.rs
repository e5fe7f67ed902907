//! Main application UI

use std::time::{Duration, Instant};

use egui::{CentralPanel, Context, TopBottomPanel};
use tracing::info;

use super::panels;
use super::theme::{Icons, Palette, Theme};
use crate::core::settings::Theme as ThemeMode;
use crate::core::AppState;

/// Community scripts the catalog is built from
const COMMUNITY_SCRIPTS_URL: &str = "https://community-scripts.github.io/ProxmoxVE/";

/// Main application struct
pub struct PlannerApp {
    /// Application state
    state: AppState,
    /// Current theme mode
    theme: ThemeMode,
    /// Text typed in the image search box
    search_query: String,
    /// Notifications queue
    notifications: Vec<Notification>,
    /// First frame flag
    first_frame: bool,
}

/// Notification message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let theme = state.settings.theme;
        Theme::apply(&cc.egui_ctx, theme);

        Self {
            state,
            theme,
            search_query: String::new(),
            notifications: Vec::new(),
            first_frame: true,
        }
    }

    fn palette(&self) -> &'static Palette {
        Palette::for_mode(self.theme)
    }

    /// Clean up old notifications
    fn cleanup_notifications(&mut self) {
        let timeout = Duration::from_secs(4);
        self.notifications
            .retain(|n| n.created_at.elapsed() < timeout);
    }

    /// Render the header with theme toggle and title
    fn render_header(&mut self, ctx: &Context) {
        let palette = self.palette();

        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(palette.bg_card)
                    .stroke(egui::Stroke::new(1.0, palette.border))
                    .inner_margin(egui::Margin::symmetric(32.0, 24.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let icon = match self.theme {
                        ThemeMode::Dark => Icons::SUN,
                        ThemeMode::Light => Icons::MOON,
                    };
                    let toggle = egui::Button::new(
                        egui::RichText::new(icon).size(24.0).color(egui::Color32::WHITE),
                    )
                    .fill(palette.accent)
                    .rounding(egui::Rounding::same(12.0))
                    .min_size(egui::vec2(52.0, 52.0));

                    if ui
                        .add(toggle)
                        .on_hover_text("Toggle dark mode")
                        .clicked()
                    {
                        self.theme = self.theme.toggled();
                        Theme::apply(ctx, self.theme);
                        info!("Switched to {} theme", self.theme.label());
                    }

                    ui.add_space(20.0);

                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new("PVE Planner")
                                .size(32.0)
                                .strong()
                                .color(palette.text_primary),
                        );
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 4.0;
                            ui.label(
                                egui::RichText::new("Proxmox resources calculator using")
                                    .color(palette.text_secondary),
                            );
                            ui.hyperlink_to(
                                egui::RichText::new("community scripts").color(palette.accent),
                                COMMUNITY_SCRIPTS_URL,
                            );
                        });
                    });
                });
            });
    }

    /// Render the image panel and the planned instances
    fn render_main_content(&mut self, ctx: &Context) {
        let palette = self.palette();

        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(palette.bg_primary)
                    .inner_margin(egui::Margin::symmetric(32.0, 32.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    panels::image::render(
                        ui,
                        palette,
                        &mut self.state,
                        &mut self.search_query,
                        &mut self.notifications,
                    );
                    ui.add_space(32.0);
                    panels::planned::render(ui, palette, &mut self.state, &mut self.notifications);
                });
            });
    }

    /// Render notifications
    fn render_notifications(&mut self, ctx: &Context) {
        if self.notifications.is_empty() {
            return;
        }
        let palette = self.palette();

        egui::Area::new(egui::Id::new("notifications"))
            .fixed_pos(egui::pos2(ctx.screen_rect().width() - 340.0, 24.0))
            .show(ctx, |ui| {
                for notification in &self.notifications {
                    let (icon, color) = match notification.level {
                        NotificationLevel::Info => (Icons::BOX, palette.text_secondary),
                        NotificationLevel::Success => (Icons::SUCCESS, Theme::SUCCESS),
                        NotificationLevel::Error => (Icons::ERROR, Theme::ERROR),
                    };

                    egui::Frame::none()
                        .fill(palette.bg_card)
                        .rounding(egui::Rounding::same(10.0))
                        .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.5)))
                        .inner_margin(egui::Margin::same(12.0))
                        .show(ui, |ui| {
                            ui.set_width(300.0);
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(icon).size(14.0).color(color));
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(&notification.message)
                                        .size(13.0)
                                        .color(palette.text_primary),
                                );
                            });
                        });

                    ui.add_space(8.0);
                }
            });
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            self.first_frame = false;
            info!("First frame rendered");
        }

        self.cleanup_notifications();

        if !self.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        self.render_header(ctx);
        self.render_main_content(ctx);
        self.render_notifications(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(
            "Application exiting with {} planned instances ({})",
            self.state.instance_count(),
            self.state.totals().summary()
        );
    }
}
