//! Theme and styling for the UI

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

use crate::core::settings::Theme as ThemeMode;
use crate::core::ImageType;

/// Colors for one theme mode
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_card: Color32,
    pub bg_tertiary: Color32,
    pub bg_icon: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        bg_primary: Color32::from_rgb(248, 250, 252), // Slate-50
        bg_card: Color32::WHITE,
        bg_tertiary: Color32::from_rgb(241, 245, 249), // Slate-100
        bg_icon: Color32::from_rgb(226, 232, 240),     // Slate-200
        border: Color32::from_rgb(226, 232, 240),      // Slate-200
        text_primary: Color32::from_rgb(15, 23, 42),   // Slate-900
        text_secondary: Color32::from_rgb(71, 85, 105), // Slate-600
        text_muted: Color32::from_rgb(148, 163, 184),  // Slate-400
        accent: Color32::from_rgb(194, 65, 12),        // Orange-700
    };

    pub const DARK: Palette = Palette {
        bg_primary: Color32::from_rgb(15, 23, 42), // Slate-900
        bg_card: Color32::from_rgb(15, 23, 42),
        bg_tertiary: Color32::from_rgb(30, 41, 59), // Slate-800
        bg_icon: Color32::from_rgb(226, 232, 240),
        border: Color32::from_rgb(51, 65, 85),        // Slate-700
        text_primary: Color32::WHITE,
        text_secondary: Color32::from_rgb(148, 163, 184), // Slate-400
        text_muted: Color32::from_rgb(71, 85, 105),       // Slate-600
        accent: Color32::from_rgb(249, 115, 22),          // Orange-500
    };

    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &Self::LIGHT,
            ThemeMode::Dark => &Self::DARK,
        }
    }
}

/// Application styling
pub struct Theme;

impl Theme {
    // Image type badges
    pub const TYPE_LXC: Color32 = Color32::from_rgb(34, 197, 94); // Green-500
    pub const TYPE_VM: Color32 = Color32::from_rgb(251, 191, 36); // Amber-400
    pub const TYPE_OTHER: Color32 = Color32::from_rgb(107, 114, 128); // Gray-500

    // Notifications
    pub const SUCCESS: Color32 = Color32::from_rgb(16, 185, 129);
    pub const ERROR: Color32 = Color32::from_rgb(244, 63, 94);

    /// Apply a theme mode to egui
    pub fn apply(ctx: &egui::Context, mode: ThemeMode) {
        let palette = Palette::for_mode(mode);
        let mut style = (*ctx.style()).clone();

        let mut visuals = match mode {
            ThemeMode::Light => Visuals::light(),
            ThemeMode::Dark => Visuals::dark(),
        };

        visuals.panel_fill = palette.bg_primary;
        visuals.window_fill = palette.bg_card;
        visuals.extreme_bg_color = palette.bg_card;
        visuals.faint_bg_color = palette.bg_tertiary;

        visuals.widgets.noninteractive.bg_fill = palette.bg_card;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, palette.border);
        visuals.widgets.noninteractive.rounding = Rounding::same(8.0);

        // Form controls at rest
        visuals.widgets.inactive.bg_fill = palette.bg_card;
        visuals.widgets.inactive.weak_bg_fill = palette.bg_card;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text_primary);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, palette.text_muted);
        visuals.widgets.inactive.rounding = Rounding::same(8.0);

        visuals.widgets.hovered.bg_fill = palette.bg_tertiary;
        visuals.widgets.hovered.weak_bg_fill = palette.bg_tertiary;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text_primary);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.text_primary);
        visuals.widgets.hovered.rounding = Rounding::same(8.0);

        visuals.widgets.active.bg_fill = palette.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, palette.accent);
        visuals.widgets.active.rounding = Rounding::same(8.0);

        visuals.widgets.open.bg_fill = palette.bg_card;
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, palette.text_primary);
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, palette.accent);
        visuals.widgets.open.rounding = Rounding::same(8.0);

        visuals.selection.bg_fill = palette.accent.linear_multiply(0.25);
        visuals.selection.stroke = Stroke::new(1.0, palette.accent);
        visuals.hyperlink_color = palette.accent;

        visuals.window_rounding = Rounding::same(12.0);
        visuals.window_stroke = Stroke::new(0.5, palette.border);
        visuals.menu_rounding = Rounding::same(8.0);

        style.visuals = visuals;

        style.text_styles = [
            (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        ]
        .into();

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.combo_width = 160.0;
        style.spacing.icon_width = 18.0;
        style.spacing.icon_spacing = 6.0;

        ctx.set_style(style);
    }

    /// Badge color for an image type; unknown types fall back to gray
    pub fn type_color(image_type: &ImageType) -> Color32 {
        match image_type {
            ImageType::Lxc => Self::TYPE_LXC,
            ImageType::Vm => Self::TYPE_VM,
            ImageType::Other(_) => Self::TYPE_OTHER,
        }
    }
}

/// Icon characters (using Unicode symbols)
pub struct Icons;

impl Icons {
    pub const SUN: &'static str = "☀";
    pub const MOON: &'static str = "🌙";
    pub const DISC: &'static str = "💿";
    pub const SEARCH: &'static str = "🔍";
    pub const CPU: &'static str = "⚡";
    pub const MEMORY: &'static str = "💾";
    pub const DISK: &'static str = "🖴";
    pub const BOX: &'static str = "📦";
    pub const SUCCESS: &'static str = "✓";
    pub const ERROR: &'static str = "✕";

    pub fn for_resource(resource: crate::core::Resource) -> &'static str {
        use crate::core::Resource;
        match resource {
            Resource::Cpu => Self::CPU,
            Resource::Ram => Self::MEMORY,
            Resource::Disk => Self::DISK,
        }
    }

    /// Decorative glyph for a catalog id, if one is known
    pub fn for_image(id: &str) -> Option<&'static str> {
        let glyph = match id {
            "docker" | "alpinedocker" | "portainer" => "🐳",
            "haos" | "pimoxhaos" | "homeassistantcore" => "🏠",
            "jellyfin" | "plex" | "metube" | "sonarr" | "radarr" => "🎬",
            "adguard" | "pihole" => "🛡",
            "nextcloud" | "owncloud" | "syncthing" => "☁",
            "wireguard" | "tailscale" | "vaultwarden" => "🔒",
            "grafana" | "prometheus" | "influxdb" | "uptimekuma" => "📊",
            "postgresql" | "mariadb" | "redis" => "🗄",
            "immich" | "frigate" => "📷",
            "gitea" => "🌿",
            "ollama" | "openwebui" => "🤖",
            _ => return None,
        };
        Some(glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_colors() {
        assert_eq!(Theme::type_color(&ImageType::Lxc), Theme::TYPE_LXC);
        assert_eq!(Theme::type_color(&ImageType::Vm), Theme::TYPE_VM);
        assert_eq!(
            Theme::type_color(&ImageType::Other("OCI".into())),
            Theme::TYPE_OTHER
        );
    }

    #[test]
    fn test_image_glyph_fallback() {
        assert_eq!(Icons::for_image("docker"), Some("🐳"));
        assert_eq!(Icons::for_image("unknown-image"), None);
    }

    #[test]
    fn test_palette_for_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light).accent, Palette::LIGHT.accent);
        assert_eq!(Palette::for_mode(ThemeMode::Dark).accent, Palette::DARK.accent);
        assert_eq!(
            Palette::for_mode(ThemeMode::Light.toggled()).bg_primary,
            Palette::DARK.bg_primary
        );
    }
}
