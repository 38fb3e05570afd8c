use egui::{Color32, CornerRadius, Stroke, Visuals};

// Figure colors
pub const PLOT_BLUE: Color32 = Color32::from_rgb(31, 119, 180);
pub const BANNER_RED: Color32 = Color32::from_rgb(255, 0, 0);
pub const READOUT_WHITE: Color32 = Color32::WHITE;
pub const READOUT_DARK: Color32 = Color32::from_rgb(20, 20, 20);

/// Readout color that stays legible on the current plot background.
pub fn readout_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        READOUT_WHITE
    } else {
        READOUT_DARK
    }
}

pub fn setup_custom_style(ctx: &egui::Context, dark_mode: bool) {
    log::debug!("Applying {} theme", if dark_mode { "dark" } else { "light" });
    let mut visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    if dark_mode {
        let bg_color = Color32::from_rgb(12, 14, 20);
        let panel_color = Color32::from_rgb(20, 24, 31);
        let text_color = Color32::from_rgb(232, 236, 241);

        visuals.window_fill = bg_color;
        visuals.panel_fill = panel_color;
        visuals.extreme_bg_color = bg_color; // plot background
        visuals.override_text_color = Some(text_color);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.inactive.bg_fill = Color32::from_rgb(36, 41, 50);
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 57, 68);
        visuals.widgets.active.bg_fill = PLOT_BLUE;
        visuals.selection.bg_fill = PLOT_BLUE;
    } else {
        visuals.panel_fill = Color32::from_rgb(248, 249, 250);
        visuals.extreme_bg_color = Color32::WHITE;
        visuals.widgets.inactive.bg_fill = Color32::from_rgb(232, 235, 239);
        visuals.widgets.active.bg_fill = PLOT_BLUE;
        visuals.selection.bg_fill = PLOT_BLUE;
    }

    visuals.widgets.inactive.corner_radius = CornerRadius::same(4);
    visuals.widgets.hovered.corner_radius = CornerRadius::same(4);
    visuals.widgets.active.corner_radius = CornerRadius::same(4);

    ctx.set_visuals(visuals);
}
