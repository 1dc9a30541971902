use crate::QuizApp;
use egui::{Align, Button, CentralPanel, Context, Frame, Layout, Ui, Visuals};

pub fn apply_theme(ctx: &Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    });
}

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .button("🔒")
                .on_hover_text("管理員登入")
                .clicked()
            {
                app.open_admin_login();
            }
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 深色模式").clicked() {
                app.preferences.dark_mode = true;
                apply_theme(ctx, true);
            }
            if ui.button("☀ 淺色模式").clicked() {
                app.preferences.dark_mode = false;
                apply_theme(ctx, false);
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

pub fn simple_panel(ctx: &Context, max_width: f32, margin: egui::Margin, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(margin)
                .show(ui, |ui| {
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_sized([btn_w, 40.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 40.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
