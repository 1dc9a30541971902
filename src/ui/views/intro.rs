use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_intro(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 420.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🎓").size(56.0));
            ui.add_space(12.0);
            ui.label(RichText::new("張詠婷專屬").size(28.0).strong());
            ui.label(
                RichText::new("時光記憶大考驗")
                    .size(28.0)
                    .strong()
                    .color(egui::Color32::from_rgb(90, 90, 230)),
            );
            ui.add_space(16.0);
            ui.label(RichText::new("這份考卷橫跨了 2022 到 2025 年，").size(16.0).weak());
            ui.label(RichText::new("裝載了無數關於「群倫」的細節。").size(16.0).weak());
            ui.label(RichText::new("詠婷，你準備好證明你的友誼了嗎？").size(16.0).weak());
            ui.add_space(24.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            if big_button(ui, "開始考試", btn_w, 48.0, true) {
                app.start();
            }
        });
    });
}
