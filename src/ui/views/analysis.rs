use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, ScrollArea, Spinner};

pub fn ui_analysis(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 460.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            if app.is_analyzing {
                ui.heading("Gemini 正在回顧你們的點點滴滴...");
                ui.add_space(30.0);
                ui.add(Spinner::new().size(32.0));
                return;
            }

            ui.heading("Gemini 的友誼鑑定書");
            ui.add_space(12.0);
            ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                ui.label(RichText::new(app.ai_analysis.as_deref().unwrap_or_default()).size(16.0));
            });
            ui.add_space(16.0);

            let btn_w = ui.available_width().min(400.0);
            if big_button(ui, "重回考卷首頁", btn_w, 44.0, true) {
                app.reset();
            }
        });
    });
}
