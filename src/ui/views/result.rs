use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, RichText};

pub fn ui_result(app: &mut QuizApp, ctx: &Context) {
    let view = app.result_view();

    centered_panel(ctx, 420.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(view.rank.icon).size(56.0));
            ui.add_space(8.0);
            ui.label(RichText::new(view.rank.title).size(26.0).strong());
            ui.add_space(8.0);
            ui.label(RichText::new(format!("{} / 100", view.points)).size(40.0).strong());
            ui.add_space(8.0);
            ui.label(format!("在 {} 題中答對了 {} 題。", view.total, view.score));
            ui.label(RichText::new(view.rank.description).weak());
            ui.add_space(20.0);

            let width = ui.available_width().min(420.0);
            let (analyze, again) = two_button_row(ui, width, "✨ Gemini 友誼鑑定", "再測一次");
            if analyze {
                app.request_analysis();
            }
            if again {
                app.reset();
            }
        });
    });
}
