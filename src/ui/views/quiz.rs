use crate::QuizApp;
use crate::ui::helpers::{big_button, option_button};
use crate::ui::layout::simple_panel;
use egui::{Color32, Context, Frame, ProgressBar, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Copia para no pelear con el préstamo de `app` dentro de los closures
    let Some(question) = app.current_question().cloned() else {
        return;
    };
    let number = app.state.current_index + 1;
    let total = app.total_questions();

    simple_panel(ctx, 650.0, egui::Margin::symmetric(24, 20), |ui| {
        let panel_width = ui.available_width();

        ui.add(ProgressBar::new(app.progress_fraction()).desired_width(panel_width));
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new(&question.year).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("Question {number} / {total}")).weak());
            });
        });
        ui.add_space(8.0);
        ui.label(RichText::new(&question.question).size(20.0).strong());
        ui.add_space(16.0);

        for (idx, option) in question.options.iter().enumerate() {
            let style = app.option_style(idx);
            if option_button(ui, option, panel_width, style) {
                app.select_option(idx);
            }
            ui.add_space(6.0);
        }

        if app.state.show_explanation {
            ui.add_space(10.0);
            let correct = app.answered_correctly().unwrap_or(false);
            let (fill, verdict) = if correct {
                (Color32::from_rgb(210, 245, 230), "完美答對！")
            } else {
                (Color32::from_rgb(252, 220, 225), "哎呀，記錯了...")
            };

            Frame::default()
                .fill(fill)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.set_width(panel_width - 24.0);
                    ui.label(RichText::new(verdict).strong().color(Color32::BLACK));
                    ui.label(RichText::new(&question.explanation).color(Color32::DARK_GRAY));
                });

            ui.add_space(10.0);
            let label = if app.is_last_question() {
                "揭曉總分"
            } else {
                "下一題"
            };
            if big_button(ui, label, panel_width, 44.0, true) {
                app.advance();
            }
        }
    });
}
