use crate::QuizApp;
use crate::ui::layout::simple_panel;
use egui::{Button, Color32, Context, Grid, RichText, ScrollArea};

pub fn ui_admin_dashboard(app: &mut QuizApp, ctx: &Context) {
    let stats = app.dashboard_stats();

    simple_panel(ctx, 700.0, egui::Margin::symmetric(24, 20), |ui| {
        ui.horizontal(|ui| {
            ui.heading("測驗紀錄後台");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("返回主頁").clicked() {
                    app.reset();
                }
            });
        });
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label(format!("測驗次數：{}", stats.attempts));
            ui.add_space(20.0);
            ui.label(format!("平均分數：{}", stats.average_points));
        });
        ui.separator();

        if app.records.records().is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("目前尚無測驗紀錄").weak());
            });
            return;
        }

        // Borrar fuera del bucle para no mutar mientras se itera
        let mut to_delete: Option<String> = None;

        ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
            Grid::new("records_grid")
                .striped(true)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("時間").strong());
                    ui.label(RichText::new("稱號").strong());
                    ui.label(RichText::new("成績").strong());
                    ui.label("");
                    ui.end_row();

                    for record in app.records.records() {
                        ui.label(&record.timestamp);
                        ui.label(&record.rank_title);
                        ui.label(format!(
                            "Correct: {}/{}",
                            record.score, record.total_questions
                        ));
                        let delete = Button::new(RichText::new("刪除").color(Color32::WHITE))
                            .fill(Color32::DARK_RED);
                        if ui.add(delete).clicked() {
                            to_delete = Some(record.id.clone());
                        }
                        ui.end_row();
                    }
                });
        });

        if let Some(id) = to_delete {
            app.delete_record(&id);
        }
    });
}
