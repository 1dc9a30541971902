use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Color32, Context, Key, RichText, TextEdit};

pub fn ui_admin_login(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 300.0, 420.0, |ui| {
        let width = ui.available_width();

        ui.heading("管理員登入");
        ui.add_space(12.0);
        ui.label(RichText::new("請輸入存取密碼").weak());

        let mut input = app.admin_pass_input.clone();
        let response = ui.add(
            TextEdit::singleline(&mut input)
                .password(true)
                .hint_text("••••")
                .desired_width(width),
        );
        if response.changed() {
            app.set_admin_input(input);
        }
        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        if app.login_error {
            ui.label(
                RichText::new("密碼錯誤，請再試一次")
                    .small()
                    .strong()
                    .color(Color32::from_rgb(225, 60, 80)),
            );
        }
        ui.add_space(12.0);

        let (cancel, login) = two_button_row(ui, width, "取消", "登入後台");
        if cancel {
            app.reset();
        } else if login || enter {
            app.submit_admin_login();
        }
    });
}
