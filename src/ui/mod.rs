mod fonts;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::{Preferences, QuizApp};
use crate::config::AppConfig;
use crate::model::AppStep;
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::Context;
use layout::{apply_theme, bottom_panel, top_panel};
use std::time::Duration;

impl QuizApp {
    /// Punto de entrada desde eframe: fuentes, preferencias guardadas y tema.
    pub fn from_creation_context(cc: &CreationContext<'_>, config: &AppConfig) -> Self {
        fonts::install_cjk_fonts(&cc.egui_ctx);

        let mut app = QuizApp::new(config);
        if let Some(prefs) = cc
            .storage
            .and_then(|storage| get_value::<Preferences>(storage, APP_KEY))
        {
            app.preferences = prefs;
        }
        apply_theme(&cc.egui_ctx, app.preferences.dark_mode);
        app
    }
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_analysis();
        if self.is_analyzing {
            // El hilo no despierta a egui; hay que seguir pintando
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // BOTÓN DEL CANDADO (solo en la portada)
        if self.state.current_step == AppStep::Intro {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Dispatch por paso
        match self.state.current_step {
            AppStep::Intro => views::intro::ui_intro(self, ctx),
            AppStep::Quiz => views::quiz::ui_quiz(self, ctx),
            AppStep::Result => views::result::ui_result(self, ctx),
            AppStep::Analysis => views::analysis::ui_analysis(self, ctx),
            AppStep::AdminLogin => views::admin_login::ui_admin_login(self, ctx),
            AppStep::AdminDashboard => views::admin_dashboard::ui_admin_dashboard(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.preferences);
    }
}
