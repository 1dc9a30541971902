use super::*;
use crate::config::ADMIN_PASSWORD;

impl QuizApp {
    /// Cada pulsación borra el aviso de contraseña incorrecta.
    pub fn set_admin_input(&mut self, input: String) {
        self.admin_pass_input = input;
        self.login_error = false;
    }

    /// Igualdad simple contra la contraseña fija. Sin hash ni límite de intentos.
    pub fn attempt_admin_login(&mut self, candidate: &str) {
        if self.state.current_step != AppStep::AdminLogin {
            return;
        }
        if candidate == ADMIN_PASSWORD {
            self.state.current_step = AppStep::AdminDashboard;
            self.login_error = false;
        } else {
            log::info!("Intento de acceso al panel con contraseña incorrecta");
            self.login_error = true;
        }
    }

    /// Lo que dispara Enter o el botón de login.
    pub fn submit_admin_login(&mut self) {
        let candidate = self.admin_pass_input.clone();
        self.attempt_admin_login(&candidate);
    }

    pub fn delete_record(&mut self, id: &str) {
        if self.state.current_step != AppStep::AdminDashboard {
            return;
        }
        if let Err(e) = self.records.remove(id) {
            log::error!("No se pudo borrar el registro {id}: {e}");
        }
    }
}
