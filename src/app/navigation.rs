use super::*;

impl QuizApp {
    /// intro → quiz, empezando siempre desde la primera pregunta.
    pub fn start(&mut self) {
        if self.state.current_step != AppStep::Intro {
            log::debug!("start() ignorado en {:?}", self.state.current_step);
            return;
        }
        self.state = QuizState {
            current_step: AppStep::Quiz,
            ..QuizState::default()
        };
    }

    /// intro → admin-login (botón del candado).
    pub fn open_admin_login(&mut self) {
        if self.state.current_step != AppStep::Intro {
            log::debug!("open_admin_login() ignorado en {:?}", self.state.current_step);
            return;
        }
        self.state.current_step = AppStep::AdminLogin;
    }
}
