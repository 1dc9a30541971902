use super::*;

impl QuizApp {
    /// Vuelve a la portada desde cualquier paso y limpia todo lo de la sesión.
    /// Los registros guardados no se tocan.
    pub fn reset(&mut self) {
        self.state = QuizState::default();
        self.ai_analysis = None;
        self.is_analyzing = false;
        self.admin_pass_input.clear();
        self.login_error = false;
        // Cualquier análisis en vuelo queda huérfano
        self.generation = self.generation.wrapping_add(1);
    }
}
