use super::*;
use crate::rank::{Rank, points, rank_for};

impl QuizApp {
    pub fn current_question(&self) -> Option<&QuizItem> {
        self.questions.get(self.state.current_index)
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_index + 1 >= self.total_questions()
    }

    /// Avance de la barra superior: cuenta la pregunta actual en cuanto se responde.
    pub fn progress_fraction(&self) -> f32 {
        let total = self.total_questions();
        if total == 0 {
            return 0.0;
        }
        let answered = self.state.current_index + usize::from(self.state.show_explanation);
        answered as f32 / total as f32
    }

    pub fn current_rank(&self) -> Rank {
        rank_for(self.state.score, self.total_questions())
    }

    pub fn current_points(&self) -> u32 {
        points(self.state.score, self.total_questions())
    }

    /// Media de todos los intentos guardados, sobre 100.
    pub fn average_points(&self) -> u32 {
        let records = self.records.records();
        if records.is_empty() {
            return 0;
        }
        let sum: f64 = records
            .iter()
            .filter(|r| r.total_questions > 0)
            .map(|r| r.score.min(r.total_questions) as f64 * 100.0 / r.total_questions as f64)
            .sum();
        (sum / records.len() as f64).round() as u32
    }
}
