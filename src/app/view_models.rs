// src/app/view_models.rs
use super::*;
use crate::rank::Rank;

/// Cómo se pinta cada opción de la pregunta actual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStyle {
    Neutral, // aún sin responder
    Correct,
    Wrong,
    Dimmed,
}

#[derive(Clone, Debug)]
pub struct ResultView {
    pub score: usize,
    pub total: usize,
    pub points: u32,
    pub rank: Rank,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub attempts: usize,
    pub average_points: u32,
}

impl QuizApp {
    pub fn option_style(&self, idx: usize) -> OptionStyle {
        if !self.state.show_explanation {
            return OptionStyle::Neutral;
        }
        let correct = self.current_question().map(|q| q.correct);
        if correct == Some(idx) {
            OptionStyle::Correct
        } else if self.state.selected_option == Some(idx) {
            OptionStyle::Wrong
        } else {
            OptionStyle::Dimmed
        }
    }

    /// ¿La opción elegida en la pregunta actual era la buena?
    pub fn answered_correctly(&self) -> Option<bool> {
        let selected = self.state.selected_option?;
        self.current_question().map(|q| q.is_correct(selected))
    }

    pub fn result_view(&self) -> ResultView {
        ResultView {
            score: self.state.score,
            total: self.total_questions(),
            points: self.current_points(),
            rank: self.current_rank(),
        }
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            attempts: self.records.records().len(),
            average_points: self.average_points(),
        }
    }
}
