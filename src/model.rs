use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    pub id: u32,
    pub year: String,     // Etiqueta de año ("2022", "2023"...)
    pub question: String, // Pregunta
    pub options: Vec<String>,
    pub correct: usize, // Índice de la opción correcta
    pub explanation: String,
}

impl QuizItem {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AppStep {
    #[default]
    Intro,
    Quiz,
    Result,
    Analysis,
    AdminLogin,
    AdminDashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: u32,
    pub is_correct: bool,
}

/// Estado de la sesión en curso. Nunca se persiste.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizState {
    pub current_step: AppStep,
    pub current_index: usize,
    pub score: usize,
    pub selected_option: Option<usize>,
    pub show_explanation: bool,
    pub user_answers: Vec<AnswerRecord>,
}

/// Intento terminado, tal y como se guarda en el almacenamiento local.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    pub id: String,
    pub timestamp: String,
    pub score: usize,
    pub total_questions: usize,
    pub rank_title: String,
}

impl SavedRecord {
    pub fn new(score: usize, total_questions: usize, rank_title: &str, now: DateTime<Local>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            timestamp: now.format("%Y/%m/%d %H:%M:%S").to_string(),
            score,
            total_questions,
            rank_title: rank_title.to_string(),
        }
    }
}
