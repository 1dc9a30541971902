use super::*;
use crate::model::{AnswerRecord, SavedRecord};
use crate::rank::rank_for;
use chrono::Local;

impl QuizApp {
    /// Responde la pregunta actual. Solo cuenta la primera respuesta:
    /// mientras se ve la explicación, más clics no hacen nada.
    pub fn select_option(&mut self, idx: usize) {
        if self.state.current_step != AppStep::Quiz || self.state.show_explanation {
            return;
        }

        let (question_id, is_correct) = match self.current_question() {
            Some(q) if idx < q.options.len() => (q.id, q.is_correct(idx)),
            _ => return,
        };

        let state = &mut self.state;
        state.selected_option = Some(idx);
        if is_correct {
            state.score += 1;
        }
        state.show_explanation = true;
        state.user_answers.push(AnswerRecord {
            question_id,
            is_correct,
        });
    }

    /// Pasa a la siguiente pregunta o, si era la última, guarda el intento
    /// y muestra el resultado.
    pub fn advance(&mut self) {
        if self.state.current_step != AppStep::Quiz || !self.state.show_explanation {
            return;
        }

        if self.state.current_index + 1 < self.total_questions() {
            let state = &mut self.state;
            state.current_index += 1;
            state.selected_option = None;
            state.show_explanation = false;
        } else {
            self.save_record(self.state.score);
            self.state.current_step = AppStep::Result;
        }
    }

    fn save_record(&mut self, final_score: usize) {
        let total = self.total_questions();
        let rank = rank_for(final_score, total);
        let record = SavedRecord::new(final_score, total, rank.title, Local::now());

        // Un fallo al guardar no debe bloquear el resultado
        match self.records.append(record) {
            Ok(id) => log::info!("Intento {id} guardado: {final_score}/{total}"),
            Err(e) => log::error!("No se pudo guardar el intento: {e}"),
        }
    }
}
