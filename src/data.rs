// src/data.rs

use crate::model::QuizItem;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("no se pudo parsear el banco de preguntas: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("el banco de preguntas está vacío")]
    Empty,
    #[error("la pregunta {id} apunta a la opción {correct} pero solo tiene {options}")]
    CorrectOutOfRange {
        id: u32,
        correct: usize,
        options: usize,
    },
    #[error("id de pregunta duplicado: {0}")]
    DuplicateId(u32),
}

/// Parsea y valida un banco de preguntas en YAML.
pub fn parse_questions(yaml: &str) -> Result<Vec<QuizItem>, BankError> {
    let items: Vec<QuizItem> = serde_yaml::from_str(yaml)?;
    if items.is_empty() {
        return Err(BankError::Empty);
    }

    let mut seen = HashSet::new();
    for item in &items {
        if item.correct >= item.options.len() {
            return Err(BankError::CorrectOutOfRange {
                id: item.id,
                correct: item.correct,
                options: item.options.len(),
            });
        }
        if !seen.insert(item.id) {
            return Err(BankError::DuplicateId(item.id));
        }
    }

    Ok(items)
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Vec<QuizItem> {
    let file_content = include_str!("data/questions.yaml");
    parse_questions(file_content).expect("El banco de preguntas embebido no es válido")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_has_twenty_valid_items() {
        let items = read_questions_embedded();
        assert_eq!(items.len(), 20);
        assert!(items.iter().all(|q| q.correct < q.options.len()));
        assert!(items.iter().all(|q| !q.explanation.trim().is_empty()));
    }

    #[test]
    fn out_of_range_correct_index_is_rejected() {
        let yaml = r#"
- id: 1
  year: "2022"
  question: "?"
  options: ["a", "b"]
  correct: 2
  explanation: "x"
"#;
        let err = parse_questions(yaml).unwrap_err();
        assert!(matches!(
            err,
            BankError::CorrectOutOfRange { id: 1, correct: 2, options: 2 }
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let yaml = r#"
- { id: 7, year: "2023", question: "a", options: ["x"], correct: 0, explanation: "e" }
- { id: 7, year: "2024", question: "b", options: ["y"], correct: 0, explanation: "e" }
"#;
        assert!(matches!(parse_questions(yaml), Err(BankError::DuplicateId(7))));
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert!(matches!(parse_questions("[]"), Err(BankError::Empty)));
    }
}
