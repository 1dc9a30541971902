use crate::analysis::GeminiClient;
#[cfg(not(target_arch = "wasm32"))]
use crate::analysis::TextGenerator;
use crate::config::AppConfig;
use crate::data::read_questions_embedded;
use crate::model::{AppStep, QuizItem, QuizState};
use crate::records::RecordStore;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{Receiver, Sender, channel};
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod admin;
pub mod analysis;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

pub use view_models::{DashboardStats, OptionStyle, ResultView};

/// Preferencias de ventana que sí sobreviven entre ejecuciones (vía eframe).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Resultado de un análisis terminado, etiquetado con la generación de sesión
/// que lo pidió.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub generation: u64,
    pub text: String,
}

pub struct QuizApp {
    pub state: QuizState,
    pub questions: Vec<QuizItem>,
    pub records: RecordStore,
    pub ai_analysis: Option<String>,
    pub is_analyzing: bool,
    pub admin_pass_input: String,
    pub login_error: bool,
    pub preferences: Preferences,
    // Se incrementa en cada reset
    generation: u64,
    analysis_tx: Sender<AnalysisOutcome>,
    analysis_rx: Receiver<AnalysisOutcome>,
    #[cfg(not(target_arch = "wasm32"))]
    generator: Arc<dyn TextGenerator>,
    #[cfg(target_arch = "wasm32")]
    gemini: GeminiClient,
}

impl QuizApp {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: &AppConfig) -> Self {
        use crate::records::FileBlobStore;

        let records = RecordStore::open(FileBlobStore::new(&config.data_dir));
        log::info!(
            "{} registros cargados desde {}",
            records.records().len(),
            config.data_dir.display()
        );
        Self::with_parts(
            read_questions_embedded(),
            records,
            Arc::new(GeminiClient::new(config)),
        )
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(config: &AppConfig) -> Self {
        use crate::records::LocalStorageBlobStore;

        let (analysis_tx, analysis_rx) = channel();
        Self {
            state: QuizState::default(),
            questions: read_questions_embedded(),
            records: RecordStore::open(LocalStorageBlobStore),
            ai_analysis: None,
            is_analyzing: false,
            admin_pass_input: String::new(),
            login_error: false,
            preferences: Preferences::default(),
            generation: 0,
            analysis_tx,
            analysis_rx,
            gemini: GeminiClient::new(config),
        }
    }

    /// Monta la sesión con piezas concretas (banco, almacén y generador).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_parts(
        questions: Vec<QuizItem>,
        records: RecordStore,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let (analysis_tx, analysis_rx) = channel();
        Self {
            state: QuizState::default(),
            questions,
            records,
            ai_analysis: None,
            is_analyzing: false,
            admin_pass_input: String::new(),
            login_error: false,
            preferences: Preferences::default(),
            generation: 0,
            analysis_tx,
            analysis_rx,
            generator,
        }
    }

    pub fn step(&self) -> AppStep {
        self.state.current_step
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
