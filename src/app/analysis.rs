use super::*;
#[cfg(not(target_arch = "wasm32"))]
use crate::analysis::analyze;
#[cfg(target_arch = "wasm32")]
use crate::analysis::{build_prompt, resolve_analysis};

impl QuizApp {
    /// result → analysis. Lanza la petición en segundo plano; el texto llega
    /// por `poll_analysis`.
    pub fn request_analysis(&mut self) {
        if self.state.current_step != AppStep::Result {
            log::debug!("request_analysis() ignorado en {:?}", self.state.current_step);
            return;
        }

        self.state.current_step = AppStep::Analysis;
        self.is_analyzing = true;
        self.ai_analysis = None;
        self.launch_analysis(self.state.score, self.total_questions(), self.generation);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn launch_analysis(&self, score: usize, total: usize, generation: u64) {
        let generator = Arc::clone(&self.generator);
        let tx = self.analysis_tx.clone();

        std::thread::spawn(move || {
            let text = analyze(generator.as_ref(), score, total);
            // Si la app ya no existe nadie escucha; da igual
            let _ = tx.send(AnalysisOutcome { generation, text });
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn launch_analysis(&self, score: usize, total: usize, generation: u64) {
        let client = self.gemini.clone();
        let tx = self.analysis_tx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let prompt = build_prompt(score, total);
            let text = resolve_analysis(client.generate_async(&prompt).await);
            let _ = tx.send(AnalysisOutcome { generation, text });
        });
    }

    /// Recoge resultados terminados. Se llama en cada frame.
    /// Un resultado de otra generación (hubo reset entre medias) se descarta.
    pub fn poll_analysis(&mut self) {
        while let Ok(outcome) = self.analysis_rx.try_recv() {
            if outcome.generation != self.generation || !self.is_analyzing {
                log::debug!(
                    "Análisis de la generación {} descartado (actual {})",
                    outcome.generation,
                    self.generation
                );
                continue;
            }
            self.ai_analysis = Some(outcome.text);
            self.is_analyzing = false;
        }
    }
}
