// src/analysis.rs

use crate::config::AppConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FALLBACK_ANALYSIS: &str =
    "分析過程中發生了一點小錯誤，但你們從 2022 到 2025 的友誼是無價的！";
pub const EMPTY_ANALYSIS: &str = "分析失敗，但你們的默契我們都看在眼底。";

pub const TOPIC_KEYWORDS: [&str; 5] = ["小邑", "Threads", "蘇阿姨", "12/18", "萬芳醫院"];

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("falta la API key del generador de texto")]
    MissingApiKey,
    #[error("error de transporte: {0}")]
    Transport(String),
    #[error("el proveedor devolvió HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("respuesta inválida del proveedor: {0}")]
    Decode(String),
}

/// Colaborador externo que convierte un prompt en texto.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;
}

pub fn build_prompt(score: usize, total: usize) -> String {
    format!(
        r#"
Context: A friendship quiz between two friends, "詠婷" (the test taker) and "群倫" (the subject).
Data: 詠婷 scored {score} out of {total}.
Topics covered: Memories from 2022-2025, emotional support during dental surgery, movie recommendations ("努拉"), Xiaoyi (小邑) and his mom Su Auntie (蘇阿姨), social media drama (Threads/脆), 12/18 anniversary, and personal growth.

Task: Write a warm, encouraging, and slightly humorous "Friendship Analysis Report".
Tone: Friendly, heartfelt, and nostalgic.
Language: Traditional Chinese (Taiwan style).

Instructions:
1. If the score is high (15+), praise their deep bond and mention how they navigated years of drama together.
2. If the score is medium (10-14), suggest they grab a coffee at NCCU and catch up on the latest "Xinfangfang" jokes.
3. If low (<10), tell them to go back to 2022 and restart the chat log.
4. Mention specific keywords like {keywords} to make it personalized.
5. Keep it under 200 words.
"#,
        keywords = TOPIC_KEYWORDS
            .iter()
            .map(|k| format!("\"{k}\""))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Traduce el resultado del colaborador a texto mostrable. Nunca falla.
pub fn resolve_analysis(result: Result<String, AnalysisError>) -> String {
    match result {
        Ok(text) if text.trim().is_empty() => EMPTY_ANALYSIS.to_string(),
        Ok(text) => text,
        Err(e) => {
            log::error!("Error en el análisis de amistad: {e}");
            FALLBACK_ANALYSIS.to_string()
        }
    }
}

/// Una sola petición, sin reintentos.
pub fn analyze(generator: &dyn TextGenerator, score: usize, total: usize) -> String {
    let prompt = build_prompt(score, total);
    resolve_analysis(generator.generate(&prompt))
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

fn build_request(prompt: &str) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
    }
}

// Sin candidatos → texto vacío; `resolve_analysis` se encarga del resto
fn extract_text(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

/// Cliente de `generateContent` de Gemini.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: config.gemini_endpoint.clone(),
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::blocking::Client::new(),
        }
    }

    fn url(&self) -> Result<String, AnalysisError> {
        let key = self.api_key.as_deref().ok_or(AnalysisError::MissingApiKey)?;
        Ok(format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, key
        ))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        let url = self.url()?;
        let response = self
            .http
            .post(&url)
            .json(&build_request(prompt))
            .send()
            .map_err(|e| AnalysisError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AnalysisError::Http {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let body = response
            .json::<GenerateResponse>()
            .map_err(|e| AnalysisError::Decode(e.without_url().to_string()))?;
        Ok(extract_text(body))
    }
}

#[cfg(target_arch = "wasm32")]
impl GeminiClient {
    pub async fn generate_async(&self, prompt: &str) -> Result<String, AnalysisError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::JsValue;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let url = self.url()?;
        let payload = serde_json::to_string(&build_request(prompt))
            .map_err(|e| AnalysisError::Decode(e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&payload));

        let window =
            web_sys::window().ok_or_else(|| AnalysisError::Transport("no hay window".into()))?;
        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| AnalysisError::Transport(format!("{e:?}")))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| AnalysisError::Transport(format!("{e:?}")))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| AnalysisError::Transport(format!("{e:?}")))?;
        let response: Response = resp_value
            .dyn_into()
            .map_err(|_| AnalysisError::Decode("la respuesta no es un Response".into()))?;

        let text_promise = response
            .text()
            .map_err(|e| AnalysisError::Decode(format!("{e:?}")))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| AnalysisError::Decode(format!("{e:?}")))?
            .as_string()
            .unwrap_or_default();

        if !response.ok() {
            return Err(AnalysisError::Http {
                status: response.status(),
                body: text.trim().to_string(),
            });
        }

        let body: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| AnalysisError::Decode(e.to_string()))?;
        Ok(extract_text(body))
    }
}
