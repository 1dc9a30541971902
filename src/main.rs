#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use friendship_quiz::QuizApp;
    use friendship_quiz::config::AppConfig;

    pretty_env_logger::init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        log::warn!("API_KEY no definida: el análisis mostrará el texto de respaldo");
    }
    log::debug!("Configuración: {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 780.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "張詠婷專屬時光記憶大考驗",
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::from_creation_context(cc, &config)))),
    )
}

// En wasm el arranque vive en `web::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
