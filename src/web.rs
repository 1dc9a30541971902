// src/web.rs — arranque en el navegador
use crate::QuizApp;
use crate::config::AppConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    let _ = eframe::WebLogger::init(log::LevelFilter::Info);
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("No existe #the_canvas_id en la página");
            return;
        };

        let config = AppConfig::from_env();
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(QuizApp::from_creation_context(cc, &config)))),
            )
            .await;
        if let Err(e) = result {
            log::error!("No se pudo arrancar la app: {e:?}");
        }
    });
}
