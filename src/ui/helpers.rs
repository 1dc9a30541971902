// src/ui/helpers.rs
use crate::app::OptionStyle;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón de opción coloreado según el estado de la respuesta.
/// Solo es clicable mientras la pregunta no se ha respondido.
pub fn option_button(ui: &mut Ui, label: &str, width: f32, style: OptionStyle) -> bool {
    let text = RichText::new(label).size(16.0);
    let button = match style {
        OptionStyle::Neutral => Button::new(text),
        OptionStyle::Correct => Button::new(text.color(Color32::WHITE))
            .fill(Color32::from_rgb(16, 150, 100)),
        OptionStyle::Wrong => Button::new(text.color(Color32::WHITE))
            .fill(Color32::from_rgb(200, 50, 70)),
        OptionStyle::Dimmed => Button::new(text.weak()),
    };
    let enabled = style == OptionStyle::Neutral;
    ui.add_enabled(enabled, button.min_size(Vec2::new(width, 44.0)))
        .clicked()
}
