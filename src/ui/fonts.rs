// src/ui/fonts.rs
use egui::Context;

// Las fuentes por defecto de egui no traen CJK
#[cfg(not(target_arch = "wasm32"))]
const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

#[cfg(not(target_arch = "wasm32"))]
pub fn install_cjk_fonts(ctx: &Context) {
    use egui::{FontData, FontDefinitions, FontFamily};
    use std::sync::Arc;

    let found = CJK_FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)));

    let Some((path, bytes)) = found else {
        log::warn!("No se encontró ninguna fuente CJK; el texto chino puede verse como cuadros");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), Arc::new(FontData::from_owned(bytes)));
    // Como respaldo: los glifos latinos siguen saliendo de la fuente por defecto
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("Fuente CJK cargada desde {path}");
}

#[cfg(target_arch = "wasm32")]
pub fn install_cjk_fonts(_ctx: &Context) {
    log::warn!("Sin acceso al sistema de ficheros: no se cargan fuentes CJK");
}
