//! Registers a CJK font so Chinese and Japanese UI text is readable.

use std::sync::Arc;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::AppConfig;

const CJK_FONT_NAME: &str = "cjk_fallback";

/// Runs once: adds the configured font as a fallback to every egui family
pub fn install_cjk_font(
    mut contexts: EguiContexts,
    config: Res<AppConfig>,
    mut installed: Local<bool>,
) -> Result {
    if *installed {
        return Ok(());
    }
    let ctx = contexts.ctx_mut()?;
    *installed = true;

    let Some(path) = &config.data.cjk_font_path else {
        if config.data.language.needs_cjk_font() {
            warn!("No cjk_font_path configured; {:?} text may not render", config.data.language);
        }
        return Ok(());
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read CJK font {:?}: {}", path, e);
            return Ok(());
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        CJK_FONT_NAME.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        if let Some(names) = fonts.families.get_mut(&family) {
            names.push(CJK_FONT_NAME.to_owned());
        }
    }
    ctx.set_fonts(fonts);

    info!("Installed CJK fallback font from {:?}", path);
    Ok(())
}
