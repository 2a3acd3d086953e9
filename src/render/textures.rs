use raylib::prelude::*;

use crate::config::AssetPaths;
use crate::error::{GameError, Result};

/// GPU-side assets loaded once at startup.
pub struct Assets {
    pub atlas: Texture2D,
    pub font: Font,
    pub font_size: f32,
}

impl Assets {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, paths: &AssetPaths) -> Result<Self> {
        let atlas = rl.load_texture(thread, &paths.tileset).map_err(|e| GameError::Asset {
            path: paths.tileset.clone(),
            reason: e.to_string(),
        })?;
        log::info!("loaded tileset {} ({}x{})", paths.tileset, atlas.width, atlas.height);

        let font = rl
            .load_font_ex(thread, &paths.font, paths.font_size, None)
            .map_err(|e| GameError::Asset { path: paths.font.clone(), reason: e.to_string() })?;
        log::info!("loaded font {} at {}px", paths.font, paths.font_size);

        Ok(Self { atlas, font, font_size: paths.font_size as f32 })
    }
}
