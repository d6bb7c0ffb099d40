//! Texture store resource.
//!
//! A non-send resource holding every texture the game draws, keyed by
//! string IDs. Textures are unloaded when the store is dropped.
//!
//! Note: raylib textures must be accessed from the main thread only; insert
//! with `insert_non_send_resource`.

use raylib::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Reject a texture raylib handed back without pixels.
fn check_size(key: &str, path: &str, width: i32, height: i32) -> Result<(), String> {
    if width <= 0 || height <= 0 {
        return Err(format!(
            "Texture '{}' from {} has no pixels ({}x{})",
            key, path, width, height
        ));
    }
    Ok(())
}

/// Map of texture keys to loaded textures.
pub struct TextureStore {
    map: HashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Load `path` and store it under `key`.
    ///
    /// Fails with a message naming the file when raylib cannot load it or
    /// returns an empty texture.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<String>,
        path: &Path,
    ) -> Result<(), String> {
        let key = key.into();
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Texture path {:?} is not valid UTF-8", path))?;
        let texture = rl
            .load_texture(thread, path_str)
            .map_err(|e| format!("Failed to load texture '{}' from {}: {}", key, path_str, e))?;
        check_size(&key, path_str, texture.width, texture.height)?;
        log::info!(
            "Loaded texture '{}' ({}x{}) from {}",
            key,
            texture.width,
            texture.height,
            path_str
        );
        self.map.insert(key, texture);
        Ok(())
    }

    /// Get a texture by its key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    /// Width and height in pixels of the texture under `key`.
    pub fn size(&self, key: impl AsRef<str>) -> Option<(f32, f32)> {
        self.get(key).map(|t| (t.width as f32, t.height as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size_accepts_real_texture() {
        assert!(check_size("player", "textures/scarfy.png", 768, 128).is_ok());
        assert!(check_size("dot", "textures/dot.png", 1, 1).is_ok());
    }

    #[test]
    fn test_check_size_rejects_empty_texture() {
        for (w, h) in [(0, 0), (0, 128), (768, 0), (-1, 10)] {
            let err = check_size("player", "textures/scarfy.png", w, h).unwrap_err();
            assert!(err.contains("'player'"));
            assert!(err.contains("textures/scarfy.png"));
        }
    }
}
