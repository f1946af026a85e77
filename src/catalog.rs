use crate::error::SketchResult;

/// Ordered set of sticker glyphs, persisted as a JSON array under one key.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerCatalog {
    key: String,
    stickers: Vec<String>,
}

impl StickerCatalog {
    /// A catalog holding `defaults`, not yet backed by any stored value
    pub fn new(key: impl Into<String>, defaults: &[String]) -> Self {
        let mut catalog = Self {
            key: key.into(),
            stickers: Vec::new(),
        };
        for glyph in defaults {
            catalog.add(glyph);
        }
        catalog
    }

    /// Read the catalog from `storage`. A missing key or malformed value
    /// falls back to `defaults`.
    pub fn load(storage: Option<&dyn eframe::Storage>, key: &str, defaults: &[String]) -> Self {
        let Some(json) = storage.and_then(|storage| storage.get_string(key)) else {
            log::debug!("No stored stickers under {key}, using defaults");
            return Self::new(key, defaults);
        };
        match serde_json::from_str::<Vec<String>>(&json) {
            Ok(stored) => {
                log::info!("Loaded {} stickers", stored.len());
                Self::new(key, &stored)
            }
            Err(err) => {
                log::warn!("Stored stickers under {key} are malformed ({err}), using defaults");
                Self::new(key, defaults)
            }
        }
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.stickers.iter().any(|s| s == glyph)
    }

    /// Append a glyph. Empty (after trimming) and duplicate glyphs are
    /// rejected and leave the catalog untouched.
    pub fn add(&mut self, glyph: &str) -> bool {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            log::warn!("Rejecting empty sticker");
            return false;
        }
        if self.contains(glyph) {
            log::warn!("Sticker {glyph} is already in the catalog");
            return false;
        }
        self.stickers.push(glyph.to_owned());
        true
    }

    /// Remove a glyph; false if it was not in the catalog
    pub fn remove(&mut self, glyph: &str) -> bool {
        match self.stickers.iter().position(|s| s == glyph) {
            Some(index) => {
                self.stickers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Rewrite the whole array into `storage`
    pub fn persist(&self, storage: &mut dyn eframe::Storage) -> SketchResult<()> {
        let json = serde_json::to_string(&self.stickers)?;
        storage.set_string(&self.key, json);
        Ok(())
    }

    /// `add`, then persist only if the catalog changed
    pub fn add_and_persist(&mut self, glyph: &str, storage: &mut dyn eframe::Storage) -> SketchResult<bool> {
        let added = self.add(glyph);
        if added {
            log::info!("Added sticker {}", glyph.trim());
            self.persist(storage)?;
        }
        Ok(added)
    }

    /// `remove`, then persist only if the catalog changed
    pub fn remove_and_persist(&mut self, glyph: &str, storage: &mut dyn eframe::Storage) -> SketchResult<bool> {
        let removed = self.remove(glyph);
        if removed {
            log::info!("Removed sticker {glyph}");
            self.persist(storage)?;
        }
        Ok(removed)
    }
}
