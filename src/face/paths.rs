use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::DialResult;

/// Output directory layout under a base directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    res: PathBuf,
    preview: PathBuf,
    docs: PathBuf,
}

impl OutputLayout {
    pub fn under(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            res: base.join("watchface").join("watchface").join("res"),
            preview: base.join("watchface").join("preview"),
            docs: base.join("docs"),
        }
    }

    /// Resource root holding every layer sprite.
    pub fn res_dir(&self) -> &Path {
        &self.res
    }

    pub fn preview_dir(&self) -> &Path {
        &self.preview
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs
    }

    pub fn background_dir(&self) -> PathBuf {
        self.res.join("background")
    }

    pub fn hands_dir(&self) -> PathBuf {
        self.res.join("hands")
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.res.join("icons")
    }

    pub fn week_dir(&self) -> PathBuf {
        self.icons_dir().join("week")
    }

    pub fn weather_dir(&self) -> PathBuf {
        self.res.join("weather")
    }

    pub fn background(&self, file: &str) -> PathBuf {
        self.background_dir().join(file)
    }

    /// `hands/<stem>_hand.png`.
    pub fn hand(&self, stem: &str) -> PathBuf {
        self.hands_dir().join(format!("{stem}_hand.png"))
    }

    pub fn icon(&self, file: &str) -> PathBuf {
        self.icons_dir().join(file)
    }

    /// `icons/week/<day>.png`, Monday = 1.
    pub fn weekday(&self, day: u8) -> PathBuf {
        self.week_dir().join(format!("{day}.png"))
    }

    pub fn weather(&self, code: u8) -> PathBuf {
        self.weather_dir().join(format!("{code}.png"))
    }

    pub fn cover(&self) -> PathBuf {
        self.preview.join("cover.jpg")
    }

    pub fn thumbnail(&self) -> PathBuf {
        self.preview.join("icon_small.jpg")
    }

    pub fn preview_full(&self) -> PathBuf {
        self.docs.join("preview_full.png")
    }

    /// Create every output directory. Existing directories are left alone.
    pub fn ensure_dirs(&self) -> DialResult<()> {
        for dir in [
            self.background_dir(),
            self.hands_dir(),
            self.icons_dir(),
            self.week_dir(),
            self.weather_dir(),
            self.preview.clone(),
            self.docs.clone(),
        ] {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("create output directory '{}'", dir.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/paths.rs"]
mod tests;
