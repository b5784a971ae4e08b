use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::face::preview::{Locale, SampleReadout};
use crate::face::theme::Theme;
use crate::foundation::color::Rgba8;
use crate::foundation::core::ClockTime;
use crate::foundation::error::{DialError, DialResult};
use crate::text::resolve::FontConfig;

/// A built-in theme by name, or a complete theme inline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeSource {
    Named(String),
    Inline(Box<Theme>),
}

impl Default for ThemeSource {
    fn default() -> Self {
        Self::Named("business".to_string())
    }
}

impl ThemeSource {
    pub fn resolve(&self) -> DialResult<Theme> {
        let theme = match self {
            Self::Named(name) => Theme::builtin(name)?,
            Self::Inline(theme) => theme.as_ref().clone(),
        };
        theme.validate()?;
        Ok(theme)
    }
}

/// JPEG and thumbnail export settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub cover_quality: u8,
    pub thumb_quality: u8,
    /// Side of the square thumbnail.
    pub thumb_size: u32,
    /// Opaque color the preview is flattened onto for JPEG export.
    pub matte: Rgba8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            cover_quality: 95,
            thumb_quality: 90,
            thumb_size: 120,
            matte: Rgba8::WHITE,
        }
    }
}

/// Everything a generator run can be configured with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base directory the output tree is created under.
    pub out_dir: PathBuf,
    pub theme: ThemeSource,
    pub locale: Locale,
    /// Overrides the readout time on the preview.
    pub sample_time: Option<ClockTime>,
    pub fonts: FontConfig,
    pub export: ExportConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            theme: ThemeSource::default(),
            locale: Locale::default(),
            sample_time: None,
            fonts: FontConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> DialResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path)
            .with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(std::io::BufReader::new(f))
            .map_err(|e| DialError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> DialResult<()> {
        for (name, q) in [
            ("cover_quality", self.export.cover_quality),
            ("thumb_quality", self.export.thumb_quality),
        ] {
            if !(1..=100).contains(&q) {
                return Err(DialError::validation(format!(
                    "export.{name} must be in 1..=100, got {q}"
                )));
            }
        }
        if self.export.thumb_size == 0 {
            return Err(DialError::validation("export.thumb_size must be > 0"));
        }
        if self.export.matte.a != 255 {
            return Err(DialError::validation("export.matte must be opaque"));
        }
        self.theme.resolve().map(|_| ())
    }

    /// Sample data for the preview in the configured locale and time.
    pub fn readout(&self) -> SampleReadout {
        let readout = SampleReadout::new(self.locale);
        match self.sample_time {
            Some(t) => readout.with_time(t),
            None => readout,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
