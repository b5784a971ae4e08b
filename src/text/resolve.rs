use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::DialResult;

/// Typographic role a piece of text is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    /// Latin regular weight.
    Sans,
    /// Latin bold weight (numerals, digital time).
    SansBold,
    /// Chinese glyph coverage (captions, weekdays).
    Cjk,
}

impl FontRole {
    /// Every role, in resolution order.
    pub const ALL: [Self; 3] = [Self::Sans, Self::SansBold, Self::Cjk];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::SansBold => "sans_bold",
            Self::Cjk => "cjk",
        }
    }
}

/// Ordered font search lists per role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Candidate files for [`FontRole::Sans`].
    pub sans: Vec<PathBuf>,
    /// Candidate files for [`FontRole::SansBold`].
    pub sans_bold: Vec<PathBuf>,
    /// Candidate files for [`FontRole::Cjk`].
    pub cjk: Vec<PathBuf>,
    /// Query the system font database when no candidate file exists.
    pub system_fallback: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        let paths = |v: &[&str]| v.iter().map(PathBuf::from).collect::<Vec<_>>();
        Self {
            sans: paths(&[
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
            ]),
            sans_bold: paths(&[
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
                "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
            ]),
            cjk: paths(&[
                "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
                "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
                "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
                "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
                "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            ]),
            system_fallback: true,
        }
    }
}

impl FontConfig {
    /// No candidate files and no system lookup: every role uses the bitmap font.
    pub fn bitmap_only() -> Self {
        Self {
            sans: Vec::new(),
            sans_bold: Vec::new(),
            cjk: Vec::new(),
            system_fallback: false,
        }
    }

    pub fn candidates(&self, role: FontRole) -> &[PathBuf] {
        match role {
            FontRole::Sans => &self.sans,
            FontRole::SansBold => &self.sans_bold,
            FontRole::Cjk => &self.cjk,
        }
    }
}

/// Family names tried, in order, when querying the system font database for `role`.
pub fn system_families(role: FontRole) -> &'static [&'static str] {
    match role {
        FontRole::Sans | FontRole::SansBold => &[
            "DejaVu Sans",
            "Liberation Sans",
            "Noto Sans",
            "FreeSans",
            "Arial",
            "Helvetica",
        ],
        FontRole::Cjk => &[
            "Noto Sans CJK SC",
            "WenQuanYi Zen Hei",
            "WenQuanYi Micro Hei",
            "Source Han Sans SC",
            "PingFang SC",
            "Microsoft YaHei",
        ],
    }
}

/// Where a resolved font came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    /// A file from the configured search list.
    File(PathBuf),
    /// A face found through the system font database.
    System { family: String },
    /// The built-in bitmap font.
    Bitmap,
}

/// Outline font bytes plus the face index inside a collection.
#[derive(Clone, Debug)]
pub struct OutlineFont {
    pub origin: FontOrigin,
    pub bytes: Arc<Vec<u8>>,
    pub index: u32,
}

#[derive(Clone, Debug)]
pub enum ResolvedFont {
    Outline(OutlineFont),
    Bitmap,
}

impl ResolvedFont {
    pub fn origin(&self) -> FontOrigin {
        match self {
            Self::Outline(f) => f.origin.clone(),
            Self::Bitmap => FontOrigin::Bitmap,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Outline(f) => Some(f.bytes.as_slice()),
            Self::Bitmap => None,
        }
    }
}

/// Resolves each [`FontRole`] once: listed files first, then the system database, then the
/// bitmap font.
pub struct FontResolver {
    cfg: FontConfig,
    resolved: HashMap<FontRole, ResolvedFont>,
    system: Option<usvg::fontdb::Database>,
}

impl FontResolver {
    pub fn new(cfg: FontConfig) -> Self {
        Self {
            cfg,
            resolved: HashMap::new(),
            system: None,
        }
    }

    /// Resolve `role`, caching the result for the lifetime of the resolver.
    ///
    /// A listed file that exists but cannot be read is an error; absence is not.
    pub fn resolve(&mut self, role: FontRole) -> DialResult<ResolvedFont> {
        if let Some(f) = self.resolved.get(&role) {
            return Ok(f.clone());
        }
        let f = self.lookup(role)?;
        self.resolved.insert(role, f.clone());
        Ok(f)
    }

    fn lookup(&mut self, role: FontRole) -> DialResult<ResolvedFont> {
        for path in self.cfg.candidates(role) {
            if !path.is_file() {
                continue;
            }
            let bytes =
                std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
            tracing::debug!(role = role.name(), path = %path.display(), "resolved font file");
            return Ok(ResolvedFont::Outline(OutlineFont {
                origin: FontOrigin::File(path.clone()),
                bytes: Arc::new(bytes),
                index: 0,
            }));
        }

        if self.cfg.system_fallback {
            if let Some(f) = self.query_system(role) {
                return Ok(f);
            }
        }

        tracing::warn!(
            role = role.name(),
            "no outline font found, falling back to the built-in bitmap font"
        );
        Ok(ResolvedFont::Bitmap)
    }

    fn query_system(&mut self, role: FontRole) -> Option<ResolvedFont> {
        use usvg::fontdb::{Database, Family, Query, Weight};

        let db = self.system.get_or_insert_with(|| {
            let mut db = Database::new();
            db.load_system_fonts();
            db
        });

        // Named families only: a fresh fontdb maps `Family::SansSerif` to "Arial".
        let families: Vec<Family<'_>> = system_families(role)
            .iter()
            .map(|name| Family::Name(name))
            .collect();
        let weight = match role {
            FontRole::SansBold => Weight::BOLD,
            FontRole::Sans | FontRole::Cjk => Weight::NORMAL,
        };
        let query = Query {
            families: &families,
            weight,
            ..Query::default()
        };

        let id = db.query(&query)?;
        let family = db
            .face(id)
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_default();
        let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;

        tracing::debug!(role = role.name(), family = %family, "resolved system font");
        Some(ResolvedFont::Outline(OutlineFont {
            origin: FontOrigin::System { family },
            bytes: Arc::new(bytes),
            index,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/resolve.rs"]
mod tests;
