#![forbid(unsafe_code)]
//! Procedural asset generator for a 454×454 smartwatch face.
//!
//! Each layer (background, tick ring, numerals, hands, icons, weather glyphs) is drawn as vector
//! shapes onto a transparent raster and written as PNG; the preview composer stacks those layers,
//! overlays sample readout text and the hands, and exports JPEG/PNG previews.

mod foundation;

pub mod config;
pub mod face;
pub mod pipeline;
pub mod progress;
pub mod raster;
pub mod text;

pub use config::{ExportConfig, GeneratorConfig, ThemeSource};
pub use face::paths::OutputLayout;
pub use face::preview::{Locale, SampleReadout};
pub use face::theme::{
    Counterweight, DialGeometry, HandSpec, NumeralStyle, Palette, SpriteSpec, Theme,
    WeatherPalette,
};
pub use face::weather::WeatherCode;
pub use foundation::color::{Rgba8, Rgba8Premul};
pub use foundation::core::{Canvas, ClockTime, dial_direction, polar_point};
pub use foundation::error::{DialError, DialResult};
pub use pipeline::{Generator, RunReport};
pub use progress::{InMemoryProgress, ProgressEvent, ProgressSink, StdoutProgress};
pub use text::resolve::{FontConfig, FontOrigin, FontRole, ResolvedFont};
