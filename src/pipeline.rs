use std::path::{Path, PathBuf};

use image::{RgbImage, RgbaImage};

use crate::config::GeneratorConfig;
use crate::face::paths::OutputLayout;
use crate::face::preview::{PreviewSettings, compose_preview};
use crate::face::theme::Theme;
use crate::face::weather::{WeatherCode, render_weather};
use crate::face::{dial, hands, icons};
use crate::foundation::core::Canvas;
use crate::foundation::error::DialResult;
use crate::progress::ProgressSink;
use crate::raster::encode::{save_jpeg, save_png};
use crate::text::layout::TextEngine;

const STAGES: [&str; 4] = ["background layers", "hands", "icons", "preview"];

/// Files written by one run, in write order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
}

/// Runs every layer generator and the preview composer for one configuration.
pub struct Generator {
    cfg: GeneratorConfig,
    theme: Theme,
    layout: OutputLayout,
    text: TextEngine,
}

impl Generator {
    /// Validate `cfg` and resolve its theme. Fonts are resolved lazily on first use.
    pub fn new(cfg: GeneratorConfig) -> DialResult<Self> {
        cfg.validate()?;
        let theme = cfg.theme.resolve()?;
        let layout = OutputLayout::under(&cfg.out_dir);
        let text = TextEngine::new(cfg.fonts.clone());
        Ok(Self {
            cfg,
            theme,
            layout,
            text,
        })
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    pub fn text_mut(&mut self) -> &mut TextEngine {
        &mut self.text
    }

    /// Generate the full asset set. Existing files are overwritten.
    #[tracing::instrument(skip_all, fields(theme = %self.theme.name, out = %self.cfg.out_dir.display()))]
    pub fn run(&mut self, progress: &mut dyn ProgressSink) -> DialResult<RunReport> {
        progress.begin_run(&format!(
            "dialkit - {} watch-face asset generator",
            self.theme.name
        ))?;
        self.layout.ensure_dirs()?;

        let mut report = RunReport::default();
        let total = STAGES.len();
        progress.begin_stage(1, total, STAGES[0])?;
        self.background_layers(&mut report, progress)?;
        progress.begin_stage(2, total, STAGES[1])?;
        self.hand_sprites(&mut report, progress)?;
        progress.begin_stage(3, total, STAGES[2])?;
        self.icons(&mut report, progress)?;
        progress.begin_stage(4, total, STAGES[3])?;
        self.preview(&mut report, progress)?;

        progress.finish_run()?;
        tracing::debug!(files = report.written.len(), "run complete");
        Ok(report)
    }

    #[tracing::instrument(skip_all)]
    fn background_layers(
        &mut self,
        report: &mut RunReport,
        progress: &mut dyn ProgressSink,
    ) -> DialResult<()> {
        let face = Canvas::FACE;
        let t = &self.theme;
        let layers = [
            ("bg_main.png", dial::background(t, face)),
            ("tick_ring.png", dial::tick_ring(t, face)?),
            (t.numerals.file_name(), dial::numerals(t, face, &mut self.text)?),
            ("inner_ring.png", dial::inner_ring(t, face)?),
            ("center_cap.png", dial::center_cap(t)?),
        ];
        for (file, img) in layers {
            write_png(report, &self.layout.background(file), &img)?;
            progress.asset_written(file)?;
        }
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    fn hand_sprites(
        &mut self,
        report: &mut RunReport,
        progress: &mut dyn ProgressSink,
    ) -> DialResult<()> {
        for (stem, spec) in self.theme.hands() {
            let img = hands::render_hand_sprite(spec)?;
            write_png(report, &self.layout.hand(stem), &img)?;
            progress.asset_written(&format!("{stem}_hand.png"))?;
        }
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    fn icons(&mut self, report: &mut RunReport, progress: &mut dyn ProgressSink) -> DialResult<()> {
        let t = &self.theme;
        write_png(report, &self.layout.icon("ic_heart.png"), &icons::heart(t)?)?;
        progress.asset_written("ic_heart.png")?;
        write_png(report, &self.layout.icon("separator.png"), &icons::separator(t)?)?;
        progress.asset_written("separator.png")?;

        for code in WeatherCode::ALL {
            tracing::debug!(code = code.code(), name = code.name(), "weather glyph");
            let img = render_weather(code, &t.weather)?;
            write_png(report, &self.layout.weather(code.code()), &img)?;
        }
        progress.asset_written(&format!("weather icons ({})", WeatherCode::ALL.len()))?;

        let locale = self.cfg.locale;
        let labels = locale.weekdays();
        for (day, label) in (1u8..).zip(labels) {
            let img = icons::week_label(t, &mut self.text, label, locale.caption_role())?;
            write_png(report, &self.layout.weekday(day), &img)?;
        }
        progress.asset_written(&format!("week icons ({})", labels.len()))?;
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    fn preview(&mut self, report: &mut RunReport, progress: &mut dyn ProgressSink) -> DialResult<()> {
        let export = &self.cfg.export;
        let settings = PreviewSettings {
            matte: export.matte,
            thumb_size: export.thumb_size,
        };
        let readout = self.cfg.readout();
        let out = compose_preview(
            &self.layout,
            &self.theme,
            &readout,
            &mut self.text,
            &settings,
        )?;

        write_jpeg(report, &self.layout.cover(), &out.cover, export.cover_quality)?;
        write_jpeg(report, &self.layout.thumbnail(), &out.thumb, export.thumb_quality)?;
        write_png(report, &self.layout.preview_full(), &out.full)?;
        progress.asset_written("preview images")?;
        Ok(())
    }
}

fn write_png(report: &mut RunReport, path: &Path, img: &RgbaImage) -> DialResult<()> {
    save_png(path, img)?;
    report.written.push(path.to_path_buf());
    Ok(())
}

fn write_jpeg(report: &mut RunReport, path: &Path, img: &RgbImage, quality: u8) -> DialResult<()> {
    save_jpeg(path, img, quality)?;
    report.written.push(path.to_path_buf());
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
