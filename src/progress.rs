use std::io::Write;

use anyhow::Context as _;

use crate::foundation::error::DialResult;

/// Receives progress events from a generator run, in order.
///
/// Ordering contract: `begin_run` first, then for each stage one `begin_stage` followed by that
/// stage's `asset_written` calls, then `finish_run`.
pub trait ProgressSink {
    fn begin_run(&mut self, title: &str) -> DialResult<()>;
    /// `index` is 1-based.
    fn begin_stage(&mut self, index: usize, total: usize, label: &str) -> DialResult<()>;
    fn asset_written(&mut self, asset: &str) -> DialResult<()>;
    fn finish_run(&mut self) -> DialResult<()>;
}

const RULE_WIDTH: usize = 60;

/// Human-readable progress lines on standard output.
#[derive(Debug, Default)]
pub struct StdoutProgress;

impl StdoutProgress {
    fn emit(&self, line: &str) -> DialResult<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}").context("write progress line")?;
        Ok(())
    }
}

impl ProgressSink for StdoutProgress {
    fn begin_run(&mut self, title: &str) -> DialResult<()> {
        let rule = "=".repeat(RULE_WIDTH);
        self.emit(&rule)?;
        self.emit(&format!("  {title}"))?;
        self.emit("  target: 454x454")?;
        self.emit(&rule)
    }

    fn begin_stage(&mut self, index: usize, total: usize, label: &str) -> DialResult<()> {
        self.emit(&format!("\n[{index}/{total}] {label}..."))
    }

    fn asset_written(&mut self, asset: &str) -> DialResult<()> {
        self.emit(&format!("  [OK] {asset}"))
    }

    fn finish_run(&mut self) -> DialResult<()> {
        let rule = "=".repeat(RULE_WIDTH);
        self.emit(&format!("\n{rule}"))?;
        self.emit("  done!")?;
        self.emit(&rule)
    }
}

/// One recorded progress event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    Run(String),
    Stage {
        index: usize,
        total: usize,
        label: String,
    },
    Asset(String),
    Finished,
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryProgress {
    /// Events in emission order.
    pub events: Vec<ProgressEvent>,
}

impl InMemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assets reported so far, in order.
    pub fn assets(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ProgressEvent::Asset(a) => Some(a.as_str()),
            _ => None,
        })
    }
}

impl ProgressSink for InMemoryProgress {
    fn begin_run(&mut self, title: &str) -> DialResult<()> {
        self.events.clear();
        self.events.push(ProgressEvent::Run(title.to_string()));
        Ok(())
    }

    fn begin_stage(&mut self, index: usize, total: usize, label: &str) -> DialResult<()> {
        self.events.push(ProgressEvent::Stage {
            index,
            total,
            label: label.to_string(),
        });
        Ok(())
    }

    fn asset_written(&mut self, asset: &str) -> DialResult<()> {
        self.events.push(ProgressEvent::Asset(asset.to_string()));
        Ok(())
    }

    fn finish_run(&mut self) -> DialResult<()> {
        self.events.push(ProgressEvent::Finished);
        Ok(())
    }
}
