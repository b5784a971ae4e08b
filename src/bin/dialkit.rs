use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dialkit", version, about = "Generate watch-face image assets")]
struct Cli {
    /// Base output directory (overrides the config file).
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in theme name: business, heritage or midnight.
    #[arg(long)]
    theme: Option<String>,

    /// Language of the sample readout and weekday labels.
    #[arg(long, value_enum)]
    locale: Option<LocaleChoice>,

    /// Preview time as HH:MM or HH:MM:SS.
    #[arg(long)]
    time: Option<dialkit::ClockTime>,

    /// Print resolved font sources (origin + SHA-256 of font bytes) before generating.
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LocaleChoice {
    Zh,
    En,
}

impl From<LocaleChoice> for dialkit::Locale {
    fn from(c: LocaleChoice) -> Self {
        match c {
            LocaleChoice::Zh => Self::Zh,
            LocaleChoice::En => Self::En,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = build_config(&cli)?;
    let mut generator = dialkit::Generator::new(cfg)?;

    if cli.dump_fonts {
        dump_font_diagnostics(&mut generator)?;
    }

    let mut progress = dialkit::StdoutProgress;
    generator.run(&mut progress)?;
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<dialkit::GeneratorConfig> {
    let mut cfg = match &cli.config {
        Some(path) => dialkit::GeneratorConfig::from_path(path)?,
        None => dialkit::GeneratorConfig::default(),
    };
    if let Some(out) = &cli.out {
        cfg.out_dir = out.clone();
    }
    if let Some(theme) = &cli.theme {
        cfg.theme = dialkit::ThemeSource::Named(theme.clone());
    }
    if let Some(locale) = cli.locale {
        cfg.locale = locale.into();
    }
    if let Some(time) = cli.time {
        cfg.sample_time = Some(time);
    }
    Ok(cfg)
}

fn dump_font_diagnostics(generator: &mut dialkit::Generator) -> anyhow::Result<()> {
    eprintln!("font diagnostics:");
    let resolver = generator.text_mut().resolver_mut();
    for role in dialkit::FontRole::ALL {
        let font = resolver.resolve(role)?;
        eprintln!("  {}:", role.name());
        match font.origin() {
            dialkit::FontOrigin::File(path) => eprintln!("    file:    {}", path.display()),
            dialkit::FontOrigin::System { family } => eprintln!("    system:  {family}"),
            dialkit::FontOrigin::Bitmap => eprintln!("    builtin: 5x7 bitmap"),
        }
        if let Some(bytes) = font.bytes() {
            eprintln!("    sha256:  {}", sha256_hex(bytes));
        }
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
