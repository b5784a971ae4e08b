use super::*;
use crate::config::ThemeSource;
use crate::face::preview::Locale;
use crate::progress::{InMemoryProgress, ProgressEvent};
use crate::text::resolve::FontConfig;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "dialkit_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn config(out: &Path) -> GeneratorConfig {
    GeneratorConfig {
        out_dir: out.to_path_buf(),
        locale: Locale::En,
        fonts: FontConfig::bitmap_only(),
        ..GeneratorConfig::default()
    }
}

#[test]
fn progress_reports_four_stages_in_order() {
    let tmp = temp_dir("pipeline_progress");
    let mut g = Generator::new(config(&tmp)).unwrap();
    let mut progress = InMemoryProgress::new();
    let report = g.run(&mut progress).unwrap();

    let stages: Vec<(usize, String)> = progress
        .events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::Stage { index, total, label } => {
                assert_eq!(*total, 4);
                Some((*index, label.clone()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        stages,
        vec![
            (1, "background layers".to_string()),
            (2, "hands".to_string()),
            (3, "icons".to_string()),
            (4, "preview".to_string()),
        ]
    );
    assert!(matches!(progress.events.first(), Some(ProgressEvent::Run(_))));
    assert_eq!(progress.events.last(), Some(&ProgressEvent::Finished));

    let assets: Vec<&str> = progress.assets().collect();
    assert_eq!(assets[0], "bg_main.png");
    assert!(assets.contains(&"second_hand.png"));
    assert!(assets.contains(&"weather icons (8)"));
    assert!(assets.contains(&"week icons (7)"));

    // 5 background + 3 hands + 2 icons + 8 weather + 7 week + 3 previews.
    assert_eq!(report.written.len(), 28);
    assert!(report.written.iter().all(|p| p.is_file()));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn unknown_theme_fails_before_writing() {
    let tmp = temp_dir("pipeline_bad_theme");
    let cfg = GeneratorConfig {
        theme: ThemeSource::Named("neon".to_string()),
        ..config(&tmp)
    };
    assert!(Generator::new(cfg).is_err());
    assert!(!tmp.exists());
}

#[test]
fn roman_theme_writes_roman_numeral_layer() {
    let tmp = temp_dir("pipeline_heritage");
    let cfg = GeneratorConfig {
        theme: ThemeSource::Named("heritage".to_string()),
        ..config(&tmp)
    };
    let mut g = Generator::new(cfg).unwrap();
    g.run(&mut InMemoryProgress::new()).unwrap();
    assert!(g.layout().background("roman_numerals.png").is_file());
    assert!(!g.layout().background("numerals.png").exists());
    std::fs::remove_dir_all(&tmp).ok();
}
