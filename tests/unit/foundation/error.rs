use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DialError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DialError::render("x").to_string().contains("render error:"));
    assert!(DialError::font("x").to_string().contains("font error:"));
    assert!(
        DialError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DialError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_context_converts_with_question_mark() {
    fn fails() -> DialResult<()> {
        use anyhow::Context as _;
        std::fs::read("/definitely/not/here/dialkit.bin").context("read missing file")?;
        Ok(())
    }

    let err = fails().unwrap_err();
    assert!(matches!(err, DialError::Other(_)));
    assert!(err.to_string().contains("read missing file"));
}
