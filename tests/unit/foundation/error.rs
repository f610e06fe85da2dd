use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpinError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        SpinError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        SpinError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        SpinError::NotFound(PathBuf::from("missing.png"))
            .to_string()
            .contains("not found: missing.png")
    );
}

#[test]
fn io_errors_become_write_errors() {
    let err: SpinError = std::io::Error::other("disk full").into();
    assert!(matches!(err, SpinError::Write(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpinError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
