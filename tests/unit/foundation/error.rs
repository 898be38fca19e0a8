use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SliceMorphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SliceMorphError::raster("x")
            .to_string()
            .contains("raster error:")
    );
    assert!(
        SliceMorphError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SliceMorphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
