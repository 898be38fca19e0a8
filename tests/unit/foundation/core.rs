use super::*;

#[test]
fn seed_is_small_centered_circle() {
    let seed = Segment::SEED;
    assert!((seed.center() - 0.5).abs() < 1e-12);
    assert!((seed.height() - 0.03).abs() < 1e-12);
    assert!(seed.is_valid());
}

#[test]
fn segment_new_rejects_inverted_and_out_of_range() {
    assert!(Segment::new(0.2, 0.4).is_ok());
    assert!(Segment::new(0.6, 0.4).is_err());
    assert!(Segment::new(0.4, 0.4).is_err());
    assert!(Segment::new(1.2, 1.5).is_err());
    assert!(Segment::new(-0.1, 0.5).is_err());
    assert!(Segment::new(f64::NAN, 0.5).is_err());
}

#[test]
fn lerp_hits_endpoints_exactly() {
    let a = Segment::new(0.1, 0.3).unwrap();
    let b = Segment::new(0.6, 0.9).unwrap();
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);

    let mid = a.lerp(b, 0.5);
    assert!((mid.top - 0.35).abs() < 1e-12);
    assert!((mid.bottom - 0.6).abs() < 1e-12);
}

#[test]
fn default_map_has_one_seed_per_column() {
    let map = SliceMap::default_for(4);
    assert_eq!(map.len(), 4);
    assert_eq!(map.segment_count(), 4);
    for col in map.columns() {
        assert_eq!(col.as_slice(), &[Segment::SEED]);
    }
    assert!(map.column(4).is_none());
}

#[test]
fn slice_map_json_is_nested_array() {
    let map = SliceMap::new(vec![vec![Segment::new(0.25, 0.5).unwrap()], vec![]]);
    let s = map.to_json().unwrap();
    assert_eq!(s, r#"[[{"top":0.25,"bottom":0.5}],[]]"#);
    assert_eq!(SliceMap::from_json(&s).unwrap(), map);

    let err = SliceMap::from_json(r#"{"top":1}"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn raster_image_converts_to_rgba_image() {
    let img = RasterImage::white(3, 2);
    let rgba = img.to_rgba_image().unwrap();
    assert_eq!(rgba.dimensions(), (3, 2));
    assert_eq!(rgba.get_pixel(2, 1).0, [255, 255, 255, 255]);

    let broken = RasterImage {
        width: 3,
        height: 2,
        data: vec![0; 5],
    };
    assert!(broken.to_rgba_image().is_err());
}
