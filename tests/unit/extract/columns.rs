use super::*;

fn paint(img: &mut RasterImage, x: u32, y0: u32, y1: u32, rgb: [u8; 3]) {
    for y in y0..y1 {
        let i = ((y * img.width + x) * 4) as usize;
        img.data[i..i + 3].copy_from_slice(&rgb);
    }
}

#[test]
fn blank_buffer_gives_one_seed_per_column() {
    let img = RasterImage::white(8, 10);
    let map = extract_from_raster(&img, 4).unwrap();
    assert_eq!(map, SliceMap::default_for(4));
}

#[test]
fn runs_become_normalized_segments() {
    let mut img = RasterImage::white(4, 10);
    paint(&mut img, 0, 2, 4, [0, 0, 0]);
    paint(&mut img, 1, 6, 8, [0, 0, 0]);
    paint(&mut img, 3, 5, 10, [0, 0, 0]);

    let map = extract_from_raster(&img, 2).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(
        map.column(0).unwrap(),
        &[
            Segment {
                top: 0.2,
                bottom: 0.4
            },
            Segment {
                top: 0.6,
                bottom: 0.8
            }
        ]
    );
    // Run touching the last row closes at 1.0.
    assert_eq!(
        map.column(1).unwrap(),
        &[Segment {
            top: 0.5,
            bottom: 1.0
        }]
    );
}

#[test]
fn any_single_dark_channel_counts_as_ink() {
    let mut img = RasterImage::white(1, 4);
    paint(&mut img, 0, 1, 2, [255, 127, 255]);
    paint(&mut img, 0, 3, 4, [128, 128, 128]);

    let map = extract_from_raster(&img, 1).unwrap();
    assert_eq!(
        map.column(0).unwrap(),
        &[Segment {
            top: 0.25,
            bottom: 0.5
        }]
    );
}

#[test]
fn alpha_is_ignored() {
    let mut img = RasterImage::white(1, 2);
    img.data[3] = 0;
    let map = extract_from_raster(&img, 1).unwrap();
    assert_eq!(map.column(0).unwrap(), &[Segment::SEED]);
}

#[test]
fn uneven_band_widths_cover_every_pixel_column() {
    let mut img = RasterImage::white(5, 2);
    paint(&mut img, 4, 0, 1, [0, 0, 0]);

    // 5 px into 3 bands: [0,1) [1,3) [3,5)
    let map = extract_from_raster(&img, 3).unwrap();
    assert_eq!(map.column(0).unwrap(), &[Segment::SEED]);
    assert_eq!(map.column(1).unwrap(), &[Segment::SEED]);
    assert_eq!(
        map.column(2).unwrap(),
        &[Segment {
            top: 0.0,
            bottom: 0.5
        }]
    );
}

#[test]
fn more_columns_than_pixels_still_yields_column_count() {
    let img = RasterImage::white(2, 2);
    let map = extract_from_raster(&img, 5).unwrap();
    assert_eq!(map.len(), 5);
}

#[test]
fn rejects_bad_dimensions_and_buffer_length() {
    assert!(extract_slice_map(&[], 0, 1, 1).is_err());
    assert!(extract_slice_map(&[255; 4], 1, 1, 0).is_err());
    assert!(extract_slice_map(&[255; 7], 1, 2, 1).is_err());
}
