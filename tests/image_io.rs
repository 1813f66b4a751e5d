use edgeflag::{ppm, BitmapData, BitmapFormat, Filler, Polygon, Rgb8, Transform2d};

const WHITE: u32 = 0x00ff_ffff;

fn render(polygon: &Polygon, color: Rgb8) -> Vec<u32> {
    let mut filler = Filler::new(120, 120, 32).unwrap();
    let mut pixels = vec![WHITE; 120 * 120];
    {
        let mut target = BitmapData::new(120, 120, BitmapFormat::Xrgb, &mut pixels).unwrap();
        filler.render_non_zero_winding(&mut target, polygon, color, &Transform2d::new());
    }
    pixels
}

#[test]
fn write_read_round_trip() {
    std::fs::create_dir_all("tests/tmp").unwrap();
    let tri = Polygon::from_parts(&[&[60.0, 10.0, 110.0, 110.0, 10.0, 110.0]]);
    let pixels = render(&tri, Rgb8::new(200, 60, 20));

    ppm::write_file(&pixels, 120, 120, BitmapFormat::Xrgb, "tests/tmp/round_trip.png").unwrap();
    let (data, w, h) = ppm::read_file("tests/tmp/round_trip.png").unwrap();
    assert_eq!((w, h), (120, 120));
    assert_eq!(data.len(), 120 * 120 * 3);

    // PNG is lossless, so every pixel survives the trip.
    for (i, &p) in pixels.iter().enumerate() {
        let c = Rgb8::unpack(p, BitmapFormat::Xrgb);
        assert_eq!([data[i * 3], data[i * 3 + 1], data[i * 3 + 2]], [c.r, c.g, c.b]);
    }
}

#[test]
fn img_diff_detects_changes() {
    std::fs::create_dir_all("tests/tmp").unwrap();
    let tri = Polygon::from_parts(&[&[60.0, 10.0, 110.0, 110.0, 10.0, 110.0]]);
    let square = Polygon::from_parts(&[&[20.0, 20.0, 100.0, 20.0, 100.0, 100.0, 20.0, 100.0]]);

    let a = render(&tri, Rgb8::black());
    let b = render(&square, Rgb8::black());

    ppm::write_file(&a, 120, 120, BitmapFormat::Xrgb, "tests/tmp/diff_a.png").unwrap();
    ppm::write_file(&a, 120, 120, BitmapFormat::Xrgb, "tests/tmp/diff_a2.png").unwrap();
    ppm::write_file(&b, 120, 120, BitmapFormat::Xrgb, "tests/tmp/diff_b.png").unwrap();

    assert!(ppm::img_diff("tests/tmp/diff_a.png", "tests/tmp/diff_a2.png").unwrap());
    assert!(!ppm::img_diff("tests/tmp/diff_a.png", "tests/tmp/diff_b.png").unwrap());
}
