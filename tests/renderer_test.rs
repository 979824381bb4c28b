use facepaint::{LandmarkSet, MakeupConfig, MakeupRenderer, Point, RegionStyle, Rgba};
use tiny_skia::Pixmap;

const W: u32 = 240;
const H: u32 = 320;

fn base_image(r: u8, g: u8, b: u8) -> Pixmap {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut pixmap = Pixmap::new(W, H).unwrap();
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));
    pixmap
}

fn full_landmarks() -> LandmarkSet {
    let eye = |cx: f32, cy: f32| {
        vec![
            Point::new(cx - 8.0, cy),
            Point::new(cx, cy - 4.0),
            Point::new(cx + 8.0, cy),
            Point::new(cx, cy + 4.0),
        ]
    };
    let cheek = |cx: f32, cy: f32| {
        vec![
            Point::new(cx - 6.0, cy),
            Point::new(cx, cy - 6.0),
            Point::new(cx + 6.0, cy),
        ]
    };
    let brow = |cx: f32, cy: f32| {
        vec![
            Point::new(cx - 16.0, cy + 2.0),
            Point::new(cx - 8.0, cy),
            Point::new(cx, cy - 1.0),
            Point::new(cx + 8.0, cy),
            Point::new(cx + 16.0, cy + 2.0),
        ]
    };

    LandmarkSet {
        lips: vec![
            Point::new(100.0, 240.0),
            Point::new(120.0, 232.0),
            Point::new(140.0, 240.0),
            Point::new(120.0, 252.0),
        ],
        left_eye: eye(85.0, 150.0),
        right_eye: eye(155.0, 150.0),
        left_cheek: cheek(75.0, 195.0),
        right_cheek: cheek(165.0, 195.0),
        left_eyebrow: brow(85.0, 128.0),
        right_eyebrow: brow(155.0, 128.0),
        face: vec![
            Point::new(70.0, 110.0),
            Point::new(95.0, 100.0),
            Point::new(120.0, 96.0),
            Point::new(145.0, 100.0),
            Point::new(170.0, 110.0),
            Point::new(180.0, 190.0),
            Point::new(120.0, 290.0),
            Point::new(60.0, 190.0),
        ],
        ..Default::default()
    }
}

fn full_config() -> MakeupConfig {
    MakeupConfig {
        lips: Some(RegionStyle::new(Rgba::rgb(200, 30, 60)).with_gloss()),
        eyes: Some(RegionStyle::new(Rgba::rgb(120, 80, 200)).with_shimmer()),
        cheeks: Some(RegionStyle::new(Rgba::rgb(255, 140, 140)).with_opacity(0.6)),
        eyebrows: Some(RegionStyle::new(Rgba::rgb(60, 40, 30)).with_opacity(0.9)),
        hair: Some(RegionStyle::new(Rgba::rgb(80, 50, 20)).with_opacity(0.7)),
    }
}

fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
    let idx = ((y * pixmap.width() + x) * 4) as usize;
    let data = pixmap.data();
    (data[idx], data[idx + 1], data[idx + 2], data[idx + 3])
}

#[test]
fn empty_config_returns_base_unchanged() {
    let base = base_image(180, 160, 150);
    let mut renderer = MakeupRenderer::new(W, H).unwrap();
    renderer
        .render(&base, &full_landmarks(), &MakeupConfig::default())
        .unwrap();
    assert_eq!(renderer.pixmap().data(), base.data());
}

#[test]
fn non_hair_rendering_is_deterministic() {
    let base = base_image(180, 160, 150);
    let landmarks = full_landmarks();
    let mut config = full_config();
    config.hair = None;

    let mut a = MakeupRenderer::new(W, H).unwrap();
    let mut b = MakeupRenderer::new(W, H).unwrap();
    a.render(&base, &landmarks, &config).unwrap();
    b.render(&base, &landmarks, &config).unwrap();
    assert_eq!(a.pixmap().data(), b.pixmap().data());
}

#[test]
fn seeded_renderers_match_including_hair() {
    let base = base_image(180, 160, 150);
    let landmarks = full_landmarks();
    let config = full_config();

    let mut a = MakeupRenderer::with_seed(W, H, 1234).unwrap();
    let mut b = MakeupRenderer::with_seed(W, H, 1234).unwrap();
    a.render(&base, &landmarks, &config).unwrap();
    b.render(&base, &landmarks, &config).unwrap();
    assert_eq!(a.pixmap().data(), b.pixmap().data());
}

#[test]
fn missing_region_landmarks_equal_unconfigured_region() {
    let base = base_image(180, 160, 150);
    let mut landmarks = full_landmarks();
    landmarks.left_eye.clear();

    let with_eyes = full_config();
    let mut without_eyes = full_config();
    without_eyes.eyes = None;

    // one empty eye list disables the whole eyes pass
    let mut a = MakeupRenderer::with_seed(W, H, 5).unwrap();
    let mut b = MakeupRenderer::with_seed(W, H, 5).unwrap();
    a.render(&base, &landmarks, &with_eyes).unwrap();
    b.render(&base, &landmarks, &without_eyes).unwrap();
    assert_eq!(a.pixmap().data(), b.pixmap().data());
}

#[test]
fn zero_opacity_region_leaves_pixels_unchanged() {
    let base = base_image(180, 160, 150);
    let landmarks = full_landmarks();
    let config = MakeupConfig {
        lips: Some(RegionStyle::new(Rgba::rgb(200, 30, 60)).with_opacity(0.0)),
        ..Default::default()
    };

    let mut renderer = MakeupRenderer::new(W, H).unwrap();
    renderer.render(&base, &landmarks, &config).unwrap();
    assert_eq!(renderer.pixmap().data(), base.data());
}

#[test]
fn painter_order_matches_sequential_compositing() {
    let base = base_image(180, 160, 150);
    let landmarks = full_landmarks();

    let combined = MakeupConfig {
        cheeks: full_config().cheeks,
        lips: full_config().lips,
        ..Default::default()
    };
    let cheeks_only = MakeupConfig {
        cheeks: full_config().cheeks,
        ..Default::default()
    };
    let lips_only = MakeupConfig {
        lips: full_config().lips,
        ..Default::default()
    };

    let mut one_pass = MakeupRenderer::new(W, H).unwrap();
    one_pass.render(&base, &landmarks, &combined).unwrap();

    // cheeks first, then lips over the intermediate result
    let mut staged = MakeupRenderer::new(W, H).unwrap();
    staged.render(&base, &landmarks, &cheeks_only).unwrap();
    let intermediate = staged.pixmap().clone();
    staged.render(&intermediate, &landmarks, &lips_only).unwrap();

    assert_eq!(one_pass.pixmap().data(), staged.pixmap().data());
}

#[test]
fn opaque_lips_multiply_against_gray_base() {
    let base = base_image(128, 128, 128);
    let landmarks = LandmarkSet {
        lips: vec![
            Point::new(80.0, 120.0),
            Point::new(160.0, 120.0),
            Point::new(160.0, 200.0),
            Point::new(80.0, 200.0),
        ],
        ..Default::default()
    };
    let config = MakeupConfig {
        lips: Some(RegionStyle::new(Rgba::rgb(255, 0, 0)).with_opacity(1.0)),
        ..Default::default()
    };

    let mut renderer = MakeupRenderer::new(W, H).unwrap();
    renderer.render(&base, &landmarks, &config).unwrap();

    // multiply of pure red over mid-gray keeps red, zeroes green and blue
    let (r, g, b, a) = pixel(renderer.pixmap(), 120, 160);
    assert!((r as i32 - 128).abs() <= 1, "r was {r}");
    assert_eq!((g, b), (0, 0));
    assert_eq!(a, 255);
}

#[test]
fn hair_only_darkens_and_stays_in_band() {
    let base = base_image(180, 160, 150);
    let landmarks = full_landmarks();
    let config = MakeupConfig {
        hair: Some(RegionStyle::new(Rgba::rgb(80, 50, 20))),
        ..Default::default()
    };

    let mut renderer = MakeupRenderer::with_seed(W, H, 99).unwrap();
    renderer.render(&base, &landmarks, &config).unwrap();
    let out = renderer.pixmap();

    // multiply never brightens any channel
    for (rendered, original) in out.data().chunks_exact(4).zip(base.data().chunks_exact(4)) {
        assert!(rendered[0] <= original[0]);
        assert!(rendered[1] <= original[1]);
        assert!(rendered[2] <= original[2]);
    }

    // the band covers the top edge and spares the chin
    assert_ne!(pixel(out, 120, 5), pixel(&base, 120, 5));
    assert_eq!(pixel(out, 120, 290), pixel(&base, 120, 290));
}

#[test]
fn rerendering_overwrites_previous_result() {
    let landmarks = full_landmarks();
    let mut renderer = MakeupRenderer::new(W, H).unwrap();

    let gray = base_image(128, 128, 128);
    renderer.render(&gray, &landmarks, &full_config()).unwrap();

    let white = base_image(255, 255, 255);
    renderer
        .render(&white, &landmarks, &MakeupConfig::default())
        .unwrap();
    assert_eq!(renderer.pixmap().data(), white.data());
}
