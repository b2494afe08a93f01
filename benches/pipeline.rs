//! Benchmarks for the colorcraft pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use colorcraft::render::{encode_png, Canvas};
use colorcraft::{
    generate_palette, palette_from_hue, ColorScheme, Colour, GradientConfig, GradientKind,
    GradientRenderer, PatternConfig, PatternKind, PatternRenderer, Resolution, SplatterConfig,
    SplatterRenderer,
};

// -- Palette benchmarks --

fn bench_palettes(c: &mut Criterion) {
    let mut group = c.benchmark_group("palettes");

    group.bench_function("tetradic_12", |b| {
        b.iter(|| palette_from_hue(ColorScheme::Tetradic, black_box(200.0), 12).unwrap())
    });

    group.bench_function("random_scheme_5", |b| {
        b.iter(|| generate_palette(black_box(ColorScheme::Random), 5).unwrap())
    });

    group.finish();
}

// -- Rendering benchmarks --

fn colours() -> Vec<Colour> {
    vec![
        Colour::rgb(0x26, 0x46, 0x53),
        Colour::rgb(0x2a, 0x9d, 0x8f),
        Colour::rgb(0xe9, 0xc4, 0x6a),
        Colour::rgb(0xf4, 0xa2, 0x61),
    ]
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(20);

    let small = Resolution::new(320, 180);

    let waves = PatternConfig::new(PatternKind::Waves, colours()).with_seed(42);
    group.bench_function("pattern_waves_320x180", |b| {
        b.iter(|| {
            let mut canvas = Canvas::with_resolution(small).unwrap();
            PatternRenderer::new(black_box(&waves))
                .render(&mut canvas)
                .unwrap();
            canvas
        })
    });

    let splatter = SplatterConfig::new(colours()).with_seed(1234).with_count(40);
    group.bench_function("splatter_40_320x180", |b| {
        b.iter(|| {
            SplatterRenderer::new(black_box(&splatter))
                .render_at(small)
                .unwrap()
        })
    });

    let mut blurred = splatter.clone();
    blurred.blur = 3.0;
    group.bench_function("splatter_40_blur_320x180", |b| {
        b.iter(|| {
            SplatterRenderer::new(black_box(&blurred))
                .render_at(small)
                .unwrap()
        })
    });

    let conic = GradientConfig::new(GradientKind::Conic, colours());
    group.bench_function("gradient_conic_320x180", |b| {
        b.iter(|| {
            let mut canvas = Canvas::with_resolution(small).unwrap();
            GradientRenderer::new(black_box(&conic))
                .render(&mut canvas)
                .unwrap();
            canvas
        })
    });

    group.finish();
}

// -- Encoding benchmarks --

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let config = GradientConfig::new(GradientKind::Linear, colours()).with_angle(30.0);
    let mut canvas = Canvas::with_resolution(Resolution::new(640, 360)).unwrap();
    GradientRenderer::new(&config).render(&mut canvas).unwrap();

    group.bench_function("png_640x360", |b| {
        b.iter(|| encode_png(black_box(&canvas)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_palettes, bench_rendering, bench_encoding);
criterion_main!(benches);
