use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_wireframe::core::{parse_obj, Model, Screen};
use tui_wireframe::engine::Pipeline;
use tui_wireframe::term::{encode_frame_into, frame_len};
use tui_wireframe::types::{Angles, Point3D, Preset};

/// UV-sphere-ish grid mesh with `n * n` vertices, as OBJ text.
fn grid_obj(n: usize) -> String {
    let mut src = String::new();
    for i in 0..n {
        for j in 0..n {
            let (u, v) = (i as f32 / n as f32, j as f32 / n as f32);
            let theta = u * std::f32::consts::TAU;
            let phi = v * std::f32::consts::PI;
            src.push_str(&format!(
                "v {} {} {}\n",
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin()
            ));
        }
    }
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let a = i * n + j + 1;
            src.push_str(&format!("f {} {} {} {}\n", a, a + 1, a + n + 1, a + n));
        }
    }
    src
}

fn bench_cube_frame(c: &mut Criterion) {
    let config = Preset::Cube.config();
    let model = Model::cube();
    let mut pipeline = Pipeline::new(&config);
    let mut screen = Screen::new(config.width, config.height);
    let mut angles = Angles::default();

    c.bench_function("cube_frame_80x40", |b| {
        b.iter(|| {
            angles = angles.advance(config.step_x, config.step_y);
            pipeline.render_into(black_box(&model), angles, &mut screen);
        })
    });
}

fn bench_mesh_frame(c: &mut Criterion) {
    let config = Preset::Mesh.config();
    let model = parse_obj(&grid_obj(40))
        .map(|data| data.into_model())
        .unwrap_or_default();
    let mut pipeline = Pipeline::new(&config);
    let mut screen = Screen::new(config.width, config.height);
    let mut angles = Angles::new(0.4, 0.3);

    c.bench_function("mesh_frame_170x170", |b| {
        b.iter(|| {
            angles = angles.advance(config.step_x, config.step_y);
            pipeline.render_into(black_box(&model), angles, &mut screen);
        })
    });
}

fn bench_encode_frame(c: &mut Criterion) {
    let config = Preset::Mesh.config();
    let mut screen = Screen::new(config.width, config.height);
    Pipeline::new(&config).render_into(&Model::cube(), Angles::new(0.5, 0.5), &mut screen);
    let mut out = Vec::with_capacity(frame_len(&screen));

    c.bench_function("encode_frame_170x170", |b| {
        b.iter(|| {
            out.clear();
            encode_frame_into(black_box(&screen), &mut out).ok();
        })
    });
}

fn bench_parse_obj(c: &mut Criterion) {
    let src = grid_obj(40);

    c.bench_function("parse_obj_1600_vertices", |b| {
        b.iter(|| parse_obj(black_box(&src)).map(|d| d.edge_pairs().len()))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let vertices: Vec<Point3D> = (0..2000)
        .map(|i| Point3D::new(i as f32, (i * 7 % 13) as f32, (i % 101) as f32))
        .collect();

    c.bench_function("normalize_2000_vertices", |b| {
        b.iter(|| Model::normalized(black_box(vertices.clone()), std::iter::empty()))
    });
}

criterion_group!(
    benches,
    bench_cube_frame,
    bench_mesh_frame,
    bench_encode_frame,
    bench_parse_obj,
    bench_normalize
);
criterion_main!(benches);
