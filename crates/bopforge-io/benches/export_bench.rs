use bopforge_core::Vector3;
use bopforge_data::Entity;
use bopforge_io::Level;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Builds a level of `count` blocks, every fourth one moving along a path.
fn build_level(count: usize) -> Level {
    let mut level = Level::default().with_seed(0xB0B);
    for i in 0..count {
        let x = (i % 64) as f64 * 2.0;
        let z = (i / 64) as f64 * 2.0;
        let mut block = Entity::block().with_position(Vector3::new(x, 0.0, z));
        if i % 4 == 0 {
            let path = &mut block.position_kinematics;
            path.enabled = true;
            path.set_travel_speed(8.0);
            path.add_position_point(Vector3::new(x, 0.0, z), 0.0);
            path.add_position_point(Vector3::new(x, 6.0, z), 0.0);
        }
        // Seeded and unchecked kinds only, so add cannot fail here.
        let _ = level.add(block);
    }
    level
}

fn bench_export(c: &mut Criterion) {
    let level = build_level(2048);

    let mut group = c.benchmark_group("Level Export");

    group.bench_function("Assemble document (2048 blocks)", |b| {
        b.iter(|| black_box(level.to_wire()));
    });

    group.bench_function("Serialize to buffer (2048 blocks)", |b| {
        let mut buffer = Vec::with_capacity(4 << 20);
        b.iter(|| {
            buffer.clear();
            let _ = black_box(level.write_to(&mut buffer, false));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_export);
criterion_main!(benches);
