use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chomper::core::{disc_with_mouth, Player};
use chomper::types::{Heading, Vec2, MOUTH_STEP_DEG, PLAYER_RADIUS, PLAYER_SPEED, WINDOW_HEIGHT, WINDOW_WIDTH};

fn bench_disc(c: &mut Criterion) {
    c.bench_function("disc_with_mouth_r12", |b| {
        b.iter(|| {
            let mut plotted = 0u32;
            disc_with_mouth(
                black_box(Vec2::new(408.0, 408.0)),
                black_box(PLAYER_RADIUS),
                black_box(30.0),
                black_box(0.0),
                |_, _| plotted += 1,
            );
            black_box(plotted)
        })
    });
}

fn bench_frame_update(c: &mut Criterion) {
    let mut player = Player::new(Vec2::new(408.0, 408.0));
    player.steer(Some(Heading::Right));

    c.bench_function("player_frame_update", |b| {
        b.iter(|| {
            player.steer(black_box(None));
            player.advance(black_box(PLAYER_SPEED));
            player.wrap(WINDOW_WIDTH, WINDOW_HEIGHT, PLAYER_RADIUS);
            player.mouth.step(MOUTH_STEP_DEG);
            black_box(player.pos)
        })
    });
}

criterion_group!(benches, bench_disc, bench_frame_update);
criterion_main!(benches);
