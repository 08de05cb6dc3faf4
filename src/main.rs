use gait_ik::creature::{Creature, DriveParams};
use gait_ik::render::PrimitiveRecorder;
use gait_ik::skeleton::{Parent, SegmentId};
use gait_ik::StepPhase;
use glam::Vec2;
use std::f32::consts::{PI, TAU};

const FRAMES: usize = 600;

/// Assembles a lizard: a spine of flexible segments trailing the head,
/// leg pairs every few vertebrae, and a whippy tail. The construction
/// script is ordinary caller code; the library only sees segments and
/// systems.
fn build_lizard(size: f32, leg_pairs: usize, tail_bones: usize) -> Creature {
    let mut creature = Creature::builder()
        .position(Vec2::new(400.0, 300.0))
        .forward_drive(DriveParams::new(size * 10.0, size * 2.0, 0.5, 16.0))
        .turn_drive(DriveParams::new(0.5, 0.085, 0.5, 0.3))
        .seed(0xCAFE)
        .build();

    // Neck, stiff and straight.
    let mut spine: SegmentId = creature.attach(Parent::Body, size * 4.0, 0.0, PI / 8.0, 1.2);
    for _ in 0..2 {
        spine = creature.attach(Parent::Segment(spine), size * 4.0, 0.0, PI / 8.0, 1.2);
    }

    // Torso vertebrae, a leg pair on every other one.
    for vertebra in 0..(leg_pairs * 2) {
        spine = creature.attach(
            Parent::Segment(spine),
            size * 4.0,
            0.0,
            2.0 * PI / 3.0,
            1.1,
        );
        if vertebra % 2 == 0 {
            for side in [-1.0f32, 1.0] {
                let shoulder = creature.attach(
                    Parent::Segment(spine),
                    size * 6.0,
                    side * 0.8,
                    TAU,
                    2.0,
                );
                let shin = creature.attach(
                    Parent::Segment(shoulder),
                    size * 6.0,
                    -side * 1.2,
                    TAU,
                    2.0,
                );
                let foot = creature.attach(Parent::Segment(shin), size * 3.0, -side * 0.4, TAU, 2.0);
                creature.add_leg(foot, 3, size * 4.0);
            }
        }
    }

    // Tail, loose.
    for _ in 0..tail_bones {
        spine = creature.attach(Parent::Segment(spine), size * 3.0, 0.0, 2.0 * PI / 3.0, 1.05);
    }

    creature
}

fn main() {
    env_logger::init();

    let mut creature = build_lizard(2.0, 3, 8);
    log::info!(
        "lizard assembled: {} segments, {} systems",
        creature.skeleton().len(),
        creature.systems().len()
    );

    // The target loops around the arena, standing in for a pointer.
    for frame in 0..FRAMES {
        let t = frame as f32 / FRAMES as f32 * TAU;
        let target = Vec2::new(400.0, 300.0) + 220.0 * Vec2::new(t.cos(), (2.0 * t).sin());
        creature.follow(target);

        if frame % 60 == 0 {
            let planted = creature
                .systems()
                .iter()
                .filter(|sys| sys.phase() == Some(StepPhase::Planted))
                .count();
            log::info!(
                "frame {frame:3}: pos ({:.1}, {:.1}) heading {:+.2} speed {:.2} planted {planted}/{}",
                creature.position().x,
                creature.position().y,
                creature.heading(),
                creature.forward_speed(),
                creature.systems().len()
            );
        }
    }

    let mut recorder = PrimitiveRecorder::new();
    creature.draw(&mut recorder);
    println!(
        "final pose: ({:.1}, {:.1}) facing {:+.2}, {} wireframe primitives",
        creature.position().x,
        creature.position().y,
        creature.heading(),
        recorder.primitives().len()
    );
}
