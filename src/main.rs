//! Rolling Circle headless demo
//!
//! Drives one controller with a seeded wandering input through a simulated
//! 60 Hz frame loop and logs progress.
//!
//! Usage: `rolling-circle [config.json] [seed]`

use glam::Vec2;

use rolling_circle::consts::FIXED_DT;
use rolling_circle::debug::GizmoBuffer;
use rolling_circle::sim::{ActionMaps, Bounds, FixedStepper, KinematicBody, WanderInput};
use rolling_circle::{ControllerBuilder, ControllerConfig, ControllerError};

/// Simulated frame time (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Frames to simulate
const FRAMES: u32 = 600;
/// Frames between progress logs
const LOG_EVERY: u32 = 60;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ControllerError> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => ControllerConfig::load(path)?,
        None => ControllerConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5eed);

    log::info!("Rolling Circle starting (seed {seed})");

    let mut maps = ActionMaps::new();
    maps.insert(
        config.action_map.clone(),
        config.move_action.clone(),
        Box::new(WanderInput::new(seed, 0.15)),
    );

    let mut controller = ControllerBuilder::new(config)
        .input_from(&mut maps)
        .bounds(&Bounds {
            size: Vec2::splat(1.0),
        })
        .build(KinematicBody::default())?;
    controller.on_activate();

    let mut stepper = FixedStepper::new(FIXED_DT);
    let mut gizmos = GizmoBuffer::new();

    for frame in 1..=FRAMES {
        controller.on_frame();
        stepper.advance(FRAME_DT, |dt| {
            controller.on_fixed_step(dt);
        });

        if frame % LOG_EVERY == 0 {
            gizmos.clear();
            controller.draw_debug(&mut gizmos);
            log::info!(
                "frame {frame}: pos {:?} vel {:?} rot {:.1} deg, rolled {:.3} \
                 ({} gizmo verts, alpha {:.2})",
                controller.body().pos,
                controller.velocity(),
                controller.body().rotation,
                controller.total_distance_traveled(),
                gizmos.vertices().len(),
                stepper.alpha(),
            );
        }
    }

    controller.on_deactivate();
    log::info!(
        "Done: rolled {:.3} units",
        controller.total_distance_traveled()
    );
    Ok(())
}
