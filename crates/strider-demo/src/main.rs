//! Headless demo driving the locomotion stack end to end.
//!
//! Runs the character machine, grounding probe, and chase camera on a fixed
//! 60 Hz tick, either from a deterministic input script or from a live
//! gamepad. State transitions and once-a-second summaries go to the log.
//!
//! Run with: `cargo run -p strider-demo`
//! Try: `cargo run -p strider-demo -- --ground rapier --ticks 900`

mod game_loop;
mod scripted;

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::IntoSystemConfigs;
use clap::Parser;
use glam::{Vec2, Vec3};
use strider_camera::{CameraRig, ChaseCamera, chase_follow_system};
use strider_config::{CameraConfig, CliArgs, Config, LocomotionConfig};
use strider_ground::{CollisionWorld, GroundSensor, PlanarGround, RapierProbe};
use strider_input::GamepadSource;
use strider_locomotion::{
    ActiveCameraBasis, CharacterBody, CharacterMachine, Ground, LocomotionState, Machine, SimTime,
    TickInput, TurnEase, locomotion_system,
};
use tracing::{debug, info, warn};

use game_loop::{FIXED_DT, GameLoop};
use scripted::ScriptedInput;

/// CLI arguments for the demo binary.
#[derive(Parser, Debug)]
#[command(name = "strider-demo", about = "Headless third-person locomotion demo")]
struct DemoArgs {
    /// Number of fixed simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Ground backing: "plane" (analytic) or "rapier" (raycast).
    #[arg(long, default_value = "plane")]
    ground: String,

    /// Read a live gamepad instead of the scripted input.
    #[arg(long)]
    gamepad: bool,

    #[command(flatten)]
    shared: CliArgs,
}

fn main() {
    let args = DemoArgs::parse();

    let config_dir = args
        .shared
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|dir| dir.join("strider")));
    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|err| {
            eprintln!("config error: {err}; using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args.shared);

    strider_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    info!("Strider locomotion demo");
    info!(
        "Tuning: speed={} turn={}s jump={} gravity={}",
        config.locomotion.move_speed,
        config.locomotion.full_turn_seconds,
        config.locomotion.jump_height,
        config.locomotion.gravity,
    );

    let ground = make_ground(&args.ground, &config);
    let (mut world, mut schedule) = build_world(&config, ground);

    if args.gamepad {
        run_gamepad(&args, &config, &mut world, &mut schedule);
    } else {
        run_scripted(&args, &config, &mut world, &mut schedule);
    }

    let mut query = world.query::<&CharacterBody>();
    if let Ok(body) = query.get_single(&world) {
        info!(
            "Finished: state={:?} position=({:.2}, {:.2}, {:.2}) facing=({:.2}, {:.2}, {:.2})",
            body.state(),
            body.position().x,
            body.position().y,
            body.position().z,
            body.facing().x,
            body.facing().y,
            body.facing().z,
        );
    }
}

/// Picks the grounding probe for the requested backing.
fn make_ground(kind: &str, config: &Config) -> Box<dyn GroundSensor + Send + Sync> {
    match kind {
        "rapier" => {
            let mut scene = CollisionWorld::new();
            scene.gravity.y = -config.locomotion.gravity;
            // Flat floor spanning 100x1x100 with its top face at y=0.
            scene.add_static_cuboid(Vec3::new(0.0, -0.5, 0.0), Vec3::new(50.0, 0.5, 50.0));
            info!("ground backing: rapier raycast probe");
            Box::new(RapierProbe::new(scene, Vec3::Y))
        }
        "plane" => {
            info!("ground backing: analytic plane");
            Box::new(PlanarGround::new(0.0, Vec3::Y))
        }
        other => {
            warn!("unknown ground backing {other:?}, using plane");
            Box::new(PlanarGround::new(0.0, Vec3::Y))
        }
    }
}

fn machine_from(cfg: &LocomotionConfig) -> CharacterMachine {
    CharacterMachine {
        move_speed: cfg.move_speed,
        move_acceleration: cfg.move_acceleration,
        friction_deceleration: cfg.friction_deceleration,
        move_dead_zone: cfg.move_dead_zone,
        turn_dead_zone: cfg.turn_dead_zone,
        airborne_acceleration: cfg.airborne_acceleration,
        jump_height: cfg.jump_height,
        gravity: cfg.gravity,
        turn: TurnEase::new(cfg.full_turn_seconds),
        ..Default::default()
    }
}

fn camera_from(cfg: &CameraConfig, locomotion: &LocomotionConfig) -> ChaseCamera {
    ChaseCamera {
        back_follow: cfg.back_follow,
        up_follow: cfg.up_follow,
        rotation_dead_zone: cfg.rotation_dead_zone_deg.to_radians(),
        turn: TurnEase::new(locomotion.full_turn_seconds),
    }
}

/// Spawns the character and its chase camera, wiring the two systems so the
/// camera phase runs strictly after the body update of the same tick.
fn build_world(
    config: &Config,
    ground: Box<dyn GroundSensor + Send + Sync>,
) -> (World, Schedule) {
    let mut world = World::new();
    world.insert_resource(SimTime {
        delta: FIXED_DT as f32,
    });
    world.insert_resource(TickInput::default());
    world.insert_resource(ActiveCameraBasis::default());
    world.insert_resource(Ground(ground));
    world.insert_resource(Machine(machine_from(&config.locomotion)));

    world.spawn(CharacterBody::new(Vec3::ZERO, Vec3::Z, Vec3::Y));

    let camera = camera_from(&config.camera, &config.locomotion);
    let rig = CameraRig::new(
        -Vec3::Z * camera.back_follow + Vec3::Y * camera.up_follow,
        Vec3::Z,
    );
    world.spawn((camera, rig));

    let mut schedule = Schedule::default();
    schedule.add_systems((locomotion_system, chase_follow_system).chain());
    (world, schedule)
}

/// Logs a state change, if any, and returns the current state.
fn observe_state(world: &mut World, last: LocomotionState) -> LocomotionState {
    let mut query = world.query::<&CharacterBody>();
    let Ok(body) = query.get_single(world) else {
        return last;
    };
    if body.state() != last {
        info!(
            "state {:?} -> {:?} at ({:.2}, {:.2}, {:.2})",
            last,
            body.state(),
            body.position().x,
            body.position().y,
            body.position().z,
        );
    }
    body.state()
}

fn log_summary(world: &mut World, seconds: u64) {
    let mut query = world.query::<&CharacterBody>();
    let Ok(body) = query.get_single(world) else {
        return;
    };
    info!(
        "t={seconds}s state={:?} pos=({:.2}, {:.2}, {:.2}) speed={:.2}",
        body.state(),
        body.position().x,
        body.position().y,
        body.position().z,
        body.velocity().length(),
    );
}

/// Deterministic run from the scripted showcase input.
fn run_scripted(args: &DemoArgs, config: &Config, world: &mut World, schedule: &mut Schedule) {
    let mut script = ScriptedInput::showcase();
    let mut last_state = LocomotionState::Idle;

    for tick in 0..args.ticks {
        let mut snapshot = script.poll();
        if let Some([x, y]) = config.input.stick_override {
            snapshot.stick = Vec2::new(x, y);
        }
        world.resource_mut::<TickInput>().0 = snapshot;
        schedule.run(world);

        last_state = observe_state(world, last_state);
        if config.debug.trace_ticks {
            let mut query = world.query::<&CharacterBody>();
            if let Ok(body) = query.get_single(world) {
                debug!(tick, state = ?body.state(), position = ?body.position());
            }
        }
        if tick % 60 == 59 {
            log_summary(world, (tick + 1) / 60);
        }
    }
}

/// Live run polling a gamepad each frame.
fn run_gamepad(args: &DemoArgs, config: &Config, world: &mut World, schedule: &mut Schedule) {
    let mut pad = GamepadSource::new();
    pad.set_hardware_dead_zone(config.input.gamepad_dead_zone);

    let mut game_loop = GameLoop::new();
    let mut last_state = LocomotionState::Idle;

    while game_loop.update_count() < args.ticks {
        let mut snapshot = pad.poll();
        if let Some([x, y]) = config.input.stick_override {
            snapshot.stick = Vec2::new(x, y);
        }

        game_loop.tick(
            |_, sim_time| {
                world.resource_mut::<TickInput>().0 = snapshot;
                // The press edge belongs to the first fixed step of the frame.
                snapshot.jump_pressed = false;
                schedule.run(world);
                last_state = observe_state(world, last_state);
                let tick = (sim_time / FIXED_DT).round() as u64;
                if tick % 60 == 59 {
                    log_summary(world, (tick + 1) / 60);
                }
            },
            || {},
        );

        std::thread::sleep(std::time::Duration::from_millis(1));
    }
}
