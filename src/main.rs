//! Demo driver: scripted stimuli into a headless spinning scene.

use std::path::Path;

use sholo::camera::SceneTransform;
use sholo::engine;
use sholo::error::SholoError;
use sholo::options::Options;
use sholo::simulation::ScriptedSource;
use sholo::util::FrameTiming;

/// Frame rate of the scripted camera.
const CAMERA_FPS: f32 = 30.0;

fn load_options() -> Result<Options, SholoError> {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path)),
        None => Ok(Options::default()),
    }
}

fn run(options: &Options) -> Result<(), SholoError> {
    let source = ScriptedSource::new(CAMERA_FPS)
        .realtime(true)
        .mirror(options.camera.mirror);
    let (mut stimuli, mut controller) = engine::launch(options, source)?;

    let mut timing = FrameTiming::new(options.motion.tick_rate);
    let mut scene = SceneTransform::new();
    let dt = options.motion.tick_dt();
    let report_every = u64::from(options.motion.tick_rate);

    while controller.is_producer_alive() {
        if !timing.should_tick() {
            std::thread::sleep(timing.time_until_next_tick());
            continue;
        }

        let out = controller.tick(dt);
        scene.apply_spin(out.spin);
        if let Some(delta) = out.pose {
            scene.apply_pose(&delta);
        }
        timing.end_tick();

        if timing.ticks() % report_every == 0 {
            let motion = controller.motion().state();
            let pose = controller.pose().current();
            log::info!(
                "speed {:.3} rev/s {:?} | gaze {:+.3} rad | {:.1} Hz",
                motion.current_speed,
                motion.rotation_direction,
                pose.angle,
                timing.rate()
            );
        }
    }

    let _ = stimuli.shutdown();
    let (axis, angle) = scene.orientation().to_axis_angle();
    log::info!("final orientation: {angle:.3} rad about {axis}");
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
