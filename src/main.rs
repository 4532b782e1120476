//! Barrier Sim entry point
//!
//! Headless native driver: builds a simulation from a preset or a settings
//! file and runs it through the fixed-timestep accumulator, logging the
//! population's average speed. A windowed host would call the same
//! `advance` + `instances` pair once per frame.
//!
//! Usage: `barrier-sim [preset|settings.json] [frames]`

use barrier_sim::settings::Preset;
use barrier_sim::{Settings, Simulation};

/// Host frame time (60 Hz display)
const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 600;
const REPORT_EVERY: u64 = 60;

fn load_settings(arg: Option<&str>) -> barrier_sim::Result<Settings> {
    let Some(arg) = arg else {
        return Ok(Settings::default());
    };
    if let Some(preset) = Preset::from_str(arg) {
        log::info!("Using preset {}", preset.as_str());
        return Ok(Settings::from_preset(preset));
    }
    Settings::load(arg)
}

fn run() -> barrier_sim::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = load_settings(args.first().map(String::as_str))?;
    let frames = args
        .get(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut sim = Simulation::new(&settings)?;
    log::info!(
        "Running {} frames: {} bodies in a {}x{} window, barrier {} ({:?})",
        frames,
        sim.len(),
        settings.window_width,
        settings.window_height,
        settings.barrier_extent,
        settings.barrier_shape
    );

    for frame in 1..=frames {
        let substeps = sim.advance(FRAME_DT);
        let instances = sim.instances();

        if frame % REPORT_EVERY == 0 {
            log::info!(
                "frame {:>5}  t={:>7.2}s  steps/frame={}  bodies={}  avg speed={:.2}",
                frame,
                sim.time,
                substeps,
                instances.len(),
                sim.history.latest().unwrap_or(0.0)
            );
        }
    }

    log::info!(
        "Done: {} steps, final average speed {:.2}",
        sim.frames,
        sim.average_speed()
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Barrier Sim (native) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless driver on the web; hosts embed the library directly
}
