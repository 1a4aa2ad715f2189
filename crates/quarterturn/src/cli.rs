//! Command-line interface.

use std::f32::consts::FRAC_PI_2;
use std::path::PathBuf;

use clap::Parser;
use quarterturn_core::Twist;
use quarterturn_view::{CubeSimulation, MAX_QUEUED_TWISTS};

use crate::net;
use crate::prefs::AnimationPreferences;

/// Frame rate the headless tick loop pretends to run at.
const ASSUMED_FPS: f32 = 60.0;

/// Higher number means faster exponential increase in twist speed when the
/// queue backs up.
const EXP_TWIST_FACTOR: f32 = 0.5;

/// Headless driver for the Quarterturn cube simulation.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Twists to apply in face notation, e.g. "R U R' U'". Unrecognized
    /// tokens are skipped with a warning.
    pub twists: Vec<String>,

    /// Scramble before applying any twists.
    #[arg(long)]
    pub scramble: bool,

    /// Number of scramble twists (implies --scramble; default 20-29).
    #[arg(long, value_name = "N")]
    pub scramble_moves: Option<u32>,

    /// Animation preferences file (YAML).
    #[arg(long, value_name = "FILE")]
    pub prefs: Option<PathBuf>,

    /// Disable ANSI colors in the printed net.
    #[arg(long)]
    pub no_color: bool,
}

/// Runs the simulation described by `args` and prints the final net.
pub fn exec(args: Args) -> eyre::Result<()> {
    let prefs = match &args.prefs {
        Some(path) => AnimationPreferences::load(path)?,
        None => AnimationPreferences::default(),
    };

    let mut sim = CubeSimulation::new();

    if args.scramble || args.scramble_moves.is_some() {
        sim.scramble(args.scramble_moves);
        run_to_idle(&mut sim, &prefs);
    }

    for token in args.twists.iter().flat_map(|s| s.split_whitespace()) {
        match token.parse::<Twist>() {
            Ok(twist) => {
                // Drain the queue far enough that scripted input is never
                // dropped by the interactive submission cap.
                while sim.queue_len() >= MAX_QUEUED_TWISTS {
                    sim.tick(tick_step(&prefs, sim.queue_len() + 1));
                }
                sim.submit_twist(twist);
            }
            Err(e) => log::warn!("{e}; ignoring"),
        }
    }
    run_to_idle(&mut sim, &prefs);

    println!("{}", net::net_string(sim.cube(), !args.no_color));
    Ok(())
}

fn run_to_idle(sim: &mut CubeSimulation, prefs: &AnimationPreferences) {
    let mut queue_max = 0;
    let mut ticks = 0_u64;
    while sim.is_animating() {
        queue_max = queue_max.max(sim.queue_len() + 1);
        sim.tick(tick_step(prefs, queue_max));
        ticks += 1;
    }
    log::debug!("animation settled after {ticks} ticks");
}

/// Per-tick angle step for the current preferences and queue backlog.
fn tick_step(prefs: &AnimationPreferences, queue_max: usize) -> f32 {
    // `twist_duration` is in seconds (per one twist); a quarter turn
    // spread over that many assumed frames.
    let base = FRAC_PI_2 / (prefs.twist_duration * ASSUMED_FPS);
    // Twist exponentially faster if there are more twists in the queue.
    let speed_mod = match prefs.dynamic_twist_speed {
        true => (queue_max.saturating_sub(1) as f32 * EXP_TWIST_FACTOR).exp(),
        false => 1.0,
    };
    let step = base * speed_mod;
    // Handle the case where something went wrong with the calculation
    // (e.g., division by zero): complete the twist in one tick.
    if (f32::EPSILON..=FRAC_PI_2).contains(&step) {
        step
    } else {
        FRAC_PI_2
    }
}
