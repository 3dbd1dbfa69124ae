//! Headless demo driver
//!
//! Runs a scripted session against the simulation core, standing in for the
//! browser shell: it supplies the viewport and wall clock each tick and reads
//! the state back out. Useful for smoke-testing and log inspection.
//!
//! Usage: `neon-asteroids [seed] [--heavy] [--ticks N] [--json]`

use std::env;
use std::process::ExitCode;

use neon_asteroids::consts::FPS;
use neon_asteroids::sim::{tick, GamePhase, GameState, TickInput, Viewport};
use neon_asteroids::Tunables;

struct Args {
    seed: u64,
    heavy: bool,
    ticks: u64,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: 0xA57E_401D,
        heavy: false,
        ticks: 3600,
        json: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--heavy" => args.heavy = true,
            "--json" => args.json = true,
            "--ticks" => {
                let value = iter.next().ok_or("--ticks needs a value")?;
                args.ticks = value.parse().map_err(|_| format!("bad tick count: {value}"))?;
            }
            other => {
                args.seed = other
                    .parse()
                    .map_err(|_| format!("unrecognized argument: {other}"))?;
            }
        }
    }
    Ok(args)
}

/// Canned pilot: sweep the field with fire held, weaving and thrusting in
/// phases, with an occasional shield raise and hyperdrive jump.
fn scripted_input(tick_no: u64) -> TickInput {
    let phase = tick_no % 240;
    TickInput {
        turn_left: phase < 80,
        turn_right: (120..200).contains(&phase),
        thrust_forward: (80..120).contains(&phase),
        thrust_reverse: false,
        fire: true,
        shield: phase == 230,
        hyperdrive: tick_no % 900 == 450,
        start: false,
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: neon-asteroids [seed] [--heavy] [--ticks N] [--json]");
            return ExitCode::FAILURE;
        }
    };

    let tunables = if args.heavy {
        Tunables::heavy()
    } else {
        Tunables::default()
    };
    let viewport = Viewport::new(1280.0, 720.0);
    let mut state = GameState::new(args.seed, tunables);

    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, viewport, 0.0);

    let ms_per_tick = 1000.0 / FPS as f64;
    for n in 0..args.ticks {
        if state.phase == GamePhase::GameOver {
            break;
        }
        let input = scripted_input(n);
        tick(&mut state, &input, viewport, n as f64 * ms_per_tick);
    }

    println!(
        "seed {} ({}): {:?} at level {} with score {} after {} ticks",
        state.seed,
        if args.heavy { "heavy" } else { "standard" },
        state.phase,
        state.level,
        state.score,
        state.time_ticks,
    );
    println!(
        "{} asteroids, {} bombs, {} lasers in flight",
        state.asteroids.len(),
        state.bombs.len(),
        state.ship.lasers.len(),
    );

    if args.json {
        match serde_json::to_string_pretty(&state) {
            Ok(snapshot) => println!("{snapshot}"),
            Err(err) => {
                eprintln!("snapshot failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
