use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chromacube::anim::{KeyframeAnimator, RngSource, DEFAULT_INTERVAL};
use chromacube::graphics::{draw_cube, Framebuffer};
use chromacube::term::{self, TerminalGuard};

/// A console-based cube demo with keyframe color and rotation animation
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Total number of frames to render
    #[arg(long, default_value_t = 9000)]
    frames: u32,

    /// Ticks between keyframe resamples
    #[arg(long, default_value_t = DEFAULT_INTERVAL, value_parser = clap::value_parser!(u32).range(1..))]
    interval: u32,

    /// Target frames per second; 0 disables pacing
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed for the keyframe random source (entropy-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Cube scale factor
    #[arg(long, default_value_t = 1.0)]
    size: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut animator = KeyframeAnimator::with_interval(RngSource(rng), args.interval);
    animator.set_size(args.size);

    let (width, height) = term::resolution();
    let mut fb = Framebuffer::new(width, height);

    info!(
        frames = args.frames,
        interval = args.interval,
        fps = args.fps,
        width,
        height,
        "starting render loop"
    );

    let frame_budget = (args.fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(args.fps)));

    let mut terminal = TerminalGuard::new()?;
    for _frame in 0..args.frames {
        let start = Instant::now();

        // Animate before draw, every frame, never skipped or reordered.
        animator.advance();
        draw_cube(&mut fb, animator.cube());
        terminal.present(&fb)?;

        if let Some(budget) = frame_budget {
            if let Some(rest) = budget.checked_sub(start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }
    drop(terminal);

    info!("render loop finished");
    Ok(())
}
