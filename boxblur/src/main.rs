use anyhow::{Context, Result};
use boxblur::filter::{BlurMethod, BlurParams};
use boxblur::report::{DEFAULT_PREVIEW_LEN, format_elapsed, format_preview};
use boxblur::{SignalOptions, random_grid};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "boxblur",
    about = "Box blur a random grayscale grid and report the time taken"
)]
struct Opt {
    /// Grid width in samples
    #[structopt(long, default_value = "1920", allow_hyphen_values = true)]
    width: i64,

    /// Grid height in samples
    #[structopt(long, default_value = "1080", allow_hyphen_values = true)]
    height: i64,

    /// Kernel radius; the window is (2r + 1) x (2r + 1)
    #[structopt(short, long, default_value = "32", allow_hyphen_values = true)]
    radius: i64,

    /// Blur implementation: reference, separable or replicated
    #[structopt(short, long, default_value = "separable")]
    method: BlurMethod,

    /// Seed for the input signal (defaults to the current time)
    #[structopt(long)]
    seed: Option<u64>,

    /// Number of samples to show from the input and output [default: 100]
    #[structopt(long)]
    preview: Option<usize>,

    /// Cross-check the result against the reference blur
    #[structopt(long)]
    verify: bool,
}

/// Seed from the low 64 bits of the nanosecond wall clock
fn clock_seed() -> Result<u64> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the Unix epoch")?
        .as_nanos();
    Ok((nanos & u128::from(u64::MAX)) as u64)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();
    let params = BlurParams::new(opt.width, opt.height, opt.radius)?;
    let preview = opt.preview.unwrap_or(DEFAULT_PREVIEW_LEN);
    let seed = match opt.seed {
        Some(seed) => seed,
        None => clock_seed()?,
    };

    log::info!(
        "{}x{} grid, radius {}, method {}, seed {}",
        params.width,
        params.height,
        params.radius,
        opt.method,
        seed
    );

    let signal = SignalOptions::new(params.width, params.height).with_seed(seed);
    let grid = random_grid(&signal).context("generating input signal")?;
    println!("{}", format_preview(grid.data(), "Input", preview));

    let start = Instant::now();
    let blurred = opt.method.blur(&grid, params.radius)?;
    let elapsed = start.elapsed();

    log::info!("{} blur finished in {:?}", opt.method, elapsed);
    println!("Time taken: {}\n", format_elapsed(elapsed));
    println!("{}", format_preview(blurred.data(), "Output", preview));

    if opt.verify {
        if !opt.method.is_truncated() {
            log::warn!(
                "{} replicates edges; border cells will not match the reference",
                opt.method
            );
        }
        let reference = BlurMethod::Reference.blur(&grid, params.radius)?;
        let diffs = reference.count_differences(&blurred)?;
        if diffs == 0 {
            log::info!("verify: output matches the reference blur");
        } else {
            log::warn!(
                "verify: {} of {} cells differ from the reference blur",
                diffs,
                grid.sample_count()
            );
        }
    }

    Ok(())
}
