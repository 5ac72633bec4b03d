use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use raybench_core::{load_scene, SceneDescription};
use raybench_renderer::{ImageBuffer, RayTracer, Scene};
use structopt::StructOpt;

/// Render a fixed scene repeatedly and report timings.
#[derive(Debug, StructOpt)]
#[structopt(name = "raybench", rename_all = "kebab-case")]
struct Opt {
    /// JSON scene file; the canonical scene is used when omitted
    #[structopt(long, parse(from_os_str))]
    scene: Option<PathBuf>,
    #[structopt(long, default_value = "500")]
    width: u32,
    #[structopt(long, default_value = "500")]
    height: u32,
    /// Number of timed renders
    #[structopt(short = "n", long, default_value = "1")]
    iterations: u32,
    /// Render buckets on the rayon thread pool
    #[structopt(short, long)]
    parallel: bool,
    /// Worker threads for --parallel (defaults to one per core); ignored
    /// for sequential renders
    #[structopt(long)]
    threads: Option<usize>,
    /// Output image; the format follows the extension
    #[structopt(short, long, default_value = "raybench.png", parse(from_os_str))]
    output: PathBuf,
    /// Skip writing the image
    #[structopt(long)]
    no_output: bool,
}

fn scene_description(opts: &Opt) -> Result<SceneDescription> {
    match &opts.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display())),
        None => Ok(SceneDescription::canonical()),
    }
}

/// Thread count for the rayon pool. Only parallel renders use the pool.
fn pool_threads(opts: &Opt) -> Option<usize> {
    match opts.threads {
        Some(threads) if !opts.parallel => {
            log::warn!("--threads {} ignored without --parallel", threads);
            None
        }
        threads => threads,
    }
}

fn run(opts: &Opt) -> Result<()> {
    anyhow::ensure!(
        opts.width > 0 && opts.height > 0,
        "image size must be positive, got {}x{}",
        opts.width,
        opts.height
    );
    anyhow::ensure!(opts.iterations > 0, "iterations must be at least 1");

    if let Some(threads) = pool_threads(opts) {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the rayon thread pool")?;
    }

    let description = scene_description(opts)?;
    let scene = Scene::from_description(&description).context("invalid scene")?;
    let tracer = RayTracer::default();
    let mut image = ImageBuffer::new(opts.width, opts.height);

    log::info!(
        "Rendering {}x{} {} time(s), {}",
        opts.width,
        opts.height,
        opts.iterations,
        if opts.parallel { "parallel" } else { "sequential" }
    );

    let mut total = Duration::ZERO;
    for i in 0..opts.iterations {
        let start = Instant::now();
        if opts.parallel {
            tracer.render_parallel(&scene, &mut image, opts.width, opts.height);
        } else {
            tracer.render(&scene, &mut image, opts.width, opts.height);
        }
        let elapsed = start.elapsed();
        log::debug!("Iteration {} took {:?}", i + 1, elapsed);
        total += elapsed;
    }

    let average = total / opts.iterations;
    log::info!(
        "Total time for {} iteration(s) = {} ms, avg time = {} ms",
        opts.iterations,
        total.as_millis(),
        average.as_millis()
    );

    if !opts.no_output {
        image
            .save(&opts.output)
            .with_context(|| format!("failed to write {}", opts.output.display()))?;
        log::info!("Saved {}", opts.output.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let opts = Opt::from_args();
    run(&opts)
}
