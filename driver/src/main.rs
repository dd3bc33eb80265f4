use anyhow::Context;
use clap::Parser;
use generator::travel::build_travel_log;
use gui_bridge::bridge::GuiBridge;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use travelcore::gallery::drive;
use travelcore::{GalleryNavigator, TravelLog};
use workflow::config::AtlasConfig;
use workflow::runner::{AtlasSummary, Runner};

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Travel atlas driver: timeline, clusters, and gallery")]
struct Args {
    /// Load atlas settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Travel-log JSON document (overrides the config file)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Generate a synthetic log with this many visits when no data file is given
    #[arg(long, default_value_t = 24)]
    generate: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Map zoom level used for clustering
    #[arg(long)]
    zoom: Option<f64>,
    /// Print stats, the newest timeline rows, and marker clusters
    #[arg(long, default_value_t = false)]
    summary: bool,
    /// Run the autoplay slideshow for this many ticks
    #[arg(long)]
    slideshow: Option<usize>,
    /// Override the autoplay interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,
    /// Keep the HTTP bridge alive for a rendering front-end
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn load_log(config: &AtlasConfig, args: &Args) -> anyhow::Result<TravelLog> {
    match &config.data {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening travel log {}", path.display()))?;
            TravelLog::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing travel log {}", path.display()))
        }
        None => build_travel_log(args.generate, args.seed).context("generating travel log"),
    }
}

fn print_summary(summary: &AtlasSummary, runner: &Runner) {
    println!(
        "{} countries, {} cities, {} photos ({} dated)",
        summary.stats.country_count(),
        summary.stats.cities,
        summary.stats.photos,
        summary.stats.dated_photos
    );
    for entry in summary.timeline.iter().take(10) {
        let city = runner
            .visits()
            .get(entry.visit.index())
            .map(|visit| visit.title())
            .unwrap_or_default();
        println!("  {}  {:<28} {} photos", entry.date, city, entry.photos.len());
    }
    println!(
        "{} clusters at zoom {} ({} shared markers)",
        summary.clusters.len(),
        runner.config().map.zoom,
        summary.multi_clusters()
    );
}

fn slideshow_done(played: usize, limit: usize) -> bool {
    played >= limit
}

fn run_slideshow(runner: &Runner, ticks: usize) -> anyhow::Result<()> {
    if slideshow_done(0, ticks) {
        return Ok(());
    }
    let mut navigator = GalleryNavigator::new(runner.visits(), &runner.config().viewer);
    let Some(handle) = navigator.start_autoplay() else {
        println!("No dated photos to play.");
        return Ok(());
    };
    let period = navigator.autoplay_interval();

    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating runtime for slideshow")?;
    runtime.block_on(async {
        let slideshow = drive(handle, period, |handle| {
            if !navigator.autoplay_tick(handle) {
                return false;
            }
            let snapshot = navigator.snapshot();
            if let Some(current) = &snapshot.current {
                println!(
                    "[{}/{}] {} {} {}",
                    snapshot.current_index.unwrap_or(0) + 1,
                    snapshot.len,
                    snapshot.date.as_deref().unwrap_or("-"),
                    snapshot.title.as_deref().unwrap_or(""),
                    current.path()
                );
            }
            if slideshow_done(navigator.metrics().autoplay_ticks, ticks) {
                navigator.stop_autoplay();
            }
            true
        });
        tokio::select! {
            _ = slideshow => {}
            result = signal::ctrl_c() => result.context("awaiting Ctrl+C during slideshow")?,
        }
        Ok::<(), anyhow::Error>(())
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AtlasConfig::load(path)?,
        None => AtlasConfig::default(),
    }
    .with_zoom(args.zoom)
    .with_data(args.data.clone());
    if let Some(interval) = args.interval_ms {
        config.viewer.autoplay_interval_ms = interval;
    }
    config
        .viewer
        .validate()
        .context("validating viewer settings")?;

    let log = load_log(&config, &args)?;
    let runner = Runner::new(config.clone(), log);

    if args.summary {
        let summary = runner.summarize()?;
        print_summary(&summary, &runner);
    }
    if let Some(ticks) = args.slideshow {
        run_slideshow(&runner, ticks)?;
    }
    if args.serve {
        let gui_bridge = GuiBridge::new(Arc::new(runner.clone()));
        gui_bridge.spawn(config.bind);
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
