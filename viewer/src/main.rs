//! Loads the Vienna sightseeing layers and prints what arrived.
//!
//! ```text
//! wien-sights-viewer --view '#16/48.2085/16.3731' --export out/
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use wien_sights::dataset::GroupId;
use wien_sights::pipeline::{default_provider, launch, IngestOutcome};
use wien_sights::wien_sights_types::geo::GeoPoint;
use wien_sights::{AppContext, Messenger};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial view as a URL fragment: `#zoom/lat/lon`
    #[arg(long, value_name = "HASH")]
    view: Option<String>,
    /// Write one `<group>.geojson` file per thematic group into this directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,
}

#[derive(Default)]
struct RedrawCounter(AtomicUsize);

impl Messenger for RedrawCounter {
    fn request_redraw(&self) {
        let count = self.0.fetch_add(1, Ordering::Relaxed) + 1;
        log::debug!("Redraw requested ({count} so far)");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let redraws = Arc::new(RedrawCounter::default());
    let mut context = AppContext::vienna(cli.view.as_deref());
    context.set_messenger(redraws.clone());

    let mut outcomes = launch(&context, default_provider());
    let mut failed = 0;
    while let Some(outcome) = outcomes.recv().await {
        if !report(&outcome) {
            failed += 1;
        }
    }

    print_summary(&context);
    log::debug!(
        "{} redraws requested",
        redraws.0.load(Ordering::Relaxed)
    );

    if let Some(dir) = &cli.export {
        export(&context, dir)?;
    }

    if failed > 0 {
        log::warn!("{failed} of {} layers failed to load", GroupId::ALL.len());
    }

    Ok(())
}

fn report(outcome: &IngestOutcome) -> bool {
    match &outcome.result {
        Ok(report) => {
            println!(
                "{:<8} loaded: {} entities, {} skipped",
                outcome.group.name(), report.added, report.skipped
            );
            true
        }
        Err(err) => {
            println!("{:<8} failed: {err} ({})", outcome.group.name(), outcome.url);
            false
        }
    }
}

fn print_summary(context: &AppContext) {
    let map = context.map();
    let layers = map.layers();

    println!();
    println!(
        "Base layer: {}",
        layers.active_base().unwrap_or("none")
    );
    for (id, group) in context.groups() {
        let group = group.read();
        let visible = layers
            .find(id.label())
            .is_some_and(|index| layers.is_visible(index));
        let clusters = match group.clustering() {
            Some(_) => format!(", {} clusters", group.clusters(map.view().zoom()).len()),
            None => String::new(),
        };

        println!(
            "[{}] {:<32} {:>5} entities{clusters}",
            if visible { "x" } else { " " },
            id.label(),
            group.len()
        );
    }

    let center = map.view().center();
    println!();
    println!(
        "View: zoom {} at {:.6}, {:.6} ({})",
        map.view().zoom(),
        center.lat(),
        center.lon(),
        map.view_hash()
    );
    if let Some(bar) = map.scale_bar() {
        println!("Scale: {} ({} px)", bar.label, bar.width_px);
    }
    for attribution in map.attributions() {
        println!("{}", attribution.get_text());
    }
}

fn export(context: &AppContext, dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    for (id, group) in context.groups() {
        let collection = group.read().to_feature_collection();
        let path = dir.join(format!("{}.geojson", id.name()));
        let json = serde_json::to_string_pretty(&geojson::GeoJson::FeatureCollection(collection))?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;

        log::info!("Exported {id} to {}", path.display());
    }

    Ok(())
}
