use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trailview_rs::config::Config;
use trailview_rs::pipeline::geo;
use trailview_rs::pipeline::ingest::{self, InputFile};
use trailview_rs::state::ActivityStore;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trailview_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let store = ActivityStore::new();

    let mut files = Vec::new();
    for path in std::env::args().skip(1) {
        match std::fs::read(&path) {
            Ok(contents) if contents.len() > config.max_file_size => {
                tracing::warn!(
                    "Skipping {}: larger than {} bytes",
                    path,
                    config.max_file_size
                );
            }
            Ok(contents) => {
                let name = std::path::Path::new(&path)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                files.push(InputFile::new(name, contents));
            }
            Err(e) => tracing::warn!("Skipping {}: {}", path, e),
        }
    }

    let activities = ingest::ingest_batch(&files, |current, total, filename| {
        tracing::info!("[{}/{}] {}", current, total, filename);
    })
    .await;

    for activity in &activities {
        tracing::info!(
            "{} ({:?}): {}, {}, avg {:.1} km/h",
            activity.name,
            activity.sport,
            geo::format_distance(activity.stats.distance_m),
            geo::format_duration(activity.stats.duration_secs),
            activity.stats.avg_speed_kmh
        );
        store.insert(activity.clone());
    }

    tracing::info!("Ingested {} of {} file(s)", store.len(), files.len());
}
