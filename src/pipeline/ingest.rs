use crate::error::FormatError;
use crate::pipeline::{aggregate, parse};
use crate::types::activity::{Activity, FileFormat};
use crate::types::sport;

#[derive(Debug, Clone)]
pub struct InputFile {
    pub name: String,
    pub contents: Vec<u8>,
}

impl InputFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Runs a batch of input files through the pipeline, one file at a time.
///
/// The progress callback fires with `(1-based index, total, filename)` before
/// each file. Files with an unrecognized extension are ignored; files that
/// fail to parse are skipped with a warning. Neither aborts the batch, and
/// the returned activities keep the input order.
pub async fn ingest_batch<F>(files: &[InputFile], mut on_progress: F) -> Vec<Activity>
where
    F: FnMut(usize, usize, &str),
{
    let total = files.len();
    let mut activities = Vec::new();

    for (index, file) in files.iter().enumerate() {
        on_progress(index + 1, total, &file.name);

        match FileFormat::from_filename(&file.name) {
            Some(format) => match ingest_file(file, format) {
                Ok(activity) => {
                    tracing::info!(
                        "Ingested {} ({:?}, {} points, {:.2} km)",
                        file.name,
                        activity.sport,
                        activity.points.len(),
                        activity.stats.distance_m / 1000.0
                    );
                    activities.push(activity);
                }
                Err(e) => tracing::warn!("Skipping {}: {}", file.name, e),
            },
            None => tracing::debug!("Ignoring {}: unsupported extension", file.name),
        }

        // Let the caller's progress layer run before the next parse
        tokio::task::yield_now().await;
    }

    activities
}

fn ingest_file(file: &InputFile, format: FileFormat) -> Result<Activity, FormatError> {
    let parsed = parse::parse(&file.contents, format, &file.name)?;
    let sport = sport::classify(parsed.sport.as_deref());
    aggregate::aggregate(parsed.points, parsed.name, sport)
}
