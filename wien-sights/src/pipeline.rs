//! Layer ingestion: load a dataset, turn its features into visual entities and add them to the
//! dataset's thematic group.

use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use crate::app::AppContext;
use crate::async_runtime;
use crate::dataset::{DatasetDescriptor, GroupId};
use crate::error::SightsError;
use crate::layer::data_provider::{FeatureProvider, GeoJsonDecoder, UrlDataProvider};
use crate::layer::feature_group::VisualEntity;
use crate::layer::SharedGroup;

/// Counts of one successful ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Features added to the group as visual entities.
    pub added: usize,
    /// Features that could not be turned into an entity.
    pub skipped: usize,
}

/// Result of the ingestion of one dataset.
#[derive(Debug)]
pub struct IngestOutcome {
    /// Target group of the dataset.
    pub group: GroupId,
    /// Source url of the dataset.
    pub url: String,
    /// Counts, or the reason the dataset could not be loaded.
    pub result: Result<IngestReport, SightsError>,
}

/// Provider loading GeoJSON feature collections with HTTP GET requests.
pub fn default_provider() -> Arc<FeatureProvider> {
    Arc::new(UrlDataProvider::direct(GeoJsonDecoder))
}

/// Loads the dataset and adds its features to the group.
///
/// Entities are added in document order with a single write lock, so the group requests one
/// redraw for the whole batch. If loading fails the group is not touched.
pub async fn ingest(
    descriptor: &DatasetDescriptor,
    provider: &FeatureProvider,
    group: &SharedGroup,
) -> Result<IngestReport, SightsError> {
    let collection = provider.load(descriptor.url()).await?;
    let total = collection.features.len();

    let entities: Vec<VisualEntity> = collection
        .features
        .iter()
        .filter_map(|feature| descriptor.to_entity(feature))
        .collect();
    let added = group.write().extend(entities);

    Ok(IngestReport {
        added,
        skipped: total - added,
    })
}

async fn run(
    descriptor: &DatasetDescriptor,
    provider: &FeatureProvider,
    group: &SharedGroup,
) -> IngestOutcome {
    let result = ingest(descriptor, provider, group).await;
    match &result {
        Ok(report) => log::info!(
            "Added {} {} entities ({} features skipped)",
            report.added,
            descriptor.group(),
            report.skipped
        ),
        Err(err) => log::error!(
            "Failed to load {} from {}: {err}",
            descriptor.group(),
            descriptor.url()
        ),
    }

    IngestOutcome {
        group: descriptor.group(),
        url: descriptor.url().to_string(),
        result,
    }
}

/// Starts the ingestion of every dataset of the context as an independent task.
///
/// The tasks are not joined: each outcome is sent to the returned channel as soon as its
/// dataset is done, in completion order. Dropping the receiver does not stop the tasks.
///
/// Must be called within a tokio runtime.
pub fn launch(
    context: &AppContext,
    provider: Arc<FeatureProvider>,
) -> UnboundedReceiver<IngestOutcome> {
    let (sender, receiver) = unbounded_channel();

    for descriptor in context.datasets() {
        let descriptor = descriptor.clone();
        let group = context.group(descriptor.group()).clone();
        let provider = provider.clone();
        let sender = sender.clone();

        log::trace!("Launching {} ingestion", descriptor.group());
        async_runtime::spawn(async move {
            let outcome = run(&descriptor, &*provider, &group).await;
            if sender.send(outcome).is_err() {
                log::trace!("Outcome of {} dropped: receiver closed", descriptor.group());
            }
        });
    }

    receiver
}
