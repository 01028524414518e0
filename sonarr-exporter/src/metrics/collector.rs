//! Scrape-time collector.
//!
//! Fetches every upstream resource once per call, translates each payload and
//! concatenates the results in a fixed order. Nothing is cached between calls.

use futures::future::{BoxFuture, join_all};
use sonarr_api::models::{HealthIssues, History, Queue, RootFolders, SystemStatus, WantedMissing};
use sonarr_api::SonarrClient;
use tracing::{debug, warn};

use super::descriptor::{self, MetricDesc, Observation};
use super::translate::Translate;

type Scrape = for<'a> fn(&'a SonarrClient) -> BoxFuture<'a, Vec<Observation>>;

/// Resource table, in emission order.
static SCRAPES: [Scrape; 6] = [
    scrape::<SystemStatus>,
    scrape::<History>,
    scrape::<WantedMissing>,
    scrape::<Queue>,
    scrape::<RootFolders>,
    scrape::<HealthIssues>,
];

/// Fetch one resource and translate it, substituting the payload's default
/// when the fetch fails.
fn scrape<T: Translate>(client: &SonarrClient) -> BoxFuture<'_, Vec<Observation>> {
    Box::pin(async move {
        let payload = match client.fetch::<T>().await {
            Ok(payload) => payload,
            Err(error) => {
                warn!(
                    resource = T::RESOURCE.name(),
                    url = %client.url_for(T::RESOURCE),
                    timeout = error.is_timeout(),
                    error = %error,
                    "Upstream fetch failed; reporting empty data"
                );
                T::default()
            }
        };
        payload.translate()
    })
}

/// Collector for a single Sonarr instance.
#[derive(Debug, Clone)]
pub struct SonarrCollector {
    client: SonarrClient,
}

impl SonarrCollector {
    pub fn new(client: SonarrClient) -> Self {
        Self { client }
    }

    /// Every metric family this collector may emit. Does not touch the
    /// network.
    pub fn describe(&self) -> &'static [&'static MetricDesc] {
        &descriptor::ALL
    }

    /// Run one collection cycle.
    ///
    /// Fetches run concurrently, each with its own timeout. A failed fetch
    /// only affects its own resource, so this always returns.
    pub async fn collect(&self) -> Vec<Observation> {
        let results = join_all(SCRAPES.iter().map(|scrape| scrape(&self.client))).await;
        let observations: Vec<Observation> = results.into_iter().flatten().collect();
        debug!(count = observations.len(), "Collection cycle finished");
        observations
    }
}
