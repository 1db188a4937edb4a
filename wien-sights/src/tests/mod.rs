use std::collections::HashMap;

use bytes::Bytes;
use geojson::FeatureCollection;

use crate::dataset::{vienna, GroupId};
use crate::error::SightsError;
use crate::layer::data_provider::{DataDecoder, DataProvider, GeoJsonDecoder};

pub enum TestResponse {
    Body(&'static str),
    NetworkError,
    Status(u16),
}

/// Serves scripted responses by url. Unknown urls answer with status 404.
#[derive(Default)]
pub struct TestDataProvider {
    responses: HashMap<String, TestResponse>,
}

impl TestDataProvider {
    pub fn with_fixtures() -> Self {
        vienna::datasets()
            .iter()
            .fold(Self::default(), |provider, dataset| {
                provider.with_response(dataset.url(), TestResponse::Body(fixture(dataset.group())))
            })
    }

    pub fn with_response(mut self, url: &str, response: TestResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn feature_count(&self, url: &str) -> usize {
        match self.responses.get(url) {
            Some(TestResponse::Body(body)) => decode(*body).map_or(0, |c| c.features.len()),
            _ => 0,
        }
    }
}

fn fixture(group: GroupId) -> &'static str {
    match group {
        GroupId::Stops => include_str!("data/stops.geojson"),
        GroupId::Lines => include_str!("data/lines.geojson"),
        GroupId::Zones => include_str!("data/zones.geojson"),
        GroupId::Sights => include_str!("data/sights.geojson"),
        GroupId::Hotels => include_str!("data/hotels.geojson"),
    }
}

fn decode(body: &'static str) -> Result<FeatureCollection, SightsError> {
    GeoJsonDecoder.decode(Bytes::from_static(body.as_bytes()))
}

#[async_trait::async_trait]
impl DataProvider<str, FeatureCollection> for TestDataProvider {
    async fn load(&self, url: &str) -> Result<FeatureCollection, SightsError> {
        // Lets other pipelines run in between, as a real request would.
        tokio::task::yield_now().await;

        match self.responses.get(url) {
            Some(TestResponse::Body(body)) => decode(*body),
            Some(TestResponse::NetworkError) => {
                Err(SightsError::Network("connection refused".to_string()))
            }
            Some(TestResponse::Status(status)) => Err(SightsError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(SightsError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
