//! Loading and decoding of remote data.

mod geojson_decoder;
mod url_data_provider;

use async_trait::async_trait;
use geojson::FeatureCollection;

use crate::error::SightsError;

pub use geojson_decoder::GeoJsonDecoder;
pub use url_data_provider::UrlDataProvider;

/// Loads data identified by `Key`.
#[async_trait]
pub trait DataProvider<Key, Data>: Send + Sync
where
    Key: ?Sized + Sync,
{
    /// Loads and decodes the data for the given key.
    async fn load(&self, key: &Key) -> Result<Data, SightsError>;
}

/// Converts raw loaded data into its typed form.
pub trait DataDecoder {
    /// Raw data type.
    type Input;
    /// Decoded data type.
    type Output;

    /// Decodes the input.
    fn decode(&self, input: Self::Input) -> Result<Self::Output, SightsError>;
}

/// Function producing the url to load the data for a key from.
pub trait UrlSource<Key: ?Sized>: (Fn(&Key) -> String) + Send + Sync {}
impl<Key: ?Sized, T: Fn(&Key) -> String> UrlSource<Key> for T where T: Send + Sync {}

/// Provider of GeoJSON feature collections, keyed by their url.
pub type FeatureProvider = dyn DataProvider<str, FeatureCollection>;
