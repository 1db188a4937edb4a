use async_trait::async_trait;
use bytes::Bytes;

use crate::error::SightsError;
use crate::layer::data_provider::{DataDecoder, DataProvider, UrlSource};
use crate::platform::{PlatformService, PlatformServiceImpl};

/// Loads data with one HTTP GET request per key and decodes the response body.
///
/// There is no caching, retry or timeout: every call results in exactly one request.
pub struct UrlDataProvider<Key, Decoder>
where
    Key: ?Sized,
    Decoder: DataDecoder<Input = Bytes>,
{
    url_source: Box<dyn UrlSource<Key>>,
    decoder: Decoder,
    platform_service: PlatformServiceImpl,
}

impl<Key, Decoder> UrlDataProvider<Key, Decoder>
where
    Key: ?Sized,
    Decoder: DataDecoder<Input = Bytes>,
{
    /// Creates a new provider.
    pub fn new(url_source: impl UrlSource<Key> + 'static, decoder: Decoder) -> Self {
        Self {
            url_source: Box::new(url_source),
            decoder,
            platform_service: PlatformServiceImpl::new(),
        }
    }
}

impl<Decoder> UrlDataProvider<str, Decoder>
where
    Decoder: DataDecoder<Input = Bytes>,
{
    /// Creates a provider whose keys are the urls themselves.
    pub fn direct(decoder: Decoder) -> Self {
        Self::new(|url: &str| url.to_owned(), decoder)
    }
}

#[async_trait]
impl<Key, Decoder> DataProvider<Key, Decoder::Output> for UrlDataProvider<Key, Decoder>
where
    Key: ?Sized + Sync,
    Decoder: DataDecoder<Input = Bytes> + Send + Sync,
    Decoder::Output: Send,
{
    async fn load(&self, key: &Key) -> Result<Decoder::Output, SightsError> {
        let url = (self.url_source)(key);
        let started = web_time::Instant::now();

        let data = self.platform_service.load_bytes_from_url(&url).await?;
        log::info!(
            "Loaded {} bytes from {url} in {:?}",
            data.len(),
            started.elapsed()
        );

        self.decoder.decode(data)
    }
}
