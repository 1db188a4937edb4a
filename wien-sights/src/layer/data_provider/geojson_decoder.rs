use bytes::Bytes;
use geojson::{FeatureCollection, GeoJson};

use crate::error::SightsError;
use crate::layer::data_provider::DataDecoder;

/// Decodes a response body into a GeoJSON feature collection.
///
/// A single `Feature` document is accepted as a collection of one feature. A bare geometry is
/// rejected since it has no properties to build a popup from.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonDecoder;

impl DataDecoder for GeoJsonDecoder {
    type Input = Bytes;
    type Output = FeatureCollection;

    fn decode(&self, input: Bytes) -> Result<FeatureCollection, SightsError> {
        let text = std::str::from_utf8(&input)
            .map_err(|err| SightsError::Decoding(format!("body is not valid UTF-8: {err}")))?;
        let document: GeoJson = text
            .parse()
            .map_err(|err: geojson::Error| SightsError::Decoding(err.to_string()))?;

        match document {
            GeoJson::FeatureCollection(collection) => Ok(collection),
            GeoJson::Feature(feature) => Ok(FeatureCollection {
                bbox: None,
                features: vec![feature],
                foreign_members: None,
            }),
            GeoJson::Geometry(_) => Err(SightsError::Decoding(
                "expected a feature collection, got a bare geometry".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn decode(body: &'static str) -> Result<FeatureCollection, SightsError> {
        GeoJsonDecoder.decode(Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn decodes_feature_collection() {
        let collection = decode(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Point","coordinates":[16.37,48.21]},"properties":{"NAME":"A"}},
                {"type":"Feature","geometry":{"type":"Point","coordinates":[16.38,48.20]},"properties":{"NAME":"B"}}
            ]}"#,
        )
        .expect("valid collection");

        assert_eq!(collection.features.len(), 2);
    }

    #[test]
    fn single_feature_becomes_collection() {
        let collection = decode(
            r#"{"type":"Feature","geometry":null,"properties":{"NAME":"A"}}"#,
        )
        .expect("valid feature");
        assert_eq!(collection.features.len(), 1);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert_matches!(decode("<html>Service unavailable</html>"), Err(SightsError::Decoding(_)));
        assert_matches!(decode(r#"{"type":"FeatureCollection""#), Err(SightsError::Decoding(_)));
        assert_matches!(
            decode(r#"{"type":"Point","coordinates":[16.37,48.21]}"#),
            Err(SightsError::Decoding(_))
        );
        assert_matches!(
            GeoJsonDecoder.decode(Bytes::from_static(&[0xff, 0xfe, 0x00])),
            Err(SightsError::Decoding(_))
        );
    }
}
