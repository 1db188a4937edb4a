/// `GetFeature` request to an OGC Web Feature Service returning GeoJSON.
///
/// ```
/// use wien_sights::dataset::WfsQuery;
///
/// let url = WfsQuery::get_feature("ogdwien:SEHENSWUERDIGOGD").url();
/// assert!(url.ends_with("&outputFormat=json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WfsQuery {
    base_url: String,
    type_name: String,
    version: String,
    srs_name: String,
    output_format: String,
}

impl WfsQuery {
    /// Open data service of the City of Vienna.
    pub const WIEN_OGD: &'static str = "https://data.wien.gv.at/daten/geo";

    /// Query of all features of the given type from the Vienna open data service, in WGS84.
    pub fn get_feature(type_name: impl Into<String>) -> Self {
        Self {
            base_url: Self::WIEN_OGD.to_string(),
            type_name: type_name.into(),
            version: "1.1.0".to_string(),
            srs_name: "EPSG:4326".to_string(),
            output_format: "json".to_string(),
        }
    }

    /// Sets the service url.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the coordinate system of the returned features.
    pub fn with_srs_name(mut self, srs_name: impl Into<String>) -> Self {
        self.srs_name = srs_name.into();
        self
    }

    /// Request url.
    pub fn url(&self) -> String {
        format!(
            "{}?service=WFS&request=GetFeature&version={}&typeName={}&srsName={}&outputFormat={}",
            self.base_url, self.version, self.type_name, self.srs_name, self.output_format
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_service() {
        let url = WfsQuery::get_feature("ns:LAYER")
            .with_base_url("http://localhost:8080/wfs")
            .with_srs_name("EPSG:3857")
            .url();
        assert_eq!(
            url,
            "http://localhost:8080/wfs?service=WFS&request=GetFeature&version=1.1.0&typeName=ns:LAYER&srsName=EPSG:3857&outputFormat=json"
        );
    }
}
