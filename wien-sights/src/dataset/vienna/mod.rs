//! Vienna sightseeing datasets from the open data service of the City of Vienna.

use wien_sights_types::geo::GeoPoint2d;
use wien_sights_types::latlon;

use crate::dataset::DatasetDescriptor;
use crate::layer::attribution::Attribution;

pub mod hotels;
pub mod lines;
pub mod sights;
pub mod stops;
pub mod zones;

/// Zoom level the map opens with.
pub const INITIAL_ZOOM: u32 = 15;

/// Attribution text of the thematic groups.
pub const DATA_ATTRIBUTION: &str = "Datenquelle: Stadt Wien - data.wien.gv.at";

/// St. Stephen's Cathedral, the center of the initial view.
pub fn stephansdom() -> GeoPoint2d {
    latlon!(48.208493, 16.373118)
}

/// Attribution of the open data service.
pub fn data_attribution() -> Attribution {
    Attribution::new(
        DATA_ATTRIBUTION,
        Some("https://data.wien.gv.at".to_string()),
    )
}

/// Descriptors of the five datasets.
pub fn datasets() -> Vec<DatasetDescriptor> {
    vec![
        stops::descriptor(),
        lines::descriptor(),
        sights::descriptor(),
        zones::descriptor(),
        hotels::descriptor(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::GroupId;

    #[test]
    fn dataset_urls() {
        let urls: Vec<(GroupId, String)> = datasets()
            .iter()
            .map(|d| (d.group(), d.url().to_string()))
            .collect();

        assert_eq!(
            urls,
            vec![
                (GroupId::Stops, "https://data.wien.gv.at/daten/geo?service=WFS&request=GetFeature&version=1.1.0&typeName=ogdwien:TOURISTIKHTSVSLOGD&srsName=EPSG:4326&outputFormat=json".to_string()),
                (GroupId::Lines, "https://data.wien.gv.at/daten/geo?service=WFS&request=GetFeature&version=1.1.0&typeName=ogdwien:TOURISTIKLINIEVSLOGD&srsName=EPSG:4326&outputFormat=json".to_string()),
                (GroupId::Sights, "https://data.wien.gv.at/daten/geo?service=WFS&request=GetFeature&version=1.1.0&typeName=ogdwien:SEHENSWUERDIGOGD&srsName=EPSG:4326&outputFormat=json".to_string()),
                (GroupId::Zones, "https://data.wien.gv.at/daten/geo?service=WFS&request=GetFeature&version=1.1.0&typeName=ogdwien:FUSSGEHERZONEOGD&srsName=EPSG:4326&outputFormat=json".to_string()),
                (GroupId::Hotels, "https://data.wien.gv.at/daten/geo?service=WFS&request=GetFeature&version=1.1.0&typeName=ogdwien:UNTERKUNFTOGD&srsName=EPSG:4326&outputFormat=json".to_string()),
            ]
        );
    }

    #[test]
    fn one_dataset_per_group() {
        let mut groups: Vec<GroupId> = datasets().iter().map(DatasetDescriptor::group).collect();
        groups.sort();
        assert_eq!(groups, GroupId::ALL.to_vec());
    }
}
