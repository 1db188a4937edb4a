//! Greedy grid clustering of markers in screen space.

use ahash::{HashMap, HashMapExt};
use wien_sights_types::cartesian::Point2d;
use wien_sights_types::geo::{GeoPoint, GeoPoint2d, NewGeoPoint, Projection, WebMercator};

use crate::tile_schema::web_resolution;

/// Parameters of marker clustering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterOptions {
    /// Markers closer than this number of pixels to the first marker of a cluster join it.
    pub max_cluster_radius: f64,
    /// From this zoom level on every marker stands alone.
    pub disable_clustering_at_zoom: Option<u32>,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_cluster_radius: 80.0,
            disable_clustering_at_zoom: None,
        }
    }
}

impl ClusterOptions {
    /// Returns true if markers are clustered at the given zoom level.
    pub fn is_enabled_at(&self, zoom: u32) -> bool {
        self.disable_clustering_at_zoom
            .map_or(true, |disabled_at| zoom < disabled_at)
    }
}

/// Group of markers shown as one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCluster {
    /// Mean position of the members.
    pub center: GeoPoint2d,
    /// Ids of the clustered markers, in insertion order.
    pub members: Vec<usize>,
}

impl MarkerCluster {
    fn single(id: usize, position: GeoPoint2d) -> Self {
        Self {
            center: position,
            members: vec![id],
        }
    }

    /// Number of markers in the cluster.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// A cluster always has at least one member, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

struct ClusterSeed {
    pixel: Point2d,
    lat_sum: f64,
    lon_sum: f64,
    members: Vec<usize>,
}

/// Clusters `markers` (id and position pairs) for display at `zoom`.
///
/// Every marker joins the closest cluster whose first marker lies within the cluster radius (in
/// pixels at the given zoom), or starts a new cluster. Clusters are returned in the order of their
/// first marker.
pub fn cluster_markers(
    markers: impl IntoIterator<Item = (usize, GeoPoint2d)>,
    zoom: u32,
    options: &ClusterOptions,
) -> Vec<MarkerCluster> {
    if !options.is_enabled_at(zoom) || options.max_cluster_radius <= 0.0 {
        return markers
            .into_iter()
            .map(|(id, position)| MarkerCluster::single(id, position))
            .collect();
    }

    let projection: WebMercator = WebMercator::default();
    let resolution = web_resolution(zoom);
    let radius = options.max_cluster_radius;

    let mut seeds: Vec<ClusterSeed> = vec![];
    let mut grid: HashMap<(i64, i64), Vec<usize>> = HashMap::new();

    for (id, position) in markers {
        let Some(pixel) = projection
            .project(&position)
            .map(|projected| projected.scaled_down(resolution))
        else {
            log::warn!("Marker {id} at {position:?} cannot be projected and is not clustered");
            seeds.push(ClusterSeed {
                pixel: Point2d::new(f64::NAN, f64::NAN),
                lat_sum: position.lat(),
                lon_sum: position.lon(),
                members: vec![id],
            });
            continue;
        };

        let cell = grid_cell(&pixel, radius);
        let closest = neighbour_cells(cell)
            .filter_map(|neighbour| grid.get(&neighbour))
            .flatten()
            .map(|&seed_index| (seed_index, seeds[seed_index].pixel.distance(&pixel)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        match closest {
            Some((seed_index, _)) => {
                let seed = &mut seeds[seed_index];
                seed.lat_sum += position.lat();
                seed.lon_sum += position.lon();
                seed.members.push(id);
            }
            None => {
                grid.entry(cell).or_default().push(seeds.len());
                seeds.push(ClusterSeed {
                    pixel,
                    lat_sum: position.lat(),
                    lon_sum: position.lon(),
                    members: vec![id],
                });
            }
        }
    }

    seeds
        .into_iter()
        .map(|seed| {
            let count = seed.members.len() as f64;
            MarkerCluster {
                center: GeoPoint2d::latlon(seed.lat_sum / count, seed.lon_sum / count),
                members: seed.members,
            }
        })
        .collect()
}

fn grid_cell(pixel: &Point2d, cell_size: f64) -> (i64, i64) {
    (
        (pixel.x() / cell_size).floor() as i64,
        (pixel.y() / cell_size).floor() as i64,
    )
}

fn neighbour_cells((x, y): (i64, i64)) -> impl Iterator<Item = (i64, i64)> {
    (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| (x + dx, y + dy)))
}
