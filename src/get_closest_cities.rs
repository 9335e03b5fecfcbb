use crate::distance::distance_meters;
use crate::get_closest_city::closest;
use crate::{City, Coordinate, Error, Gateway};

impl Gateway {
    /// Get up to `limit` cities sorted by distance to `location`, nearest
    /// first.
    ///
    /// An empty directory yields an empty list, not an error.
    pub async fn get_closest_cities(
        &self,
        location: Coordinate,
        limit: usize,
    ) -> Result<Vec<City>, Error> {
        let cities = self.fetch_cities().await?;

        let mut sorted = sorted_by_distance(cities, location);
        sorted.truncate(limit);
        Ok(sorted)
    }

    /// Get up to `limit` cities strictly within `radius` meters of
    /// `location`, sorted nearest first. If no city lies within the
    /// radius, the single nearest city is returned instead, even though
    /// it is outside it.
    ///
    /// Fails with [`Error::NotFound`] only if the directory is empty.
    pub async fn get_cities_within(
        &self,
        location: Coordinate,
        radius: f64,
        limit: usize,
    ) -> Result<Vec<City>, Error> {
        let cities = self.fetch_cities().await?;

        match within_or_nearest(cities, location, radius, limit) {
            Some(within) => Ok(within),
            None => Err(Error::NotFound),
        }
    }
}

pub(crate) fn within_or_nearest(
    cities: Vec<City>,
    location: Coordinate,
    radius: f64,
    limit: usize,
) -> Option<Vec<City>> {
    let mut within = sorted_within_radius(cities.clone(), location, radius);
    if !within.is_empty() {
        within.truncate(limit);
        return Some(within);
    }

    // Nothing inside the radius: hand back the nearest city anyway, so a
    // caller in a remote spot still gets a usable answer. The limit does
    // not apply to this single-element fallback.
    closest(cities, location).map(|(city, _)| vec![city])
}

pub(crate) fn sorted_by_distance(cities: Vec<City>, location: Coordinate) -> Vec<City> {
    let mut with_distances = cities
        .into_iter()
        .map(|city| {
            let distance = distance_meters(location, city.location);
            (city, distance)
        })
        .collect::<Vec<(City, f64)>>();

    // Stable sort, so equidistant cities keep their API order.
    with_distances.sort_by(|a, b| a.1.total_cmp(&b.1));

    with_distances.into_iter().map(|(city, _)| city).collect()
}

pub(crate) fn sorted_within_radius(
    cities: Vec<City>,
    location: Coordinate,
    radius: f64,
) -> Vec<City> {
    let within = cities
        .into_iter()
        .filter(|city| distance_meters(location, city.location) < radius)
        .collect::<Vec<City>>();

    sorted_by_distance(within, location)
}
