use crate::distance::distance_meters;
use crate::{City, Coordinate, Error, Gateway};

impl Gateway {
    /// Get the city nearest to `location`, together with its distance in
    /// meters.
    ///
    /// Fails with [`Error::NotFound`] if the directory is empty.
    pub async fn get_closest_city(&self, location: Coordinate) -> Result<(City, f64), Error> {
        let cities = self.fetch_cities().await?;

        match closest(cities, location) {
            Some((city, distance)) => Ok((city, distance)),
            None => Err(Error::NotFound),
        }
    }
}

pub(crate) fn closest(cities: Vec<City>, location: Coordinate) -> Option<(City, f64)> {
    let mut closest: Option<(City, f64)> = None;
    for city in cities {
        let distance = distance_meters(location, city.location);
        match &closest {
            Some((_, closest_distance)) => {
                if &distance < closest_distance {
                    closest = Some((city, distance));
                }
            }
            None => closest = Some((city, distance)),
        }
    }

    closest
}
