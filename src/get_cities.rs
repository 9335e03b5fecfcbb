use crate::city::parse_cities;
use crate::{City, Error, Gateway, BASE_URL, NETWORKS_PATH};
use serde::Deserialize;
use tracing::debug;

impl Gateway {
    // One request per call, shared by every city operation.
    pub(crate) async fn fetch_cities(&self) -> Result<Vec<City>, Error> {
        #[derive(Deserialize)]
        struct Response {
            networks: Vec<serde_json::Value>,
        }

        //https://api.citybik.es/v2/networks

        let url = format!("{}{}", BASE_URL, NETWORKS_PATH);
        let res: Response = self.get(&url).await?;

        let (cities, skipped) = parse_cities(res.networks);
        if skipped > 0 {
            debug!(skipped, "dropped malformed network records");
        }

        Ok(cities)
    }

    /// Get every available bike share city, unranked.
    ///
    /// Fails with [`Error::NotFound`] if no city survives decoding.
    pub async fn get_all_cities(&self) -> Result<Vec<City>, Error> {
        let cities = self.fetch_cities().await?;

        if cities.is_empty() {
            return Err(Error::NotFound);
        }

        Ok(cities)
    }
}
