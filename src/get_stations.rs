use crate::station::parse_stations;
use crate::{Error, Gateway, Station, BASE_URL, REQUEST_OPTIONS};
use serde::Deserialize;
use tracing::debug;

impl Gateway {
    /// Get the live station list for the network identified by `href`,
    /// the endpoint suffix taken from a [`City`](crate::City).
    ///
    /// Stations the network marks as not installed are filtered out. An
    /// empty station list is a valid result, not an error.
    pub async fn get_stations(&self, href: &str) -> Result<Vec<Station>, Error> {
        #[derive(Deserialize)]
        struct Network {
            stations: Vec<serde_json::Value>,
        }

        #[derive(Deserialize)]
        struct Response {
            network: Network,
        }

        //https://api.citybik.es/v2/networks/dublinbikes?fields=stations

        let url = format!("{}{}{}", BASE_URL, href, REQUEST_OPTIONS);
        let res: Response = self.get(&url).await?;

        let (stations, skipped) = parse_stations(res.network.stations);
        if skipped > 0 {
            debug!(skipped, href, "dropped malformed station records");
        }

        Ok(stations)
    }
}
