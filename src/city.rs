use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// One bike share network, keyed by the `href` suffix used to fetch its
/// stations. Rebuilt from scratch on every directory fetch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,

    pub href: String,

    pub location: Coordinate,
}

#[derive(Deserialize)]
struct RawNetwork {
    href: String,
    location: RawNetworkLocation,
}

#[derive(Deserialize)]
struct RawNetworkLocation {
    city: String,
    latitude: f64,
    longitude: f64,
}

// Partial data is tolerated: records missing a required field are dropped
// and counted, never an error.
pub(crate) fn parse_cities(records: Vec<serde_json::Value>) -> (Vec<City>, usize) {
    let mut cities = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for record in records {
        let raw: RawNetwork = match serde_json::from_value(record) {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        // The href is the join key to the station list, so a network
        // without one is unreachable anyway.
        if raw.href.is_empty() {
            skipped += 1;
            continue;
        }

        cities.push(City {
            name: raw.location.city,
            href: raw.href,
            location: Coordinate::new(raw.location.latitude, raw.location.longitude),
        });
    }

    (cities, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn network(href: &str, city: &str, latitude: f64, longitude: f64) -> serde_json::Value {
        json!({
            "href": href,
            "name": "Some Scheme",
            "location": {
                "city": city,
                "country": "IE",
                "latitude": latitude,
                "longitude": longitude,
            },
        })
    }

    #[test]
    fn well_formed_records_become_cities() {
        let records = vec![
            network("/v2/networks/dublinbikes", "Dublin", 53.349805, -6.26031),
            network("/v2/networks/velib", "Paris", 48.856614, 2.352222),
        ];

        let (cities, skipped) = parse_cities(records);

        assert_eq!(skipped, 0);
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "Dublin");
        assert_eq!(cities[0].href, "/v2/networks/dublinbikes");
        assert_eq!(cities[1].location, Coordinate::new(48.856614, 2.352222));
    }

    #[test]
    fn records_missing_any_required_field_are_skipped() {
        let records = vec![
            json!({ "location": { "city": "Dublin", "latitude": 53.3, "longitude": -6.2 } }),
            json!({ "href": "/v2/networks/a", "location": { "latitude": 53.3, "longitude": -6.2 } }),
            json!({ "href": "/v2/networks/b", "location": { "city": "Cork", "longitude": -8.4 } }),
            json!({ "href": "/v2/networks/c", "location": { "city": "Galway", "latitude": 53.2 } }),
            network("/v2/networks/velib", "Paris", 48.856614, 2.352222),
        ];

        let (cities, skipped) = parse_cities(records);

        assert_eq!(skipped, 4);
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Paris");
    }

    #[test]
    fn wrong_typed_coordinates_are_skipped() {
        let records = vec![json!({
            "href": "/v2/networks/a",
            "location": { "city": "Dublin", "latitude": "53.3", "longitude": -6.2 },
        })];

        let (cities, skipped) = parse_cities(records);

        assert!(cities.is_empty());
        assert_eq!(skipped, 1);
    }

    #[test]
    fn decoding_the_same_payload_twice_gives_identical_cities() {
        let records = vec![
            network("/v2/networks/dublinbikes", "Dublin", 53.349805, -6.26031),
            network("/v2/networks/velib", "Paris", 48.856614, 2.352222),
        ];

        let (first, _) = parse_cities(records.clone());
        let (second, _) = parse_cities(records);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_href_is_skipped() {
        let records = vec![network("", "Dublin", 53.3, -6.2)];

        let (cities, skipped) = parse_cities(records);

        assert!(cities.is_empty());
        assert_eq!(skipped, 1);
    }
}
