use crate::Coordinate;
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::TryFrom;

/// One dock in a network's live station list. Only stations the network
/// marks as installed are ever materialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,

    pub name: String,

    pub bikes: u32,

    pub spaces: u32,

    pub location: Coordinate,

    /// Raw API timestamp, passed through untouched.
    pub last_updated: String,

    pub sells_tickets: bool,
}

#[derive(Deserialize)]
struct RawStation {
    id: String,
    timestamp: String,
    latitude: f64,
    longitude: f64,
    name: String,
    #[serde(default, deserialize_with = "count_or_zero")]
    free_bikes: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    empty_slots: u32,
    #[serde(default)]
    extra: Option<serde_json::Value>,
}

// free_bikes/empty_slots come back as null, negative, or string-typed from
// some networks; any such value counts as zero rather than sinking the
// whole record.
fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let count = value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0);
    Ok(count)
}

// Records missing a required field are dropped and counted; uninstalled
// stations are filtered out without counting as drops.
pub(crate) fn parse_stations(records: Vec<serde_json::Value>) -> (Vec<Station>, usize) {
    let mut stations = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for record in records {
        let raw: RawStation = match serde_json::from_value(record) {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        let installed = raw
            .extra
            .as_ref()
            .and_then(|extra| extra.get("installed"))
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true);
        let sells_tickets = raw
            .extra
            .as_ref()
            .and_then(|extra| extra.get("banking"))
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true);

        // A station that is not installed is not physically present; it
        // never reaches the output.
        if !installed {
            continue;
        }

        stations.push(Station {
            id: raw.id,
            name: raw.name,
            bikes: raw.free_bikes,
            spaces: raw.empty_slots,
            location: Coordinate::new(raw.latitude, raw.longitude),
            last_updated: raw.timestamp,
            sells_tickets,
        });
    }

    (stations, skipped)
}
