use crate::Coordinate;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two coordinates, using the
/// haversine formula on a mean spherical Earth. The directory spans
/// continents, so a flat-earth shortcut is not good enough here.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = deg2rad(a.latitude);
    let lat_b = deg2rad(b.latitude);
    let d_lat = deg2rad(b.latitude - a.latitude);
    let d_lon = deg2rad(b.longitude - a.longitude);

    let h = f64::sin(d_lat / 2.0) * f64::sin(d_lat / 2.0)
        + f64::cos(lat_a) * f64::cos(lat_b) * f64::sin(d_lon / 2.0) * f64::sin(d_lon / 2.0);

    2.0 * EARTH_RADIUS_M * f64::asin(f64::sqrt(h))
}

fn deg2rad(degrees: f64) -> f64 {
    let pi = std::f64::consts::PI;
    degrees * (pi / 180.0)
}
