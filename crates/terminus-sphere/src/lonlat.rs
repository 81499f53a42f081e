//! Conversions between longitude/latitude degrees and unit vectors, and
//! great-circle distance.

use glam::{DVec2, DVec3};

/// Unit vector for a `(longitude, latitude)` pair in degrees.
///
/// `+Z` points at the north pole and `+X` at longitude 0 on the equator.
pub fn to_unit_vector(lon_lat: DVec2) -> DVec3 {
    let (sin_lon, cos_lon) = lon_lat.x.to_radians().sin_cos();
    let (sin_lat, cos_lat) = lon_lat.y.to_radians().sin_cos();
    DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

/// `(longitude, latitude)` in degrees for a direction. The vector need not be
/// normalized. Longitude lands in `[-180, 180]`.
pub fn from_unit_vector(v: DVec3) -> DVec2 {
    let v = v.normalize_or_zero();
    DVec2::new(
        v.y.atan2(v.x).to_degrees(),
        v.z.clamp(-1.0, 1.0).asin().to_degrees(),
    )
}

/// Great-circle angle between two `(longitude, latitude)` points, in degrees.
///
/// Uses the haversine formula, which stays accurate for nearby points.
pub fn angular_distance(a: DVec2, b: DVec2) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let dlat = (b.y - a.y).to_radians();
    let dlon = (b.x - a.x).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    (2.0 * h.sqrt().min(1.0).asin()).to_degrees()
}
