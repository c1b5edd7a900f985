//! Great-circle distance on a spherical earth

/// Mean earth radius used for all distance calculations
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between two `(latitude, longitude)` points given in
/// decimal degrees, using the spherical law of cosines.
///
/// The cosine term is clamped to `[-1, 1]` so that rounding on identical or
/// antipodal points never leaves the domain of `acos`.
#[must_use]
pub fn great_circle_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat_1, lon_1) = (a.0.to_radians(), a.1.to_radians());
    let (lat_2, lon_2) = (b.0.to_radians(), b.1.to_radians());

    let cosine = lat_1.sin() * lat_2.sin() + lat_1.cos() * lat_2.cos() * (lon_1 - lon_2).cos();
    EARTH_RADIUS_KM * cosine.clamp(-1.0, 1.0).acos()
}
