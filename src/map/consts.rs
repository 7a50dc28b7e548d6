use crate::map::models::LatLng;

/// Mean radius of the Earth, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Where the guess pin is dropped before the first round of a session.
pub const DEFAULT_PIN: LatLng = LatLng {
    lat: 37.78825,
    lng: -122.4324,
};
