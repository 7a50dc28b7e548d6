use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};

/// A place the player has to find, as described by one line of the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    #[serde(flatten)]
    pub position: LatLng,
    /// Opaque handle the presentation layer uses to find the picture of this place.
    pub image: String,
    /// Height of the picture divided by its width.
    pub aspect_ratio: f64,
}
