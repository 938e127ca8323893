//! Normalization of raw provider records into domain records.

use coffee_compass_core::{CoffeeShop, ShopId};

use super::types::PlaceRecord;

/// Photo size requested when assembling image URLs.
const PHOTO_SIZE: &str = "600x360";

/// Normalize a raw provider place into a [`CoffeeShop`].
///
/// Substitution policy for missing fields: no photo means no image URL (the
/// renderer falls back to the shared placeholder), the first neighborhood
/// entry is used when present, and new records start with zero votes.
pub fn convert_place(record: &PlaceRecord) -> CoffeeShop {
    let img_url = record
        .photos
        .first()
        .map(|photo| format!("{}{PHOTO_SIZE}{}", photo.prefix, photo.suffix));

    let (address, neighborhood) = record.location.as_ref().map_or((None, None), |location| {
        (
            location.address.clone(),
            location.neighborhood.first().cloned(),
        )
    });

    CoffeeShop {
        id: ShopId::new(record.fsq_id.clone()),
        name: record.name.clone(),
        img_url,
        address,
        neighborhood,
        voting: 0,
    }
}
