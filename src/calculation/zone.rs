//! Zone resolution from postal codes.

use crate::models::Zone;
use crate::reference::ZonePartitionEntry;

/// Number of leading postal-code characters used for partition matching.
pub const POSTAL_PREFIX_LEN: usize = 3;

/// Resolves the rating zone for a postal code.
///
/// The first [`POSTAL_PREFIX_LEN`] characters of the code form the postal
/// prefix (shorter codes are used whole). The partition table is scanned in
/// source order and the first entry whose prefix the postal prefix starts
/// with wins; entries are not re-sorted by specificity. No match yields
/// [`Zone::NotFound`].
///
/// # Examples
///
/// ```
/// use shipment_rating::calculation::resolve_zone;
/// use shipment_rating::models::Zone;
/// use shipment_rating::reference::ZonePartitionEntry;
///
/// let table = vec![ZonePartitionEntry { prefix: "902".to_string(), zone: "8".to_string() }];
/// assert_eq!(resolve_zone("90210", &table), Zone::Found("8".to_string()));
/// assert_eq!(resolve_zone("10001", &table), Zone::NotFound);
/// ```
pub fn resolve_zone(postal_code: &str, partitions: &[ZonePartitionEntry]) -> Zone {
    let prefix: String = postal_code.trim().chars().take(POSTAL_PREFIX_LEN).collect();

    partitions
        .iter()
        .find(|entry| prefix.starts_with(entry.prefix.as_str()))
        .map(|entry| Zone::Found(entry.zone.clone()))
        .unwrap_or(Zone::NotFound)
}
