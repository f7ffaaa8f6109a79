//! Stack merging rule for items carrying rarities

use crate::types::RarityId;

/// Whether two otherwise identical items may merge into one stack
///
/// With `prevent_different` set, rarities must match exactly; two items
/// without a rarity match, one with and one without do not.
pub fn can_stack(a: Option<RarityId>, b: Option<RarityId>, prevent_different: bool) -> bool {
    !prevent_different || a == b
}
