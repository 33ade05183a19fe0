//! Tile id re-identification for an existing tiles document.

use crate::ids::IdCounter;
use crate::types::TilesDocument;

/// Rewrite every tile id in document order. Nothing but `id` is touched.
pub fn dedup_tiles(doc: &mut TilesDocument, ids: &mut IdCounter) {
    for tile in &mut doc.tiles {
        tile.id = ids.next(&tile.id);
    }
}
