//! Inventory Derivations
//!
//! Pure computations over the item collection. All of these are
//! recomputed from scratch on every change, never maintained
//! incrementally; the collection is always the last backend snapshot.

use crate::models::{Item, KategoriFilter};

/// An item counts as low stock at or below this quantity
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Total value of all stock: sum of unit price times quantity
pub fn total_asset_value(items: &[Item]) -> f64 {
    items.iter().map(|i| i.harga * i.stok as f64).sum()
}

/// Number of items at or below the low-stock threshold
pub fn low_stock_count(items: &[Item]) -> usize {
    items
        .iter()
        .filter(|i| i.stok <= LOW_STOCK_THRESHOLD)
        .count()
}

/// Items visible under the active search term and category filter,
/// sorted by id descending (most recently created first).
///
/// The search is a case-insensitive substring match on the name;
/// the filter dimension is a no-op for `KategoriFilter::Semua`.
pub fn visible_items(items: &[Item], search: &str, filter: KategoriFilter) -> Vec<Item> {
    let needle = search.to_lowercase();
    let mut visible: Vec<Item> = items
        .iter()
        .filter(|i| i.nama.to_lowercase().contains(&needle))
        .filter(|i| filter.matches(i.kategori))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.id.cmp(&a.id));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Kategori;

    fn make_item(id: u32, nama: &str, harga: f64, stok: u32, kategori: Kategori) -> Item {
        Item {
            id,
            nama: nama.to_string(),
            harga,
            stok,
            kategori,
            satuan: "Pcs".to_string(),
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item(1, "Gula Pasir", 12000.0, 3, Kategori::Sembako),
            make_item(2, "Kopi Abc", 15000.0, 10, Kategori::Minuman),
            make_item(3, "Kabel Usb", 25000.0, 5, Kategori::Elektronik),
            make_item(4, "Teh Celup", 8000.0, 6, Kategori::Minuman),
        ]
    }

    #[test]
    fn test_total_asset_value() {
        assert_eq!(total_asset_value(&[]), 0.0);
        let expected = 12000.0 * 3.0 + 15000.0 * 10.0 + 25000.0 * 5.0 + 8000.0 * 6.0;
        assert_eq!(total_asset_value(&sample()), expected);
    }

    #[test]
    fn test_low_stock_boundary() {
        // stok == 5 counts as low, stok == 6 does not
        let items = sample();
        assert_eq!(low_stock_count(&items), 2);
        assert!(items.iter().any(|i| i.stok == 5));
        assert!(items.iter().any(|i| i.stok == 6));
    }

    #[test]
    fn test_visible_items_search_is_case_insensitive() {
        let visible = visible_items(&sample(), "KOPI", KategoriFilter::Semua);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn test_visible_items_combines_search_and_category() {
        let minuman = KategoriFilter::Kategori(Kategori::Minuman);
        let visible = visible_items(&sample(), "e", minuman);
        // "Teh Celup" matches both; "Kabel Usb" matches search but not category
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 4);
    }

    #[test]
    fn test_visible_items_sorted_newest_first() {
        let visible = visible_items(&sample(), "", KategoriFilter::Semua);
        let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_semua_with_empty_search_is_identity() {
        let items = sample();
        let mut visible = visible_items(&items, "", KategoriFilter::Semua);
        visible.sort_by_key(|i| i.id);
        assert_eq!(visible, items);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let once = visible_items(&sample(), "a", KategoriFilter::Kategori(Kategori::Sembako));
        let twice = visible_items(&once, "a", KategoriFilter::Kategori(Kategori::Sembako));
        assert_eq!(once, twice);
    }
}
