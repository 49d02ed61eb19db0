//! Item Form State
//!
//! The create/edit form as a plain state machine, kept separate from
//! the component so the transitions are testable. Numeric fields are
//! held as their text-edit representation and only coerced at submit.

use crate::format::format_nama;
use crate::models::{Item, ItemDraft, Kategori};

/// Which mode the form is in. Editing carries the target item's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(u32),
}

/// Field state of the create/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub mode: FormMode,
    pub nama: String,
    pub harga: String,
    pub stok: String,
    pub kategori: Kategori,
    pub satuan: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            mode: FormMode::Creating,
            nama: String::new(),
            harga: String::new(),
            stok: String::new(),
            kategori: Kategori::Umum,
            satuan: "Pcs".to_string(),
        }
    }
}

impl ItemForm {
    /// Switch to editing the given item, populating every field from it.
    /// Numbers become their text representation.
    pub fn start_edit(&mut self, item: &Item) {
        self.mode = FormMode::Editing(item.id);
        self.nama = item.nama.clone();
        self.harga = item.harga.to_string();
        self.stok = item.stok.to_string();
        self.kategori = item.kategori;
        self.satuan = item.satuan.clone();
    }

    /// Back to Creating with all fields at their defaults.
    /// Used after a successful submit and on cancel.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Build the submission payload. Returns None when a required field
    /// is empty or a numeric field does not parse; the presentation
    /// layer's `required` inputs normally prevent that from happening.
    /// The name is passed through the title-case formatter so the
    /// stored canonical form is already title-cased. Negative prices
    /// are not rejected here; validation beyond coercion is the
    /// backend's concern.
    pub fn draft(&self) -> Option<ItemDraft> {
        if self.nama.is_empty() || self.harga.is_empty() || self.stok.is_empty() || self.satuan.is_empty() {
            return None;
        }
        let harga = self.harga.trim().parse::<f64>().ok()?;
        let stok = self.stok.trim().parse::<u32>().ok()?;
        Some(ItemDraft {
            nama: format_nama(&self.nama),
            harga,
            stok,
            kategori: self.kategori,
            satuan: self.satuan.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = ItemForm::default();
        assert_eq!(form.mode, FormMode::Creating);
        assert_eq!(form.kategori, Kategori::Umum);
        assert_eq!(form.satuan, "Pcs");
        assert!(form.nama.is_empty());
    }

    #[test]
    fn test_submit_coerces_and_title_cases() {
        let form = ItemForm {
            nama: "kopi abc".to_string(),
            harga: "15000".to_string(),
            stok: "10".to_string(),
            kategori: Kategori::Minuman,
            satuan: "Sachet".to_string(),
            ..Default::default()
        };
        let draft = form.draft().unwrap();
        assert_eq!(draft.nama, "Kopi Abc");
        assert_eq!(draft.harga, 15000.0);
        assert_eq!(draft.stok, 10);
        assert_eq!(draft.kategori, Kategori::Minuman);
        assert_eq!(draft.satuan, "Sachet");
    }

    #[test]
    fn test_submit_rejects_empty_required_fields() {
        let mut form = ItemForm {
            nama: "gula".to_string(),
            harga: "12000".to_string(),
            stok: "3".to_string(),
            ..Default::default()
        };
        assert!(form.draft().is_some());
        form.harga.clear();
        assert!(form.draft().is_none());
    }

    #[test]
    fn test_submit_rejects_unparsable_numbers() {
        let form = ItemForm {
            nama: "gula".to_string(),
            harga: "dua belas ribu".to_string(),
            stok: "3".to_string(),
            ..Default::default()
        };
        assert!(form.draft().is_none());
    }

    #[test]
    fn test_start_edit_populates_text_fields() {
        let item = Item {
            id: 7,
            nama: "gula".to_string(),
            harga: 12000.0,
            stok: 3,
            kategori: Kategori::Sembako,
            satuan: "Kg".to_string(),
        };
        let mut form = ItemForm::default();
        form.start_edit(&item);
        assert_eq!(form.mode, FormMode::Editing(7));
        assert_eq!(form.nama, "gula");
        assert_eq!(form.harga, "12000");
        assert_eq!(form.stok, "3");
        assert_eq!(form.kategori, Kategori::Sembako);
        assert_eq!(form.satuan, "Kg");
    }

    #[test]
    fn test_reset_returns_to_creating_defaults() {
        let item = Item {
            id: 7,
            nama: "gula".to_string(),
            harga: 12000.0,
            stok: 3,
            kategori: Kategori::Sembako,
            satuan: "Kg".to_string(),
        };
        let mut form = ItemForm::default();
        form.start_edit(&item);
        assert!(form.is_editing());
        form.reset();
        assert_eq!(form, ItemForm::default());
        assert!(!form.is_editing());
    }
}
