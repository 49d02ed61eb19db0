//! Frontend Models
//!
//! Data structures matching the inventory backend's JSON shapes.

use serde::{Deserialize, Serialize};

/// Item category, fixed set defined by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Kategori {
    #[default]
    Umum,
    Sembako,
    Elektronik,
    Minuman,
    Lainnya,
}

impl Kategori {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kategori::Umum => "Umum",
            Kategori::Sembako => "Sembako",
            Kategori::Elektronik => "Elektronik",
            Kategori::Minuman => "Minuman",
            Kategori::Lainnya => "Lainnya",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Sembako" => Kategori::Sembako,
            "Elektronik" => Kategori::Elektronik,
            "Minuman" => Kategori::Minuman,
            "Lainnya" => Kategori::Lainnya,
            _ => Kategori::Umum,
        }
    }
}

/// Category filter for the item list. "Semua" is a filter-only value,
/// not a real category an item can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KategoriFilter {
    #[default]
    Semua,
    Kategori(Kategori),
}

impl KategoriFilter {
    pub fn label(&self) -> &'static str {
        match self {
            KategoriFilter::Semua => "Semua",
            KategoriFilter::Kategori(k) => k.as_str(),
        }
    }

    /// Whether an item with the given category passes this filter
    pub fn matches(&self, kategori: Kategori) -> bool {
        match self {
            KategoriFilter::Semua => true,
            KategoriFilter::Kategori(k) => *k == kategori,
        }
    }
}

/// Stock item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub nama: String,
    pub harga: f64,
    pub stok: u32,
    pub kategori: Kategori,
    pub satuan: String,
}

/// Create/update payload: the item fields sans id. The backend assigns
/// ids and writes the activity log as a side effect of every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDraft {
    pub nama: String,
    pub harga: f64,
    pub stok: u32,
    pub kategori: Kategori,
    pub satuan: String,
}

/// Action tag on an activity log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAksi {
    Tambah,
    Edit,
    Hapus,
    /// Unknown tag from a newer backend
    Lain,
}

impl LogAksi {
    pub fn from_tag(s: &str) -> Self {
        match s {
            "TAMBAH" => LogAksi::Tambah,
            "EDIT" => LogAksi::Edit,
            "HAPUS" => LogAksi::Hapus,
            _ => LogAksi::Lain,
        }
    }
}

impl<'de> Deserialize<'de> for LogAksi {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(LogAksi::from_tag(&tag))
    }
}

/// Activity log entry, computed server-side on every item mutation.
/// The client only ever reads these, newest first per backend ordering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogEntry {
    pub id: u32,
    pub aksi: LogAksi,
    pub rincian: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Authenticated user profile (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(rename = "namaToko")]
    pub nama_toko: String,
}

/// Login response, persisted across reloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kategori_round_trip() {
        assert_eq!(Kategori::Sembako.as_str(), "Sembako");
        assert_eq!(Kategori::from_str("Minuman"), Kategori::Minuman);
        // Unknown strings fall back to the default category
        assert_eq!(Kategori::from_str("???"), Kategori::Umum);
    }

    #[test]
    fn test_kategori_serde_uses_backend_strings() {
        let json = serde_json::to_string(&Kategori::Elektronik).unwrap();
        assert_eq!(json, "\"Elektronik\"");
        let back: Kategori = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Kategori::Elektronik);
    }

    #[test]
    fn test_filter_semua_matches_everything() {
        assert!(KategoriFilter::Semua.matches(Kategori::Umum));
        assert!(KategoriFilter::Semua.matches(Kategori::Lainnya));
        let only_minuman = KategoriFilter::Kategori(Kategori::Minuman);
        assert!(only_minuman.matches(Kategori::Minuman));
        assert!(!only_minuman.matches(Kategori::Umum));
    }

    #[test]
    fn test_log_entry_deserialization() {
        let json = r#"{"id":3,"aksi":"TAMBAH","rincian":"Barang baru: Kopi","createdAt":"2024-05-01T09:30:00Z"}"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.aksi, LogAksi::Tambah);
        assert_eq!(entry.rincian, "Barang baru: Kopi");
    }

    #[test]
    fn test_log_aksi_unknown_tag() {
        let entry: LogAksi = serde_json::from_str("\"RESTOK\"").unwrap();
        assert_eq!(entry, LogAksi::Lain);
    }

    #[test]
    fn test_session_serde_rename() {
        let json = r#"{"token":"abc","user":{"id":1,"namaToko":"Toko Jaya"}}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.user.nama_toko, "Toko Jaya");
        let back = serde_json::to_string(&session.user).unwrap();
        assert!(back.contains("namaToko"));
    }
}
