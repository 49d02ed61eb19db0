//! Spreadsheet Export
//!
//! Converts the full item collection (never the filtered view) into a
//! single-sheet xlsx workbook and hands it to the browser as a file
//! download named after the store.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::models::Item;

const SHEET_NAME: &str = "Stok";
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Error)]
pub enum ExportError {
    /// Empty collection: report to the user, generate nothing
    #[error("no items to export")]
    Empty,
    #[error(transparent)]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    #[error("download failed: {0}")]
    Download(String),
}

/// One spreadsheet row per item, with the per-row stock value
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub nama: String,
    pub kategori: &'static str,
    pub stok: u32,
    pub harga: f64,
    pub total: f64,
}

pub fn report_rows(items: &[Item]) -> Vec<ReportRow> {
    items
        .iter()
        .map(|i| ReportRow {
            nama: i.nama.clone(),
            kategori: i.kategori.as_str(),
            stok: i.stok,
            harga: i.harga,
            total: i.harga * i.stok as f64,
        })
        .collect()
}

/// Build the "Stok" workbook and serialize it to an xlsx buffer
pub fn stock_report(items: &[Item]) -> Result<Vec<u8>, ExportError> {
    if items.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in ["Nama", "Kategori", "Stok", "Harga", "Total"].iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (row, entry) in report_rows(items).iter().enumerate() {
        let row = row as u32 + 1;
        worksheet.write_string(row, 0, &entry.nama)?;
        worksheet.write_string(row, 1, entry.kategori)?;
        worksheet.write_number(row, 2, entry.stok as f64)?;
        worksheet.write_number(row, 3, entry.harga)?;
        worksheet.write_number(row, 4, entry.total)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Generate the report and trigger a browser download named after the
/// store, e.g. `Laporan_Toko Jaya.xlsx`
pub fn download_report(items: &[Item], nama_toko: &str) -> Result<(), ExportError> {
    let buffer = stock_report(items)?;
    let filename = format!("Laporan_{nama_toko}.xlsx");
    trigger_download(&buffer, &filename).map_err(|e| {
        ExportError::Download(e.as_string().unwrap_or_else(|| format!("{e:?}")))
    })
}

fn trigger_download(bytes: &[u8], filename: &str) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(XLSX_MIME);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &url)?;
    anchor.set_attribute("download", filename)?;
    if let Some(body) = document.body() {
        body.append_child(&anchor)?;
        if let Some(el) = anchor.dyn_ref::<web_sys::HtmlElement>() {
            el.click();
        }
        body.remove_child(&anchor)?;
    }
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Kategori;

    fn make_item(id: u32, nama: &str, harga: f64, stok: u32) -> Item {
        Item {
            id,
            nama: nama.to_string(),
            harga,
            stok,
            kategori: Kategori::Sembako,
            satuan: "Pcs".to_string(),
        }
    }

    #[test]
    fn test_report_rows_compute_per_row_total() {
        let items = vec![
            make_item(1, "Gula", 12000.0, 3),
            make_item(2, "Beras", 14000.0, 25),
        ];
        let rows = report_rows(&items);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total, 36000.0);
        assert_eq!(rows[1].total, 350000.0);
        assert_eq!(rows[0].kategori, "Sembako");
    }

    #[test]
    fn test_stock_report_refuses_empty_collection() {
        assert!(matches!(stock_report(&[]), Err(ExportError::Empty)));
    }

    #[test]
    fn test_stock_report_produces_workbook_bytes() {
        let items = vec![make_item(1, "Gula", 12000.0, 3)];
        let buffer = stock_report(&items).unwrap();
        // xlsx is a zip container; PK magic means a real file came out
        assert_eq!(&buffer[..2], b"PK");
    }
}
