//! Display Formatting
//!
//! Pure formatting helpers for item names and Rupiah amounts.

/// Title-case an item name: lowercase everything, then capitalize the
/// first letter of each space-separated word. Idempotent; the stored
/// value is never mutated, only its rendering (and the canonical form
/// sent on submit).
pub fn format_nama(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an amount as Rupiah with dot thousands separators,
/// e.g. `1234567.0` -> `"Rp 1.234.567"`.
pub fn format_rupiah(value: f64) -> String {
    let raw = (value.abs().round() as u64).to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("Rp {}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_nama() {
        assert_eq!(format_nama("budi pekerti"), "Budi Pekerti");
        assert_eq!(format_nama("KOPI ABC"), "Kopi Abc");
        assert_eq!(format_nama("gula"), "Gula");
    }

    #[test]
    fn test_format_nama_idempotent() {
        let once = format_nama("teh celup premium");
        assert_eq!(format_nama(&once), once);
    }

    #[test]
    fn test_format_nama_preserves_extra_spaces() {
        // split/join on a single space keeps runs of spaces intact
        assert_eq!(format_nama("a  b"), "A  B");
        assert_eq!(format_nama(""), "");
    }

    #[test]
    fn test_format_rupiah_grouping() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(15000.0), "Rp 15.000");
        assert_eq!(format_rupiah(1234567.0), "Rp 1.234.567");
    }

    #[test]
    fn test_format_rupiah_negative() {
        assert_eq!(format_rupiah(-2500.0), "Rp -2.500");
    }
}
