/// Render the normal-mode report: algorithm label, digest, source path, and
/// the byte count when size reporting was requested.
pub fn format_report(algorithm: &str, digest: &str, path: &str, size: Option<u64>) -> String {
    let mut out = format!("{}: {digest}\nFile: {path}", algorithm.to_uppercase());
    if let Some(bytes) = size {
        out.push_str(&format!("\nSize: {} bytes", group_thousands(bytes)));
    }
    out
}

/// Group a byte count with comma separators: 1234567 -> "1,234,567".
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_inserts_commas_every_three_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn report_without_size_is_two_lines() {
        let report = format_report("sha256", "deadbeef", "notes.txt", None);
        assert_eq!(report, "SHA256: deadbeef\nFile: notes.txt");
    }

    #[test]
    fn report_with_size_appends_a_grouped_byte_count() {
        let report = format_report("md5", "deadbeef", "big.bin", Some(1_048_576));
        assert_eq!(
            report,
            "MD5: deadbeef\nFile: big.bin\nSize: 1,048,576 bytes"
        );
    }
}
