//! Size statistics shown on the page and in the summary.

use serde::Serialize;

/// Divisor for the whole-kilobyte figures.
pub const KB: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookmarkletStats {
    /// UTF-8 byte length of the source script.
    pub original_bytes: usize,
    /// Byte length of the full `javascript:` URI.
    pub bookmarklet_bytes: usize,
}

impl BookmarkletStats {
    pub fn new(script: &str, uri: &str) -> Self {
        Self {
            original_bytes: script.len(),
            bookmarklet_bytes: uri.len(),
        }
    }

    pub fn original_kb(&self) -> usize {
        self.original_bytes / KB
    }

    pub fn bookmarklet_kb(&self) -> usize {
        self.bookmarklet_bytes / KB
    }

    /// URI size as a whole percentage of the source size. `None` for an
    /// empty source.
    pub fn expansion_percent(&self) -> Option<usize> {
        if self.original_bytes == 0 {
            return None;
        }
        Some(self.bookmarklet_bytes * 100 / self.original_bytes)
    }
}

/// Format `n` with comma thousands separators (`1234567` -> `1,234,567`).
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_for_small_script() {
        let stats = BookmarkletStats::new(r#"alert("hi")"#, "javascript:alert%28%22hi%22%29");
        assert_eq!(stats.original_bytes, 11);
        assert_eq!(stats.bookmarklet_bytes, 30);
        assert_eq!(stats.original_kb(), 0);
        assert_eq!(stats.bookmarklet_kb(), 0);
        assert_eq!(stats.expansion_percent(), Some(272));
    }

    #[test]
    fn kilobytes_use_floor_division() {
        let stats = BookmarkletStats {
            original_bytes: 2047,
            bookmarklet_bytes: 3072,
        };
        assert_eq!(stats.original_kb(), 1);
        assert_eq!(stats.bookmarklet_kb(), 3);
    }

    #[test]
    fn original_bytes_count_utf8_bytes() {
        let stats = BookmarkletStats::new("é", "javascript:%C3%A9");
        assert_eq!(stats.original_bytes, 2);
        assert_eq!(stats.bookmarklet_bytes, 17);
    }

    #[test]
    fn no_expansion_for_empty_source() {
        let stats = BookmarkletStats::new("", "javascript:");
        assert_eq!(stats.expansion_percent(), None);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(11), "11");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(65_536), "65,536");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
