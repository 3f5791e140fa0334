//! Strict percent-encoding of script text for `javascript:` URIs.

use crate::Result;

use anyhow::anyhow;
use pct_str::{PctStr, PctString};

/// URI scheme prefix every bookmarklet starts with.
pub const SCHEME: &str = "javascript:";

/// Escapes everything except `[A-Za-z0-9_.~-]`.
///
/// Looser sets (the ones that keep `/`, `:` or `?` literal) break once the
/// browser re-parses the `href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictEncoder;

impl pct_str::Encoder for StrictEncoder {
    fn encode(&self, c: char) -> bool {
        !is_unreserved(c)
    }
}

pub fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

/// Percent-encode `script` with [`StrictEncoder`]. Multi-byte characters are
/// escaped byte by byte in UTF-8.
pub fn encode_script(script: &str) -> String {
    PctString::encode(script.chars(), StrictEncoder)
        .as_str()
        .to_string()
}

/// `javascript:` + the strict encoding of `script`.
pub fn bookmarklet_uri(script: &str) -> String {
    let encoded = encode_script(script);
    let mut uri = String::with_capacity(SCHEME.len() + encoded.len());
    uri.push_str(SCHEME);
    uri.push_str(&encoded);
    uri
}

/// Inverse of [`encode_script`].
pub fn decode_script(encoded: &str) -> Result<String> {
    let pct = PctStr::new(encoded)
        .map_err(|_| anyhow!("invalid percent-encoding in {:?}", encoded))?;
    Ok(pct.decode())
}

/// Decode the script back out of a full bookmarklet URI.
pub fn decode_bookmarklet(uri: &str) -> Result<String> {
    let encoded = uri
        .strip_prefix(SCHEME)
        .ok_or_else(|| anyhow!("bookmarklet does not start with {}", SCHEME))?;
    decode_script(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_strict(encoded: &str) {
        let bytes = encoded.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b == b'%' {
                assert!(i + 2 < bytes.len(), "truncated escape in {:?}", encoded);
                assert!(
                    bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit(),
                    "bad escape at {} in {:?}",
                    i,
                    encoded
                );
                i += 3;
            } else {
                assert!(is_unreserved(b as char), "literal {:?} in {:?}", b as char, encoded);
                i += 1;
            }
        }
    }

    #[test]
    fn encodes_call_with_string_literal() {
        assert_eq!(encode_script(r#"alert("hi")"#), "alert%28%22hi%22%29");
        assert_eq!(
            bookmarklet_uri(r#"alert("hi")"#),
            "javascript:alert%28%22hi%22%29"
        );
    }

    #[test]
    fn escapes_uri_structural_characters() {
        assert_eq!(encode_script("a/b:c?d#e&f=g"), "a%2Fb%3Ac%3Fd%23e%26f%3Dg");
        assert_eq!(encode_script("50% off"), "50%25%20off");
        assert_eq!(encode_script("x + y;\n"), "x%20%2B%20y%3B%0A");
    }

    #[test]
    fn keeps_unreserved_characters() {
        let unreserved = "AZaz09-_.~";
        assert_eq!(encode_script(unreserved), unreserved);
    }

    #[test]
    fn escapes_multibyte_utf8_per_byte() {
        assert_eq!(encode_script("é"), "%C3%A9");
        assert_eq!(encode_script("⚡"), "%E2%9A%A1");
    }

    #[test]
    fn empty_script_yields_bare_scheme() {
        assert_eq!(encode_script(""), "");
        assert_eq!(bookmarklet_uri(""), SCHEME);
    }

    #[test]
    fn round_trips_awkward_inputs() {
        let cases = [
            "",
            "/",
            "a:b",
            r#"document.title = "it's \"quoted\"";"#,
            "line one\nline two\r\n\ttabbed",
            "100% sure",
            "日本語 🚀 ünïcödé",
            "(function(){var s=document.createElement('script');s.src='https://x/y.js?a=1&b=2';document.body.appendChild(s)})()",
        ];
        for case in cases {
            let encoded = encode_script(case);
            assert_strict(&encoded);
            assert_eq!(decode_script(&encoded).unwrap(), case);
            assert_eq!(decode_bookmarklet(&bookmarklet_uri(case)).unwrap(), case);
        }
    }

    #[test]
    fn decode_rejects_missing_scheme() {
        assert!(decode_bookmarklet("alert%28%29").is_err());
    }

    #[test]
    fn decode_rejects_broken_escape() {
        assert!(decode_script("abc%2").is_err());
        assert!(decode_script("abc%zz").is_err());
    }
}
