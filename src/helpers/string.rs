//! String Utilities
//!
//! Query-string parsing and language-tag handling shared by the location
//! and translation services.

/// Parse a raw query string (without the leading `?`) into key/value pairs.
///
/// Keys and values are percent-decoded and `+` is treated as a space, the
/// encoding browsers produce for form submissions. Pairs without a `=` are
/// kept with an empty value. Order is preserved.
pub fn parse_query_string(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (percent_decode(key), percent_decode(value)),
            None => (percent_decode(pair), String::new()),
        })
        .collect()
}

/// Decode percent-escapes and `+` in a query-string component.
///
/// Malformed escapes are passed through verbatim rather than rejected;
/// a culture request that fails to decode simply won't match the catalog.
pub fn percent_decode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match hex_pair(bytes.get(i + 1).copied(), bytes.get(i + 2).copied()) {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                }
                None => {
                    out.push(b'%');
                    i += 1;
                }
            },
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(high: Option<u8>, low: Option<u8>) -> Option<u8> {
    let high = (high? as char).to_digit(16)?;
    let low = (low? as char).to_digit(16)?;
    Some((high * 16 + low) as u8)
}

/// Extract the primary language subtag from a locale identifier,
/// e.g. `"en-US"` or `"en_US.UTF-8"` becomes `"en"`.
pub fn primary_language_tag(tag: &str) -> &str {
    tag.split(['-', '_', '.', ','])
        .next()
        .unwrap_or(tag)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_string() {
        let pairs = parse_query_string("cuid=he&ref=promo");
        assert_eq!(
            pairs,
            vec![
                ("cuid".to_string(), "he".to_string()),
                ("ref".to_string(), "promo".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_string_empty_and_flag_pairs() {
        let pairs = parse_query_string("debug&cuid=12&");
        assert_eq!(
            pairs,
            vec![
                ("debug".to_string(), String::new()),
                ("cuid".to_string(), "12".to_string()),
            ]
        );
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("a%20b"), "a b");
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("%D7%A2"), "ע");
    }

    #[test]
    fn test_percent_decode_malformed_passthrough() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn test_primary_language_tag() {
        assert_eq!(primary_language_tag("en-US"), "en");
        assert_eq!(primary_language_tag("en_US.UTF-8"), "en");
        assert_eq!(primary_language_tag("he"), "he");
        assert_eq!(primary_language_tag("zh-Hans-CN"), "zh");
    }
}
