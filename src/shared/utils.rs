//! Utility functions and helpers

/// Characters kept at the front of a shortened address
pub const ADDRESS_HEAD: usize = 8;
/// Characters kept at the end of a shortened address
pub const ADDRESS_TAIL: usize = 6;

/// Compare two hex addresses ignoring letter case
pub fn same_address(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Lowercase form used as a lookup key
pub fn normalize_address(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}

/// `0x` followed by 40 hex digits
pub fn is_valid_address(address: &str) -> bool {
    match address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) {
        Some(body) => body.len() == 40 && hex::decode(body).is_ok(),
        None => false,
    }
}

/// Shorten an address for display: first 8 + "..." + last 6
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= ADDRESS_HEAD + ADDRESS_TAIL {
        return address.to_string();
    }
    let head: String = chars[..ADDRESS_HEAD].iter().collect();
    let tail: String = chars[chars.len() - ADDRESS_TAIL..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Keep at most `max_chars` characters, appending "..." when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984";

    #[test]
    fn test_shorten_address() {
        let short = shorten_address(ADDRESS);
        assert_eq!(short, "0x1f9840...01f984");
        assert!(ADDRESS.starts_with(&short[..8]));
        assert!(ADDRESS.ends_with(&short[short.len() - 6..]));
    }

    #[test]
    fn test_shorten_short_input_is_unchanged() {
        assert_eq!(shorten_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_same_address_ignores_case() {
        assert!(same_address(ADDRESS, &ADDRESS.to_uppercase()));
        assert!(!same_address(ADDRESS, "0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address(ADDRESS));
        assert!(is_valid_address("0x1F9840A85D5AF5BF1D1762F925BDADDC4201F984"));
        assert!(!is_valid_address("1f9840a85d5af5bf1d1762f925bdaddc4201f984"));
        assert!(!is_valid_address("0x1f98"));
        assert!(!is_valid_address("0xzz9840a85d5af5bf1d1762f925bdaddc4201f984"));
    }

    #[test]
    fn test_truncate_text() {
        let symbol = "ABCDEFGHIJKLMNOPQRST";
        assert_eq!(truncate_text(symbol, 10), "ABCDEFGHIJ...");
        assert_eq!(truncate_text(symbol, 16), "ABCDEFGHIJKLMNOP...");
        assert_eq!(truncate_text("UNI", 10), "UNI");
        assert_eq!(truncate_text("ABCDEFGHIJ", 10), "ABCDEFGHIJ");
    }
}
