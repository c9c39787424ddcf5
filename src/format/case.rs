//! Word case toggle

use crate::utils::chars;

/// Lower-case words get a capital first letter; anything else is lower-cased
pub fn toggle_case(word: &str) -> String {
    if chars::is_all_lowercase(word) {
        chars::capitalize_first(word)
    } else {
        word.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_case() {
        assert_eq!(toggle_case("oslo"), "Oslo");
        assert_eq!(toggle_case("Oslo"), "oslo");
        assert_eq!(toggle_case("NATO"), "nato");
        assert_eq!(toggle_case("ærlig"), "Ærlig");
    }
}
