//! Builds the external locator used to read a chapter.
//!
//! The locator is `<base>?q=<book>+<chapter>`, with the book escaped the way a browser's
//! `encodeURIComponent` would. No network access, and no check that the chapter exists.

/// Default base for the Legacy Standard Bible online reader.
pub const DEFAULT_READER_URL: &str = "https://read.lsbible.org/";

/// Locator for `book chapter` on the default reader.
pub fn resolve(book: &str, chapter: u32) -> String {
    resolve_with(DEFAULT_READER_URL, book, chapter)
}

/// Locator for `book chapter` on the reader at `base`.
pub fn resolve_with(base: &str, book: &str, chapter: u32) -> String {
    format!("{}?q={}+{}", base, encode_component(book), chapter)
}

/// Percent-encodes every byte outside the `encodeURIComponent` unreserved set.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_simple_book() {
        assert_eq!(
            resolve("Genesis", 1),
            "https://read.lsbible.org/?q=Genesis+1"
        );
    }

    #[test]
    fn escapes_spaces_and_punctuation() {
        assert_eq!(
            resolve("1 John", 3),
            "https://read.lsbible.org/?q=1%20John+3"
        );
        assert_eq!(encode_component("Song & Dance?"), "Song%20%26%20Dance%3F");
        assert_eq!(encode_component("a+b/c"), "a%2Bb%2Fc");
    }

    #[test]
    fn keeps_unreserved_marks() {
        assert_eq!(encode_component("A-Z_a.z!~*'()"), "A-Z_a.z!~*'()");
    }

    #[test]
    fn encodes_utf8_bytes() {
        assert_eq!(encode_component("É"), "%C3%89");
    }

    #[test]
    fn custom_base() {
        assert_eq!(
            resolve_with("http://localhost:8080/", "Psalms", 23),
            "http://localhost:8080/?q=Psalms+23"
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        assert_eq!(resolve("Mark", 16), resolve("Mark", 16));
    }
}
