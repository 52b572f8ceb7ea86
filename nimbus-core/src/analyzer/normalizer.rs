//! Token Normalization Module
//!
//! Normalizers turn raw tokens into canonical words. Each normalizer is a
//! pure `&str -> String` transform; the analyzer applies them as an ordered
//! chain, feeding the output of one into the next. Order matters and is
//! caller-configurable.
//!
//! ## Built-ins
//!
//! - [`TrimToEmpty`] - removes surrounding whitespace, never fails
//! - [`CharacterStripping`] - keeps letters and digits, drops everything else
//! - [`LowerCase`] - Unicode-aware case folding
//! - [`DiacriticStripping`] - folds Latin diacritics (`"café"` → `"cafe"`)
//!
//! The default chain is trim → strip → lowercase, in that order.
//!
//! ## Chain Semantics
//!
//! A token that becomes empty mid-chain is still passed to the remaining
//! normalizers; only the aggregation stage drops empty results. This keeps
//! the chain composable: a later normalizer may legitimately produce
//! content from an empty intermediate.
//!
//! ```
//! use nimbus_core::analyzer::normalizer::{apply_chain, default_chain};
//!
//! let chain = default_chain();
//! assert_eq!(apply_chain(&chain, "  Hello! "), "hello");
//! ```

/// A pure per-token text transform.
///
/// Implementations must be deterministic: the same input always produces
/// the same output. Returning an empty string is allowed; the aggregation
/// stage decides what to do with degenerate words.
pub trait Normalizer {
    /// Normalizes one token.
    fn normalize(&self, token: &str) -> String;
}

/// Applies a normalizer chain in registration order.
///
/// No short-circuit: every normalizer runs even when an intermediate
/// result is empty.
#[inline]
pub fn apply_chain(normalizers: &[Box<dyn Normalizer>], token: &str) -> String {
    let mut current = token.to_owned();
    for normalizer in normalizers {
        current = normalizer.normalize(&current);
    }
    current
}

/// Builds the default chain: trim → character stripping → lowercase.
pub fn default_chain() -> Vec<Box<dyn Normalizer>> {
    vec![
        Box::new(TrimToEmpty),
        Box::new(CharacterStripping),
        Box::new(LowerCase),
    ]
}

/// Removes surrounding whitespace; blank input becomes the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimToEmpty;

impl Normalizer for TrimToEmpty {
    #[inline]
    fn normalize(&self, token: &str) -> String {
        token.trim().to_owned()
    }
}

/// Keeps letters and digits, drops every other character.
///
/// Punctuation, symbols and combining marks are removed; alphabetic and
/// numeric characters of any script survive.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterStripping;

impl Normalizer for CharacterStripping {
    #[inline]
    fn normalize(&self, token: &str) -> String {
        token.chars().filter(|c| c.is_alphanumeric()).collect()
    }
}

/// Unicode-aware lowercasing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCase;

impl Normalizer for LowerCase {
    #[inline]
    fn normalize(&self, token: &str) -> String {
        token.to_lowercase()
    }
}

/// Folds Latin diacritics to their base letter (`"Müller"` → `"Muller"`).
///
/// Covers Latin-1 and Latin Extended-A; combining marks (U+0300..U+036F)
/// are removed entirely. Characters outside those ranges pass through
/// unchanged, so the normalizer is safe on any script.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiacriticStripping;

impl Normalizer for DiacriticStripping {
    #[inline]
    fn normalize(&self, token: &str) -> String {
        token.chars().filter_map(fold_latin1).collect()
    }
}

/// Maps one character to its diacritic-free form.
///
/// Returns `None` for combining marks, `Some(base)` for recognized
/// accented letters, and `Some(c)` unchanged otherwise.
#[inline(always)]
fn fold_latin1(c: char) -> Option<char> {
    if ('\u{0300}'..='\u{036F}').contains(&c) {
        return None;
    }

    let folded = match c {
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => 'a',

        'Ç' | 'Ć' | 'Č' | 'Ĉ' | 'Ċ' => 'C',
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => 'c',

        'Ð' | 'Đ' => 'D',
        'ð' | 'đ' => 'd',

        'É' | 'È' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',

        'Í' | 'Ì' | 'Î' | 'Ï' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => 'I',
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',

        'Ñ' | 'Ń' | 'Ň' | 'Ņ' => 'N',
        'ñ' | 'ń' | 'ň' | 'ņ' => 'n',

        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' | 'Ō' | 'Ŏ' | 'Ő' => 'O',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' | 'ŏ' | 'ő' => 'o',

        'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',

        'Ý' => 'Y',
        'ý' | 'ÿ' => 'y',

        'Ś' | 'Š' | 'Ş' => 'S',
        'ś' | 'š' | 'ş' | 'ß' => 's',

        'Ź' | 'Ž' | 'Ż' => 'Z',
        'ź' | 'ž' | 'ż' => 'z',

        'Ł' => 'L',
        'ł' => 'l',
        'Æ' => 'A',
        'æ' => 'a',
        'Œ' => 'O',
        'œ' => 'o',

        other => other,
    };

    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_to_empty_basic() {
        assert_eq!(TrimToEmpty.normalize("  hello  "), "hello");
        assert_eq!(TrimToEmpty.normalize("hello"), "hello");
    }

    #[test]
    fn trim_to_empty_blank_input() {
        assert_eq!(TrimToEmpty.normalize(""), "");
        assert_eq!(TrimToEmpty.normalize("   \t\n"), "");
    }

    #[test]
    fn character_stripping_removes_punctuation() {
        assert_eq!(CharacterStripping.normalize("hello!"), "hello");
        assert_eq!(CharacterStripping.normalize("foo-bar_baz"), "foobarbaz");
        assert_eq!(CharacterStripping.normalize("it's"), "its");
    }

    #[test]
    fn character_stripping_keeps_digits() {
        assert_eq!(CharacterStripping.normalize("abc123"), "abc123");
    }

    #[test]
    fn character_stripping_keeps_unicode_letters() {
        assert_eq!(CharacterStripping.normalize("café"), "café");
        assert_eq!(CharacterStripping.normalize("你好!"), "你好");
    }

    #[test]
    fn character_stripping_can_empty_a_token() {
        assert_eq!(CharacterStripping.normalize("--"), "");
        assert_eq!(CharacterStripping.normalize("..."), "");
    }

    #[test]
    fn lowercase_ascii() {
        assert_eq!(LowerCase.normalize("HELLO"), "hello");
        assert_eq!(LowerCase.normalize("HeLlO"), "hello");
    }

    #[test]
    fn lowercase_unicode() {
        assert_eq!(LowerCase.normalize("ПРИВЕТ"), "привет");
        assert_eq!(LowerCase.normalize("ÜNITED"), "ünited");
    }

    #[test]
    fn basic_diacritic_strip() {
        assert_eq!(DiacriticStripping.normalize("café"), "cafe");
        assert_eq!(DiacriticStripping.normalize("Müller"), "Muller");
        assert_eq!(DiacriticStripping.normalize("São"), "Sao");
    }

    #[test]
    fn extended_latin_strip() {
        assert_eq!(DiacriticStripping.normalize("Český"), "Cesky");
        assert_eq!(DiacriticStripping.normalize("Łódź"), "Lodz");
    }

    #[test]
    fn sharp_s_strip() {
        assert_eq!(DiacriticStripping.normalize("straße"), "strase");
    }

    #[test]
    fn combining_marks_removed() {
        assert_eq!(DiacriticStripping.normalize("caf\u{0301}e"), "cafe");
    }

    #[test]
    fn non_latin_passthrough() {
        assert_eq!(DiacriticStripping.normalize("привет"), "привет");
        assert_eq!(DiacriticStripping.normalize("你好"), "你好");
    }

    #[test]
    fn default_chain_order_is_trim_strip_lower() {
        let chain = default_chain();
        assert_eq!(apply_chain(&chain, " Hello, World! "), "helloworld");
        assert_eq!(apply_chain(&chain, "CAT"), "cat");
    }

    #[test]
    fn empty_chain_is_identity() {
        let chain: Vec<Box<dyn Normalizer>> = Vec::new();
        assert_eq!(apply_chain(&chain, " AS-IS "), " AS-IS ");
    }

    #[test]
    fn chain_order_is_honored() {
        struct Bang;
        impl Normalizer for Bang {
            fn normalize(&self, token: &str) -> String {
                format!("{token}!")
            }
        }

        let strip_then_bang: Vec<Box<dyn Normalizer>> =
            vec![Box::new(CharacterStripping), Box::new(Bang)];
        let bang_then_strip: Vec<Box<dyn Normalizer>> =
            vec![Box::new(Bang), Box::new(CharacterStripping)];

        assert_eq!(apply_chain(&strip_then_bang, "abc"), "abc!");
        assert_eq!(apply_chain(&bang_then_strip, "abc"), "abc");
    }

    #[test]
    fn empty_intermediate_does_not_short_circuit() {
        struct EmptyToX;
        impl Normalizer for EmptyToX {
            fn normalize(&self, token: &str) -> String {
                if token.is_empty() {
                    "x".to_owned()
                } else {
                    token.to_owned()
                }
            }
        }

        // Trim empties the token; the next normalizer must still run.
        let chain: Vec<Box<dyn Normalizer>> = vec![Box::new(TrimToEmpty), Box::new(EmptyToX)];
        assert_eq!(apply_chain(&chain, "   "), "x");
    }

    #[test]
    fn default_chain_is_idempotent() {
        let samples = ["hello", "Café", "  spaced  ", "a-b-c"];
        for s in samples {
            let once = apply_chain(&default_chain(), s);
            let twice = apply_chain(&default_chain(), &once);
            assert_eq!(once, twice);
        }
    }
}
