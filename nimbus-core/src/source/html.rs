//! Visible-text extraction from HTML documents.
//!
//! URL loads frequently hand back markup rather than plain text, so the
//! analyzer strips it down to the text a browser would render before
//! tokenizing. This is a forgiving single-pass scanner, not a conforming
//! parser:
//!
//! - tags are replaced by a single space so `foo<br>bar` stays two words
//! - `<script>` and `<style>` bodies are dropped entirely
//! - comments (`<!-- -->`) are dropped
//! - the handful of entities common in prose are decoded; unknown
//!   entities pass through verbatim

use memchr::memchr;

/// Extracts the renderable text from an HTML document.
pub fn extract_text(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len() / 2);
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(lt) = memchr(b'<', &bytes[pos..]) else {
            push_decoded(&html[pos..], &mut out);
            break;
        };
        let lt = pos + lt;
        push_decoded(&html[pos..lt], &mut out);

        if bytes[lt..].starts_with(b"<!--") {
            pos = match find_subslice(&bytes[lt + 4..], b"-->") {
                Some(end) => lt + 4 + end + 3,
                None => bytes.len(),
            };
            continue;
        }

        let Some(gt) = memchr(b'>', &bytes[lt..]) else {
            break; // unterminated tag, nothing renderable past it
        };
        let gt = lt + gt;
        let tag = &html[lt + 1..gt];
        out.push(' ');

        // script/style bodies are never visible text
        if let Some(name) = raw_text_element(tag) {
            pos = match find_closing_tag(&bytes[gt + 1..], name) {
                Some(end) => gt + 1 + end,
                None => bytes.len(),
            };
        } else {
            pos = gt + 1;
        }
    }

    out
}

/// Returns the element name if `tag` opens a raw-text element whose body
/// must be skipped.
fn raw_text_element(tag: &str) -> Option<&'static str> {
    let name = tag
        .split(|c: char| c.is_ascii_whitespace() || c == '/')
        .next()
        .unwrap_or("");
    if name.eq_ignore_ascii_case("script") {
        Some("script")
    } else if name.eq_ignore_ascii_case("style") {
        Some("style")
    } else {
        None
    }
}

/// Finds the byte offset just past `</name...>` in `haystack`.
fn find_closing_tag(haystack: &[u8], name: &str) -> Option<usize> {
    let mut pos = 0;
    while let Some(lt) = memchr(b'<', &haystack[pos..]) {
        let lt = pos + lt;
        let rest = &haystack[lt + 1..];
        if rest.first() == Some(&b'/') && rest[1..].len() >= name.len() {
            let candidate = &rest[1..1 + name.len()];
            if candidate.eq_ignore_ascii_case(name.as_bytes()) {
                return memchr(b'>', &haystack[lt..]).map(|gt| lt + gt + 1);
            }
        }
        pos = lt + 1;
    }
    None
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    let mut pos = 0;
    while let Some(hit) = memchr(needle[0], &haystack[pos..]) {
        let start = pos + hit;
        if haystack[start..].starts_with(needle) {
            return Some(start);
        }
        pos = start + 1;
    }
    None
}

/// Appends `text` to `out`, decoding common character entities.
fn push_decoded(text: &str, out: &mut String) {
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match decode_entity(tail) {
            Some((ch, len)) => {
                out.push(ch);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
}

/// Decodes a single entity at the start of `text`, returning the character
/// and the byte length consumed.
fn decode_entity(text: &str) -> Option<(char, usize)> {
    const NAMED: &[(&str, char)] = &[
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&apos;", '\''),
        ("&#39;", '\''),
        ("&nbsp;", ' '),
    ];
    for &(name, ch) in NAMED {
        if text.starts_with(name) {
            return Some((ch, name.len()));
        }
    }
    if let Some(body) = text.strip_prefix("&#") {
        let end = body.find(';')?;
        let digits = &body[..end];
        let code = if let Some(hex) = digits.strip_prefix('x').or(digits.strip_prefix('X')) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            digits.parse().ok()?
        };
        return char::from_u32(code).map(|ch| (ch, 2 + end + 1));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_keeping_word_boundaries() {
        assert_eq!(extract_text("foo<br>bar").trim(), "foo bar");
        let text = extract_text("<p>hello <b>bold</b> world</p>");
        let words: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(words, vec!["hello", "bold", "world"]);
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(extract_text("no markup here"), "no markup here");
    }

    #[test]
    fn drops_script_and_style_bodies() {
        let html = "<html><style>p { color: red }</style>\
                    <script type=\"text/javascript\">var x = 1;</script>\
                    <p>visible</p></html>";
        let text = extract_text(html);
        assert!(text.contains("visible"));
        assert!(!text.contains("color"));
        assert!(!text.contains("var x"));
    }

    #[test]
    fn script_matching_is_case_insensitive() {
        let text = extract_text("<SCRIPT>hidden()</SCRIPT>shown");
        assert!(!text.contains("hidden"));
        assert!(text.contains("shown"));
    }

    #[test]
    fn drops_comments() {
        let text = extract_text("before<!-- secret words -->after");
        assert!(!text.contains("secret"));
        assert!(text.contains("before"));
        assert!(text.contains("after"));
    }

    #[test]
    fn decodes_common_entities() {
        assert_eq!(extract_text("fish &amp; chips"), "fish & chips");
        assert_eq!(extract_text("a &lt; b &gt; c"), "a < b > c");
        assert_eq!(extract_text("it&#39;s"), "it's");
        assert_eq!(extract_text("&#65;&#x42;"), "AB");
    }

    #[test]
    fn unknown_entity_passes_through() {
        assert_eq!(extract_text("&bogus; &"), "&bogus; &");
    }

    #[test]
    fn unterminated_tag_truncates() {
        assert_eq!(extract_text("ok <a href="), "ok ");
    }

    #[test]
    fn unterminated_script_drops_rest() {
        assert_eq!(extract_text("seen<script>never"), "seen ");
    }
}
