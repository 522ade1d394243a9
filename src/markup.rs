//! Markup scrubbing for text that leaves the application
//!
//! [`strip_markup`] removes every tag and decodes the entity sequences the
//! highlighter emits. Tags are removed first and entities decoded in the same
//! pass afterwards, so a decoded `&lt;` can never re-form a tag.

/// Length in bytes of the tag starting at `s[0] == '<'`, if it is one.
///
/// A tag is `<name ...>` or `</name>` where the name starts with an ASCII
/// letter. Quoted attribute values may contain `>` and a tag may wrap across
/// lines. A bare `<` (as in `i < ROWS`) or an unterminated tag is not a tag.
fn tag_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 1;
    if bytes.get(i) == Some(&b'/') {
        i += 1;
    }
    if !bytes.get(i).is_some_and(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let mut quote: Option<u8> = None;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i + 1),
            None if b == b'<' => return None,
            None => {}
        }
        i += 1;
    }
    None
}

const ENTITIES: [(&str, char); 5] = [
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&#39;", '\''),
    ("&quot;", '"'),
    ("&amp;", '&'),
];

/// Decode the supported entities in a single left-to-right pass.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Remove all markup tags from `text` and decode entities.
///
/// `<span class="x">int</span> <span>main</span>()` becomes `int main()`.
pub fn strip_markup(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('<') {
        stripped.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match tag_len(rest) {
            Some(len) => rest = &rest[len..],
            None => {
                stripped.push('<');
                rest = &rest[1..];
            }
        }
    }
    stripped.push_str(rest);
    decode_entities(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_spans() {
        assert_eq!(
            strip_markup(r#"<span class="x">int</span> <span>main</span>()"#),
            "int main()"
        );
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            strip_markup(r#"cout <span class="op">&lt;&lt;</span> &#39;x&#39; &gt; y"#),
            "cout << 'x' > y"
        );
    }

    #[test]
    fn test_bare_less_than_is_text() {
        assert_eq!(strip_markup("for (i = 0; i < ROWS; i++)"), "for (i = 0; i < ROWS; i++)");
        assert_eq!(strip_markup("a <b"), "a <b");
    }

    #[test]
    fn test_decoded_lt_does_not_form_tag() {
        assert_eq!(strip_markup("&lt;span&gt;"), "<span>");
    }

    #[test]
    fn test_amp_decoded_once() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("R&D"), "R&D");
    }

    #[test]
    fn test_quoted_gt_inside_attribute() {
        assert_eq!(strip_markup(r#"<span title="a>b">x</span>"#), "x");
    }

    #[test]
    fn test_open_tag_without_close() {
        assert_eq!(strip_markup(r#"<span class="kw">int main()"#), "int main()");
    }

    #[test]
    fn test_self_closing_tag() {
        assert_eq!(strip_markup("int<br/>main()"), "intmain()");
        assert_eq!(strip_markup("int<br />main()"), "intmain()");
    }

    #[test]
    fn test_tag_wrapped_across_lines() {
        assert_eq!(strip_markup("<span\nclass=\"kw\">int</span>"), "int");
    }
}
