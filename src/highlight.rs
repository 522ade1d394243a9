//! Token-level syntax annotation for the C++ samples
//!
//! [`annotate`] splits source text into [`Token`]s tagged with a semantic
//! [`TokenClass`]. Every character of the input lands in exactly one token,
//! so [`plain_text`] is a lossless projection back to the source and the
//! styling layer can be dropped without scrubbing anything.
//!
//! The tokenizer is deliberately shallow: it recognises comments, string and
//! char literals, numbers, preprocessor lines, words and single-character
//! punctuation. That is enough for display purposes.

use std::fmt::Write as _;

/// Semantic role of a token, independent of how it is finally styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Keyword,
    Type,
    Function,
    String,
    Number,
    Comment,
    Preprocessor,
    Bracket,
    Operator,
    Plain,
}

impl TokenClass {
    /// Class name used when the token layer is rendered as markup
    pub fn css_class(self) -> &'static str {
        match self {
            TokenClass::Keyword => "tok-keyword",
            TokenClass::Type => "tok-type",
            TokenClass::Function => "tok-function",
            TokenClass::String => "tok-string",
            TokenClass::Number => "tok-number",
            TokenClass::Comment => "tok-comment",
            TokenClass::Preprocessor => "tok-preproc",
            TokenClass::Bracket => "tok-bracket",
            TokenClass::Operator => "tok-operator",
            TokenClass::Plain => "tok-plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub class: TokenClass,
}

impl Token {
    fn new(text: &str, class: TokenClass) -> Self {
        Self {
            text: text.to_string(),
            class,
        }
    }
}

fn classify_word(word: &str, followed_by_paren: bool) -> TokenClass {
    match word {
        "int" | "char" | "void" | "bool" | "float" | "double" | "long" | "short" | "unsigned"
        | "signed" | "string" | "auto" => TokenClass::Type,
        "const" | "struct" | "class" | "return" | "if" | "else" | "while" | "for" | "do"
        | "switch" | "case" | "default" | "break" | "continue" | "goto" | "sizeof" | "using"
        | "namespace" | "true" | "false" => TokenClass::Keyword,
        "NULL" | "nullptr" => TokenClass::Number,
        _ if followed_by_paren => TokenClass::Function,
        _ => TokenClass::Plain,
    }
}

/// Split `source` into annotated tokens.
pub fn annotate(source: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = source.char_indices().collect();
    let byte_at = |idx: usize| chars.get(idx).map_or(source.len(), |(b, _)| *b);
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut at_line_start = true;

    while i < chars.len() {
        let c = chars[i].1;
        let start = i;

        // Preprocessor directive: runs to end of line
        if c == '#' && at_line_start {
            while i < chars.len() && chars[i].1 != '\n' {
                i += 1;
            }
            tokens.push(Token::new(
                &source[byte_at(start)..byte_at(i)],
                TokenClass::Preprocessor,
            ));
            continue;
        }

        // Line comment
        if c == '/' && chars.get(i + 1).is_some_and(|(_, n)| *n == '/') {
            while i < chars.len() && chars[i].1 != '\n' {
                i += 1;
            }
            tokens.push(Token::new(
                &source[byte_at(start)..byte_at(i)],
                TokenClass::Comment,
            ));
            continue;
        }

        // Block comment, unterminated ones run to the end
        if c == '/' && chars.get(i + 1).is_some_and(|(_, n)| *n == '*') {
            i += 2;
            while i < chars.len() && !(chars[i].1 == '*' && chars.get(i + 1).is_some_and(|(_, n)| *n == '/')) {
                i += 1;
            }
            i = (i + 2).min(chars.len());
            tokens.push(Token::new(
                &source[byte_at(start)..byte_at(i)],
                TokenClass::Comment,
            ));
            continue;
        }

        // String and char literals stop at the closing quote or end of line
        if c == '"' || c == '\'' {
            i += 1;
            while i < chars.len() && chars[i].1 != c && chars[i].1 != '\n' {
                if chars[i].1 == '\\' {
                    i += 1;
                }
                i += 1;
            }
            if i < chars.len() && chars[i].1 == c {
                i += 1;
            }
            i = i.min(chars.len());
            tokens.push(Token::new(
                &source[byte_at(start)..byte_at(i)],
                TokenClass::String,
            ));
            at_line_start = false;
            continue;
        }

        if c.is_ascii_digit() {
            while i < chars.len() && (chars[i].1.is_ascii_alphanumeric() || chars[i].1 == '.') {
                i += 1;
            }
            tokens.push(Token::new(
                &source[byte_at(start)..byte_at(i)],
                TokenClass::Number,
            ));
            at_line_start = false;
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            while i < chars.len() && (chars[i].1.is_alphanumeric() || chars[i].1 == '_') {
                i += 1;
            }
            let word = &source[byte_at(start)..byte_at(i)];
            let followed_by_paren = chars.get(i).is_some_and(|(_, n)| *n == '(');
            tokens.push(Token::new(word, classify_word(word, followed_by_paren)));
            at_line_start = false;
            continue;
        }

        if c.is_whitespace() {
            while i < chars.len() && chars[i].1.is_whitespace() {
                if chars[i].1 == '\n' {
                    at_line_start = true;
                }
                i += 1;
            }
            tokens.push(Token::new(
                &source[byte_at(start)..byte_at(i)],
                TokenClass::Plain,
            ));
            continue;
        }

        let class = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => TokenClass::Bracket,
            '+' | '-' | '*' | '/' | '%' | '=' | '&' | '|' | '!' | '<' | '>' | '^' | '~' => {
                TokenClass::Operator
            }
            _ => TokenClass::Plain,
        };
        i += 1;
        tokens.push(Token::new(&source[byte_at(start)..byte_at(i)], class));
        at_line_start = false;
    }

    tokens
}

/// Drop the styling layer and return the original text.
pub fn plain_text(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Escape the characters that would otherwise read as markup.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render tokens as `<span class="...">` markup. Plain tokens are left bare.
pub fn to_markup(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.class == TokenClass::Plain {
            out.push_str(&escape_markup(&token.text));
        } else {
            // Writing into a String cannot fail
            let _ = write!(
                out,
                r#"<span class="{}">{}</span>"#,
                token.class.css_class(),
                escape_markup(&token.text)
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(tokens: &[Token]) -> Vec<(&str, TokenClass)> {
        tokens
            .iter()
            .filter(|t| !t.text.trim().is_empty())
            .map(|t| (t.text.as_str(), t.class))
            .collect()
    }

    #[test]
    fn test_simple_function() {
        let tokens = annotate("int main() { return 0; }");
        let got = classes(&tokens);

        assert_eq!(got[0], ("int", TokenClass::Type));
        assert_eq!(got[1], ("main", TokenClass::Function));
        assert_eq!(got[2], ("(", TokenClass::Bracket));
        assert_eq!(got[5], ("return", TokenClass::Keyword));
        assert_eq!(got[6], ("0", TokenClass::Number));
    }

    #[test]
    fn test_comment_and_string() {
        let tokens = annotate(r#"assignSeat("S_001"); // seat one"#);
        let got = classes(&tokens);

        assert_eq!(got[0], ("assignSeat", TokenClass::Function));
        assert_eq!(got[2], (r#""S_001""#, TokenClass::String));
        assert_eq!(got.last(), Some(&("// seat one", TokenClass::Comment)));
    }

    #[test]
    fn test_preprocessor_line() {
        let tokens = annotate("#include <iostream>\nusing namespace std;");
        assert_eq!(tokens[0].text, "#include <iostream>");
        assert_eq!(tokens[0].class, TokenClass::Preprocessor);
        assert!(tokens.iter().any(|t| t.text == "using" && t.class == TokenClass::Keyword));
    }

    #[test]
    fn test_projection_is_lossless() {
        let source = "for (int i = 0; i < ROWS; i++) {\n    x = 'a'; /* note */\n}\n";
        assert_eq!(plain_text(&annotate(source)), source);
    }

    #[test]
    fn test_markup_escapes_operators() {
        let markup = to_markup(&annotate("a < b"));
        assert!(markup.contains("&lt;"));
        assert!(!markup.contains(" < "));
    }
}
