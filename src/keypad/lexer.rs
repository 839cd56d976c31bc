use logos::Logos;

/// A single key press in a keystroke script.
///
/// Keys are separated by whitespace. Anything that is neither a number nor
/// the clear key is passed through as a symbol, so the lexer never needs to
/// know which operators the brain has registered.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Key {
    /// Decimal literal keys, such as `3`, `-4`, `.5`, `2.5` or `1e3`.
    #[regex(r"-?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?",
            |lex| lex.slice().to_string(),
            priority = 10)]
    Number(String),
    /// `C`
    #[token("C")]
    Clear,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true, priority = 20)]
    Comment,
    /// Operator keys such as `+`, `√` or `sin`. Control characters are not
    /// keys, and a `//` inside a run of characters starts a comment.
    #[regex(r"([^ \x00-\x1F\x7F-\x{9F}/]|/[^ \x00-\x1F\x7F-\x{9F}/])+|/",
            |lex| lex.slice().to_string(),
            allow_greedy = true,
            priority = 1)]
    Symbol(String),
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Key::NewLine
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the script being tokenized.
    pub line: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(source: &str) -> Vec<Key> {
        Key::lexer_with_extras(source, LexerExtras { line: 1 }).filter_map(Result::ok)
                                                               .collect()
    }

    fn sym(s: &str) -> Key {
        Key::Symbol(s.to_string())
    }

    fn num(s: &str) -> Key {
        Key::Number(s.to_string())
    }

    #[test]
    fn splits_numbers_and_symbols() {
        assert_eq!(keys("4 + 3 ="), vec![num("4"), sym("+"), num("3"), sym("=")]);
    }

    #[test]
    fn signed_and_fractional_numbers() {
        assert_eq!(keys("-4 .5 2. 1e3 -2.5E-2"),
                   vec![num("-4"), num(".5"), num("2."), num("1e3"), num("-2.5E-2")]);
    }

    #[test]
    fn minus_alone_is_a_symbol() {
        assert_eq!(keys("9 - 1"), vec![num("9"), sym("-"), num("1")]);
    }

    #[test]
    fn unicode_glyphs_are_symbols() {
        assert_eq!(keys("π √ × ÷ ±"),
                   vec![sym("π"), sym("√"), sym("×"), sym("÷"), sym("±")]);
    }

    #[test]
    fn clear_key_and_words() {
        assert_eq!(keys("C cos e"), vec![Key::Clear, sym("cos"), sym("e")]);
    }

    #[test]
    fn comment_may_follow_a_key_directly() {
        assert_eq!(keys("5//x\n÷// y"), vec![num("5"), Key::NewLine, sym("÷")]);
    }

    #[test]
    fn single_slashes_stay_inside_symbols() {
        assert_eq!(keys("/ a/b"), vec![sym("/"), sym("a/b")]);
    }

    #[test]
    fn control_characters_do_not_lex() {
        let results = Key::lexer_with_extras("1 \u{0} 2", LexerExtras { line: 1 }).collect::<Vec<_>>();
        assert_eq!(results,
                   vec![Ok(num("1")), Err(()), Ok(num("2"))]);
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let mut lexer = Key::lexer_with_extras("// header\n5 // five\n=", LexerExtras { line: 1 });
        let mut seen = Vec::new();
        while let Some(Ok(key)) = lexer.next() {
            seen.push((key, lexer.extras.line));
        }
        assert_eq!(seen,
                   vec![(Key::NewLine, 2), (num("5"), 2), (Key::NewLine, 3), (sym("="), 3)]);
    }
}
