/// Split a line on runs of whitespace.
///
/// No quoting or escapes: every maximal run of non-whitespace characters is
/// one token. Empty or blank input yields no tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(tokenize("  ls \t -al   x "), vec!["ls", "-al", "x"]);
    }

    #[test]
    fn quotes_are_ordinary_characters() {
        assert_eq!(tokenize("open \"a b\""), vec!["open", "\"a", "b\""]);
    }

    #[test]
    fn pipes_are_ordinary_characters() {
        assert_eq!(tokenize("ls | more"), vec!["ls", "|", "more"]);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tokens_are_non_empty_and_whitespace_free(line in "[ a-z\\t-]{0,40}") {
                for token in tokenize(&line) {
                    prop_assert!(!token.is_empty());
                    prop_assert!(!token.chars().any(char::is_whitespace));
                }
            }

            #[test]
            fn rejoin_is_stable(line in "[ a-z0-9\\t]{0,40}") {
                let once = tokenize(&line).join(" ");
                prop_assert_eq!(tokenize(&once).join(" "), once);
            }
        }
    }
}
