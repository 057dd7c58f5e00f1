//! Command-line tokenizer behavior on realistic command lines

use pixhost::cmdline::{tokenize, ArgVector, DEFAULT_MAX_ARGS};

#[test]
fn test_documented_cases() {
    assert_eq!(tokenize("a b c", 10), vec!["a", "b", "c"]);
    assert_eq!(tokenize("\"a b\" c", 10), vec!["a b", "c"]);
    assert_eq!(tokenize("\"a\"\"b\"", 10), vec!["a\"b"]);
    assert!(tokenize("", 10).is_empty());
    assert_eq!(tokenize("a b c", 2), vec!["a", "b"]);
    assert_eq!(tokenize("\"abc", 10), vec!["abc"]);
}

#[test]
fn test_program_path_with_spaces() {
    let line = r#""C:\Program Files\Game\game.exe" -level 3 "save slot.dat""#;
    assert_eq!(
        tokenize(line, DEFAULT_MAX_ARGS),
        vec![r"C:\Program Files\Game\game.exe", "-level", "3", "save slot.dat"]
    );
}

#[test]
fn test_backslashes_are_literal() {
    // Only doubled quotes escape; backslashes carry no meaning.
    assert_eq!(tokenize(r#"a\b "c\d" e\"#, 10), vec![r"a\b", r"c\d", r"e\"]);
}

#[test]
fn test_tabs_and_trailing_whitespace() {
    assert_eq!(tokenize("\tgame.exe\t\t-x  \r\n", 10), vec!["game.exe", "-x"]);
}

#[test]
fn test_no_empty_tokens_without_quotes() {
    let tokens = tokenize("  one   two    three  ", 10);
    assert!(tokens.iter().all(|t| !t.is_empty()));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_every_token_is_a_substring_unless_escaped() {
    let line = "alpha \"beta gamma\" delta\"x\" \"e\"\"f\"";
    for token in tokenize(line, 10) {
        if !token.contains('"') || token == "delta\"x\"" {
            assert!(line.contains(token.as_ref()), "{:?}", token);
        }
    }
}

#[test]
fn test_unquoted_token_keeps_quotes() {
    assert_eq!(tokenize("delta\"x\" y", 10), vec!["delta\"x\"", "y"]);
}

#[test]
fn test_arg_vector_truncates_to_default_max() {
    let line = vec!["x"; 20].join(" ");
    assert_eq!(ArgVector::parse(&line, DEFAULT_MAX_ARGS).len(), 16);
}
