//! End-to-end tests for splitting command lines through the public API.

use keyline::commands::builtin_registry;
use keyline::{split_command_args, tokenize, CommandRegistry, KeylineError};
use pretty_assertions::assert_eq;

fn registry(names: &[&str]) -> CommandRegistry {
    CommandRegistry::new(names).unwrap()
}

#[test]
fn test_specific_entry_listed_first_wins() {
    let reg = registry(&["CLIENT LIST", "CLIENT", "GET"]);
    let parsed = split_command_args("client list foo", &reg).unwrap();

    assert_eq!(parsed.command, "client list");
    assert_eq!(parsed.arguments, vec!["foo"]);
}

#[test]
fn test_registry_order_decides_match() {
    let reg = registry(&["CLIENT", "CLIENT LIST"]);
    let parsed = split_command_args("client list", &reg).unwrap();

    assert_eq!(parsed.command, "client");
    assert_eq!(parsed.arguments, vec!["list"]);
}

#[test]
fn test_unknown_command() {
    let reg = registry(&["GET"]);
    match split_command_args("hget h f", &reg) {
        Err(KeylineError::UnknownCommand(input)) => assert_eq!(input, "hget h f"),
        other => panic!("expected UnknownCommand, got {other:?}"),
    }
}

#[test]
fn test_quoted_arguments_with_builtin_registry() {
    let reg = builtin_registry().unwrap();
    let parsed = split_command_args(
        r#"SET greeting "say \"hi there\"" EX 10"#,
        &reg,
    )
    .unwrap();

    assert_eq!(parsed.command, "SET");
    assert_eq!(
        parsed.arguments,
        vec!["greeting", r#"say "hi there""#, "EX", "10"]
    );
}

#[test]
fn test_empty_string_argument() {
    let reg = builtin_registry().unwrap();
    let parsed = split_command_args(r#"set key """#, &reg).unwrap();
    assert_eq!(parsed.arguments, vec!["key", ""]);
}

#[test]
fn test_multi_word_builtin_commands() {
    let reg = builtin_registry().unwrap();

    let parsed = split_command_args("config set maxmemory 100mb", &reg).unwrap();
    assert_eq!(parsed.command, "config set");
    assert_eq!(parsed.arguments, vec!["maxmemory", "100mb"]);

    let parsed = split_command_args("XGROUP CREATE stream grp $ MKSTREAM", &reg).unwrap();
    assert_eq!(parsed.command, "XGROUP CREATE");
    assert_eq!(parsed.arguments, vec!["stream", "grp", "$", "MKSTREAM"]);
}

#[test]
fn test_unterminated_quote_rejects_whole_line() {
    let reg = builtin_registry().unwrap();
    assert!(matches!(
        split_command_args("set it's fine", &reg),
        Err(KeylineError::UnterminatedQuote)
    ));
}

#[test]
fn test_plain_text_tokenizes_like_whitespace_split() {
    for input in ["a b c", "  lots   of\tspace  ", "x", "", "k1 v1 k2 v2"] {
        let expected: Vec<String> = input.split_whitespace().map(String::from).collect();
        assert_eq!(tokenize(input).unwrap(), expected, "input: {input:?}");
    }
}

#[test]
fn test_retokenizing_joined_tokens_is_stable() {
    let tokens = tokenize(r#"k 'v1' "v2" plain\path"#).unwrap();
    assert_eq!(tokenize(&tokens.join(" ")).unwrap(), tokens);
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let reg = std::sync::Arc::new(builtin_registry().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let reg = std::sync::Arc::clone(&reg);
            std::thread::spawn(move || {
                split_command_args(&format!("get key{i}"), &reg)
                    .unwrap()
                    .arguments
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), vec![format!("key{i}")]);
    }
}
