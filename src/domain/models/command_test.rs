use super::Command;

#[test]
fn it_skips_an_empty_line() {
    assert!(Command::parse("").is_none());
}

#[test]
fn it_skips_a_whitespace_only_line() {
    assert!(Command::parse("   \t  ").is_none());
}

#[test]
fn it_parses_clear() {
    assert_eq!(Command::parse("/clear"), Some(Command::Reset));
}

#[test]
fn it_parses_clear_case_insensitively() {
    assert_eq!(Command::parse("  /CLEAR  "), Some(Command::Reset));
}

#[test]
fn it_parses_models() {
    assert_eq!(Command::parse("/models"), Some(Command::ListModels));
}

#[test]
fn it_parses_models_case_insensitively() {
    assert_eq!(Command::parse("/Models"), Some(Command::ListModels));
}

#[test]
fn it_parses_set_model() {
    assert_eq!(
        Command::parse("/model mistral"),
        Some(Command::SetModel("mistral".to_string()))
    );
}

#[test]
fn it_parses_set_model_with_case_insensitive_prefix_only() {
    assert_eq!(
        Command::parse("/MODEL Mixtral-8x7B"),
        Some(Command::SetModel("Mixtral-8x7B".to_string()))
    );
}

#[test]
fn it_trims_the_set_model_argument() {
    assert_eq!(
        Command::parse("  /model   llama3  "),
        Some(Command::SetModel("llama3".to_string()))
    );
}

#[test]
fn it_treats_bare_model_keyword_as_chat() {
    assert_eq!(
        Command::parse("/model"),
        Some(Command::Chat("/model".to_string()))
    );
}

#[test]
fn it_treats_unknown_commands_as_chat() {
    assert_eq!(
        Command::parse("/help"),
        Some(Command::Chat("/help".to_string()))
    );
}

#[test]
fn it_preserves_the_original_chat_line() {
    assert_eq!(
        Command::parse("  Hello There  "),
        Some(Command::Chat("  Hello There  ".to_string()))
    );
}

#[test]
fn it_treats_multibyte_lines_as_chat() {
    assert_eq!(
        Command::parse("こんにちは"),
        Some(Command::Chat("こんにちは".to_string()))
    );
}
