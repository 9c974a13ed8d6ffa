use super::BackendName;

#[test]
fn it_parses_ollama() {
    assert_eq!(BackendName::parse("ollama").unwrap(), BackendName::Ollama);
}

#[test]
fn it_parses_openai() {
    assert_eq!(BackendName::parse("openai").unwrap(), BackendName::OpenAI);
}

#[test]
fn it_fails_to_parse_unknown_backends() {
    assert!(BackendName::parse("doesnotexist").is_err());
}

#[test]
fn it_displays_lowercase_names() {
    assert_eq!(BackendName::Ollama.to_string(), "ollama");
    assert_eq!(BackendName::OpenAI.to_string(), "openai");
}
