#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

const MODEL_PREFIX: &str = "/model ";

/// A classified input line. Produced fresh from each completed line and
/// consumed immediately, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reset,
    ListModels,
    SetModel(String),
    Chat(String),
}

impl Command {
    /// Classifies a completed line. Command keywords are matched
    /// ASCII-case-insensitively against the trimmed line; chat text and
    /// model-name arguments keep their casing as typed. Lines that are empty
    /// after trimming classify to `None` and are skipped by the caller.
    pub fn parse(line: &str) -> Option<Command> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.eq_ignore_ascii_case("/clear") {
            return Some(Command::Reset);
        }

        if trimmed.eq_ignore_ascii_case("/models") {
            return Some(Command::ListModels);
        }

        if let Some(prefix) = trimmed.get(..MODEL_PREFIX.len()) {
            if prefix.eq_ignore_ascii_case(MODEL_PREFIX) {
                let name = trimmed[MODEL_PREFIX.len()..].trim();
                return Some(Command::SetModel(name.to_string()));
            }
        }

        return Some(Command::Chat(line.to_string()));
    }
}
