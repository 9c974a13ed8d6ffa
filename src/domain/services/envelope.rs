#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;

/// Wire envelope serialization. Every response is a single newline-terminated
/// unit rooted at a `<response>` tag; see `decode` for the consumer side.
pub struct ResponseEnvelope {}

impl ResponseEnvelope {
    pub fn chat(model: &str, content: &str) -> String {
        return format!(
            "<response><model>{model}</model><content>{content}</content></response>\n"
        );
    }

    pub fn clear() -> String {
        return "<response><type>command</type><command>clear</command><message>Conversation history has been cleared.</message></response>\n".to_string();
    }

    pub fn models(current_model: &str, available_models: &[String]) -> String {
        let listed = available_models
            .iter()
            .map(|model| return format!("<model>{model}</model>"))
            .collect::<Vec<String>>()
            .join("");

        return format!(
            "<response><type>command</type><command>models</command><current_model>{current_model}</current_model><available_models>{listed}</available_models><message>Use /model followed by a name to switch models.</message></response>\n"
        );
    }

    pub fn model_change(success: bool, model: &str, message: &str) -> String {
        return format!(
            "<response><type>command</type><command>model_change</command><success>{success}</success><model>{model}</model><message>{message}</message></response>\n"
        );
    }

    /// Extracts the content of the first `<tag>…</tag>` pair found by a
    /// linear scan, trimmed of surrounding whitespace. This is deliberately
    /// not a structural parse: later same-named tags are ignored, and a
    /// missing opening or closing tag yields `None` rather than an error, so
    /// callers must treat every field as optional.
    pub fn decode(text: &str, tag: &str) -> Option<String> {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");

        let start = text.find(&open)? + open.len();
        let len = text[start..].find(&close)?;

        return Some(text[start..start + len].trim().to_string());
    }
}
