use crate::models::GenerateContentRequest;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

pub const TEMPLATE_NOT_FOUND: &str = "Prompt template not found";
pub const TEMPLATE_LOAD_ERROR: &str = "Error loading prompt template";

/// Reads the template from disk. Never fails: a missing or unreadable file
/// yields a sentinel string and the request carries on.
pub fn load_prompt_template(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content.trim().to_string(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Prompt template not found at {}", path.display());
            TEMPLATE_NOT_FOUND.to_string()
        }
        Err(e) => {
            warn!("Error loading prompt template {}: {}", path.display(), e);
            TEMPLATE_LOAD_ERROR.to_string()
        }
    }
}

fn render_topics(topics: &[String]) -> String {
    let quoted: Vec<String> = topics.iter().map(|t| format!("'{}'", t)).collect();
    format!("[{}]", quoted.join(", "))
}

pub fn format_user_information(request: &GenerateContentRequest) -> String {
    format!(
        "\n<user_profile>\ntopics_of_interest: {}\nai_voice: {}\nabout_context: {}\npost_preference: {}\n</user_profile>\n",
        render_topics(&request.topics_of_interest),
        request.ai_voice,
        request.about_context,
        request.post_preference,
    )
}

pub fn assemble_prompt(template_path: &Path, request: &GenerateContentRequest) -> String {
    let template = load_prompt_template(template_path);
    let user_information = format_user_information(request);
    format!("{}\n\n{}", template, user_information)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_request() -> GenerateContentRequest {
        GenerateContentRequest {
            topics_of_interest: vec!["Rust".to_string(), "Compilers".to_string()],
            ai_voice: "casual".to_string(),
            about_context: "I maintain a parser crate".to_string(),
            post_preference: "short and punchy".to_string(),
        }
    }

    #[test]
    fn test_load_template_trims_whitespace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\n  Write a LinkedIn post.\n\n").unwrap();
        assert_eq!(load_prompt_template(file.path()), "Write a LinkedIn post.");
    }

    #[test]
    fn test_load_template_missing_file_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.txt");
        assert_eq!(load_prompt_template(&path), TEMPLATE_NOT_FOUND);
    }

    #[test]
    fn test_load_template_unreadable_uses_error_placeholder() {
        // A directory exists but cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_prompt_template(dir.path()), TEMPLATE_LOAD_ERROR);
    }

    #[test]
    fn test_format_user_information_block() {
        let rendered = format_user_information(&sample_request());
        assert_eq!(
            rendered,
            "\n<user_profile>\n\
             topics_of_interest: ['Rust', 'Compilers']\n\
             ai_voice: casual\n\
             about_context: I maintain a parser crate\n\
             post_preference: short and punchy\n\
             </user_profile>\n"
        );
    }

    #[test]
    fn test_format_user_information_empty_topics() {
        let mut req = sample_request();
        req.topics_of_interest.clear();
        assert!(format_user_information(&req).contains("topics_of_interest: []\n"));
    }

    #[test]
    fn test_assemble_prompt_joins_with_blank_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "TEMPLATE").unwrap();
        let prompt = assemble_prompt(file.path(), &sample_request());
        assert!(prompt.starts_with("TEMPLATE\n\n\n<user_profile>\n"));
        assert!(prompt.ends_with("</user_profile>\n"));
    }

    #[test]
    fn test_assemble_prompt_without_template_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let prompt = assemble_prompt(&dir.path().join("absent.txt"), &sample_request());
        assert!(prompt.starts_with("Prompt template not found\n\n"));
        assert!(prompt.contains("ai_voice: casual"));
    }
}
