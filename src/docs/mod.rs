//! Static documentation for the `resend-template` package

const README: &str = include_str!("readme.md");

/// Parameters every `sendTemplateEmail` call takes
pub const SEND_PARAMETERS: [&str; 5] = ["apiKey", "from", "to", "templateId", "variables"];

/// The package documentation as Markdown
pub fn readme() -> &'static str {
    README
}
