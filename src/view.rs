//! Plain-text rendering of catalog cards and the usage view

use crate::catalog::TemplateRecord;
use crate::generation::extract_variables;

/// Notes shown under every usage sample
pub const USAGE_NOTES: [&str; 2] = [
    "Subject is required for all templates",
    "All variables must be provided",
];

/// One catalog card: id, subject line and the variables the body uses
pub fn render_card(template: &TemplateRecord) -> String {
    let underline = "-".repeat(template.template_id.chars().count().max(1));
    let mut out = format!(
        "{}\n{}\nSubject: {}\nVariables:\n",
        template.template_id, underline, template.subject
    );

    let variables = extract_variables(&template.html);
    if variables.is_empty() {
        out.push_str("  (none)\n");
    }
    for variable in variables {
        out.push_str(&format!("  - {variable}\n"));
    }

    out
}

/// Usage sample followed by the fixed notes
pub fn render_usage(template_id: &str, code: &str) -> String {
    let mut out = format!("{template_id}\n\nUsage Example:\n\n{code}\n\nImportant Notes:\n");
    for note in USAGE_NOTES {
        out.push_str(&format!("  - {note}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_lists_variables() {
        let template = TemplateRecord::new(
            "password-reset",
            "Reset your password",
            "<a href='{{reset_link}}'>{{name}}</a> {{reset_link}}",
        );
        let card = render_card(&template);

        assert!(card.starts_with("password-reset\n--------------\n"));
        assert!(card.contains("Subject: Reset your password\n"));
        assert!(card.contains("Variables:\n  - reset_link\n  - name\n"));
    }

    #[test]
    fn test_card_without_variables() {
        let card = render_card(&TemplateRecord::new("static", "Hi", "<p>hello</p>"));
        assert!(card.contains("Variables:\n  (none)\n"));
    }

    #[test]
    fn test_usage_view_layout() {
        let view = render_usage("welcome-email", "const x = 1;");
        assert_eq!(
            view,
            "welcome-email\n\nUsage Example:\n\nconst x = 1;\n\nImportant Notes:\n  \
             - Subject is required for all templates\n  - All variables must be provided\n"
        );
    }

    #[test]
    fn test_card_exact_layout() {
        let card = render_card(&TemplateRecord::new("otp", "Your code", "{{code}}"));
        assert_eq!(card, "otp\n---\nSubject: Your code\nVariables:\n  - code\n");
    }

    #[test]
    fn test_usage_view_appends_notes() {
        let view = render_usage("welcome-email", "sendTemplateEmail({})");
        assert!(view.contains("Usage Example:"));
        assert!(view.contains("sendTemplateEmail({})"));
        assert!(view.contains("  - Subject is required for all templates"));
        assert!(view.contains("  - All variables must be provided"));
    }
}
