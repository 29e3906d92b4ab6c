//! Usage-code generation for `sendTemplateEmail`
//!
//! Turns a [`TemplateRecord`] into a JavaScript snippet that declares the
//! sender credentials, a `variables` object with one entry per placeholder,
//! and the `sendTemplateEmail` call itself. Two fixed layouts exist, picked by
//! [`DisplayContext`].

use std::sync::Arc;
use tera::{Context, Tera};
use tracing::debug;

use crate::catalog::TemplateRecord;
use crate::error::Result;
use crate::generation::{Clock, DisplayContext, SystemClock, VariableMap, extract_variables};

const NARROW_TEMPLATE: &str = "narrow.js";
const WIDE_TEMPLATE: &str = "wide.js";

/// Variable that is filled with the current year instead of a placeholder
pub const YEAR_VARIABLE: &str = "year";
/// Variable backfilled from the record's subject line
pub const SUBJECT_VARIABLE: &str = "subject";

/// Renders usage snippets. Holds no per-call state and can be shared freely.
pub struct UsageCodeGenerator {
    tera: Tera,
    clock: Arc<dyn Clock>,
}

impl UsageCodeGenerator {
    pub fn new() -> Result<Self> {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            (NARROW_TEMPLATE, include_str!("snippets/narrow.js.tera")),
            (WIDE_TEMPLATE, include_str!("snippets/wide.js.tera")),
        ])?;

        Ok(Self { tera, clock })
    }

    /// Builds the sample value for each variable in `template`.
    ///
    /// Placeholders from the HTML body come first, in extraction order. A
    /// non-empty subject is appended as `subject` unless the body already
    /// references that variable.
    pub fn variables_for(&self, template: &TemplateRecord) -> VariableMap {
        let mut variables = VariableMap::new();

        for name in extract_variables(&template.html) {
            let value = if name == YEAR_VARIABLE {
                self.clock.current_year().to_string()
            } else {
                format!("Replace {name} here")
            };
            variables.insert_if_absent(name, value);
        }

        if !template.subject.is_empty() {
            variables.insert_if_absent(SUBJECT_VARIABLE, template.subject.clone());
        }

        variables
    }

    /// Renders the usage snippet for `template` in the given layout
    pub fn generate(&self, template: &TemplateRecord, context: DisplayContext) -> Result<String> {
        let variables = self.variables_for(template);
        debug!(
            template_id = %template.template_id,
            layout = %context,
            variables = variables.len(),
            "Generating usage code"
        );

        let mut tera_context = Context::new();
        tera_context.insert("template_id", &template.template_id);
        tera_context.insert("variables", &variables.to_object_literal());

        let name = match context {
            DisplayContext::Narrow => NARROW_TEMPLATE,
            DisplayContext::Wide => WIDE_TEMPLATE,
        };
        let rendered = self.tera.render(name, &tera_context)?;

        Ok(rendered.trim_end_matches('\n').to_string())
    }
}

/// One-shot helper using the system clock
pub fn generate_usage_code(template: &TemplateRecord, context: DisplayContext) -> Result<String> {
    UsageCodeGenerator::new()?.generate(template, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::FixedClock;

    fn generator(year: i32) -> UsageCodeGenerator {
        UsageCodeGenerator::with_clock(Arc::new(FixedClock::new(year))).unwrap()
    }

    fn welcome() -> TemplateRecord {
        TemplateRecord::new(
            "welcome-email",
            "Welcome!",
            "<h1>Hi {{name}}</h1><p>&copy; {{year}} {{company}}</p><p>{{name}}</p>",
        )
    }

    #[test]
    fn test_variables_follow_extraction_order_with_subject_last() {
        let variables = generator(2026).variables_for(&welcome());
        let keys: Vec<&str> = variables.iter().map(|(k, _)| k).collect();

        assert_eq!(keys, vec!["name", "year", "company", "subject"]);
        assert_eq!(variables.get("name"), Some("Replace name here"));
        assert_eq!(variables.get("year"), Some("2026"));
        assert_eq!(variables.get("subject"), Some("Welcome!"));
    }

    #[test]
    fn test_year_comes_from_clock() {
        let template = TemplateRecord::new("footer", "", "{{year}}");
        let code = generator(1999).generate(&template, DisplayContext::Wide).unwrap();
        assert!(code.contains("  year: '1999'"));
    }

    #[test]
    fn test_subject_placeholder_is_not_overridden() {
        let template = TemplateRecord::new("news", "Weekly digest", "<title>{{subject}}</title>");
        let variables = generator(2026).variables_for(&template);

        assert_eq!(variables.len(), 1);
        assert_eq!(variables.get("subject"), Some("Replace subject here"));
    }

    #[test]
    fn test_empty_subject_is_not_backfilled() {
        let template = TemplateRecord::new("plain", "", "<p>{{name}}</p>");
        let variables = generator(2026).variables_for(&template);
        assert!(!variables.contains_key("subject"));
    }

    #[test]
    fn test_subject_is_inserted_verbatim() {
        let template = TemplateRecord::new("quoted", "It's {{name}}'s day", "");
        let code = generator(2026).generate(&template, DisplayContext::Narrow).unwrap();
        assert!(code.contains("  subject: 'It's {{name}}'s day'"));
    }

    #[test]
    fn test_missing_html_yields_only_subject() {
        let template = TemplateRecord::new("bare", "Hello", "");
        let code = generator(2026).generate(&template, DisplayContext::Wide).unwrap();
        assert!(code.contains("const variables = {\n  subject: 'Hello'\n};"));
    }

    #[test]
    fn test_no_variables_renders_empty_object() {
        let template = TemplateRecord::new("bare", "", "<p>static</p>");
        let code = generator(2026).generate(&template, DisplayContext::Narrow).unwrap();
        assert!(code.contains("const variables = {};"));
    }

    #[test]
    fn test_wide_layout_exact_output() {
        let template = TemplateRecord::new("welcome-email", "Welcome!", "<p>{{name}}</p>");
        let code = generator(2026).generate(&template, DisplayContext::Wide).unwrap();

        let expected = "\
const apiKey = 'your_resend_api_key'; // Resend API Key
const from = 'your-email@example.com'; // Sender email address
const to = 'recipient@example.com'; // Recipient email address
const templateId = 'welcome-email'; // Template ID from your backend
const variables = {
  name: 'Replace name here',
  subject: 'Welcome!'
};

sendTemplateEmail({ apiKey, from, to, templateId, variables })
  .then(response => {
    console.log('Email sent successfully:', response);
  })
  .catch(err => {
    console.error('Error sending email:', err);
  });";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_narrow_layout_is_condensed() {
        let code = generator(2026)
            .generate(&welcome(), DisplayContext::Narrow)
            .unwrap();

        assert!(code.starts_with("const apiKey = 'your_api_key'; \n"));
        assert!(code.contains("const templateId = 'welcome-email'; \n"));
        assert!(!code.contains("//"));
        assert!(code.ends_with(".catch(err => console.error('Error:', err));"));
    }

    #[test]
    fn test_layouts_share_template_id_and_variables() {
        let generator = generator(2026);
        let template = welcome();
        let narrow = generator.generate(&template, DisplayContext::Narrow).unwrap();
        let wide = generator.generate(&template, DisplayContext::Wide).unwrap();

        let literal = generator.variables_for(&template).to_object_literal();
        for code in [&narrow, &wide] {
            assert!(code.contains("'welcome-email'"));
            assert!(code.contains(&format!("const variables = {literal};")));
            assert!(code.contains("sendTemplateEmail("));
        }
        assert_ne!(narrow, wide);
        assert!(wide.contains("// Resend API Key"));
    }

    #[test]
    fn test_html_in_values_is_not_escaped() {
        let template = TemplateRecord::new("a&b", "<b>Bold</b> & more", "");
        let code = generator(2026).generate(&template, DisplayContext::Wide).unwrap();
        assert!(code.contains("const templateId = 'a&b';"));
        assert!(code.contains("subject: '<b>Bold</b> & more'"));
    }

    #[test]
    fn test_one_shot_helper_uses_system_clock() {
        let template = TemplateRecord::new("footer", "", "{{year}}");
        let code = generate_usage_code(&template, DisplayContext::Narrow).unwrap();
        let year = SystemClock.current_year().to_string();
        assert!(code.contains(&format!("year: '{year}'")));
    }
}
