//! Placeholder extraction for `{{name}}` tokens

use once_cell::sync::Lazy;
use regex::Regex;

/// `{{` + one or more non-`}` characters + `}}`. Not brace-depth aware.
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder pattern is valid")
});

/// Extracts the variable names referenced by `{{name}}` placeholders.
///
/// Matches are found left-to-right without overlap; names are returned in
/// first-occurrence order with duplicates removed. Nested braces are not
/// balanced, so `{{{x}}}` yields `{x`.
///
/// # Examples
/// ```
/// use template_catalog::generation::extract_variables;
///
/// assert_eq!(
///     extract_variables("Hello {{name}}, welcome to {{year}}"),
///     vec!["name", "year"]
/// );
/// ```
pub fn extract_variables(html: &str) -> Vec<String> {
    let mut variables: Vec<String> = Vec::new();

    for caps in PLACEHOLDER_RE.captures_iter(html) {
        let name = &caps[1];
        if !variables.iter().any(|seen| seen == name) {
            variables.push(name.to_string());
        }
    }

    variables
}
