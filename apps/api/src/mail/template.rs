//! Placeholder substitution for the fixed HTML email bodies.
//!
//! Every `{{key}}` occurrence whose key is present in the data map is replaced
//! with the value's text. Unknown placeholders stay in the output verbatim.
//! Values are inserted raw: no HTML escaping is applied.

use crate::models::email::TemplateData;
use crate::models::text_value;

/// Substitutes `data` into `template` in one left-to-right scan. Inserted
/// values are never rescanned, so a value that itself contains `{{key}}`
/// text comes out literally.
pub fn render(template: &str, data: &TemplateData) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        match data.get(&after[..end]) {
            Some(value) => {
                out.push_str(&text_value(value));
                rest = &after[end + 2..];
            }
            // Not a known token here; emit one brace and resume, so `{{{key}}}`
            // still resolves the inner `{{key}}`.
            None => {
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// True if any `{{...}}` token remains in `html`.
pub fn has_unresolved_placeholders(html: &str) -> bool {
    html.find("{{")
        .map(|start| html[start + 2..].contains("}}"))
        .unwrap_or(false)
}
