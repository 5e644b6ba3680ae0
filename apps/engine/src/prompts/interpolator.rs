//! Template interpolation — fills `{variable}` placeholders from a
//! context map, leaving unresolved placeholders verbatim.

use crate::models::prompt::ContextMap;

/// Substitutes every `{key}` whose key has a value in the context.
/// Placeholders with no matching value (and stray braces) pass through
/// untouched, so a partially-filled template stays inspectable.
pub fn interpolate(template: &str, context: &ContextMap) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find(|c| c == '{' || c == '}') {
            // Well-formed placeholder: substitute if the key resolves.
            Some(close) if after_open.as_bytes()[close] == b'}' => {
                let key = &after_open[..close];
                match context.get(key) {
                    Some(value) => output.push_str(&value.to_string()),
                    None => {
                        output.push('{');
                        output.push_str(key);
                        output.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            // Nested '{' or no closing brace: emit the brace literally.
            _ => {
                output.push('{');
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}
