//! Template rendering with placeholder substitution

use crate::contacts::ContactRow;
use crate::error::{OutreachError, Result};

/// Render a template against a contact row.
///
/// Every `{field}` placeholder is replaced with the row's value for that
/// column in a single pass; there is no recursive expansion and no HTML or
/// script evaluation. `{{` and `}}` escape to literal braces.
///
/// A placeholder naming a column the row does not have fails with
/// [`OutreachError::MissingField`] rather than rendering an empty string or
/// leaving the placeholder in place.
///
/// # Arguments
/// * `template_text` - The raw template content
/// * `template_name` - Identifier used in error messages
/// * `row` - The contact row supplying placeholder values
pub fn render(template_text: &str, template_name: &str, row: &ContactRow) -> Result<String> {
    let mut result = String::with_capacity(template_text.len());
    let mut chars = template_text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                result.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                result.push('}');
            }
            '{' => {
                let mut field = String::new();
                let mut closed = false;
                for ch in chars.by_ref() {
                    if ch == '}' {
                        closed = true;
                        break;
                    }
                    field.push(ch);
                }

                if !closed {
                    return Err(OutreachError::MissingField {
                        field,
                        template: template_name.to_string(),
                    });
                }

                match row.fields().get(&field) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(OutreachError::MissingField {
                            field,
                            template: template_name.to_string(),
                        })
                    }
                }
            }
            _ => result.push(c),
        }
    }

    Ok(result)
}
