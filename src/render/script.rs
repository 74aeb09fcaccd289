//! Inline client-side initialization.
//!
//! Client ids end up inside a jQuery selector inside a single-quoted
//! JavaScript string inside a `<script>` element, so they are escaped for
//! all three: selector metacharacters get a CSS backslash (doubled for the
//! string literal), quotes and backslashes are escaped for the literal, and
//! control characters become CSS hex escapes. The result never contains a
//! quote the literal would end on, a raw line terminator, or `</`.

use crate::error::MarkupResult;
use crate::writer::ResponseWriter;

const SELECTOR_META: &str = "!\"#$%&'()*+,./:;<=>?@[\\]^`{|}~";

/// Escape a client id for `$('#…')`.
///
/// NUL has no CSS escape and comes out as U+FFFD; ids passing
/// `validate_id` never contain it.
pub fn escape_client_id(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 8);
    for (i, c) in id.chars().enumerate() {
        match c {
            // CSS `\\` written as a JS literal.
            '\\' => out.push_str("\\\\\\\\"),
            // CSS `\'`, with the quote itself escaped for the literal.
            '\'' => out.push_str("\\\\\\'"),
            ' ' => out.push_str("\\\\ "),
            c if SELECTOR_META.contains(c) => {
                out.push_str("\\\\");
                out.push(c);
            }
            '\0' => out.push_str("\\\\fffd "),
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                out.push_str(&format!("\\\\{:x} ", c as u32));
            }
            // An identifier cannot start with a digit.
            c if i == 0 && c.is_ascii_digit() => {
                out.push_str(&format!("\\\\{:x} ", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// `<script id="{id}_js">` that initializes the modal as hidden.
pub fn encode_modal_init(rw: &mut ResponseWriter<'_>, client_id: &str) -> MarkupResult<()> {
    rw.start_element("script")?;
    rw.write_attribute("id", &format!("{}_js", client_id))?;
    rw.write_attribute("type", "text/javascript")?;
    rw.write_raw("$(function(){")?;
    rw.write_raw(&format!(
        "$('#{}').modal({{ show: false }});",
        escape_client_id(client_id)
    ))?;
    rw.write_raw("});")?;
    rw.end_element("script")
}

/// One script block calling `.tooltip()` on every id in `client_ids`.
pub fn encode_tooltip_activation(
    rw: &mut ResponseWriter<'_>,
    client_ids: &[String],
) -> MarkupResult<()> {
    if client_ids.is_empty() {
        return Ok(());
    }
    rw.start_element("script")?;
    rw.write_attribute("type", "text/javascript")?;
    rw.write_raw("$(function(){")?;
    for id in client_ids {
        rw.write_raw(&format!("$('#{}').tooltip();", escape_client_id(id)))?;
    }
    rw.write_raw("});")?;
    rw.end_element("script")
}
