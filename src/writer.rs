//! Markup-writer primitive used by every renderer.
//!
//! Start tags stay open after [`ResponseWriter::start_element`] so attributes
//! can follow; the first piece of content (text, raw markup, a child element
//! or the matching close) terminates them. Every open element is tracked on a
//! stack so a close that does not match the innermost open element is caught
//! at the point it happens instead of producing malformed output.

use std::io::Write;

use crate::error::{MarkupError, MarkupResult};

pub struct ResponseWriter<'w> {
    out: &'w mut dyn Write,
    open: Vec<&'static str>,
    start_tag_open: bool,
}

impl<'w> ResponseWriter<'w> {
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self {
            out,
            open: Vec::new(),
            start_tag_open: false,
        }
    }

    /// Open `<tag`; attributes may follow until content is written.
    pub fn start_element(&mut self, tag: &'static str) -> MarkupResult<()> {
        self.close_start_tag()?;
        write!(self.out, "<{}", tag)?;
        self.open.push(tag);
        self.start_tag_open = true;
        Ok(())
    }

    pub fn write_attribute(&mut self, name: &str, value: &str) -> MarkupResult<()> {
        if !self.start_tag_open {
            return Err(MarkupError::AttributeOutsideStartTag {
                name: name.to_string(),
            });
        }
        write!(self.out, " {}=\"{}\"", name, escape_attribute(value))?;
        Ok(())
    }

    /// Write escaped character data.
    pub fn write_text(&mut self, text: &str) -> MarkupResult<()> {
        self.close_start_tag()?;
        self.out.write_all(escape_text(text).as_bytes())?;
        Ok(())
    }

    /// Write markup verbatim. The caller is responsible for its well-formedness.
    pub fn write_raw(&mut self, markup: &str) -> MarkupResult<()> {
        self.close_start_tag()?;
        self.out.write_all(markup.as_bytes())?;
        Ok(())
    }

    /// Close the innermost open element, which must be `tag`.
    pub fn end_element(&mut self, tag: &str) -> MarkupResult<()> {
        match self.open.last() {
            Some(top) if *top == tag => {}
            other => {
                return Err(MarkupError::UnbalancedClose {
                    expected: other.map(|t| t.to_string()),
                    found: tag.to_string(),
                });
            }
        }
        self.open.pop();
        if self.start_tag_open {
            self.start_tag_open = false;
            write!(self.out, "></{}>", tag)?;
        } else {
            write!(self.out, "</{}>", tag)?;
        }
        Ok(())
    }

    /// Elements opened and not yet closed, outermost first.
    pub fn open_elements(&self) -> &[&'static str] {
        &self.open
    }

    pub fn is_balanced(&self) -> bool {
        self.open.is_empty()
    }

    pub fn flush(&mut self) -> MarkupResult<()> {
        self.close_start_tag()?;
        self.out.flush()?;
        Ok(())
    }

    fn close_start_tag(&mut self) -> MarkupResult<()> {
        if self.start_tag_open {
            self.start_tag_open = false;
            self.out.write_all(b">")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ResponseWriter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseWriter")
            .field("open", &self.open)
            .field("start_tag_open", &self.start_tag_open)
            .finish_non_exhaustive()
    }
}

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
