//! Message rendering primitives
//!
//! Shared vocabulary of the chat messages: the heavy-rule divider, the
//! disclaimer, HTML-like markup and a line builder.

/// Section divider (18 heavy horizontal rules)
pub const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━";

/// Trailing disclaimer line
pub const DISCLAIMER: &str = "⚠️ Não é recomendação de investimento";

/// Placeholder for values that are not available
pub const NOT_AVAILABLE: &str = "N/A";

/// Wrap text in bold markup
pub fn bold(text: &str) -> String {
    format!("<b>{}</b>", text)
}

/// Wrap text in italic markup
pub fn italic(text: &str) -> String {
    format!("<i>{}</i>", text)
}

/// Disclaimer with the phrase after the warning sign in italics
pub fn italic_disclaimer() -> String {
    match DISCLAIMER.split_once(' ') {
        Some((sign, text)) => format!("{} {}", sign, italic(text)),
        None => italic(DISCLAIMER),
    }
}

/// Line-oriented message builder
#[derive(Debug, Default)]
pub struct MessageBuilder {
    buf: String,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line followed by a newline
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self
    }

    /// Append a line only when the text is present
    pub fn line_opt(&mut self, text: Option<impl AsRef<str>>) -> &mut Self {
        if let Some(text) = text {
            self.line(text);
        }
        self
    }

    /// Append an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Append a divider line
    pub fn divider(&mut self) -> &mut Self {
        self.line(DIVIDER)
    }

    /// Append a block followed by a divider, if the block is present
    pub fn section(&mut self, block: Option<impl AsRef<str>>) -> &mut Self {
        if let Some(block) = block {
            self.line(block).divider();
        }
        self
    }

    /// Append text without a trailing newline
    pub fn push(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buf.push_str(text.as_ref());
        self
    }

    /// Finish and return the message
    pub fn build(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}
