use crate::content::color::Color;
use crate::foundation::error::CutlineResult;
use crate::validate::numeric::{FONT_SIZE, LINE_SPACING};
use crate::validate::security::{validate_font_name, validate_text_with_limit};

/// Horizontal paragraph alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
    /// Justified.
    Justified,
}

impl TextAlignment {
    /// Wire token.
    pub fn wire(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justified => "justified",
        }
    }

    /// Parse a wire token (case-insensitive).
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justified" => Some(Self::Justified),
            _ => None,
        }
    }
}

/// Character and paragraph style of a title.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font family name.
    pub font: String,
    /// Size in points.
    pub font_size: f64,
    /// Line spacing multiplier; `None` uses the template default.
    pub line_spacing: Option<f64>,
    /// Fill color.
    pub color: Color,
    /// Paragraph alignment.
    pub alignment: TextAlignment,
    /// Bold face.
    pub bold: bool,
    /// Italic face.
    pub italic: bool,
}

impl TextStyle {
    /// Default style in `font`: 60pt white, centered.
    pub fn new(font: impl Into<String>) -> Self {
        Self {
            font: font.into(),
            font_size: 60.0,
            line_spacing: None,
            color: Color::white(),
            alignment: TextAlignment::Center,
            bold: false,
            italic: false,
        }
    }

    /// Set the font size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the line spacing multiplier.
    pub fn with_line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    /// Range checks for size, spacing and color.
    pub fn validate_ranges(&self, field: &str) -> CutlineResult<()> {
        FONT_SIZE.check(&format!("{field}.font_size"), self.font_size)?;
        if let Some(ls) = self.line_spacing {
            LINE_SPACING.check(&format!("{field}.line_spacing"), ls)?;
        }
        self.color.validate(&format!("{field}.color"))
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new("Helvetica")
    }
}

/// Text content of a title element.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleText {
    /// Untrusted user text.
    pub text: String,
    /// Style applied to the whole text.
    pub style: TextStyle,
}

impl TitleText {
    /// Text in the default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Replace the style.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Content security checks for the text, capped at `max_len` characters, and the font name.
    pub fn validate_security(&self, field: &str, max_len: usize) -> CutlineResult<()> {
        validate_text_with_limit(&format!("{field}.text"), &self.text, max_len)?;
        validate_font_name(&self.style.font).map_err(|e| e.at_field(format!("{field}.font")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/text.rs"]
mod tests;
