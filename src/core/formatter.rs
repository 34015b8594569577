//! Formatters turn a log entry into one rendered line.
//!
//! Two variants share the [`Formatter`] capability:
//!
//! - [`TextFormatter`]: plain placeholder substitution.
//! - [`ColorFormatter`]: the same substitution with every field painted in
//!   its color and the whole line wrapped in a default color.
//!
//! Stripping the escape codes from a [`ColorFormatter`] line gives exactly
//! what the wrapped [`TextFormatter`] renders.

use super::color::{push_painted, Color, RESET};
use super::error::Result;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::template::{Placeholder, Segment, Template};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

pub const DEFAULT_TEMPLATE: &str = "$l [$t] :: $m";
pub const DEFAULT_LINE_END: &str = "\n";

pub trait Formatter: Send + Sync {
    /// Render `entry` into a complete line, including the line terminator.
    fn format(&self, entry: &LogEntry) -> String;
}

/// Rendering straight from a level and a message.
///
/// Implemented for every [`Formatter`], including `dyn Formatter`, and
/// resolved statically so the recorded location is the caller's.
pub trait FormatterExt: Formatter {
    /// Render a message logged right now from the caller's location.
    fn render(&self, level: LogLevel, message: &str) -> String;
}

impl<F: Formatter + ?Sized> FormatterExt for F {
    #[track_caller]
    fn render(&self, level: LogLevel, message: &str) -> String {
        self.format(&LogEntry::at_caller(level, message))
    }
}

/// Plain-text template formatter.
///
/// # Example
///
/// ```
/// use leveled_log::{FormatterExt, LogLevel, TextFormatter, TimestampFormat};
///
/// let formatter = TextFormatter::new("$l [$L] :: $m", TimestampFormat::layout(""), "");
/// assert_eq!(formatter.render(LogLevel::INFO, "hallo"), "[*] [INFO] :: hallo");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextFormatter {
    template: String,
    time_format: TimestampFormat,
    line_end: String,
    // template followed by line end, parsed as one unit
    line: Template,
}

impl TextFormatter {
    pub fn new(template: &str, time_format: TimestampFormat, line_end: &str) -> Self {
        Self {
            template: template.to_string(),
            time_format,
            line_end: line_end.to_string(),
            line: Template::parse(&format!("{}{}", template, line_end)),
        }
    }

    #[must_use]
    pub fn with_template(self, template: &str) -> Self {
        Self::new(template, self.time_format, &self.line_end)
    }

    #[must_use]
    pub fn with_time_format(mut self, format: TimestampFormat) -> Self {
        self.time_format = format;
        self
    }

    #[must_use]
    pub fn with_line_end(self, line_end: &str) -> Self {
        Self::new(&self.template, self.time_format, line_end)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn time_format(&self) -> &TimestampFormat {
        &self.time_format
    }

    pub fn line_end(&self) -> &str {
        &self.line_end
    }

    fn field<'a>(&self, field: Placeholder, entry: &'a LogEntry) -> Cow<'a, str> {
        match field {
            Placeholder::Time => Cow::Owned(self.time_format.format(&entry.timestamp)),
            Placeholder::Symbol => Cow::Borrowed(entry.level.symbol()),
            Placeholder::Name => Cow::Borrowed(entry.level.name()),
            Placeholder::Message => Cow::Borrowed(entry.message.as_str()),
            Placeholder::ShortLocation => Cow::Owned(entry.short_location()),
            Placeholder::LongLocation => Cow::Owned(entry.long_location()),
        }
    }

    /// Segments of the full line with the line end split off, when it
    /// survives parsing as trailing literal text.
    ///
    /// Returns the leading segments, the literal text before the line end,
    /// and the line end itself (empty when a field swallowed it).
    fn split_line_end(&self) -> (&[Segment], &str, &str) {
        let segments = self.line.segments();
        if let Some((Segment::Literal(last), body)) = segments.split_last() {
            if let Some(head) = last.strip_suffix(self.line_end.as_str()) {
                return (body, head, &self.line_end);
            }
        }
        (segments, "", "")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(
            DEFAULT_TEMPLATE,
            TimestampFormat::default(),
            DEFAULT_LINE_END,
        )
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        let mut out = String::with_capacity(self.line.as_str().len() + entry.message.len() + 32);
        for segment in self.line.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&self.field(*field, entry)),
            }
        }
        out
    }
}

/// Color-decorated template formatter.
///
/// Time renders green, symbol, name and message in the level's color, both
/// location forms bright black, and literal template text in the default
/// color. Each fragment carries its own reset and the line as a whole is
/// wrapped once more in the default color, so the terminal is back in its
/// default state before the line terminator is written. A line end that a
/// template token consumed is painted with the rest of the line instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorFormatter {
    text: TextFormatter,
    default_color: Color,
}

impl ColorFormatter {
    pub fn new(text: TextFormatter, default_color: Color) -> Self {
        Self {
            text,
            default_color,
        }
    }

    pub fn text(&self) -> &TextFormatter {
        &self.text
    }

    pub fn default_color(&self) -> Color {
        self.default_color
    }

    fn field_color(&self, field: Placeholder, level: LogLevel) -> Color {
        match field {
            Placeholder::Time => Color::Green,
            Placeholder::Symbol | Placeholder::Name | Placeholder::Message => level.color(),
            Placeholder::ShortLocation | Placeholder::LongLocation => Color::BrightBlack,
        }
    }
}

impl Default for ColorFormatter {
    fn default() -> Self {
        Self::new(TextFormatter::default(), Color::White)
    }
}

impl Formatter for ColorFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        let text = &self.text;
        let mut out = String::with_capacity(text.line.as_str().len() + entry.message.len() + 96);
        let (segments, head, line_end) = text.split_line_end();

        out.push_str(self.default_color.escape());
        for segment in segments {
            match segment {
                Segment::Literal(literal) => push_painted(&mut out, self.default_color, literal),
                Segment::Field(field) => push_painted(
                    &mut out,
                    self.field_color(*field, entry.level),
                    &text.field(*field, entry),
                ),
            }
        }
        if !head.is_empty() {
            push_painted(&mut out, self.default_color, head);
        }
        out.push_str(RESET);
        out.push_str(line_end);
        out
    }
}

/// Serializable description of a formatter
///
/// # Examples
///
/// ```
/// use leveled_log::FormatterConfig;
///
/// let formatter = FormatterConfig::from_json(r#"{"template": "$L: $m", "color": "cyan"}"#)
///     .unwrap()
///     .into_formatter()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Message template
    pub template: String,
    /// How `$t` is rendered
    pub time_format: TimestampFormat,
    /// Appended to every rendered line
    pub line_end: String,
    /// Default color; `None` selects the plain formatter
    pub color: Option<Color>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            time_format: TimestampFormat::default(),
            line_end: DEFAULT_LINE_END.to_string(),
            color: None,
        }
    }
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON description.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.time_format.validate()
    }

    #[must_use]
    pub fn with_template(mut self, template: &str) -> Self {
        self.template = template.to_string();
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, format: TimestampFormat) -> Self {
        self.time_format = format;
        self
    }

    #[must_use]
    pub fn with_line_end(mut self, line_end: &str) -> Self {
        self.line_end = line_end.to_string();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Build the described formatter, ready to be shared between loggers.
    pub fn into_formatter(self) -> Result<Arc<dyn Formatter>> {
        self.validate()?;
        let text = TextFormatter::new(&self.template, self.time_format, &self.line_end);
        Ok(match self.color {
            Some(color) => Arc::new(ColorFormatter::new(text, color)),
            None => Arc::new(text),
        })
    }
}
