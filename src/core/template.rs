//! Message templates
//!
//! Recognized placeholders:
//!
//! | token | replaced by                   |
//! |-------|-------------------------------|
//! | `$t`  | timestamp                     |
//! | `$l`  | level symbol (`[*]`)          |
//! | `$L`  | level name (`INFO`)           |
//! | `$m`  | message                       |
//! | `$f`  | `basename:line` of the caller |
//! | `$F`  | `path:line` of the caller     |
//!
//! Anything else, including unknown `$x` pairs and a trailing `$`, is copied
//! through untouched. Templates are parsed once; rendering walks the parsed
//! segments, so text produced by a substitution is never substituted again.

/// A field a template can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Time,
    Symbol,
    Name,
    Message,
    ShortLocation,
    LongLocation,
}

impl Placeholder {
    fn from_token(c: char) -> Option<Self> {
        match c {
            't' => Some(Placeholder::Time),
            'l' => Some(Placeholder::Symbol),
            'L' => Some(Placeholder::Name),
            'm' => Some(Placeholder::Message),
            'f' => Some(Placeholder::ShortLocation),
            'F' => Some(Placeholder::LongLocation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(Placeholder),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' {
                if let Some(field) = chars.peek().copied().and_then(Placeholder::from_token) {
                    chars.next();
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                    continue;
                }
            }
            literal.push(c);
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// The text the template was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn uses(&self, field: Placeholder) -> bool {
        self.segments.contains(&Segment::Field(field))
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::parse(source)
    }
}
