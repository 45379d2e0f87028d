//! Line formatter used by registered targets. The template is parsed once into segments so
//! rendering a record is a single pass.

use super::interpolate;
use crate::backend::Entry;
use crate::context::Context;
use serde_json::Value;

/// Layout used when a plugin registers its log target.
pub const DEFAULT_FORMAT: &str = "{timestamp} [{level}] [{channel}] {message}\n{context} {extra}\n";

/// strftime pattern for `{timestamp}`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Closed set of tokens; unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Level,
    Channel,
    Message,
    Context,
    Extra,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Level => "level",
            Self::Channel => "channel",
            Self::Message => "message",
            Self::Context => "context",
            Self::Extra => "extra",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Timestamp,
        Self::Level,
        Self::Channel,
        Self::Message,
        Self::Context,
        Self::Extra,
    ];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Renders an [`Entry`] into text.
///
/// Development setups want readable multi-line output with full error chains; production
/// wants one compact line per record. [`LineFormatter::for_mode`] picks between the two.
#[derive(Debug, Clone)]
pub struct LineFormatter {
    segments: Vec<Segment>,
    timestamp_format: String,
    allow_line_breaks: bool,
    include_stacktraces: bool,
    pretty_json: bool,
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl LineFormatter {
    /// Compact, single-line defaults.
    #[must_use]
    pub fn new(template: &str) -> Self {
        Self {
            segments: parse(template),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            allow_line_breaks: false,
            include_stacktraces: false,
            pretty_json: false,
        }
    }

    /// The registration preset: the default template with every dev-only option tied to `dev_mode`.
    #[must_use]
    pub fn for_mode(dev_mode: bool) -> Self {
        Self::default().dev_mode(dev_mode)
    }

    /// Line breaks, stack traces and pretty JSON on in development, off otherwise.
    #[must_use]
    pub const fn dev_mode(self, dev_mode: bool) -> Self {
        self.allow_line_breaks(dev_mode)
            .include_stacktraces(dev_mode)
            .pretty_json(dev_mode)
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub const fn allow_line_breaks(mut self, allow: bool) -> Self {
        self.allow_line_breaks = allow;
        self
    }

    #[must_use]
    pub const fn include_stacktraces(mut self, include: bool) -> Self {
        self.include_stacktraces = include;
        self
    }

    #[must_use]
    pub const fn pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub const fn allows_line_breaks(&self) -> bool {
        self.allow_line_breaks
    }

    #[must_use]
    pub const fn includes_stacktraces(&self) -> bool {
        self.include_stacktraces
    }

    #[must_use]
    pub const fn is_pretty(&self) -> bool {
        self.pretty_json
    }

    /// # Errors
    /// JSON serialization of context or extra.
    pub fn format(&self, entry: &Entry<'_>) -> Result<String, crate::Error> {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Placeholder(ph) => match ph {
                    Placeholder::Timestamp => {
                        out.push_str(&entry.time.format(&self.timestamp_format).to_string());
                    }
                    Placeholder::Level => out.push_str(entry.tier.as_str()),
                    Placeholder::Channel => out.push_str(entry.channel),
                    Placeholder::Message => {
                        let msg = interpolate::interpolate(entry.message, entry.context);
                        out.push_str(&self.line_breaks(&msg));
                    }
                    Placeholder::Context => {
                        let context = if self.include_stacktraces {
                            self.render_map(entry.context)?
                        } else {
                            self.render_map(&strip_traces(entry.context))?
                        };
                        out.push_str(&self.line_breaks(&context));
                    }
                    Placeholder::Extra => out.push_str(&self.render_map(&entry.extra)?),
                },
            }
        }

        Ok(out)
    }

    fn render_map(&self, map: &Context) -> Result<String, crate::Error> {
        if map.is_empty() {
            return Ok("[]".to_string());
        }
        let json = if self.pretty_json {
            serde_json::to_string_pretty(map)?
        } else {
            serde_json::to_string(map)?
        };
        Ok(json)
    }

    fn line_breaks(&self, s: &str) -> String {
        if self.allow_line_breaks {
            s.to_string()
        } else {
            s.replace("\r\n", " ").replace(['\r', '\n'], " ")
        }
    }
}

/// Drops the `trace` member of every top-level object value.
fn strip_traces(context: &Context) -> Context {
    context
        .iter()
        .map(|(k, v)| {
            let v = match v {
                Value::Object(obj) if obj.contains_key("trace") => {
                    let mut obj = obj.clone();
                    obj.remove("trace");
                    Value::Object(obj)
                }
                other => other.clone(),
            };
            (k.clone(), v)
        })
        .collect()
}

fn parse(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut rest = template;

    // Each `}` pairs with the nearest `{` before it
    while let Some(close) = rest.find('}') {
        let Some(open) = rest[..close].rfind('{') else {
            current.push_str(&rest[..=close]);
            rest = &rest[close + 1..];
            continue;
        };
        current.push_str(&rest[..open]);
        let name = &rest[open + 1..close];

        if let Some(ph) = Placeholder::from_name(name) {
            if !current.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut current)));
            }
            segments.push(Segment::Placeholder(ph));
        } else {
            current.push_str(&rest[open..=close]);
        }
        rest = &rest[close + 1..];
    }

    current.push_str(rest);
    if !current.is_empty() {
        segments.push(Segment::Literal(current));
    }
    segments
}
