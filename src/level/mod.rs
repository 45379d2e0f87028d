//! The eight public severity names and the four coarse tiers the host dispatcher understands.
//!
//! Plugins speak the syslog vocabulary (`emergency` … `debug`) while the dispatcher only
//! knows ERROR/WARNING/INFO/TRACE. The table here is the single place the two meet.

use std::fmt;
use std::str::FromStr;

/// ANSI foreground codes used by the console echo.
pub mod color {
    pub const RED: u8 = 91;
    pub const YELLOW: u8 = 93;
    pub const BLUE: u8 = 94;
    pub const MAGENTA: u8 = 95;
    /// Terminal default foreground; also the reset code after the label.
    pub const DEFAULT: u8 = 39;
}

/// Public severity vocabulary, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// System is unusable.
    Emergency,
    /// Action must be taken immediately (site down, database unavailable).
    Alert,
    /// Critical conditions (component unavailable, unexpected exception).
    Critical,
    /// Runtime errors that do not require immediate action.
    Error,
    /// Exceptional occurrences that are not errors (deprecated APIs, poor API use).
    Warning,
    /// Normal but significant events.
    Notice,
    /// Interesting events (user logs in, SQL logs).
    Info,
    /// Detailed debug information.
    Debug,
}

impl Severity {
    /// Lowercase names, as callers pass them to the generic `log` entry point.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Emergency,
            Self::Alert,
            Self::Critical,
            Self::Error,
            Self::Warning,
            Self::Notice,
            Self::Info,
            Self::Debug,
        ]
    }

    /// Color and dispatcher tier for this severity.
    #[must_use]
    pub const fn mapping(self) -> Mapping {
        match self {
            Self::Emergency | Self::Alert | Self::Critical | Self::Error => Mapping {
                color: color::RED,
                tier: Tier::Error,
            },
            Self::Warning => Mapping {
                color: color::YELLOW,
                tier: Tier::Warning,
            },
            Self::Notice | Self::Info => Mapping {
                color: color::BLUE,
                tier: Tier::Info,
            },
            Self::Debug => Mapping {
                color: color::MAGENTA,
                tier: Tier::Trace,
            },
        }
    }

    /// Fatal-class severities end the process after logging.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Emergency | Self::Alert | Self::Critical)
    }

    /// Whether records at this severity carry the ambient request snapshot.
    #[must_use]
    pub const fn is_enriched(self) -> bool {
        !matches!(self, Self::Notice | Self::Info | Self::Debug)
    }

    /// Console label, e.g. `Warning`.
    #[must_use]
    pub fn label(self) -> String {
        title_case(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell an unknown name from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Exact, lowercase names only: `DEBUG` is not a severity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emergency" => Ok(Self::Emergency),
            "alert" => Ok(Self::Alert),
            "critical" => Ok(Self::Critical),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Dispatcher-side severity. Derives `Ord` so targets can compare against a minimum tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tier {
    Trace = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl Tier {
    /// Uppercase, as rendered in the `[{level}]` column of file logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl FromStr for Tier {
    type Err = ParseSeverityError;

    /// Accepts tier names and the severity names that map onto them, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warning),
            other => other.parse::<Severity>().map(|sev| sev.mapping().tier),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the severity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub color: u8,
    pub tier: Tier,
}

impl Mapping {
    /// Used for any name outside the eight known severities.
    pub const FALLBACK: Self = Self {
        color: color::DEFAULT,
        tier: Tier::Info,
    };

    /// Total lookup: unknown names, including other casings of known ones, resolve to
    /// [`Mapping::FALLBACK`].
    #[must_use]
    pub fn lookup(name: &str) -> Self {
        name.parse::<Severity>()
            .map_or(Self::FALLBACK, Severity::mapping)
    }
}

/// Capitalizes each whitespace-separated word and lowercases the rest.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
