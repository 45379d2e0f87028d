//! Record context and the ambient request snapshot merged into it.
//!
//! Context is an insertion-ordered JSON object so rendered logs keep the order callers
//! wrote keys in. Ambient data (query, form, cookies, uploads, server metadata) is never
//! read from globals. An [`AmbientSource`] hands the logger a snapshot per call.

use serde_json::{Map, Value};

/// Ordered `key -> value` mapping attached to every record.
pub type Context = Map<String, Value>;

pub const QUERY_PARAMS: &str = "queryParams";
pub const FORM_PARAMS: &str = "formParams";
pub const COOKIES: &str = "cookies";
pub const FILES: &str = "files";
pub const SERVER_META: &str = "serverMeta";

/// Keys the snapshot occupies in an enriched context, in merge order.
pub const AMBIENT_KEYS: [&str; 5] = [QUERY_PARAMS, FORM_PARAMS, COOKIES, FILES, SERVER_META];

/// Builds a context from key/value pairs.
#[must_use]
pub fn from_pairs<I, K, V>(pairs: I) -> Context
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Serializes an error for use as a context value.
///
/// The `trace` member lists the `source()` chain, outermost first. Formatters drop it
/// when stack traces are disabled.
#[must_use]
pub fn error_value<E: std::error::Error + 'static>(err: &E) -> Value {
    let mut trace = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        trace.push(Value::String(cause.to_string()));
        source = cause.source();
    }

    let mut obj = Map::new();
    obj.insert(
        "class".to_string(),
        Value::String(std::any::type_name::<E>().to_string()),
    );
    obj.insert("message".to_string(), Value::String(err.to_string()));
    obj.insert("trace".to_string(), Value::Array(trace));
    Value::Object(obj)
}

/// Point-in-time copy of request-scoped state. Empty maps outside a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientSnapshot {
    pub query: Context,
    pub form: Context,
    pub cookies: Context,
    pub files: Context,
    pub server: Context,
}

impl AmbientSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a console process: environment variables and `argv` as server metadata.
    #[must_use]
    pub fn from_process() -> Self {
        let mut server: Context = std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    Value::String(v.to_string_lossy().into_owned()),
                )
            })
            .collect();
        server.insert(
            "argv".to_string(),
            Value::Array(std::env::args().map(Value::String).collect()),
        );
        Self {
            server,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn form_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn cookie(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cookies.insert(key.into(), value.into());
        self
    }

    /// Uploaded-file descriptor, typically an object with name/type/size.
    #[must_use]
    pub fn file(mut self, field: impl Into<String>, descriptor: impl Into<Value>) -> Self {
        self.files.insert(field.into(), descriptor.into());
        self
    }

    #[must_use]
    pub fn server_var(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.server.insert(key.into(), value.into());
        self
    }

    /// Ambient keys first, caller keys second: a caller key with the same name
    /// replaces the ambient value in place.
    #[must_use]
    pub fn merge_into(self, context: Context) -> Context {
        let mut merged = Context::new();
        merged.insert(QUERY_PARAMS.to_string(), Value::Object(self.query));
        merged.insert(FORM_PARAMS.to_string(), Value::Object(self.form));
        merged.insert(COOKIES.to_string(), Value::Object(self.cookies));
        merged.insert(FILES.to_string(), Value::Object(self.files));
        merged.insert(SERVER_META.to_string(), Value::Object(self.server));
        merged.extend(context);
        merged
    }
}

/// Narrow provider the logger asks for request state when enriching a record.
pub trait AmbientSource: Send + Sync {
    fn snapshot(&self) -> AmbientSnapshot;
}

/// No request in flight, so every snapshot is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAmbient;

impl AmbientSource for NoAmbient {
    fn snapshot(&self) -> AmbientSnapshot {
        AmbientSnapshot::default()
    }
}

/// Console processes expose their environment and arguments, nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessAmbient;

impl AmbientSource for ProcessAmbient {
    fn snapshot(&self) -> AmbientSnapshot {
        AmbientSnapshot::from_process()
    }
}

/// A fixed snapshot, e.g. captured once by a request handler.
impl AmbientSource for AmbientSnapshot {
    fn snapshot(&self) -> AmbientSnapshot {
        self.clone()
    }
}
