//! Key/value annotations carried alongside a request.
//!
//! Transient values reach the next hop only: the callee sees them as
//! upstream values and does not forward them. Persistent values are
//! forwarded by every hop. Empty keys and empty values are never stored.

use std::collections::HashMap;

pub const PREFIX_TRANSIENT: &str = "RPC_TRANSIT_";
pub const PREFIX_PERSISTENT: &str = "RPC_PERSIST_";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    transient: HashMap<String, String>,
    upstream: HashMap<String, String>,
    persistent: HashMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        if !key.is_empty() && !value.is_empty() {
            self.transient.insert(key, value);
        }
        self
    }

    pub fn with_persistent_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let (key, value) = (key.into(), value.into());
        if !key.is_empty() && !value.is_empty() {
            self.persistent.insert(key, value);
        }
        self
    }

    pub fn del_value(mut self, key: &str) -> Self {
        self.transient.remove(key);
        self.upstream.remove(key);
        self
    }

    pub fn del_persistent_value(mut self, key: &str) -> Self {
        self.persistent.remove(key);
        self
    }

    /// Looks at values set on this hop first, then at ones from upstream.
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.transient
            .get(key)
            .or_else(|| self.upstream.get(key))
            .map(String::as_str)
    }

    pub fn get_persistent_value(&self, key: &str) -> Option<&str> {
        self.persistent.get(key).map(String::as_str)
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.transient
    }

    pub fn upstream_values(&self) -> &HashMap<String, String> {
        &self.upstream
    }

    pub fn persistent_values(&self) -> &HashMap<String, String> {
        &self.persistent
    }

    /// Headers to send to the next hop.
    pub fn to_headers(&self) -> HashMap<String, String> {
        let transient = self
            .transient
            .iter()
            .map(|(k, v)| (format!("{PREFIX_TRANSIENT}{k}"), v.clone()));
        let persistent = self
            .persistent
            .iter()
            .map(|(k, v)| (format!("{PREFIX_PERSISTENT}{k}"), v.clone()));
        transient.chain(persistent).collect()
    }

    /// Context seen by a callee receiving `headers`. Unprefixed headers are ignored.
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut ctx = Self::new();
        for (name, value) in headers {
            if let Some(key) = name.strip_prefix(PREFIX_TRANSIENT) {
                if !key.is_empty() && !value.is_empty() {
                    ctx.upstream.insert(key.to_string(), value.clone());
                }
            } else if let Some(key) = name.strip_prefix(PREFIX_PERSISTENT) {
                if !key.is_empty() && !value.is_empty() {
                    ctx.persistent.insert(key.to_string(), value.clone());
                }
            }
        }
        ctx
    }
}
