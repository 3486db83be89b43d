//! Operation descriptors
//!
//! Every TAU and Helix operation is described by an [`Endpoint`]: a method, a
//! path relative to the service base, ordered query pairs and an optional
//! JSON body. The dispatcher executes any endpoint through one code path.

use reqwest::Method;
use serde::Serialize;

use crate::error::ApiError;

/// A single request against a service, relative to its base path
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Endpoint {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends a query pair; repeated keys are kept in order
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends one pair per value under the same key
    pub fn query_all<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.query
            .extend(values.into_iter().map(|v| (key.to_string(), v.into())));
        self
    }

    /// Appends caller-supplied query pairs
    pub fn query_pairs(mut self, pairs: &[(&str, &str)]) -> Self {
        self.query
            .extend(pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())));
        self
    }

    /// Serializes `body` as the JSON request body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }
}

/// Encodes a caller-supplied value for use as a single path segment
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
