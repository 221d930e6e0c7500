use crate::body::Body;
use crate::error::{Error, Result};
use crate::header::HeaderBatch;
use crate::status::HttpStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The fixed `{statusCode, headers, body}` shape a gateway expects back
/// from a proxy integration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Payload {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Accumulates the status, headers and body of one proxy response.
///
/// Every mutation validates before it writes, so a failed call leaves the
/// builder exactly as it was.
#[derive(Clone, Debug)]
pub struct ProxyResponse {
    status: HttpStatus,
    headers: HashMap<String, String>,
    body: String,
}

impl ProxyResponse {
    /// A `200 OK` response with no headers and an empty body.
    pub fn new() -> Self {
        Self {
            status: HttpStatus::Ok,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    pub fn with_status(status_code: u16) -> Result<Self> {
        let mut response = Self::new();
        response.set_status_code(status_code)?;
        Ok(response)
    }

    /// Create a response whose body is `value` encoded as JSON
    pub fn json<T: Serialize + ?Sized>(status: HttpStatus, value: &T) -> Result<Self> {
        let mut response = Self::new();
        response
            .set_status(status)
            .add_header("Content-Type", "application/json")?
            .set_json_body(value)?;
        Ok(response)
    }

    /// Create a plain text response
    pub fn text(status: HttpStatus, text: impl Into<String>) -> Result<Self> {
        let mut response = Self::new();
        response
            .set_status(status)
            .add_header("Content-Type", "text/plain; charset=utf-8")?
            .set_body(text.into());
        Ok(response)
    }

    pub fn set_status_code(&mut self, status_code: u16) -> Result<&mut Self> {
        let status = HttpStatus::try_from(status_code).inspect_err(|e| log::debug!("{e}"))?;
        Ok(self.set_status(status))
    }

    pub fn set_status(&mut self, status: HttpStatus) -> &mut Self {
        self.status = status;
        self
    }

    pub fn add_header(&mut self, name: impl Into<String>, value: impl AsRef<str>) -> Result<&mut Self> {
        self.apply_headers(HeaderBatch::single(name, value))
    }

    /// Adds every header in `headers`, or none of them if any name is invalid.
    pub fn add_headers<I, K, V>(&mut self, headers: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        self.apply_headers(HeaderBatch::new(headers))
    }

    fn apply_headers(&mut self, batch: HeaderBatch) -> Result<&mut Self> {
        if let Err(e) = batch.validate() {
            log::debug!("rejecting batch of {} header(s): {e}", batch.len());
            return Err(e);
        }
        log::trace!("applying batch of {} header(s)", batch.len());
        self.headers.extend(batch);
        Ok(self)
    }

    pub fn set_body(&mut self, body: impl Into<Body>) -> &mut Self {
        self.body = body.into().into_string();
        log::trace!("body set, {} bytes", self.body.len());
        self
    }

    /// Encodes `value` as JSON and stores it as the body. On failure the
    /// previous body is kept.
    pub fn set_json_body<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<&mut Self> {
        let body = Body::json(value)?;
        Ok(self.set_body(body))
    }

    pub fn status(&self) -> HttpStatus {
        self.status
    }

    pub fn status_code(&self) -> u16 {
        self.status.code()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// A snapshot of the current state. Later mutations do not show up in it.
    pub fn payload(&self) -> Payload {
        Payload {
            status_code: self.status.code(),
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }

    pub fn into_payload(self) -> Payload {
        Payload {
            status_code: self.status.code(),
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for ProxyResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ProxyResponse> for Payload {
    fn from(response: ProxyResponse) -> Self {
        response.into_payload()
    }
}

impl TryFrom<Payload> for ProxyResponse {
    type Error = Error;

    fn try_from(payload: Payload) -> Result<Self> {
        let mut response = Self::with_status(payload.status_code)?;
        response.add_headers(payload.headers)?.set_body(payload.body);
        Ok(response)
    }
}

#[cfg(feature = "http")]
impl TryFrom<Payload> for http::Response<String> {
    type Error = Error;

    fn try_from(payload: Payload) -> Result<Self> {
        let mut builder = http::Response::builder().status(payload.status_code);
        for (name, value) in &payload.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(payload.body).map_err(|e| Error::Http(e.to_string()))
    }
}
