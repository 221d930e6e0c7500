use crate::error::{Error, Result};
use std::str::FromStr;

/// The fixed set of HTTP status codes a proxy response may carry.
///
/// Only frequently used codes are registered. Anything else is rejected
/// when set on a [`ProxyResponse`](crate::ProxyResponse).
#[repr(u16)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum HttpStatus {
    #[default]
    Ok = 200,
    Moved = 301,
    Found = 302,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    ServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
}

impl HttpStatus {
    /// Every registered status, in ascending code order.
    pub const ALL: &'static [HttpStatus] = &[
        HttpStatus::Ok,
        HttpStatus::Moved,
        HttpStatus::Found,
        HttpStatus::BadRequest,
        HttpStatus::Unauthorized,
        HttpStatus::Forbidden,
        HttpStatus::NotFound,
        HttpStatus::ServerError,
        HttpStatus::NotImplemented,
        HttpStatus::BadGateway,
        HttpStatus::ServiceUnavailable,
        HttpStatus::GatewayTimeout,
    ];

    pub fn code(self) -> u16 {
        self as u16
    }

    /// Symbolic registry name, e.g. `BAD_GATEWAY`.
    pub fn name(self) -> &'static str {
        match self {
            HttpStatus::Ok => "OK",
            HttpStatus::Moved => "MOVED",
            HttpStatus::Found => "FOUND",
            HttpStatus::BadRequest => "BAD_REQUEST",
            HttpStatus::Unauthorized => "UNAUTHORIZED",
            HttpStatus::Forbidden => "FORBIDDEN",
            HttpStatus::NotFound => "NOT_FOUND",
            HttpStatus::ServerError => "SERVER_ERROR",
            HttpStatus::NotImplemented => "NOT_IMPLEMENTED",
            HttpStatus::BadGateway => "BAD_GATEWAY",
            HttpStatus::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            HttpStatus::GatewayTimeout => "GATEWAY_TIMEOUT",
        }
    }

    /// Canonical reason phrase.
    pub fn reason(self) -> &'static str {
        match self {
            HttpStatus::Ok => "OK",
            HttpStatus::Moved => "Moved Permanently",
            HttpStatus::Found => "Found",
            HttpStatus::BadRequest => "Bad Request",
            HttpStatus::Unauthorized => "Unauthorized",
            HttpStatus::Forbidden => "Forbidden",
            HttpStatus::NotFound => "Not Found",
            HttpStatus::ServerError => "Internal Server Error",
            HttpStatus::NotImplemented => "Not Implemented",
            HttpStatus::BadGateway => "Bad Gateway",
            HttpStatus::ServiceUnavailable => "Service Unavailable",
            HttpStatus::GatewayTimeout => "Gateway Timeout",
        }
    }
}

/// Returns true if `code` is one of the registered statuses.
pub fn is_registered(code: u16) -> bool {
    HttpStatus::try_from(code).is_ok()
}

impl TryFrom<u16> for HttpStatus {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self> {
        HttpStatus::ALL
            .iter()
            .copied()
            .find(|status| status.code() == code)
            .ok_or(Error::InvalidStatusCode(code))
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> Self {
        status as u16
    }
}

impl FromStr for HttpStatus {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        HttpStatus::ALL
            .iter()
            .copied()
            .find(|status| status.name() == name)
            .ok_or_else(|| Error::UnknownStatusName(name.to_string()))
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_ordered_and_unique() {
        let codes: Vec<u16> = HttpStatus::ALL.iter().map(|s| s.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
        assert_eq!(codes.len(), 12);
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for status in HttpStatus::ALL {
            assert_eq!(status.name().parse::<HttpStatus>().unwrap(), *status);
        }
        assert!(matches!("bad_gateway".parse::<HttpStatus>(), Err(Error::UnknownStatusName(_))));
    }
}
