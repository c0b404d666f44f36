use std::num::NonZeroU16;

/// HTTP [Status Code][rfc] as received from a peer.
///
/// Any three digit code from `100` to `999` is representable, known codes also carry a canonical
/// reason phrase.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(NonZeroU16);

impl StatusCode {
    /// Resolve a three digit status code token, e.g: `b"200"`.
    pub const fn from_bytes(token: &[u8]) -> Option<StatusCode> {
        let code = match token {
            [a @ b'1'..=b'9', b @ b'0'..=b'9', c @ b'0'..=b'9'] => {
                (*a - b'0') as u16 * 100 + (*b - b'0') as u16 * 10 + (*c - b'0') as u16
            }
            _ => return None,
        };
        match NonZeroU16::new(code) {
            Some(ok) => Some(StatusCode(ok)),
            None => None,
        }
    }

    /// Create status code from integer, returns `None` if `code` is not in `100..=999`.
    pub const fn from_u16(code: u16) -> Option<StatusCode> {
        if code < 100 || code > 999 {
            return None;
        }
        match NonZeroU16::new(code) {
            Some(ok) => Some(StatusCode(ok)),
            None => None,
        }
    }

    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn as_u16(&self) -> u16 {
        self.0.get()
    }

    /// Returns `true` for `1xx` codes.
    #[inline]
    pub const fn is_informational(&self) -> bool {
        matches!(self.0.get(), 100..=199)
    }

    /// Returns `true` for `2xx` codes.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.0.get(), 200..=299)
    }

    /// Returns `true` for `3xx` codes.
    #[inline]
    pub const fn is_redirection(&self) -> bool {
        matches!(self.0.get(), 300..=399)
    }

    /// Returns `true` for `4xx` codes.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.0.get(), 400..=499)
    }

    /// Returns `true` for `5xx` codes.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.0.get(), 500..=599)
    }
}

macro_rules! status_code {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            /// Returns the canonical reason phrase of a registered code, e.g: `"OK"`.
            #[inline]
            pub const fn canonical_reason(&self) -> Option<&'static str> {
                match self.0.get() {
                    $(
                        $int => Some($msg),
                    )*
                    _ => None,
                }
            }
        }

        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self(NonZeroU16::new($int).unwrap());
            )*
        }
    };
}

status_code! {
    /// `100`. The client should continue the request.
    100 CONTINUE "Continue";
    /// `101`. The server is switching to the protocol named in the `Upgrade` header.
    101 SWITCHING_PROTOCOLS "Switching Protocols";
    /// `200`. The request succeeded.
    200 OK "OK";
    /// `201`. The request succeeded, and a new resource was created as a result.
    201 CREATED "Created";
    /// `204`. There is no content to send for this request.
    204 NO_CONTENT "No Content";
    /// `206`. Only part of the resource is sent, as requested by a `Range` header.
    206 PARTIAL_CONTENT "Partial Content";
    /// `301`. The URI of the requested resource has been changed permanently.
    301 MOVED_PERMANENTLY "Moved Permanently";
    /// `302`. The URI of the requested resource has been changed temporarily.
    302 FOUND "Found";
    /// `304`. The cached version of the response is still valid.
    304 NOT_MODIFIED "Not Modified";
    /// `307`. Repeat the request at another URI with the same method.
    307 TEMPORARY_REDIRECT "Temporary Redirect";
    /// `400`. The server will not process the request due to a client error.
    400 BAD_REQUEST "Bad Request";
    /// `401`. The client must authenticate itself.
    401 UNAUTHORIZED "Unauthorized";
    /// `403`. The client does not have access rights to the content.
    403 FORBIDDEN "Forbidden";
    /// `404`. The server cannot find the requested resource.
    404 NOT_FOUND "Not Found";
    /// `405`. The method is not supported by the target resource.
    405 METHOD_NOT_ALLOWED "Method Not Allowed";
    /// `408`. The server timed out waiting for the request.
    408 REQUEST_TIMEOUT "Request Timeout";
    /// `413`. The request body is larger than limits defined by server.
    413 CONTENT_TOO_LARGE "Content Too Large";
    /// `429`. The user has sent too many requests in a given amount of time.
    429 TOO_MANY_REQUESTS "Too Many Requests";
    /// `500`. The server has encountered a situation it does not know how to handle.
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    /// `502`. A gateway received an invalid response.
    502 BAD_GATEWAY "Bad Gateway";
    /// `503`. The server is not ready to handle the request.
    503 SERVICE_UNAVAILABLE "Service Unavailable";
    /// `504`. A gateway did not get a response in time.
    504 GATEWAY_TIMEOUT "Gateway Timeout";
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.canonical_reason() {
            Some(reason) => write!(f, "{} {reason}", self.as_u16()),
            None => write!(f, "{}", self.as_u16()),
        }
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.as_u16()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::StatusCode;

    #[test]
    fn test_status_from_bytes() {
        assert_eq!(StatusCode::from_bytes(b"200"), Some(StatusCode::OK));
        assert_eq!(StatusCode::from_bytes(b"999").map(|s| s.as_u16()), Some(999));
        assert_eq!(StatusCode::from_bytes(b"099"), None);
        assert_eq!(StatusCode::from_bytes(b"20"), None);
        assert_eq!(StatusCode::from_bytes(b"2000"), None);
        assert_eq!(StatusCode::from_bytes(b"2x0"), None);
        assert_eq!(StatusCode::from_u16(99), None);
        assert_eq!(StatusCode::from_u16(1000), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(StatusCode::NOT_FOUND.to_string(), "404 Not Found");
        assert_eq!(StatusCode::from_u16(599).map(|s| s.to_string()).as_deref(), Some("599"));
        assert!(StatusCode::NOT_FOUND.is_client_error());
        assert!(StatusCode::FOUND.is_redirection());
        assert_eq!(StatusCode::CONTINUE.canonical_reason(), Some("Continue"));
    }
}
