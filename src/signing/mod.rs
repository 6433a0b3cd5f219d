//! AWS3-HTTPS request signing for the classic SES query API.
//!
//! The scheme signs only the request date:
//!
//! 1. Format the current UTC instant as `Day, DD Mon YYYY HH:MM:SS +0000`
//! 2. Compute HMAC-SHA256 over the date string, keyed with the secret key
//! 3. Base64-encode the MAC
//! 4. Send the date in `Date` and the signature in `X-Amzn-Authorization`
//!
//! Every step is a pure function so the whole header set is reproducible
//! from a key pair and an instant.
//!
//! # Quick Start
//!
//! ```
//! use integrations_aws_ses_classic::credentials::AwsCredentials;
//! use integrations_aws_ses_classic::signing::sign_request;
//! use chrono::{TimeZone, Utc};
//! use http::HeaderMap;
//!
//! let credentials = AwsCredentials::new("AK", "SK");
//! let timestamp = Utc.with_ymd_and_hms(2010, 5, 25, 21, 20, 27).unwrap();
//!
//! let mut headers = HeaderMap::new();
//! sign_request(&mut headers, &credentials, &timestamp).unwrap();
//!
//! assert_eq!(headers["date"], "Tue, 25 May 2010 21:20:27 +0000");
//! assert!(headers.contains_key("x-amzn-authorization"));
//! ```

mod error;

pub use error::SigningError;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use http::header::{HeaderMap, HeaderName, HeaderValue, DATE};
use sha2::Sha256;

use crate::credentials::AwsCredentials;

type HmacSha256 = Hmac<Sha256>;

/// Authorization scheme name.
pub const AUTH_SCHEME: &str = "AWS3-HTTPS";

/// Signing algorithm name as sent to the service.
pub const ALGORITHM: &str = "HmacSHA256";

/// Header carrying the authorization value.
pub const AUTHORIZATION_HEADER: &str = "x-amzn-authorization";

/// Wire format of the `Date` header, e.g. `Tue, 25 May 2010 21:20:27 +0000`.
pub const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S +0000";

/// Format an instant for the `Date` header.
///
/// The offset is always written as `+0000`.
///
/// ```
/// use integrations_aws_ses_classic::signing::format_date;
/// use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(2025, 1, 3, 9, 5, 7).unwrap();
/// assert_eq!(format_date(&dt), "Fri, 03 Jan 2025 09:05:07 +0000");
/// ```
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format(DATE_FORMAT).to_string()
}

/// Compute the base64 HMAC-SHA256 signature of `date` keyed with `secret_key`.
pub fn sign(secret_key: &str, date: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(date.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Build the `X-Amzn-Authorization` header value.
pub fn authorization_header(access_key: &str, signature: &str) -> String {
    format!(
        "{} AWSAccessKeyId={}, Algorithm={}, Signature={}",
        AUTH_SCHEME, access_key, ALGORITHM, signature
    )
}

/// Stamp `Date` and `X-Amzn-Authorization` onto `headers`.
///
/// Existing values of either header are replaced.
///
/// # Errors
///
/// Returns `SigningError::InvalidHeaderValue` if the access key contains
/// characters that are not allowed in a header value.
pub fn sign_request(
    headers: &mut HeaderMap,
    credentials: &AwsCredentials,
    timestamp: &DateTime<Utc>,
) -> Result<(), SigningError> {
    let date = format_date(timestamp);
    let signature = sign(credentials.secret_access_key(), &date);
    let authorization = authorization_header(credentials.access_key_id(), &signature);

    headers.insert(DATE, header_value(DATE.as_str(), &date)?);
    headers.insert(
        HeaderName::from_static(AUTHORIZATION_HEADER),
        header_value(AUTHORIZATION_HEADER, &authorization)?,
    );

    Ok(())
}

fn header_value(header: &str, value: &str) -> Result<HeaderValue, SigningError> {
    HeaderValue::from_str(value).map_err(|e| SigningError::InvalidHeaderValue {
        header: header.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2010, 5, 25, 21, 20, 27).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&fixed_instant()), "Tue, 25 May 2010 21:20:27 +0000");
    }

    #[test]
    fn test_format_date_is_zero_padded() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 3, 9, 5, 7).unwrap();
        assert_eq!(format_date(&dt), "Fri, 03 Jan 2025 09:05:07 +0000");
    }

    #[test]
    fn test_sign_known_value() {
        assert_eq!(
            sign("SK", "Tue, 25 May 2010 21:20:27 +0000"),
            "ipOeTJMxaPQl4xjrSovvQVXHi+575Ff9I7DxiWEhyrs="
        );
        assert_eq!(
            sign("SK", "Fri, 03 Jan 2025 09:05:07 +0000"),
            "17Ji4hobQtjYHY5aELD2sZ7zagrTn+KfYG9v4jx/VY0="
        );
    }

    #[test]
    fn test_sign_depends_on_key() {
        let date = "Tue, 25 May 2010 21:20:27 +0000";
        assert_ne!(sign("SK", date), sign("OTHER", date));
    }

    #[test]
    fn test_authorization_header() {
        assert_eq!(
            authorization_header("AK", "c2ln"),
            "AWS3-HTTPS AWSAccessKeyId=AK, Algorithm=HmacSHA256, Signature=c2ln"
        );
    }

    #[test]
    fn test_sign_request_sets_headers() {
        let credentials = AwsCredentials::new("AK", "SK");
        let mut headers = HeaderMap::new();

        sign_request(&mut headers, &credentials, &fixed_instant()).unwrap();

        assert_eq!(headers["date"], "Tue, 25 May 2010 21:20:27 +0000");
        assert_eq!(
            headers["x-amzn-authorization"],
            "AWS3-HTTPS AWSAccessKeyId=AK, Algorithm=HmacSHA256, \
             Signature=ipOeTJMxaPQl4xjrSovvQVXHi+575Ff9I7DxiWEhyrs="
        );
    }

    #[test]
    fn test_sign_request_rejects_invalid_access_key() {
        let credentials = AwsCredentials::new("AK\nX-Injected: 1", "SK");
        let mut headers = HeaderMap::new();

        let err = sign_request(&mut headers, &credentials, &fixed_instant()).unwrap_err();
        assert!(matches!(err, SigningError::InvalidHeaderValue { ref header, .. } if header == AUTHORIZATION_HEADER));
    }
}
