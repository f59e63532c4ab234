//! Endpoint URL composition.
//!
//! Every resource pool is bound to an absolute endpoint URL built by
//! appending path segments, left to right, to its parent's URL. Segments
//! are literal names (`accept`, `error_report`) or caller-supplied
//! identifiers, and are inserted verbatim: identifiers are neither
//! validated nor percent-encoded. Every segment keeps its slot, so an empty
//! identifier yields an empty path segment (`orders//cancel`) rather than
//! collapsing onto a sibling endpoint.
//!
//! # Example
//!
//! ```rust
//! use mirakl_api::rest::join_url;
//!
//! let url = join_url("https://example.mirakl.net/api/", &["orders", "ORD1", "accept"]);
//! assert_eq!(url, "https://example.mirakl.net/api/orders/ORD1/accept");
//! ```

/// Joins path segments onto a base URL.
///
/// Each segment is appended after exactly one `/`: separators at the seams
/// are trimmed, and a segment that is empty once trimmed still takes its
/// place. A segment may itself contain inner slashes
/// (`sellerpayment/transactions_logs`), which are kept.
#[must_use]
pub fn join_url<S: AsRef<str>>(base: &str, segments: &[S]) -> String {
    let mut url = base.trim_end_matches('/').to_string();

    for segment in segments {
        url.push('/');
        url.push_str(segment.as_ref().trim_matches('/'));
    }

    url
}
