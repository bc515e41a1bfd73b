use chrono::Utc;

/// Opaque token for the hidden field submitted with every search request.
///
/// The explore endpoint carries the value without validating it, so a
/// per-page-load timestamp token is all the client needs.
pub fn page_token() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("tok-{nanos:x}")
}
