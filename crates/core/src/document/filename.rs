//! Download file naming.

/// Builds `currency_report_<currency>_<start>_to_<end>.pdf`.
///
/// Each component keeps only ASCII letters, digits, `_` and `-`, so the
/// result is always safe inside a `Content-Disposition` header.
#[must_use]
pub fn download_filename(currency: &str, start_date: &str, end_date: &str) -> String {
    format!(
        "currency_report_{}_{}_to_{}.pdf",
        sanitize(currency),
        sanitize(start_date),
        sanitize(end_date)
    )
}

fn sanitize(component: &str) -> String {
    component
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect()
}
