//! Follow-up pages and the URLs used to reach them.

use std::time::Duration;

use url::form_urlencoded;

/// Delay before leaving the report form after a successful save.
pub const REPORT_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Delay before the reports table is reloaded after an upload or delete.
pub const RELOAD_DELAY: Duration = Duration::from_millis(1500);

/// Delay between choosing a package and leaving the landing page.
pub const PACKAGE_SELECT_DELAY: Duration = Duration::from_millis(300);

pub const REPORTS_PAGE: &str = "reports.html";
pub const REPORT_FORM_PAGE: &str = "index.html";
pub const QR_POPUP_PAGE: &str = "qr_popup.html";

/// A navigation to perform once a submission succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    pub target: String,
    pub delay: Duration,
}

impl FollowUp {
    pub fn after(target: impl Into<String>, delay: Duration) -> Self {
        Self {
            target: target.into(),
            delay,
        }
    }

    pub fn immediate(target: impl Into<String>) -> Self {
        Self::after(target, Duration::ZERO)
    }
}

/// Percent-encodes one URI component (path segment or query value), spaces as `%20`.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Appends `?k=v&...` to `path`, encoding every value.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Report form opened in edit mode for `serial`.
pub fn edit_report_path(serial: &str) -> String {
    with_query(REPORT_FORM_PAGE, &[("serial", serial)])
}

/// Signup page for the chosen package.
pub fn signup_path(package: &str) -> String {
    with_query("/signup", &[("package", package)])
}

/// Directory part of `href` (everything before the last `/`).
pub fn page_base(href: &str) -> &str {
    href.rfind('/').map_or(href, |idx| &href[..idx])
}

/// Popup page that renders the QR image of a report next to its public link.
pub fn qr_popup_url(page_href: &str, serial: &str, qr_url: &str, report_url: &str) -> String {
    with_query(
        &format!("{}/{}", page_base(page_href), QR_POPUP_PAGE),
        &[("serial", serial), ("qrUrl", qr_url), ("reportUrl", report_url)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_uri_encoded() {
        assert_eq!(encode_component("R 10/01"), "R%2010%2F01");
        assert_eq!(encode_component("a+b"), "a%2Bb");
        assert_eq!(encode_component("R1001"), "R1001");
    }

    #[test]
    fn edit_and_signup_paths_carry_one_parameter() {
        assert_eq!(edit_report_path("R1001"), "index.html?serial=R1001");
        assert_eq!(signup_path("premium"), "/signup?package=premium");
    }

    #[test]
    fn qr_popup_sits_next_to_the_current_page() {
        let url = qr_popup_url(
            "http://host/radiology/reports.html",
            "R1",
            "http://api/reports/serial/R1/qr",
            "http://lan/view/R1",
        );
        assert_eq!(
            url,
            "http://host/radiology/qr_popup.html?serial=R1\
             &qrUrl=http%3A%2F%2Fapi%2Freports%2Fserial%2FR1%2Fqr\
             &reportUrl=http%3A%2F%2Flan%2Fview%2FR1"
        );
    }

    #[test]
    fn query_is_omitted_without_parameters() {
        assert_eq!(with_query(REPORTS_PAGE, &[]), "reports.html");
    }
}
