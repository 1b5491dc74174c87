use common::error::NetworkError;
use common::forms::account::account_outcome;
use common::model::response::ServerResponse;
use common::requests::AccountRequest;
use gloo_net::http::Request;

use super::{into_network_error, send};

/// Posts an account form to its same-origin action.
///
/// The server answers with a redirect that the browser follows; see [`account_outcome`]
/// for how the final response is read.
pub async fn submit(
    request: &AccountRequest,
    timeout_ms: u32,
) -> Result<ServerResponse, NetworkError> {
    let http_request = Request::post(request.action)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(request.fields.to_urlencoded())
        .map_err(into_network_error)?;
    let response = send(http_request, timeout_ms).await?;

    let status = response.status();
    let redirected = response.redirected();
    let url = response.url();
    let body = if redirected || response.ok() {
        String::new()
    } else {
        response.text().await.unwrap_or_default()
    };

    let outcome = account_outcome(status, redirected, &url, &body);
    if !outcome.success {
        log::warn!("{} answered {status}", request.action);
    }
    Ok(outcome)
}
