//! HTTP client over `gloo-net`.
//!
//! Every request is raced against the configured timeout, and transport and decoding
//! failures are folded into [`NetworkError`] so callers only deal with one error type.

pub mod accounts;
pub mod reports;

use common::error::NetworkError;
use futures_util::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

pub(crate) async fn send(request: Request, timeout_ms: u32) -> Result<Response, NetworkError> {
    let response = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(response, timeout).await {
        Either::Left((result, _)) => result.map_err(into_network_error),
        Either::Right(_) => Err(NetworkError::Timeout(timeout_ms)),
    }
}

/// Decodes a JSON body; anything that is not the expected shape is malformed.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, NetworkError> {
    response
        .json::<T>()
        .await
        .map_err(|err| NetworkError::Malformed(err.to_string()))
}

/// Like [`read_json`], but a non-2xx status is an error even if the body parses.
pub(crate) async fn read_ok_json<T: DeserializeOwned>(
    response: Response,
) -> Result<T, NetworkError> {
    if !response.ok() {
        return Err(NetworkError::Status(response.status()));
    }
    read_json(response).await
}

pub(crate) fn into_network_error(err: gloo_net::Error) -> NetworkError {
    match err {
        gloo_net::Error::SerdeError(err) => NetworkError::Malformed(err.to_string()),
        other => NetworkError::Unreachable(other.to_string()),
    }
}
