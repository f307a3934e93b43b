use crate::tools::error::WebError::{
    CantCreateClient, CantReadPageContent, ConnectionFailed, MalformedResponse, Unauthorized,
    UnexpectedStatus,
};
use crate::tools::error::WebError;
use crate::tools::log_message_and_return;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_client() -> Result<Client, WebError> {
    reqwest::ClientBuilder::new()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(TIMEOUT)
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}

/// Request failures carry the URL, and some URLs embed an access key: it is left out.
pub fn describe_request_error(e: reqwest::Error) -> String {
    format!("{:#?}", e.without_url())
}

pub fn log_request_error_and_return<T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(reqwest::Error) -> T {
    move |e| {
        error!("{message}\n{}", describe_request_error(e));
        value_to_return
    }
}

/// Send the request and reject any non-success status.
pub async fn send(request: RequestBuilder) -> Result<Response, WebError> {
    let response = request
        .send()
        .await
        .map_err(log_request_error_and_return("Request failed", ConnectionFailed))?;

    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        error!("Request not authorized: {status:?}");
        Err(Unauthorized)
    } else {
        let body = response.text().await.unwrap_or_default();
        error!("Unexpected response status: {status:?}\n{body}");
        Err(UnexpectedStatus(status.as_u16()))
    }
}

/// Read the whole body and deserialize it as JSON.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, WebError> {
    let body = response.text().await.map_err(log_request_error_and_return(
        "Can't read response content",
        CantReadPageContent,
    ))?;

    serde_json::from_str(&body).map_err(|e| {
        error!("Can't deserialize response content\n{e:#?}");
        MalformedResponse(e.to_string())
    })
}
