use meeting_interfaces::api::error::ServerError;
use reqwest::Response;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    message: Option<String>,
}

pub async fn post_request<B: Serialize, R: DeserializeOwned>(
    base_url: &str,
    endpoint: &str,
    body: &B,
) -> Result<R, ServerError> {
    let url = format!("{}{}", base_url, endpoint);
    let request_str =
        serde_json::to_string(body).map_err(|e| ServerError::SerializeError(e.to_string()))?;
    let response = reqwest::Client::new()
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| ServerError::NetworkError(e.to_string()))?;
    handle_response(response, &url, &request_str).await
}

pub async fn get_request<Q, R>(
    base_url: &str,
    endpoint: &str,
    query: Option<Q>,
) -> Result<R, ServerError>
where
    Q: Serialize,
    R: DeserializeOwned,
{
    let url = format!("{}{}", base_url, endpoint);
    let query_str = match &query {
        Some(q) => serde_json::to_string(q).map_err(|e| ServerError::SerializeError(e.to_string()))?,
        None => String::new(),
    };

    let client = reqwest::Client::new();
    let request = match query {
        Some(params) => client.get(&url).query(&params),
        None => client.get(&url),
    };
    let response = request
        .send()
        .await
        .map_err(|e| ServerError::NetworkError(e.to_string()))?;

    handle_response(response, &url, &query_str).await
}

async fn handle_response<R: DeserializeOwned>(
    response: Response,
    url: &str,
    request_str: &str,
) -> Result<R, ServerError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error response".to_string());
        let error_message = match serde_json::from_str::<ErrorResponse>(&error_text) {
            Ok(error_resp) => error_resp.message.unwrap_or(error_resp.error),
            Err(_) => error_text,
        };
        return Err(ServerError::ServerError(
            status.into(),
            error_message,
            url.to_string(),
            request_str.to_string(),
        ));
    }
    response
        .json::<R>()
        .await
        .map_err(|e| ServerError::DeserializationError(e.to_string()))
}
