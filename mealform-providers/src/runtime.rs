use crate::request::HttpRequest;
use mealform_core::error::MenuServiceError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

fn transport(e: reqwest::Error, timeout: Duration, what: &str) -> MenuServiceError {
    if e.is_timeout() {
        MenuServiceError::Timeout(timeout)
    } else {
        MenuServiceError::Transport(format!("{what}: {e}"))
    }
}

/// POSTs `req` and reads the whole body. Non-2xx statuses are returned as
/// responses, not errors; classification is the caller's job.
pub async fn execute(
    req: &HttpRequest,
    timeout: Duration,
) -> Result<HttpResponse, MenuServiceError> {
    // Without an explicit timeout a stalled endpoint would keep the form in
    // its loading state indefinitely.
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .build()
        .map_err(|e| MenuServiceError::Transport(format!("build http client: {e}")))?;

    let mut headers = HeaderMap::new();
    for (k, v) in &req.headers {
        let name = HeaderName::from_bytes(k.as_bytes())
            .map_err(|_| MenuServiceError::Transport(format!("invalid header name: {k}")))?;
        let value = HeaderValue::from_str(v)
            .map_err(|_| MenuServiceError::Transport(format!("invalid header value for {k}")))?;
        headers.insert(name, value);
    }

    let builder = client
        .post(&req.url)
        .headers(headers)
        .body(req.json.clone());

    log::debug!("sending {req:?}");
    let resp = builder
        .send()
        .await
        .map_err(|e| transport(e, timeout, "http request failed"))?;
    let status = resp.status().as_u16();
    let body = resp
        .bytes()
        .await
        .map_err(|e| transport(e, timeout, "failed reading response body"))?
        .to_vec();

    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn post(url: String, json: &str) -> HttpRequest {
        HttpRequest {
            url,
            headers: vec![("Content-Type".into(), "application/json".into())],
            json: json.into(),
        }
    }

    #[tokio::test]
    async fn returns_non_success_status_as_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/menu"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"ingredients": "rice"})))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let resp = execute(
            &post(format!("{}/menu", server.uri()), r#"{"ingredients":"rice"}"#),
            Duration::from_secs(5),
        )
        .await
        .unwrap();
        assert_eq!(resp.status, 500);
        assert!(!resp.is_success());
        assert_eq!(resp.body, b"boom");
    }

    #[tokio::test]
    async fn slow_server_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let timeout = Duration::from_millis(100);
        let err = execute(&post(server.uri(), "{}"), timeout).await.unwrap_err();
        assert_eq!(err, MenuServiceError::Timeout(timeout));
    }

    #[tokio::test]
    async fn refused_connection_is_transport() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let err = execute(
            &post(format!("http://127.0.0.1:{port}/"), "{}"),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, MenuServiceError::Transport(_)), "{err:?}");
    }
}
