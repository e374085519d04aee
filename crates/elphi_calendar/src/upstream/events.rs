//! Event metadata lookups.

use async_trait::async_trait;
use reqwest::StatusCode;

use elphi_calendar_core::upstream::{EventRecord, EventSource, Result, UpstreamError};

use super::ElphiClient;

#[async_trait]
impl EventSource for ElphiClient {
    async fn fetch_event(&self, event_id: &str) -> Result<EventRecord> {
        let url = format!("{}/{}/", self.events_url, urlencoding::encode(event_id));
        let response = self.get(&url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(UpstreamError::InvalidEventId(event_id.to_string()));
        }
        let body = self.body(&url, response).await?;
        let mut event: EventRecord =
            serde_json::from_slice(&body).map_err(|err| UpstreamError::Decode {
                url: url.clone(),
                message: err.to_string(),
            })?;
        // The schedule cache is keyed by this id.
        if event.id.is_empty() {
            event.id = event_id.to_string();
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ElphiClient {
        ElphiClient::new(
            reqwest::Client::new(),
            format!("{}/api", server.uri()),
            format!("{}/evis", server.uri()),
        )
    }

    #[tokio::test]
    async fn test_fetch_event() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/evis/E1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "evis_id": "E1",
                "title_de": "Sinfoniekonzert",
                "subtitle_de": "NDR Elbphilharmonie Orchester",
                "website_url": "https://www.elbphilharmonie.de/de/programm/e1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let event = client(&server).fetch_event("E1").await.unwrap();
        assert_eq!(event.id, "E1");
        assert_eq!(event.subtitle, "NDR Elbphilharmonie Orchester");
    }

    #[tokio::test]
    async fn test_event_id_is_escaped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/evis/a%2Fb/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "evis_id": "a/b" })))
            .expect(1)
            .mount(&server)
            .await;

        let event = client(&server).fetch_event("a/b").await.unwrap();
        assert_eq!(event.id, "a/b");
    }

    #[tokio::test]
    async fn test_missing_id_falls_back_to_requested_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "title_de": "Konzert" })))
            .mount(&server)
            .await;

        let event = client(&server).fetch_event("E7").await.unwrap();
        assert_eq!(event.id, "E7");
    }

    #[tokio::test]
    async fn test_unknown_event_is_invalid_event_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client(&server).fetch_event("E404").await;
        assert_eq!(result, Err(UpstreamError::InvalidEventId("E404".to_string())));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client(&server).fetch_event("E1").await;
        assert!(matches!(result, Err(UpstreamError::Decode { .. })));
    }
}
