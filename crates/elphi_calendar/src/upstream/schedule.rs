//! Schedule document lookups.

use async_trait::async_trait;

use elphi_calendar_core::calendar::CalendarEntry;
use elphi_calendar_core::upstream::{
    normalize_schedule, EventRecord, Result, ScheduleSource, UpstreamError,
};

use super::ElphiClient;

#[async_trait]
impl ScheduleSource for ElphiClient {
    async fn fetch_schedule(&self, event: &EventRecord) -> Result<CalendarEntry> {
        let url = event.schedule_url();
        let response = self.get(&url).await?;
        let body = self.body(&url, response).await?;
        let document = String::from_utf8(body).map_err(|err| UpstreamError::Decode {
            url: url.clone(),
            message: err.to_string(),
        })?;
        normalize_schedule(&document, &url, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ONE_EVENT: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:abc@elbphilharmonie.de\r\n\
DTSTART:20240510T180000Z\r\n\
SUMMARY:Upstream\r\n\
DESCRIPTION:Programm\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    fn event(server: &MockServer) -> EventRecord {
        EventRecord {
            id: "E1".to_string(),
            title: "Kammermusik".to_string(),
            subtitle: "Quartett".to_string(),
            website_url: format!("{}/de/programm/e1", server.uri()),
            ..Default::default()
        }
    }

    fn client() -> ElphiClient {
        ElphiClient::new(reqwest::Client::new(), "http://unused/api", "http://unused/evis")
    }

    #[tokio::test]
    async fn test_fetch_schedule_appends_ics_suffix() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/de/programm/e1.ics"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ONE_EVENT))
            .expect(1)
            .mount(&server)
            .await;

        let entry = client().fetch_schedule(&event(&server)).await.unwrap();
        assert_eq!(entry.uid().as_deref(), Some("custom-abc@elbphilharmonie.de"));
        assert_eq!(entry.summary().as_deref(), Some("Quartett"));
        assert_eq!(
            entry.description().as_deref(),
            Some("Kammermusik\n\nProgramm")
        );
    }

    #[tokio::test]
    async fn test_empty_calendar_is_no_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n"),
            )
            .mount(&server)
            .await;

        let result = client().fetch_schedule(&event(&server)).await;
        assert!(matches!(result, Err(UpstreamError::NoEvents { .. })));
    }

    #[tokio::test]
    async fn test_missing_document_is_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client().fetch_schedule(&event(&server)).await;
        assert!(matches!(
            result,
            Err(UpstreamError::UnexpectedStatus { status: 404, .. })
        ));
    }
}
