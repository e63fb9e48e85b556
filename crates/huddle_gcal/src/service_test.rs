#[cfg(test)]
mod tests {
    use crate::service::GoogleCalendarService;
    use huddle_common::services::CalendarService;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_events_against_stub() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .and(query_param("singleEvents", "true"))
            .and(query_param("orderBy", "startTime"))
            .and(query_param("maxResults", "10"))
            .and(header("Authorization", "Bearer ya29.alice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "calendar#events",
                "items": [
                    {
                        "id": "evt1",
                        "summary": "Standup",
                        "start": { "dateTime": "2025-01-06T09:00:00Z" },
                        "end": { "dateTime": "2025-01-06T09:15:00Z" }
                    },
                    {
                        "id": "evt2",
                        "summary": "Offsite",
                        "start": { "date": "2025-01-10" },
                        "end": { "date": "2025-01-11" }
                    }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = GoogleCalendarService::new(Some(mock_server.uri()));
        let events = service.list_events("ya29.alice", "primary", 10).await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].summary, "Standup");
        assert_eq!(
            events[0].start.as_ref().unwrap().date_time.as_deref(),
            Some("2025-01-06T09:00:00Z")
        );
        assert_eq!(events[1].start.as_ref().unwrap().date.as_deref(), Some("2025-01-10"));
    }

    #[tokio::test]
    async fn test_list_events_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "code": 401, "message": "Invalid Credentials" }
            })))
            .mount(&mock_server)
            .await;

        let service = GoogleCalendarService::new(Some(mock_server.uri()));
        assert!(service.list_events("expired", "primary", 10).await.is_err());
    }
}
