//! Webhook notification delivery tests

#[cfg(test)]
mod tests {
    use crate::common::http_client;
    use chrono::Utc;
    use move_runner::MoveError;
    use move_runner::services::{ErrorNotification, NotificationChannel, WebhookChannel};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn notification() -> ErrorNotification {
        ErrorNotification {
            name: "lager_1".to_string(),
            user_tag: "op#0001".to_string(),
            error: "API_KEY is missing".to_string(),
            duration_ms: 3,
            timestamp: Utc::now(),
        }
    }

    fn channel(server: &MockServer) -> WebhookChannel {
        WebhookChannel::new(
            format!("{}/hooks/runs", server.uri()),
            http_client(),
            Duration::from_secs(2),
        )
    }

    #[tokio::test]
    async fn test_webhook_posts_content_and_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hooks/runs"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        channel(&server).send(&notification()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body["content"].as_str().unwrap().contains("lager_1"));
        assert_eq!(body["notification"]["userTag"], "op#0001");
        assert_eq!(body["notification"]["error"], "API_KEY is missing");
    }

    #[tokio::test]
    async fn test_webhook_rejection_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = channel(&server).send(&notification()).await.unwrap_err();

        assert!(matches!(err, MoveError::Notification(_)));
        assert_eq!(channel(&server).name(), "webhook");
    }
}
