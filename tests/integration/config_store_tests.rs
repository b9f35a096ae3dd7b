//! Config store retrieval tests

#[cfg(test)]
mod tests {
    use crate::common::{TEST_USER_AGENT, http_client};
    use move_runner::MoveError;
    use move_runner::core::{ConfigSource, HttpConfigSource};
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_joins_base_and_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/configs/lager_1.json"))
            .and(header("user-agent", TEST_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"moves": []})))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpConfigSource::new(http_client());
        let document = source
            .fetch(&format!("{}/configs", server.uri()), "lager_1")
            .await
            .unwrap();

        assert_eq!(document, json!({"moves": []}));
    }

    #[tokio::test]
    async fn test_fetch_not_found_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpConfigSource::new(http_client());
        let err = source.fetch(&server.uri(), "missing").await.unwrap_err();

        match &err {
            MoveError::ConfigFetch { url, status, .. } => {
                assert_eq!(*status, Some(404));
                assert!(url.ends_with("/missing.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moves: [oops"))
            .mount(&server)
            .await;

        let source = HttpConfigSource::new(http_client());
        let err = source.fetch(&server.uri(), "broken").await.unwrap_err();

        assert!(matches!(err, MoveError::ConfigParse(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_store() {
        // Nothing listens on a freshly released port
        let uri = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };

        let source = HttpConfigSource::new(http_client());
        let err = source.fetch(&uri, "lager_1").await.unwrap_err();

        assert!(matches!(err, MoveError::ConfigFetch { status: None, .. }));
    }
}
