//! Operation API request tests

#[cfg(test)]
mod tests {
    use crate::common::{TEST_API_KEY, http_client, move_entry};
    use move_runner::StepError;
    use move_runner::core::{ExecutionParams, HttpMoveExecutor, MoveExecutor, MoveOperation};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params(server: &MockServer, load_chunks: bool) -> ExecutionParams {
        ExecutionParams {
            api_key: TEST_API_KEY.to_string(),
            api_url: format!("{}/v2/world/move/content", server.uri()),
            load_chunks,
        }
    }

    #[tokio::test]
    async fn test_request_encodes_move_as_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/world/move/content"))
            .and(query_param("key", TEST_API_KEY))
            .and(query_param("fromX", "1"))
            .and(query_param("fromY", "2"))
            .and(query_param("fromZ", "3"))
            .and(query_param("toX", "-4"))
            .and(query_param("toY", "5"))
            .and(query_param("toZ", "6"))
            .and(query_param("loadChunks", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let op = MoveOperation::from_value(&move_entry((1, 2, 3), (-4, 5, 6))).unwrap();
        let body = HttpMoveExecutor::new(http_client())
            .execute(&params(&server, false), &op)
            .await
            .unwrap();

        assert_eq!(body, json!({"success": true}));
    }

    #[tokio::test]
    async fn test_error_body_is_returned_regardless_of_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("loadChunks", "true"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"success": false, "error": "invalid key"})),
            )
            .mount(&server)
            .await;

        let op = MoveOperation::from_value(&move_entry((0, 0, 0), (1, 1, 1))).unwrap();
        let body = HttpMoveExecutor::new(http_client())
            .execute(&params(&server, true), &op)
            .await
            .unwrap();

        assert_eq!(body["error"], "invalid key");
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let op = MoveOperation::from_value(&move_entry((0, 0, 0), (1, 1, 1))).unwrap();
        let err = HttpMoveExecutor::new(http_client())
            .execute(&params(&server, true), &op)
            .await
            .unwrap_err();

        assert!(matches!(err, StepError::Decode(_)));
    }

    #[tokio::test]
    async fn test_transport_error_hides_api_key() {
        let api_url = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}/move", listener.local_addr().unwrap())
        };
        let params = ExecutionParams {
            api_key: TEST_API_KEY.to_string(),
            api_url,
            load_chunks: true,
        };

        let op = MoveOperation::from_value(&move_entry((0, 0, 0), (1, 1, 1))).unwrap();
        let err = HttpMoveExecutor::new(http_client())
            .execute(&params, &op)
            .await
            .unwrap_err();

        assert!(matches!(err, StepError::Transport(_)));
        let reason = err.to_string();
        assert!(!reason.is_empty());
        assert!(!reason.contains(TEST_API_KEY));
        assert!(!reason.contains("key="));
    }
}
