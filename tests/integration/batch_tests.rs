//! End-to-end batch runs against mock config store and world API

#[cfg(test)]
mod tests {
    use crate::common::{TEST_API_KEY, engine_for, http_client, move_entry, moves_document};
    use move_runner::MoveError;
    use move_runner::core::{BatchRunner, MAX_REPORTED_ERRORS};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_PATH: &str = "/v2/world/move/content";

    async fn serve_config(server: &MockServer, name: &str, document: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/configs/{name}.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(document))
            .expect(1)
            .mount(server)
            .await;
    }

    fn runner(server: &MockServer) -> BatchRunner {
        // Trailing slashes on the base are tolerated
        let engine = engine_for(
            &format!("{}/configs/", server.uri()),
            &format!("{}{}", server.uri(), API_PATH),
        );
        BatchRunner::with_http(engine, http_client())
    }

    #[tokio::test]
    async fn test_failed_step_does_not_abort_batch() {
        let server = MockServer::start().await;
        serve_config(&server, "lager_1", moves_document(3)).await;

        Mock::given(method("GET"))
            .and(path(API_PATH))
            .and(query_param("fromX", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": false, "error": "Source empty"})),
            )
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(API_PATH))
            .and(query_param("key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(2)
            .mount(&server)
            .await;

        let result = runner(&server).run("lager_1").await.unwrap();

        assert!(!result.ok);
        assert_eq!(result.total, 3);
        assert_eq!(result.ok_count, 2);
        assert_eq!(result.fail_count, 1);
        assert_eq!(result.errors, vec!["Step 2: Source empty".to_string()]);
    }

    #[tokio::test]
    async fn test_document_api_url_and_load_chunks_override_defaults() {
        let server = MockServer::start().await;
        serve_config(
            &server,
            "lager_2",
            json!({
                "apiUrl": format!("{}/custom/move", server.uri()),
                "loadChunks": false,
                "moves": [move_entry((1, 2, 3), (4, 5, 6))],
            }),
        )
        .await;

        Mock::given(method("GET"))
            .and(path("/custom/move"))
            .and(query_param("loadChunks", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let result = runner(&server).run("lager_2").await.unwrap();

        assert!(result.ok);
        assert_eq!(result.ok_count, 1);
    }

    #[tokio::test]
    async fn test_error_list_is_capped() {
        let server = MockServer::start().await;
        serve_config(&server, "broken", moves_document(11)).await;

        Mock::given(method("GET"))
            .and(path(API_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "no chest"})))
            .expect(11)
            .mount(&server)
            .await;

        let result = runner(&server).run("broken").await.unwrap();

        assert_eq!(result.fail_count, 11);
        assert_eq!(result.errors.len(), MAX_REPORTED_ERRORS);
        assert_eq!(result.errors[0], "Step 1: no chest");
        assert_eq!(result.errors[7], "Step 8: no chest");
    }

    #[tokio::test]
    async fn test_missing_config_aborts_before_any_move() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/configs/nope.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(API_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(0)
            .mount(&server)
            .await;

        let err = runner(&server).run("nope").await.unwrap_err();

        assert!(matches!(err, MoveError::ConfigFetch { status: Some(404), .. }));
    }

    #[tokio::test]
    async fn test_unreachable_api_keeps_key_out_of_errors() {
        let server = MockServer::start().await;
        serve_config(&server, "lager_1", moves_document(2)).await;
        let api_url = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}/move", listener.local_addr().unwrap())
        };
        let engine = engine_for(&format!("{}/configs", server.uri()), &api_url);

        let result = BatchRunner::with_http(engine, http_client())
            .run("lager_1")
            .await
            .unwrap();

        assert_eq!(result.fail_count, 2);
        assert_eq!(result.errors.len(), 2);
        for error in &result.errors {
            assert!(error.starts_with("Step "));
            assert!(!error.contains(TEST_API_KEY));
        }
    }

    #[tokio::test]
    async fn test_empty_document_makes_no_api_calls() {
        let server = MockServer::start().await;
        serve_config(&server, "empty", json!({"moves": []})).await;

        let result = runner(&server).run("empty").await.unwrap();

        assert!(result.is_empty());
        assert!(result.ok);
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }
}
