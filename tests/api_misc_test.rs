//! Integration tests for the analysis, static-data and fallback endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chronex_ai::config::{ chronex, CREATOR };
    use chronex_ai::config::prompt::MATH_SOLUTION;
    use serde_json::json;

    use crate::test_utils::{ body_to_json, get, post_json, test_app };

    /// Tests that a known language is named in the analysis
    #[tokio::test]
    async fn it_analyzes_rust_code() {
        let response = post_json(
            test_app(),
            "/ai/analyze-code",
            json!({ "code": "fn main() {}", "language": "Rust" })
        ).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["language"], "Rust");
        assert!(body["analysis"].as_str().unwrap().contains("**Language Detected:** Rust"));
    }

    /// Tests that an unrecognized language still succeeds
    #[tokio::test]
    async fn it_analyzes_unknown_languages() {
        let response = post_json(
            test_app(),
            "/ai/analyze-code",
            json!({ "code": "IDENTIFICATION DIVISION.", "language": "Cobol" })
        ).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["language"], "Cobol");
        let analysis = body["analysis"].as_str().unwrap();
        assert!(analysis.contains("no language detected"));
        assert!(!analysis.contains("**Language Detected:** Rust"));
    }

    /// Tests that the language label defaults to "unknown"
    #[tokio::test]
    async fn it_defaults_language_label() {
        let response = post_json(test_app(), "/ai/analyze-code", json!({ "code": "x" })).await;
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["language"], "unknown");
    }

    /// Tests the math endpoint
    #[tokio::test]
    async fn it_solves_math() {
        let response = post_json(
            test_app(),
            "/ai/solve-math",
            json!({ "problem": "x^2 = 9" })
        ).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["solution"], MATH_SOLUTION);
    }

    /// Tests that the configuration record is served verbatim
    #[tokio::test]
    async fn it_serves_config() {
        let response = get(test_app(), "/ai/config").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body, serde_json::to_value(chronex()).unwrap());
        assert_eq!(body["creator"], CREATOR);
    }

    /// Tests the status endpoint
    #[tokio::test]
    async fn it_reports_status() {
        let body = body_to_json(get(test_app(), "/ai/status").await.into_body()).await;
        assert_eq!(body["status"], "online");
        assert_eq!(body["version"], "1.0");
        assert_eq!(body["model"], chronex().model_name());
        assert_eq!(
            body["capabilities"],
            json!(["chat", "code_analysis", "language_support", "math_solving", "data_analysis"])
        );
    }

    /// Tests the reset endpoint
    #[tokio::test]
    async fn it_resets() {
        let response = post_json(test_app(), "/ai/reset", json!({})).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Conversation history cleared");
    }

    /// Tests the creator endpoint
    #[tokio::test]
    async fn it_serves_creator() {
        let body = body_to_json(get(test_app(), "/ai/creator").await.into_body()).await;
        assert_eq!(body["name"], CREATOR);
        assert_eq!(body["role"], "Developer");
        assert_eq!(body["version"], "1.0");
        assert!(body["system"].is_string());
    }

    /// Tests that unknown routes get a JSON 404
    #[tokio::test]
    async fn it_returns_not_found() {
        let response = get(test_app(), "/ai/does-not-exist").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["error"], "Endpoint not found");
    }

    /// Tests that a wrong method on a known route gets a JSON 405
    #[tokio::test]
    async fn it_rejects_wrong_method() {
        let response = get(test_app(), "/ai/chat").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Method not allowed");
    }
}
