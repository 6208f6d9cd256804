use tracing::{error, warn};

use crate::generator::content_type::ContentType;
use crate::generator::credentials::Credentials;
use crate::generator::error::GenerateError;
use crate::generator::prompt::compose_prompt;
use crate::generator::workers_ai::WorkersAiClient;

/// Upper bound on the number of lines returned to the caller.
pub const MAX_LINES: usize = 5;

/// Returned in place of generated content when no credentials are configured.
pub const FALLBACK_CONTENT: [&str; 5] = [
    "Why did the AI go to therapy? It had too many processing issues!",
    "What do you call a computer that sings? A Dell-a-cappella!",
    "Why don't programmers like nature? It has too many bugs!",
    "What did the router say to the doctor? I feel a bit disconnected!",
    "Why did the cookie go to the doctor? Because it was feeling crumbly!",
];

pub fn fallback_content() -> Vec<String> {
    FALLBACK_CONTENT.iter().map(|line| line.to_string()).collect()
}

/// Trims every line of `raw`, drops blank ones and keeps the first
/// [`MAX_LINES`] in order.
pub fn collect_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_LINES)
        .map(str::to_string)
        .collect()
}

/// Generates up to five lines of `kind` content about `topic`.
///
/// Without credentials this returns [`FALLBACK_CONTENT`] and makes no request.
pub async fn generate_content(
    client: &WorkersAiClient,
    credentials: Option<&Credentials>,
    topic: &str,
    kind: ContentType,
) -> Result<Vec<String>, GenerateError> {
    let Some(credentials) = credentials else {
        warn!("missing Cloudflare credentials, using fallback content");
        return Ok(fallback_content());
    };

    let prompt = compose_prompt(topic, kind);
    let lines = client
        .run(Some(credentials), &prompt)
        .await
        .map(|raw| collect_lines(&raw))
        .and_then(|lines| {
            if lines.is_empty() {
                Err(GenerateError::EmptyContent)
            } else {
                Ok(lines)
            }
        });

    if let Err(err) = &lines {
        error!(error = %err, %topic, kind = %kind, "content generation failed");
    }
    lines
}

/// String-tag variant of [`generate_content`]; unknown tags generate puns.
pub async fn generate_content_for_tag(
    client: &WorkersAiClient,
    credentials: Option<&Credentials>,
    topic: &str,
    tag: &str,
) -> Result<Vec<String>, GenerateError> {
    let (kind, recognized) = ContentType::normalize(tag);
    if !recognized {
        warn!(tag, "unknown content type, using puns");
    }
    generate_content(client, credentials, topic, kind).await
}

#[cfg(test)]
mod tests {
    use super::{FALLBACK_CONTENT, collect_lines, generate_content, generate_content_for_tag};
    use crate::generator::content_type::ContentType;
    use crate::generator::credentials::Credentials;
    use crate::generator::error::GenerateError;
    use crate::generator::prompt::compose_prompt;
    use crate::generator::workers_ai::{RunRequest, WorkersAiClient};
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    const RUN_PATH: &str = "/accounts/acct/ai/run/@cf/meta/llama-2-7b-chat-int8";

    fn credentials() -> Credentials {
        Credentials::new("acct", "tok").expect("test credentials")
    }

    async fn server_replying(body: serde_json::Value) -> ServerGuard {
        let mut server = Server::new_async().await;
        server
            .mock("POST", RUN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;
        server
    }

    #[test]
    fn collect_lines_trims_drops_blanks_and_truncates() {
        assert_eq!(
            collect_lines("A\nB\n\nC\nD\nE\nF"),
            vec!["A", "B", "C", "D", "E"]
        );
        assert_eq!(collect_lines("  one  \r\n\t\n two"), vec!["one", "two"]);
        assert!(collect_lines(" \n\t\n").is_empty());
    }

    #[tokio::test]
    async fn missing_credentials_return_fallback_without_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let client = WorkersAiClient::new().with_base_url(server.url());

        let lines = generate_content(&client, None, "cats", ContentType::Puns)
            .await
            .expect("fallback never fails");

        assert_eq!(lines, FALLBACK_CONTENT);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn generated_text_is_split_filtered_and_truncated() {
        let server = server_replying(json!({"result": {"response": "A\nB\n\nC\nD\nE\nF"}})).await;
        let client = WorkersAiClient::new().with_base_url(server.url());

        let lines = generate_content(&client, Some(&credentials()), "cats", ContentType::Jokes)
            .await
            .expect("generation should succeed");

        assert_eq!(lines, vec!["A", "B", "C", "D", "E"]);
    }

    #[tokio::test]
    async fn empty_generated_text_is_empty_content() {
        for raw in ["", "   \n \n\t"] {
            let server = server_replying(json!({"result": {"response": raw}})).await;
            let client = WorkersAiClient::new().with_base_url(server.url());

            let err = generate_content(&client, Some(&credentials()), "cats", ContentType::Puns)
                .await
                .expect_err("nothing usable was generated");

            assert!(matches!(err, GenerateError::EmptyContent), "{err:?}");
            assert_eq!(err.to_string(), "No valid content generated");
        }
    }

    #[tokio::test]
    async fn api_errors_propagate() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", RUN_PATH)
            .with_status(500)
            .with_body(r#"{"errors":[{"message":"overloaded"}]}"#)
            .create_async()
            .await;
        let client = WorkersAiClient::new().with_base_url(server.url());

        let err = generate_content(&client, Some(&credentials()), "cats", ContentType::Puns)
            .await
            .expect_err("500 should propagate");

        let message = err.to_string();
        assert!(message.contains("500") && message.contains("overloaded"), "{message}");
    }

    #[tokio::test]
    async fn malformed_response_propagates() {
        let server = server_replying(json!({"success": true})).await;
        let client = WorkersAiClient::new().with_base_url(server.url());

        let err = generate_content(&client, Some(&credentials()), "cats", ContentType::Puns)
            .await
            .expect_err("missing result.response");

        assert!(matches!(err, GenerateError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn unknown_tag_sends_puns_prompt() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", RUN_PATH)
            .match_body(Matcher::Json(
                serde_json::to_value(RunRequest::for_prompt(&compose_prompt(
                    "owls",
                    ContentType::Puns,
                )))
                .expect("request serializes"),
            ))
            .with_status(200)
            .with_body(r#"{"result":{"response":"Owl be there"}}"#)
            .create_async()
            .await;
        let client = WorkersAiClient::new().with_base_url(server.url());

        let lines = generate_content_for_tag(&client, Some(&credentials()), "owls", "sonnets")
            .await
            .expect("generation should succeed");

        assert_eq!(lines, vec!["Owl be there"]);
        mock.assert_async().await;
    }
}
