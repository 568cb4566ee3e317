use artrec::api::publish::{PublishOutcome, publish_feed_page};
use artrec::api::{WebhookContext, route};
use artrec::core::config::AppConfig;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn context(server: &MockServer) -> WebhookContext {
    WebhookContext::from_config(AppConfig {
        numeno_api_key: "numeno-key".into(),
        numeno_art_rec_url: server.uri(),
        default_feed_id: "default-feed".into(),
        slack_webhook_url: format!("{}/slack/hook", server.uri()),
        ..Default::default()
    })
}

fn event(raw_path: &str, body: &str) -> Value {
    json!({
        "rawPath": raw_path,
        "headers": { "content-type": "application/x-www-form-urlencoded" },
        "body": body,
        "isBase64Encoded": false
    })
}

fn interaction_body(payload: &Value) -> String {
    let payload = payload.to_string();
    let encoded = percent_encoding::utf8_percent_encode(
        &payload,
        percent_encoding::NON_ALPHANUMERIC,
    );
    format!("payload={encoded}")
}

async fn mount_page(server: &MockServer, feed_id: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/feeds/{feed_id}/articles")))
        .and(query_param("limit", "5"))
        .and(header("X-Numeno-Key", "numeno-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "articles": [{
                "id": "a1",
                "title": "Kindness at scale",
                "href": "https://example.com/a1",
                "summary": "<p>Short</p>",
                "thumbnail": "https://example.com/a1.png"
            }],
            "cursor": "next-page"
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_slack(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/slack/hook"))
        .and(body_partial_json(json!({
            "text": "These are recommendations from the Numeno Article Recommender API - https://numeno.ai/"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn slack_blocks(server: &MockServer) -> Vec<Value> {
    let requests = server.received_requests().await.unwrap();
    let slack = requests
        .iter()
        .find(|r| r.url.path() == "/slack/hook")
        .expect("slack webhook was called");
    let body: Value = serde_json::from_slice(&slack.body).unwrap();
    body["blocks"].as_array().unwrap().clone()
}

#[tokio::test]
async fn command_with_feed_id_publishes_that_feed() {
    let server = MockServer::start().await;
    mount_page(&server, "feed-42").await;
    mount_slack(&server, 1).await;

    let resp = route(
        &context(&server),
        &event("/slackbot/art-rec/v1/articles/", "command=%2Farticles&text=feed-42"),
    )
    .await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["body"], "Request feed-42 received and processed");

    let blocks = slack_blocks(&server).await;
    // header, divider + article, divider, cursor
    assert_eq!(blocks.len(), 5);
    assert_eq!(blocks[2]["text"]["text"], "<https://example.com/a1|*Kindness at scale*>\n_Short_");
    assert_eq!(blocks[4]["block_id"], "cursor_feed-42");
    assert_eq!(blocks[4]["accessory"]["value"], "next-page");
}

#[tokio::test]
async fn empty_command_text_uses_default_feed() {
    let server = MockServer::start().await;
    mount_page(&server, "default-feed").await;
    mount_slack(&server, 1).await;

    let resp = route(&context(&server), &event("/articles", "command=%2Farticles&text=")).await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["body"], "Request  received and processed");
}

#[tokio::test]
async fn cursor_button_continues_the_rendered_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feeds/feed-42/articles"))
        .and(query_param("cursor", "next-page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": [] })))
        .expect(1)
        .mount(&server)
        .await;
    mount_slack(&server, 1).await;

    let payload = json!({
        "type": "block_actions",
        "user": { "id": "U1" },
        "actions": [{
            "type": "button",
            "action_id": "cursor_button",
            "block_id": "cursor_feed-42",
            "value": "next-page"
        }]
    });

    let resp = route(&context(&server), &event("/interact", &interaction_body(&payload))).await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["body"], "Button interaction handled");

    // Last page: header and trailing divider only.
    let blocks = slack_blocks(&server).await;
    assert_eq!(blocks.len(), 2);
}

#[tokio::test]
async fn cursor_button_without_feed_block_uses_default_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feeds/default-feed/articles"))
        .and(query_param("cursor", "c9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": [] })))
        .expect(1)
        .mount(&server)
        .await;
    mount_slack(&server, 1).await;

    let payload = json!({
        "type": "block_actions",
        "actions": [{ "type": "button", "action_id": "cursor_button", "value": "c9" }]
    });

    let resp = route(&context(&server), &event("/interact", &interaction_body(&payload))).await;
    assert_eq!(resp["body"], "Button interaction handled");
}

#[tokio::test]
async fn unrelated_interaction_is_acknowledged_without_fetching() {
    let server = MockServer::start().await;

    let payload = json!({
        "type": "block_actions",
        "actions": [{ "type": "button", "action_id": "something_else", "value": "x" }]
    });

    let resp = route(&context(&server), &event("/interact", &interaction_body(&payload))).await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["body"], "No interaction handled");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_or_empty_payload_is_rejected() {
    let server = MockServer::start().await;
    let ctx = context(&server);

    for body in ["payload=not-json", "payload=%7B%7D", "payload=null", "text=hello"] {
        let resp = route(&ctx, &event("/interact", body)).await;
        assert_eq!(resp["statusCode"], 400, "body = {body}");
        assert_eq!(resp["body"], "Invalid payload");
    }
}

#[tokio::test]
async fn fetch_failure_skips_delivery_but_still_acknowledges() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feeds/feed-42/articles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_slack(&server, 0).await;

    let ctx = context(&server);
    assert_eq!(
        publish_feed_page(&ctx, "feed-42", None).await,
        PublishOutcome::FetchFailed
    );

    let resp = route(&ctx, &event("/articles", "text=feed-42")).await;
    assert_eq!(resp["statusCode"], 200);
}

#[tokio::test]
async fn delivery_failure_is_not_surfaced() {
    let server = MockServer::start().await;
    mount_page(&server, "feed-42").await;
    Mock::given(method("POST"))
        .and(path("/slack/hook"))
        .respond_with(ResponseTemplate::new(500).set_body_string("invalid_blocks"))
        .expect(1)
        .mount(&server)
        .await;

    let resp = route(&context(&server), &event("/articles", "text=feed-42")).await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["body"], "Request feed-42 received and processed");
}

#[tokio::test]
async fn missing_body_is_a_client_error() {
    let server = MockServer::start().await;
    let resp = route(&context(&server), &json!({ "rawPath": "/articles" })).await;
    assert_eq!(resp["statusCode"], 400);
}

#[tokio::test]
async fn non_block_actions_payload_is_acknowledged_without_fetching() {
    let server = MockServer::start().await;

    let payload = json!({
        "type": "view_submission",
        "actions": [{ "type": "button", "action_id": "cursor_button", "value": "c" }]
    });

    let resp = route(&context(&server), &event("/interact", &interaction_body(&payload))).await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["body"], "No interaction handled");
    assert!(server.received_requests().await.unwrap().is_empty());
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/slack/hook")
}

#[tokio::test]
async fn unreachable_webhook_is_logged_and_acknowledged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feeds/feed-42/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": [] })))
        .mount(&server)
        .await;

    let ctx = WebhookContext::from_config(AppConfig {
        numeno_api_key: "numeno-key".into(),
        numeno_art_rec_url: server.uri(),
        default_feed_id: "default-feed".into(),
        slack_webhook_url: closed_port_url(),
        ..Default::default()
    });

    assert_eq!(
        publish_feed_page(&ctx, "feed-42", None).await,
        PublishOutcome::DeliveryFailed
    );

    let resp = route(&ctx, &event("/articles", "text=feed-42")).await;
    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["body"], "Request feed-42 received and processed");
}
