mod common;

use async_trait::async_trait;
use common::gateway_for;
use restate_gateway::account::{AuthBrowser, BrowserResult, Session};
use serde_json::json;
use std::sync::Mutex;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Browser that answers every authorization request with a fixed result
struct ScriptedBrowser {
    result: BrowserResult,
    opened: Mutex<Vec<String>>,
}

impl ScriptedBrowser {
    fn new(result: BrowserResult) -> Self {
        Self {
            result,
            opened: Mutex::new(Vec::new()),
        }
    }

    fn returning(callback_url: &str) -> Self {
        Self::new(BrowserResult::Success {
            url: callback_url.to_string(),
        })
    }
}

#[async_trait]
impl AuthBrowser for ScriptedBrowser {
    async fn open_auth_session(&self, auth_url: &Url, _redirect_uri: &str) -> BrowserResult {
        self.opened.lock().unwrap().push(auth_url.to_string());
        self.result.clone()
    }
}

fn session_body() -> serde_json::Value {
    json!({
        "$id": "session_1",
        "$createdAt": "2024-05-01T10:00:00.000+00:00",
        "userId": "user_42",
        "expire": "2099-05-01T10:00:00.000+00:00",
        "provider": "oauth2",
        "secret": "session-secret"
    })
}

async fn mount_session_exchange(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v1/account/sessions/token"))
        .and(header("X-Appwrite-Project", "test-project"))
        .and(body_json(json!({ "userId": "user_42", "secret": "abc123" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(session_body()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_establishes_session() {
    let mock_server = MockServer::start().await;
    mount_session_exchange(&mock_server, 1).await;

    let gateway = gateway_for(&mock_server);
    let browser = ScriptedBrowser::returning("restate://?secret=abc123&userId=user_42");

    assert!(gateway.login(&browser).await);

    let session = gateway.session().await.expect("session stored");
    assert_eq!(session.user_id, "user_42");
    assert_eq!(session.secret, "session-secret");

    let opened = browser.opened.lock().unwrap().clone();
    assert_eq!(opened.len(), 1);
    let auth_url = Url::parse(&opened[0]).unwrap();
    assert_eq!(auth_url.path(), "/v1/account/tokens/oauth2/google");
    let pairs: Vec<(String, String)> = auth_url.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("project".to_string(), "test-project".to_string())));
    assert!(pairs.contains(&("success".to_string(), "restate://".to_string())));
    assert!(pairs.contains(&("failure".to_string(), "restate://".to_string())));
}

#[tokio::test]
async fn test_login_missing_callback_param_skips_session_creation() {
    for callback in [
        "restate://?secret=abc123",
        "restate://?userId=user_42",
        "restate://",
    ] {
        let mock_server = MockServer::start().await;
        mount_session_exchange(&mock_server, 0).await;

        let gateway = gateway_for(&mock_server);
        let browser = ScriptedBrowser::returning(callback);

        assert!(!gateway.login(&browser).await, "callback {}", callback);
        assert!(gateway.session().await.is_none());
    }
}

#[tokio::test]
async fn test_login_cancelled_browser() {
    let mock_server = MockServer::start().await;
    mount_session_exchange(&mock_server, 0).await;

    let gateway = gateway_for(&mock_server);

    assert!(!gateway.login(&ScriptedBrowser::new(BrowserResult::Cancel)).await);
    assert!(!gateway.login(&ScriptedBrowser::new(BrowserResult::Dismiss)).await);
}

#[tokio::test]
async fn test_login_session_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/account/sessions/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid token passed in the request.",
            "code": 401,
            "type": "user_invalid_token"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let browser = ScriptedBrowser::returning("restate://?secret=abc123&userId=user_42");

    assert!(!gateway.login(&browser).await);
    assert!(gateway.session().await.is_none());
}

#[tokio::test]
async fn test_requests_carry_session_after_login() {
    let mock_server = MockServer::start().await;
    mount_session_exchange(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .and(header("X-Appwrite-Session", "session-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "$id": "user_42",
            "name": "Ada Lovelace"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let browser = ScriptedBrowser::returning("restate://?secret=abc123&userId=user_42");
    assert!(gateway.login(&browser).await);

    let user_id = gateway.get_user_id().await.unwrap();
    assert_eq!(user_id, Some("user_42".to_string()));
}

#[tokio::test]
async fn test_logout_deletes_current_session() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/account/sessions/current"))
        .and(header("X-Appwrite-Session", "existing-secret"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    gateway
        .set_session(Session {
            id: "session_9".to_string(),
            user_id: "user_9".to_string(),
            secret: "existing-secret".to_string(),
            provider: "oauth2".to_string(),
            created_at: None,
            expire: None,
        })
        .await;

    assert!(gateway.logout().await);
    assert!(gateway.session().await.is_none());
}

#[tokio::test]
async fn test_logout_without_local_session_asks_server() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/account/sessions/current"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    // A session held only in the cookie store is still deleted.
    let gateway = gateway_for(&mock_server);
    assert!(gateway.logout().await);
    assert!(gateway.session().await.is_none());
}

#[tokio::test]
async fn test_logout_failure_returns_false() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/account/sessions/current"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);

    // Not signed in at all: the server refuses
    assert!(!gateway.logout().await);

    gateway
        .set_session(Session {
            id: "session_9".to_string(),
            user_id: "user_9".to_string(),
            secret: "existing-secret".to_string(),
            provider: "oauth2".to_string(),
            created_at: None,
            expire: None,
        })
        .await;

    assert!(!gateway.logout().await);
    assert!(gateway.session().await.is_some());
}

#[tokio::test]
async fn test_get_user_id_without_identifier() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Nobody" })))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);

    assert_eq!(gateway.get_user_id().await.unwrap(), None);
    assert!(gateway.get_current_user().await.is_none());
}

#[tokio::test]
async fn test_get_user_id_propagates_errors() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "User (role: guests) missing scope (account)",
            "code": 401,
            "type": "general_unauthorized_scope"
        })))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);

    let err = gateway.get_user_id().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(gateway.get_current_user().await.is_none());
}

#[tokio::test]
async fn test_current_user_has_initials_avatar() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "$id": "user_42",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "status": true,
            "prefs": {}
        })))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let current = gateway.get_current_user().await.expect("user resolved");

    assert_eq!(current.user.id, "user_42");
    assert_eq!(current.user.email.as_deref(), Some("ada@example.com"));

    let avatar = Url::parse(&current.avatar).unwrap();
    assert_eq!(avatar.path(), "/v1/avatars/initials");
    let pairs: Vec<(String, String)> = avatar.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("name".to_string(), "Ada Lovelace".to_string())));
    assert!(pairs.contains(&("project".to_string(), "test-project".to_string())));
}
