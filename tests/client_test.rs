//! End-to-end flows against a mock server: login, authenticated facade
//! calls, and error surfacing through the full client.

use std::time::Duration;

use mockito::{Matcher, Server};
use secretsmith::api::types::kms::{CreateKmsKeyOptions, EncryptionAlgorithm, KeyUsage};
use secretsmith::api::types::secrets::GetSecretOptions;
use secretsmith::{Client, ClientConfig, Error, RetryPolicy};

const TOKEN_BODY: &str = r#"{
    "accessToken": "issued-token",
    "expiresIn": 7200,
    "accessTokenMaxTTL": 86400,
    "tokenType": "Bearer"
}"#;

fn client(base_url: &str) -> Client {
    let retry = RetryPolicy {
        max_attempts: 4,
        base_delay: Duration::from_millis(2),
        max_delay: Duration::from_millis(10),
    };
    Client::new(ClientConfig::new(base_url).retry(retry)).unwrap()
}

#[tokio::test]
async fn test_login_then_authenticated_kms_flow() {
    let mut server = Server::new_async().await;

    let login = server
        .mock("POST", "/api/v1/auth/universal-auth/login")
        .match_body(Matcher::Json(serde_json::json!({
            "clientId": "cid",
            "clientSecret": "csecret"
        })))
        .with_status(200)
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    let create_key = server
        .mock("POST", "/api/v1/kms/keys")
        .match_header("Authorization", "Bearer issued-token")
        .with_status(200)
        .with_body(
            r#"{"key": {
                "id": "key-1",
                "description": "",
                "isDisabled": false,
                "orgId": "org-1",
                "name": "app-key",
                "projectId": "proj-1",
                "keyUsage": "encrypt-decrypt",
                "version": 1,
                "encryptionAlgorithm": "aes-256-gcm"
            }}"#,
        )
        .create_async()
        .await;

    let encrypt = server
        .mock("POST", "/api/v1/kms/keys/key-1/encrypt")
        .match_header("Authorization", "Bearer issued-token")
        .with_status(200)
        .with_body(r#"{"ciphertext": "b3BhcXVl"}"#)
        .create_async()
        .await;

    let client = client(&server.url());
    client
        .auth()
        .universal_auth_login("cid", "csecret")
        .await
        .unwrap();

    let key = client
        .kms()
        .keys()
        .create(&CreateKmsKeyOptions {
            project_id: "proj-1".to_string(),
            name: "app-key".to_string(),
            description: None,
            key_usage: KeyUsage::Encryption,
            encryption_algorithm: EncryptionAlgorithm::Aes256Gcm,
        })
        .await
        .unwrap();
    assert_eq!(key.id, "key-1");

    let ciphertext = client
        .kms()
        .encryption()
        .encrypt(&secretsmith::api::types::kms::KmsEncryptDataOptions {
            key_id: key.id.clone(),
            plaintext: "dGVzdCBkYXRh".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(ciphertext, "b3BhcXVl");

    login.assert_async().await;
    create_key.assert_async().await;
    encrypt.assert_async().await;
}

#[tokio::test]
async fn test_manual_token_reaches_secrets_facade() {
    let mut server = Server::new_async().await;

    let get_secret = server
        .mock("GET", "/api/v3/secrets/raw/DB_URL")
        .match_header("Authorization", "Bearer out-of-band")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("workspaceId".into(), "proj-1".into()),
            Matcher::UrlEncoded("environment".into(), "dev".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"secret": {
                "id": "sec-1",
                "workspace": "proj-1",
                "environment": "dev",
                "version": 1,
                "type": "shared",
                "secretKey": "DB_URL",
                "secretValue": "postgres://localhost",
                "secretComment": ""
            }}"#,
        )
        .create_async()
        .await;

    let client = client(&server.url());
    client.set_access_token("out-of-band").unwrap();

    let secret = client
        .secrets()
        .get(&GetSecretOptions::new("DB_URL", "proj-1", "dev"))
        .await
        .unwrap();

    get_secret.assert_async().await;
    assert_eq!(secret.secret_value, "postgres://localhost");
}

#[tokio::test]
async fn test_server_errors_retry_then_surface_through_facade() {
    let mut server = Server::new_async().await;

    let flaky = server
        .mock("GET", "/api/v1/kms/keys/key-1/public-key")
        .with_status(502)
        .with_body(r#"{"message": "bad gateway"}"#)
        .expect(4)
        .create_async()
        .await;

    let error = client(&server.url())
        .kms()
        .signing()
        .get_public_key("key-1")
        .await
        .unwrap_err();

    flaky.assert_async().await;
    assert_eq!(error.status_code(), Some(502));
    assert_eq!(error.message(), "bad gateway");
    assert!(error.to_string().contains("[StatusCode=502]"));
}

#[tokio::test]
async fn test_validation_errors_keep_structured_body() {
    let mut server = Server::new_async().await;

    let invalid = server
        .mock("POST", "/api/v1/kms/keys")
        .with_status(422)
        .with_body(r#"{"message": "Validation failed", "issues": [{"path": "name"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let error = client(&server.url())
        .kms()
        .keys()
        .create(&CreateKmsKeyOptions {
            project_id: "proj-1".to_string(),
            name: "".to_string(),
            description: None,
            key_usage: KeyUsage::Encryption,
            encryption_algorithm: EncryptionAlgorithm::Aes256Gcm,
        })
        .await
        .unwrap_err();

    invalid.assert_async().await;
    assert_eq!(error.status_code(), Some(422));
    let body: serde_json::Value = serde_json::from_str(error.message()).unwrap();
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["issues"][0]["path"], "name");
}

#[tokio::test]
async fn test_unreachable_server_is_client_error() {
    let client = client("http://127.0.0.1:9");

    let error = client
        .kms()
        .signing()
        .get_public_key("key-1")
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Client { .. }));
    assert_eq!(error.status_code(), None);
}

#[test]
fn test_invalid_base_url_fails_at_construction() {
    let error = Client::new(ClientConfig::new("::not-a-url::")).unwrap_err();
    assert!(matches!(error, Error::Client { .. }));
}
