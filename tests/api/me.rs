use serde_json::{json, Value};

use crate::helpers::{get_random_email, TestApp};

async fn exchange_for_access_token(app: &TestApp, refresh_token: &str) -> String {
    let response = app
        .http_client
        .post(&format!("{}/api/token", &app.address))
        .json(&json!({ "refreshToken": refresh_token }))
        .send()
        .await
        .expect("Failed to execute create access token request.");
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.expect("response should be JSON");
    body["accessToken"]
        .as_str()
        .expect("accessToken should be a string")
        .to_owned()
}

#[tokio::test]
async fn should_return_401_if_no_authorization_header() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(&format!("{}/api/me", &app.address))
        .send()
        .await
        .expect("Failed to execute me request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_not_a_bearer_token() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(&format!("{}/api/me", &app.address))
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await
        .expect("Failed to execute me request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_invalid_token() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(&format!("{}/api/me", &app.address))
        .header("Authorization", "Bearer invalid.token.here")
        .send()
        .await
        .expect("Failed to execute me request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_200_with_identity_for_valid_token() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let refresh_token = app.seed_session(1, &email).await;
    let access_token = exchange_for_access_token(&app, &refresh_token).await;

    let response = app
        .http_client
        .get(&format!("{}/api/me", &app.address))
        .header("Authorization", format!("Bearer {}", access_token))
        .send()
        .await
        .expect("Failed to execute me request.");

    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("response should be JSON");
    assert_eq!(body["principal"], email.as_str());
    assert_eq!(body["authorities"], json!(["ROLE_USER"]));
}
