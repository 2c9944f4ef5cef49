use serde_json::{json, Value};

use crate::helpers::{get_random_email, TestApp};

#[tokio::test]
async fn should_return_201_and_a_usable_access_token() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let refresh_token = app.seed_session(42, &email).await;

    let response = app
        .http_client
        .post(&format!("{}/api/token", &app.address))
        .json(&json!({ "refreshToken": refresh_token }))
        .send()
        .await
        .expect("Failed to execute create access token request.");

    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.expect("response should be JSON");
    let access_token = body["accessToken"]
        .as_str()
        .expect("accessToken should be a string");
    assert_eq!(access_token.split('.').count(), 3);

    // The minted token must be usable against a protected route.
    let me = app
        .http_client
        .get(&format!("{}/api/me", &app.address))
        .header("Authorization", format!("Bearer {}", access_token))
        .send()
        .await
        .expect("Failed to execute me request.");

    assert_eq!(me.status().as_u16(), 200);
    let me_body: Value = me.json().await.expect("response should be JSON");
    assert_eq!(me_body["principal"], email.as_str());
}

#[tokio::test]
async fn should_return_401_if_unknown_refresh_token() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(&format!("{}/api/token", &app.address))
        .json(&json!({ "refreshToken": "does-not-exist" }))
        .send()
        .await
        .expect("Failed to execute create access token request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_owner_was_deleted() {
    let app = TestApp::new().await;
    let refresh_token = app.seed_orphan_refresh_token(7).await;

    let response = app
        .http_client
        .post(&format!("{}/api/token", &app.address))
        .json(&json!({ "refreshToken": refresh_token }))
        .send()
        .await
        .expect("Failed to execute create access token request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_422_if_malformed_input() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(&format!("{}/api/token", &app.address))
        .json(&json!({ "unexpected": "field" }))
        .send()
        .await
        .expect("Failed to execute create access token request.");

    assert_eq!(response.status().as_u16(), 422);
}
