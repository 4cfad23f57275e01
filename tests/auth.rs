mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn signup_then_authorized_returns_the_same_user() -> Result<()> {
    let app = TestApp::new().await?;

    let signup = app.post("/signup", json!({ "name": "Ana", "email": "ana@example.com" })).await?;
    assert_eq!(signup.status, StatusCode::CREATED);
    assert_eq!(signup.body["name"], "Ana");
    let cookie = signup.cookie("session").expect("session cookie");

    let me = app.send(Method::GET, "/authorized", None, Some(&cookie)).await?;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body, signup.body);

    let out = app.send(Method::DELETE, "/logout", None, Some(&cookie)).await?;
    assert_eq!(out.status, StatusCode::NO_CONTENT);

    let me = app.send(Method::GET, "/authorized", None, Some(&cookie)).await?;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    assert_eq!(me.body["error"], "User is unauthorized");
    Ok(())
}

#[tokio::test]
async fn users_route_is_an_alias_for_signup() -> Result<()> {
    let app = TestApp::new().await?;

    let res = app.post("/users", json!({ "name": "Ben" })).await?;
    assert_eq!(res.status, StatusCode::CREATED);
    assert!(res.cookie("session").is_some());
    Ok(())
}

#[tokio::test]
async fn invalid_signups_are_unprocessable() -> Result<()> {
    let app = TestApp::new().await?;

    let res = app.post("/signup", json!({ "email": "nameless@example.com" })).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.cookie("session").is_none());

    let res = app.post("/signup", json!({ "name": "Ana", "password": "hunter2" })).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);

    let res = app.post("/signup", json!({ "name": " " })).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.body["error"], "name is required");
    Ok(())
}

#[tokio::test]
async fn login_opens_a_session_for_an_existing_user() -> Result<()> {
    let app = TestApp::new().await?;
    let signup = app.post("/signup", json!({ "name": "Ana" })).await?;

    let missing = app.post("/login", json!({ "name": "Zoe" })).await?;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "User not found");

    let login = app.post("/login", json!({ "name": "Ana" })).await?;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["id"], signup.body["id"]);
    let cookie = login.cookie("session").expect("session cookie");

    let me = app.send(Method::GET, "/authorized", None, Some(&cookie)).await?;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["name"], "Ana");
    Ok(())
}

#[tokio::test]
async fn anonymous_or_forged_sessions_are_unauthorized() -> Result<()> {
    let app = TestApp::new().await?;

    assert_eq!(app.get("/authorized").await?.status, StatusCode::UNAUTHORIZED);

    let forged = app.send(Method::GET, "/authorized", None, Some("session=1")).await?;
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);

    // logging out without a session still succeeds
    assert_eq!(app.delete("/logout").await?.status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn dark_mode_echoes_and_sets_cookies() -> Result<()> {
    let app = TestApp::new().await?;

    let res = app.send(Method::GET, "/dark_mode", None, Some("theme=light")).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "cookies": [{ "theme": "light" }] }));
    assert_eq!(res.cookie("mode").as_deref(), Some("mode=dark"));
    assert!(res.cookie("password").is_some());
    Ok(())
}

#[tokio::test]
async fn logging_in_again_retires_the_previous_session() -> Result<()> {
    let app = TestApp::new().await?;
    let first = app.post("/signup", json!({ "name": "Ana" })).await?;
    let old = first.cookie("session").expect("session cookie");

    let again = app.send(Method::POST, "/login", Some(json!({ "name": "Ana" })), Some(&old)).await?;
    assert_eq!(again.status, StatusCode::OK);
    let new = again.cookie("session").expect("session cookie");
    assert_ne!(new, old);

    let stale = app.send(Method::GET, "/authorized", None, Some(&old)).await?;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);
    let fresh = app.send(Method::GET, "/authorized", None, Some(&new)).await?;
    assert_eq!(fresh.status, StatusCode::OK);
    Ok(())
}
