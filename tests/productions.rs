mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{TestApp, hamlet};

#[tokio::test]
async fn created_production_reads_back_unchanged() -> Result<()> {
    let app = TestApp::new().await?;

    let created = app.post("/productions", hamlet()).await?;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["title"], "Hamlet");
    let id = created.body["id"].as_i64().expect("generated id");
    assert!(created.body["created_at"].is_string());

    let fetched = app.get(&format!("/productions/{id}")).await?;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    let body = &fetched.body;
    assert_eq!(body["genre"], "Drama");
    assert_eq!(body["budget"].as_f64(), Some(10000.0));
    assert_eq!(body["image"], "poster.jpg");
    assert_eq!(body["director"], "Bill S. Peare");
    assert_eq!(body["description"], "...");
    assert_eq!(body["ongoing"], true);
    assert_eq!(body["cast_members"], json!([]));
    assert_eq!(body["actors"], json!([]));
    Ok(())
}

#[tokio::test]
async fn duplicate_title_is_unprocessable() -> Result<()> {
    let app = TestApp::new().await?;

    assert_eq!(app.post("/productions", hamlet()).await?.status, StatusCode::CREATED);

    let again = app.post("/productions", hamlet()).await?;
    assert_eq!(again.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(again.body["error"].is_string());

    let list = app.get("/productions").await?;
    assert_eq!(list.body.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn non_jpg_image_never_reaches_the_store() -> Result<()> {
    let app = TestApp::new().await?;

    let mut payload = hamlet();
    payload["image"] = json!("poster.png");
    let res = app.post("/productions", payload).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.body["error"], "Image must be a .jpg file");
    assert_eq!(app.get("/productions").await?.body, json!([]));

    let id = app.post("/productions", hamlet()).await?.body["id"].clone();
    let res = app.patch(&format!("/productions/{id}"), json!({ "image": "poster.gif" })).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);

    let fetched = app.get(&format!("/productions/{id}")).await?;
    assert_eq!(fetched.body["image"], "poster.jpg");
    assert!(fetched.body["updated_at"].is_null());
    Ok(())
}

#[tokio::test]
async fn missing_required_field_is_unprocessable() -> Result<()> {
    let app = TestApp::new().await?;

    let res = app.post("/productions", json!({ "genre": "Drama" })).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);

    let res = app.post("/productions", json!({ "title": "  ", "genre": "Drama" })).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.body["error"], "title is required");
    Ok(())
}

#[tokio::test]
async fn unknown_production_is_not_found() -> Result<()> {
    let app = TestApp::new().await?;

    let res = app.get("/productions/999").await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({ "error": "The Production you were looking for was not found" }));

    assert_eq!(app.get("/productions/abc").await?.status, StatusCode::NOT_FOUND);
    assert_eq!(app.patch("/productions/999", json!({})).await?.status, StatusCode::NOT_FOUND);
    assert_eq!(app.delete("/productions/999").await?.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn patch_overwrites_present_fields_only() -> Result<()> {
    let app = TestApp::new().await?;
    let id = app.post("/productions", hamlet()).await?.body["id"].clone();

    let res = app
        .patch(
            &format!("/productions/{id}"),
            json!({ "budget": "15000", "ongoing": "false", "director": null }),
        )
        .await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["budget"].as_f64(), Some(15000.0));
    assert_eq!(res.body["ongoing"], false);
    assert!(res.body["director"].is_null());
    assert_eq!(res.body["title"], "Hamlet");
    assert!(res.body["updated_at"].is_string());

    let res = app.patch(&format!("/productions/{id}"), json!({ "genre": null })).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn deleted_production_is_gone() -> Result<()> {
    let app = TestApp::new().await?;
    let id = app.post("/productions", hamlet()).await?.body["id"].clone();

    let res = app.delete(&format!("/productions/{id}")).await?;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.body.is_null());

    assert_eq!(app.get(&format!("/productions/{id}")).await?.status, StatusCode::NOT_FOUND);
    assert_eq!(app.delete(&format!("/productions/{id}")).await?.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn list_is_ordered_by_id() -> Result<()> {
    let app = TestApp::new().await?;
    for title in ["Cats", "Carmen", "Hamilton"] {
        let res = app.post("/productions", json!({ "title": title, "genre": "Musical" })).await?;
        assert_eq!(res.status, StatusCode::CREATED);
        assert_eq!(res.body["ongoing"], true);
    }

    let list = app.get("/productions").await?;
    let titles: Vec<&str> =
        list.body.as_array().unwrap().iter().filter_map(|p| p["title"].as_str()).collect();
    assert_eq!(titles, ["Cats", "Carmen", "Hamilton"]);
    Ok(())
}

#[tokio::test]
async fn unknown_routes_are_not_found() -> Result<()> {
    let app = TestApp::new().await?;
    let res = app.get("/theatres").await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(
        res.body["error"],
        "Not Found: Sorry the resource you are looking for does not exist"
    );
    Ok(())
}

#[tokio::test]
async fn non_finite_budgets_are_unprocessable() -> Result<()> {
    let app = TestApp::new().await?;

    for budget in ["NaN", "inf"] {
        let res = app
            .post("/productions", json!({ "title": "X", "genre": "Y", "budget": budget }))
            .await?;
        assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY, "budget {budget}");
    }
    assert_eq!(app.get("/productions").await?.body, json!([]));
    Ok(())
}

#[tokio::test]
async fn unknown_production_fields_are_unprocessable() -> Result<()> {
    let app = TestApp::new().await?;

    let mut payload = hamlet();
    payload["producer"] = json!("Royal Shakespeare Company");
    let res = app.post("/productions", payload).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.get("/productions").await?.body, json!([]));

    let id = app.post("/productions", hamlet()).await?.body["id"].clone();
    let res = app.patch(&format!("/productions/{id}"), json!({ "producer": "RSC" })).await?;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}
