mod common;

use anyhow::Result;
use axum::http::{header, StatusCode};
use serde_json::{json, Value};

#[tokio::test]
async fn create_returns_201_with_location_of_new_id() -> Result<()> {
    let app = common::open_app().await?;

    let res = app.server.post("/tournaments").json(&json!({ "name": "Euro 2020" })).await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/tournaments/1");
    assert!(res.as_bytes().is_empty());

    let res = app.server.post("/tournaments").json(&json!({ "name": "Copa America" })).await;
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/tournaments/2");
    Ok(())
}

#[tokio::test]
async fn create_without_name_is_400_and_writes_nothing() -> Result<()> {
    let app = common::open_app().await?;

    let res = app.server.post("/tournaments").json(&json!({ "no_name": "Euro 2020" })).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>(), json!({ "error": 400, "message": "Bad Request" }));
    assert_eq!(common::count(&app.pool, "tournaments").await, 0);
    Ok(())
}

#[tokio::test]
async fn create_with_non_json_body_is_400() -> Result<()> {
    let app = common::open_app().await?;

    let res = app.server.post("/tournaments").text("name=Euro 2020").await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(common::count(&app.pool, "tournaments").await, 0);
    Ok(())
}

#[tokio::test]
async fn duplicate_name_is_500_without_internal_detail() -> Result<()> {
    let app = common::open_app().await?;

    app.server.post("/tournaments").json(&json!({ "name": "Euro 2020" })).await;
    let res = app.server.post("/tournaments").json(&json!({ "name": "Euro 2020" })).await;
    assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json::<Value>(), json!({ "error": 500, "message": "internal server error" }));
    assert_eq!(common::count(&app.pool, "tournaments").await, 1);
    Ok(())
}

#[tokio::test]
async fn get_existing_tournament() -> Result<()> {
    let app = common::open_app().await?;
    app.server.post("/tournaments").json(&json!({ "name": "New Tournament" })).await;

    let res = app.server.get("/tournaments/1").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(res.json::<Value>(), json!({ "id": 1, "name": "New Tournament" }));
    Ok(())
}

#[tokio::test]
async fn get_missing_tournament_is_404() -> Result<()> {
    let app = common::open_app().await?;

    let res = app.server.get("/tournaments/5").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>()["error"], 404);
    Ok(())
}

#[tokio::test]
async fn list_returns_exactly_the_live_tournaments() -> Result<()> {
    let app = common::open_app().await?;

    let res = app.server.get("/tournaments").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(res.json::<Value>(), json!([]));

    for name in ["Euro 2020", "Copa America", "World Cup"] {
        app.server.post("/tournaments").json(&json!({ "name": name })).await;
    }
    app.server.delete("/tournaments/2").await;

    let res = app.server.get("/tournaments").await;
    assert_eq!(
        res.json::<Value>(),
        json!([
            { "id": 1, "name": "Euro 2020" },
            { "id": 3, "name": "World Cup" }
        ])
    );
    Ok(())
}

#[tokio::test]
async fn delete_existing_is_204_and_row_is_gone() -> Result<()> {
    let app = common::open_app().await?;
    app.server.post("/tournaments").json(&json!({ "name": "Euro 2020" })).await;

    let res = app.server.delete("/tournaments/1").await;
    assert_eq!(res.status_code(), StatusCode::NO_CONTENT);
    assert!(res.as_bytes().is_empty());

    let res = app.server.get("/tournaments/1").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_missing_is_422() -> Result<()> {
    let app = common::open_app().await?;

    let res = app.server.delete("/tournaments/1").await;
    assert_eq!(res.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.json::<Value>()["message"], "unprocessable entity");
    Ok(())
}

#[tokio::test]
async fn deleting_twice_is_422_the_second_time() -> Result<()> {
    let app = common::open_app().await?;
    app.server.post("/tournaments").json(&json!({ "name": "Euro 2020" })).await;

    assert_eq!(app.server.delete("/tournaments/1").await.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(
        app.server.delete("/tournaments/1").await.status_code(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    Ok(())
}
