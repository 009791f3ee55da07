//! End-to-end tests for the layout, carousel, history and directory endpoints.

use atrium_api::{build_router, AppState};
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

fn server() -> TestServer {
    TestServer::new(build_router(AppState::new())).unwrap()
}

fn data(body: &Value) -> &Value {
    assert_eq!(body["success"], json!(true), "expected success envelope: {body}");
    &body["data"]
}

async fn create_layout(server: &TestServer, name: &str) -> Value {
    let res = server
        .post("/api/layouts")
        .json(&json!({
            "name": name,
            "routes": [
                {"name": "Home", "path": "/", "icon": "house"},
                {"name": "About", "path": "/about", "icon": ""},
            ]
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    let body: Value = res.json();
    data(&body).clone()
}

#[tokio::test]
async fn test_layout_route_lifecycle() {
    let server = server();
    let layout = create_layout(&server, "Main").await;
    let id = layout["id"].as_str().unwrap();
    let home_id = layout["routes"][0]["id"].as_str().unwrap();

    // Append a third route.
    let res = server
        .post(&format!("/api/layouts/{id}/routes"))
        .json(&json!({"name": "Contact", "path": "/contact", "icon": "envelope"}))
        .await;
    let body: Value = res.json();
    assert_eq!(data(&body)["routes"].as_array().unwrap().len(), 3);

    // Patch only the home route; siblings untouched.
    let res = server
        .put(&format!("/api/layouts/{id}/routes/{home_id}"))
        .json(&json!({"is_enabled": false}))
        .await;
    let body: Value = res.json();
    let routes = data(&body)["routes"].as_array().unwrap().clone();
    assert_eq!(routes[0]["is_enabled"], json!(false));
    assert_eq!(routes[0]["name"], "Home");
    assert_eq!(routes[1]["is_enabled"], json!(true));

    // Remove it; removal keeps order of the rest.
    let res = server
        .delete(&format!("/api/layouts/{id}/routes/{home_id}"))
        .await;
    let body: Value = res.json();
    let routes = data(&body)["routes"].as_array().unwrap().clone();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0]["name"], "About");
    assert_eq!(routes[1]["name"], "Contact");
}

#[tokio::test]
async fn test_layout_route_patch_requires_existing_route() {
    let server = server();
    let layout = create_layout(&server, "Main").await;
    let id = layout["id"].as_str().unwrap();

    let res = server
        .put(&format!("/api/layouts/{id}/routes/{}", Uuid::new_v4()))
        .json(&json!({"name": "Ghost"}))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_layout_selection_is_exclusive() {
    let server = server();
    let a = create_layout(&server, "A").await;
    let b = create_layout(&server, "B").await;
    let (a_id, b_id) = (a["id"].as_str().unwrap(), b["id"].as_str().unwrap());

    server.put(&format!("/api/layouts/{a_id}/set")).await.assert_status_ok();
    server.put(&format!("/api/layouts/{b_id}/set")).await.assert_status_ok();

    let res = server.get("/api/layouts").await;
    let body: Value = res.json();
    let current: Vec<&Value> = data(&body)
        .as_array()
        .unwrap()
        .iter()
        .filter(|l| l["is_current"] == json!(true))
        .collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0]["id"], json!(b_id));

    let res = server.get("/api/layouts/current").await;
    let body: Value = res.json();
    assert_eq!(data(&body)["id"], json!(b_id));

    // Deleting the current layout clears the selection.
    server.delete(&format!("/api/layouts/{b_id}")).await.assert_status_ok();
    let res = server.get("/api/layouts/current").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_carousel_image_lifecycle() {
    let server = server();
    let res = server
        .post("/api/carousels")
        .json(&json!({
            "name": "Front page",
            "images": [{"url": "/media/1.jpg"}, {"url": "/media/2.jpg", "is_visible": false}]
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    let body: Value = res.json();
    let carousel = data(&body).clone();
    let id = carousel["id"].as_str().unwrap();
    assert_eq!(carousel["images"][0]["is_visible"], json!(true));

    let res = server
        .post(&format!("/api/carousels/{id}/images"))
        .json(&json!({"url": "/media/3.jpg"}))
        .await;
    let body: Value = res.json();
    let images = data(&body)["images"].as_array().unwrap().clone();
    assert_eq!(images.len(), 3);
    assert_eq!(images[2]["url"], "/media/3.jpg");

    let second_id = images[1]["id"].as_str().unwrap();
    let res = server
        .delete(&format!("/api/carousels/{id}/images/{second_id}"))
        .await;
    let body: Value = res.json();
    let urls: Vec<&str> = data(&body)["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["url"].as_str().unwrap())
        .collect();
    assert_eq!(urls, vec!["/media/1.jpg", "/media/3.jpg"]);

    server.put(&format!("/api/carousels/{id}/set")).await.assert_status_ok();
    let res = server.get("/api/carousels/current").await;
    let body: Value = res.json();
    assert_eq!(data(&body)["id"], json!(id));
}

#[tokio::test]
async fn test_history_entries_list_in_timeline_order() {
    let server = server();
    for (title, index) in [("Modern era", 2u32), ("Founding", 0), ("Railway years", 1)] {
        let res = server
            .post("/api/history")
            .json(&json!({
                "title": title,
                "years_from": 1900,
                "years_upto": 1950,
                "index": index
            }))
            .await;
        assert_eq!(res.status_code(), StatusCode::CREATED);
    }

    let res = server.get("/api/history").await;
    let body: Value = res.json();
    let titles: Vec<&str> = data(&body)
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Founding", "Railway years", "Modern era"]);
}

#[tokio::test]
async fn test_directory_entry_crud() {
    let server = server();
    let res = server
        .post("/api/directories")
        .json(&json!({
            "name": "Corner Bakery",
            "address": "12 Main St",
            "phone_number": "555-0114",
            "hours": "Tue-Sun 7:00-15:00"
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    let body: Value = res.json();
    let id = data(&body)["id"].as_str().unwrap().to_string();

    let res = server.get(&format!("/api/directories/{id}")).await;
    let body: Value = res.json();
    assert_eq!(data(&body)["name"], "Corner Bakery");
    assert_eq!(data(&body)["image"], Value::Null);

    let res = server
        .put(&format!("/api/directories/{id}"))
        .json(&json!({"name": "Corner Bakery", "address": "14 Main St"}))
        .await;
    let body: Value = res.json();
    assert_eq!(data(&body)["address"], "14 Main St");

    server.delete(&format!("/api/directories/{id}")).await.assert_status_ok();
    let res = server.get(&format!("/api/directories/{id}")).await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    let body: Value = res.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_unknown_content_ids_yield_404_envelopes() {
    let server = server();
    let missing = Uuid::new_v4();
    for path in [
        format!("/api/layouts/{missing}"),
        format!("/api/carousels/{missing}"),
        format!("/api/history/{missing}"),
        format!("/api/directories/{missing}"),
    ] {
        let res = server.get(&path).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND, "{path}");
        let body: Value = res.json();
        assert_eq!(body["success"], json!(false));
    }
}
