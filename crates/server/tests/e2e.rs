use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::{build_app, ServerState};

struct TestApp {
    base_url: String,
    state: ServerState,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState::in_memory();
    let app = build_app(state.clone());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, state })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().build().expect("reqwest client")
}

fn todo_body() -> Value {
    json!({"title": "Test todo", "description": "Test description", "completed": false})
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_todo_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Create
    let res = c.post(format!("{}/todos/", app.base_url)).json(&todo_body()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    assert_eq!(created["title"], "Test todo");
    assert_eq!(created["description"], "Test description");
    assert_eq!(created["completed"], false);
    let id = created["id"].as_str().expect("id is a string").to_string();

    // List
    let res = c.get(format!("{}/todos/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<Value>().await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    // Get
    let res = c.get(format!("{}/todos/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    // Update
    let res = c
        .put(format!("{}/todos/{}", app.base_url, id))
        .json(&json!({"title": "Updated todo", "description": "Updated description", "completed": true}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["title"], "Updated todo");
    assert_eq!(updated["completed"], true);

    // Delete, then gone
    let res = c.delete(format!("{}/todos/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["message"], "Todo deleted successfully");
    let res = c.get(format!("{}/todos/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_todo_errors() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/todos/123e4567-e89b-12d3-a456-426614174000", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.post(format!("{}/todos/", app.base_url)).json(&json!({"wrong_field": "Test todo"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn e2e_recipe_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let pasta = json!({"name": "Pasta", "ingredients": ["pasta", "water"], "instructions": "boil"});

    let res = c.post(format!("{}/recipes", app.base_url)).json(&pasta).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let first = res.json::<Value>().await?;
    assert_eq!(first["id"], 1);
    assert_eq!(first["created_at"], first["updated_at"]);

    let res = c.post(format!("{}/recipes", app.base_url)).json(&json!({"name": "Salad", "ingredients": [], "instructions": "toss"})).send().await?;
    assert_eq!(res.json::<Value>().await?["id"], 2);

    let res = c.delete(format!("{}/recipes/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    assert!(res.bytes().await?.is_empty());

    let res = c.post(format!("{}/recipes", app.base_url)).json(&pasta).send().await?;
    assert_eq!(res.json::<Value>().await?["id"], 3);

    // Partial update leaves other fields alone
    let res = c.put(format!("{}/recipes/3", app.base_url)).json(&json!({"name": "Fresh Pasta"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let merged = res.json::<Value>().await?;
    assert_eq!(merged["name"], "Fresh Pasta");
    assert_eq!(merged["ingredients"], json!(["pasta", "water"]));

    // Search
    let res = c.get(format!("{}/recipes/search/pasta", app.base_url)).send().await?;
    let hits = res.json::<Value>().await?;
    assert_eq!(hits.as_array().map(Vec::len), Some(1));
    assert_eq!(hits[0]["id"], 3);

    let res = c.get(format!("{}/recipes/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["detail"], "Recipe with id 1 not found");
    Ok(())
}

#[tokio::test]
async fn e2e_reset_hook_isolates_state() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    c.post(format!("{}/todos/", app.base_url)).json(&todo_body()).send().await?;

    app.state.reset().await;

    let list = c.get(format!("{}/todos/", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(list, json!([]));
    Ok(())
}
