use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

/// Serve the real router on a random local port.
async fn start_server(database_url: &str) -> anyhow::Result<TestApp> {
    let cfg = AppConfig {
        database: DatabaseConfig { url: database_url.to_string(), ..DatabaseConfig::default() },
        ..AppConfig::default()
    };
    let app: Router = server::startup::build_app(&cfg).await?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn widget_scenario(app: &TestApp) -> anyhow::Result<()> {
    let c = client();

    // Create
    let res = c.post(format!("{}/api/products", app.base_url))
        .json(&json!({"name": "Widget", "price": 9.99}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    assert_eq!(created, json!({"id": 1, "name": "Widget", "price": 9.99}));

    // Get by id returns the same object
    let res = c.get(format!("{}/api/products/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    // Update price
    let res = c.put(format!("{}/api/products/1", app.base_url))
        .json(&json!({"price": 12.50}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"id": 1, "name": "Widget", "price": 12.5}));

    // Unknown id fails
    let res = c.get(format!("{}/api/products/999", app.base_url)).send().await?;
    assert!(res.status().is_server_error());
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Product not found");

    // List
    let res = c.get(format!("{}/api/products", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let all = res.json::<Vec<Value>>().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["price"], 12.5);
    Ok(())
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server("memory://").await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_widget_scenario_in_memory() -> anyhow::Result<()> {
    let app = start_server("memory://").await?;
    widget_scenario(&app).await
}

#[tokio::test]
async fn e2e_widget_scenario_sqlite() -> anyhow::Result<()> {
    let app = start_server("sqlite::memory:").await?;
    widget_scenario(&app).await
}

#[tokio::test]
async fn e2e_list_grows_with_creates() -> anyhow::Result<()> {
    let app = start_server("memory://").await?;
    let c = client();
    for k in 1..=4 {
        c.post(format!("{}/api/products", app.base_url))
            .json(&json!({"name": format!("item-{k}"), "price": k as f64 * 1.5}))
            .send().await?
            .error_for_status()?;
        let all = c.get(format!("{}/api/products", app.base_url)).send().await?.json::<Vec<Value>>().await?;
        assert_eq!(all.len(), k);
    }
    Ok(())
}

#[tokio::test]
async fn e2e_update_missing_product_fails() -> anyhow::Result<()> {
    let app = start_server("memory://").await?;
    let res = client().put(format!("{}/api/products/42", app.base_url))
        .json(&json!({"name": "Ghost", "price": 1.0}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
