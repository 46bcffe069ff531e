// Fixture REST service shared by the integration tests.
use axum::{
    Json, Router,
    http::{HeaderMap, Method, StatusCode, header},
    response::IntoResponse,
    routing::{any, get},
};
use serde_json::{Value, json};
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

// Base URL of the fixture once it is bound.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// Guards the one-time bootstrap.
static SERVER_READY: OnceLock<()> = OnceLock::new();

fn app() -> Router {
    Router::new()
        .route("/colors", get(colors))
        .route("/colors/list", get(color_list))
        .route("/missing", get(missing))
        .route("/broken", get(broken))
        .route("/created", any(created))
        .route("/echo", any(echo))
}

async fn colors() -> Json<Value> {
    Json(json!({"id": 1, "name": "red"}))
}

async fn color_list() -> Json<Value> {
    Json(json!([{"id": 1, "name": "red"}, {"id": 2, "name": "green"}]))
}

async fn missing() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"message": "not found"})))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn created() -> impl IntoResponse {
    (StatusCode::CREATED, Json(json!({"id": 9})))
}

// Reflects what arrived so tests can assert on method, headers and payload.
async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Value> {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    Json(json!({
        "method": method.as_str(),
        "content_type": header_text(header::CONTENT_TYPE),
        "accept": header_text(header::ACCEPT),
        "x_client": header_text(header::HeaderName::from_static("x-client")),
        "body": body,
    }))
}

// Ensure the fixture is running and return its base URL.
pub fn ensure_server() -> &'static str {
    // Every test calls this; only the first call boots the fixture.
    SERVER_READY.get_or_init(|| {
        // Slot the fixture thread fills with its URL once bound.
        let published_url = Arc::new(OnceLock::<String>::new());
        // Second handle moved into the fixture thread.
        let published_url_thread = Arc::clone(&published_url);
        // Own OS thread so the fixture outlives each `#[tokio::test]` runtime.
        std::thread::spawn(move || {
            // The fixture drives itself on a private multi-thread runtime.
            let runtime = tokio::runtime::Runtime::new().expect("fixture runtime");
            runtime.block_on(async move {
                // Port 0 lets the OS hand out a free port.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral fixture port");
                // Read back the port that was actually assigned.
                let addr = listener.local_addr().expect("get local addr");
                // Hand the URL to the waiting test thread.
                let _ = published_url_thread.set(format!("http://{}", addr));
                // Serve fixture routes until the test binary exits.
                axum::serve(listener, app()).await.expect("fixture server failed");
            });
        });
        // Block the first caller until the fixture answers TCP connects.
        wait_for_server_url_and_readiness(published_url);
    });

    // Same URL for every test in this binary.
    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Wait for the fixture to publish its URL, then for its socket to accept.
fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    // Spin until the fixture thread has bound and published.
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        // Short nap between checks.
        std::thread::sleep(Duration::from_millis(10));
    };

    // Record the URL for later `ensure_server` calls.
    let _ = SERVER_URL.set(base_url.clone());

    // Raw TCP connects need host:port without the scheme.
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Up to two seconds of connect attempts.
    for _ in 0..100 {
        // A successful connect means axum is accepting.
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    // Never came up; fail the test loudly.
    panic!("fixture server did not become ready in time");
}

// Address of a port nothing listens on.
pub fn closed_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind scratch port");
    let addr = listener.local_addr().expect("get scratch addr");
    drop(listener);
    format!("http://{}", addr)
}
