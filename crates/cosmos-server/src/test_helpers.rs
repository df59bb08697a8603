use std::sync::Arc;

use axum::Router;
use cosmos_llm::MockGenerator;
use cosmos_prompts::InstructionLoader;
use tempfile::TempDir;
use tokio::net::TcpListener;

use crate::routes::{InnerAppState, INDEX_FILE};

/// A router wired to a [`MockGenerator`] and a temp directory holding one
/// template per mode (`"<label> instructions"`), a default template and a
/// small static site.
pub struct TestApp {
    pub router: Router,
    pub generator: Arc<MockGenerator>,
    pub loader: InstructionLoader,
    _dir: TempDir,
}

/// Build a test app whose generator always replies with `reply`.
pub fn test_app(reply: &str) -> TestApp {
    build(MockGenerator::success(reply))
}

/// Build a test app whose generator always fails with `message`.
pub fn test_app_failing(message: &str) -> TestApp {
    build(MockGenerator::failure(message))
}

fn build(generator: MockGenerator) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let instructions = dir.path().join("instructions");
    let static_dir = dir.path().join("static");
    std::fs::create_dir_all(&instructions).unwrap();
    std::fs::create_dir_all(&static_dir).unwrap();

    for (file, text) in [
        ("instructions_Earth.txt", "earth instructions"),
        ("instructions_cosmic.txt", "cosmic instructions"),
        ("instructions_beginner.txt", "beginner instructions"),
        ("instructions_advanced.txt", "advanced instructions"),
    ] {
        std::fs::write(instructions.join(file), text).unwrap();
    }
    let default_path = dir.path().join("instructions_default.txt");
    std::fs::write(&default_path, "default instructions").unwrap();

    std::fs::write(
        static_dir.join(INDEX_FILE),
        "<!doctype html><title>Cosmos Canvas</title>",
    )
    .unwrap();
    std::fs::write(static_dir.join("app.js"), "console.log('cosmos');").unwrap();

    let generator = Arc::new(generator);
    let loader = InstructionLoader::new(&instructions).with_default_path(default_path);
    let state = Arc::new(InnerAppState {
        generator: generator.clone(),
        loader: loader.clone(),
    });
    let router = crate::routes::build_router(state, &static_dir);

    TestApp {
        router,
        generator,
        loader,
        _dir: dir,
    }
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    pub generator: Arc<MockGenerator>,
    _app_dir: TempDir,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port. Returns the TestServer
/// with the `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server(generator: MockGenerator) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let app = build(generator);
    let router = app.router;
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    TestServer {
        base_url,
        generator: app.generator,
        _app_dir: app._dir,
        _handle: handle,
    }
}
