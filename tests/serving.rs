//! Integration tests for the static file server and the full takeover path.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use devserve::config::ServerConfig;
use devserve::http::DevServer;
use devserve::lifecycle::Shutdown;
use devserve::takeover::{request_predecessor_stop, TakeoverListener};

/// Spawn a server over the given webroot on an ephemeral port.
async fn spawn_server(config: ServerConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = DevServer::new(config);
    let run_shutdown = shutdown.clone();
    tokio::spawn(async move {
        let _ = server.run(listener, run_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_serves_webroot_files() {
    let webroot = tempfile::tempdir().unwrap();
    std::fs::write(webroot.path().join("hello.txt"), "hello from devserve").unwrap();
    std::fs::write(webroot.path().join("index.html"), "<html>index</html>").unwrap();

    let mut config = ServerConfig::default();
    config.webroot = webroot.path().to_path_buf();

    let (addr, shutdown) = spawn_server(config).await;
    let client = client();

    let body = client
        .get(format!("http://{addr}/hello.txt"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "hello from devserve");

    // Directory requests fall back to index.html
    let res = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "<html>index</html>");

    // Missing files are a plain 404
    let res = client
        .get(format!("http://{addr}/missing.txt"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_context_path_mounting() {
    let webroot = tempfile::tempdir().unwrap();
    std::fs::write(webroot.path().join("app.js"), "console.log(1);").unwrap();

    let mut config = ServerConfig::default();
    config.webroot = webroot.path().to_path_buf();
    config.context = "app".into();

    let (addr, shutdown) = spawn_server(config).await;
    let client = client();

    let res = client
        .get(format!("http://{addr}/app/app.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "console.log(1);");

    // Outside the context path nothing is mounted
    let res = client.get(format!("http://{addr}/app.js")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_trigger_stops_server() {
    let webroot = tempfile::tempdir().unwrap();

    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let mut config = ServerConfig::default();
    config.webroot = webroot.path().to_path_buf();

    let shutdown = Shutdown::new();
    let server = DevServer::new(config);
    let run_shutdown = shutdown.clone();
    let server_task = tokio::spawn(async move { server.run(listener, run_shutdown).await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), server_task)
        .await
        .expect("server should stop when triggered")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_takeover_between_instances() {
    let webroot = tempfile::tempdir().unwrap();
    std::fs::write(webroot.path().join("index.html"), "instance a").unwrap();

    // Instance A: HTTP listener plus takeover listener, wired the way the
    // binary wires them.
    let http_listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let http_addr = http_listener.local_addr().unwrap();

    let takeover_listener = TakeoverListener::bind(0).await.unwrap();
    let shutdown_port = takeover_listener.local_port().unwrap();

    let shutdown = Shutdown::new();
    let coordinator = shutdown.clone();
    let takeover_handle = takeover_listener.spawn(move || async move {
        coordinator.trigger();
        coordinator.stopped().await;
    });

    let mut config = ServerConfig::default();
    config.webroot = webroot.path().to_path_buf();
    let server = DevServer::new(config);
    let run_shutdown = shutdown.clone();
    let done = shutdown.clone();
    let server_task = tokio::spawn(async move {
        let result = server.run(http_listener, run_shutdown).await;
        done.mark_stopped();
        result
    });

    // Instance A is serving
    tokio::time::sleep(Duration::from_millis(100)).await;
    let res = client()
        .get(format!("http://{http_addr}/"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    // Instance B's startup path: handshake, then bind the same HTTP port
    tokio::time::timeout(
        Duration::from_secs(5),
        request_predecessor_stop(shutdown_port),
    )
    .await
    .expect("handshake should complete");

    let rebound = TcpListener::bind(http_addr).await;
    assert!(
        rebound.is_ok(),
        "HTTP port must be free once the handshake is acknowledged"
    );

    takeover_handle.stop().await;
    let result = tokio::time::timeout(Duration::from_secs(5), server_task)
        .await
        .expect("instance A should have stopped")
        .unwrap();
    assert!(result.is_ok());
}
