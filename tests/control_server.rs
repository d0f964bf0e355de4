//! Control server page, shutdown trigger and grace period.

use axum::{routing::get, Router};
use std::time::Duration;
use tokio::net::TcpListener;

use ping_pong::control;
use ping_pong::http::HttpServer;
use ping_pong::lifecycle::{ServerState, Shutdown, ShutdownCause, ShutdownOutcome};

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

async fn start(
    router: Router,
    shutdown: &Shutdown,
    grace: Duration,
) -> (std::net::SocketAddr, tokio::task::JoinHandle<std::io::Result<ShutdownOutcome>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(router, grace);
    let handle = tokio::spawn(server.run(listener, shutdown.clone()));
    (addr, handle)
}

#[tokio::test]
async fn test_serves_control_page() {
    let shutdown = Shutdown::new();
    let (addr, _handle) = start(control::router(shutdown.clone()), &shutdown, Duration::from_secs(5)).await;

    let res = client().get(format!("http://{}/", addr)).send().await.unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );
    let page = res.text().await.unwrap();
    assert!(page.contains(r#"<form action="/shutdown" method="post">"#));
    assert!(page.contains("Shutdown Server"));
    assert_eq!(shutdown.state(), ServerState::Running);

    shutdown.trigger(ShutdownCause::Interrupt);
}

#[tokio::test]
async fn test_shutdown_button_stops_listener() {
    let shutdown = Shutdown::new();
    let (addr, handle) = start(control::router(shutdown.clone()), &shutdown, Duration::from_secs(5)).await;

    let res = client()
        .post(format!("http://{}/shutdown", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Shutdown command received");

    let outcome = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop within 5 seconds")
        .unwrap()
        .unwrap();

    assert_eq!(outcome, ShutdownOutcome::Graceful);
    assert_eq!(shutdown.state(), ServerState::Stopped);
    assert!(client().get(format!("http://{}/", addr)).send().await.is_err());
}

#[tokio::test]
async fn test_shutdown_requires_post() {
    let shutdown = Shutdown::new();
    let (addr, _handle) = start(control::router(shutdown.clone()), &shutdown, Duration::from_secs(5)).await;

    let res = client().get(format!("http://{}/shutdown", addr)).send().await.unwrap();

    assert_eq!(res.status(), 405);
    assert_eq!(shutdown.state(), ServerState::Running);

    shutdown.trigger(ShutdownCause::Interrupt);
}

#[tokio::test]
async fn test_in_flight_request_finishes_inside_grace_period() {
    let shutdown = Shutdown::new();
    let router = Router::new().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            "done"
        }),
    );
    let (addr, handle) = start(router, &shutdown, Duration::from_secs(5)).await;

    let request = tokio::spawn(async move {
        client().get(format!("http://{}/slow", addr)).send().await?.text().await
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.trigger(ShutdownCause::Terminate);

    assert_eq!(request.await.unwrap().unwrap(), "done");
    let outcome = handle.await.unwrap().unwrap();
    assert_eq!(outcome, ShutdownOutcome::Graceful);
}

#[tokio::test]
async fn test_grace_period_elapses_into_forced_stop() {
    let shutdown = Shutdown::new();
    let router = Router::new().route(
        "/stuck",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "never"
        }),
    );
    let (addr, handle) = start(router, &shutdown, Duration::from_millis(200)).await;

    tokio::spawn(async move {
        let _ = client().get(format!("http://{}/stuck", addr)).send().await;
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.trigger(ShutdownCause::HttpTrigger);

    let outcome = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("forced stop took too long")
        .unwrap()
        .unwrap();

    assert_eq!(outcome, ShutdownOutcome::Forced);
    assert_eq!(shutdown.state(), ServerState::Stopped);
}
