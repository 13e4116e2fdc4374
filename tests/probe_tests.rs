// tests/probe_tests.rs
use async_trait::async_trait;
use healthprobe::{
    database_ping_check, dns_resolve_check, http_get_check, http_get_check_with_statuses,
    max_pause_check, task_count_check, tcp_dial_check, BoxError, Check, CheckError, PauseTracker,
    Pinger,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

const TIMEOUT: Duration = Duration::from_secs(5);

struct AlwaysUp;

#[async_trait]
impl Pinger for AlwaysUp {
    async fn ping(&self) -> Result<(), BoxError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_tcp_dial_check() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let open = listener.local_addr().unwrap();
    assert!(tcp_dial_check(open.to_string(), TIMEOUT).run().await.is_ok());

    let closed = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    assert!(tcp_dial_check(closed.to_string(), TIMEOUT).run().await.is_err());
}

#[tokio::test]
async fn test_http_get_check() {
    let mut server = mockito::Server::new_async().await;
    let _ok = server.mock("GET", "/posts/1").with_status(200).create_async().await;
    let _missing = server.mock("GET", "/nonexistent").with_status(404).create_async().await;
    let _moved = server
        .mock("GET", "/moved")
        .with_status(302)
        .with_header("location", "/posts/1")
        .create_async()
        .await;

    let base = server.url();
    let extended = [200, 201, 301, 437, 502];

    assert!(http_get_check(&format!("{base}/posts/1"), TIMEOUT).unwrap().run().await.is_ok());
    assert!(
        http_get_check(&format!("{base}/nonexistent"), TIMEOUT).unwrap().run().await.is_err(),
        "404 should fail"
    );
    assert!(
        http_get_check(&format!("{base}/moved"), TIMEOUT).unwrap().run().await.is_err(),
        "redirect should fail"
    );

    let check = http_get_check_with_statuses(&format!("{base}/posts/1"), TIMEOUT, extended).unwrap();
    assert!(check.run().await.is_ok());
    let check = http_get_check_with_statuses(&format!("{base}/nonexistent"), TIMEOUT, extended).unwrap();
    assert!(check.run().await.is_err(), "404 should fail");
    let check = http_get_check_with_statuses(&format!("{base}/moved"), TIMEOUT, extended).unwrap();
    assert!(check.run().await.is_err(), "302 not in list should fail");
}

#[tokio::test]
async fn test_database_ping_check() {
    let err = database_ping_check(None, Duration::from_secs(1)).run().await.unwrap_err();
    assert!(matches!(err, CheckError::NoDatabase), "missing handle should fail");

    let db: Arc<dyn Pinger> = Arc::new(AlwaysUp);
    assert!(database_ping_check(Some(db), Duration::from_secs(1)).run().await.is_ok());
}

#[tokio::test]
async fn test_dns_resolve_check() {
    assert!(dns_resolve_check("localhost", TIMEOUT).run().await.is_ok());
    assert!(dns_resolve_check("nonexistent.invalid", TIMEOUT).run().await.is_err());
}

#[tokio::test]
async fn test_task_count_check() {
    assert!(task_count_check(1000).run().await.is_ok());
    assert!(task_count_check(0).run().await.is_err());
}

#[tokio::test]
async fn test_max_pause_check() {
    let tracker = PauseTracker::new();
    tracker.record(Duration::from_micros(100));

    assert!(max_pause_check(tracker.clone(), Duration::from_secs(1)).run().await.is_ok());
    assert!(max_pause_check(tracker, Duration::ZERO).run().await.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_checks_run_concurrently() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let checks: Vec<Check> = vec![
        tcp_dial_check(addr, TIMEOUT),
        dns_resolve_check("localhost", TIMEOUT),
        max_pause_check(PauseTracker::new(), Duration::ZERO),
    ];

    let mut tasks = Vec::new();
    for _ in 0..4 {
        for check in &checks {
            let check = check.clone();
            tasks.push(tokio::spawn(async move { check.run().await }));
        }
    }

    for result in futures::future::join_all(tasks).await {
        assert!(result.unwrap().is_ok());
    }
}
