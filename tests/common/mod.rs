#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};

pub const REPORT: &str = "\
NoSQL Benchmark.

[  1 sec] [ 4 threads]   51234 req/s   25617 read/s   25617 write/s  0.08 ms

.----------.---------------.---------------.---------------.
|   type   |    minimal    |    average    |     maximum   |
.----------.---------------.---------------.---------------.
| read/s   |      25617    |      26700    |       27506   |
| write/s  |      25617    |      26701    |       27506   |
| req/s    |      51234    |      53401    |       55012   |
| rtt/ms   |    0.07000    |    0.07500    |    0.080000   |
'----------.---------------.---------------.---------------'
";

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    pushes: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// A stand-in for the microb `/push` endpoint that records every query.
pub struct MockServer {
    pub addr: SocketAddr,
    pushes: Arc<Mutex<Vec<HashMap<String, String>>>>,
    task: tokio::task::JoinHandle<()>,
}

impl MockServer {
    pub async fn start(status: StatusCode) -> Self {
        let pushes = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            pushes: pushes.clone(),
        };
        let app = Router::new()
            .route("/push", get(push_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, pushes, task }
    }

    /// `host:port` as it would appear in an auth file.
    pub fn server(&self) -> String {
        self.addr.to_string()
    }

    pub fn pushes(&self) -> Vec<HashMap<String, String>> {
        self.pushes.lock().unwrap().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn push_handler(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> StatusCode {
    state.pushes.lock().unwrap().push(params);
    state.status
}

/// Auth file and report written into a temp dir.
pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub auth_conf: PathBuf,
    pub report: PathBuf,
}

impl Fixture {
    pub fn new(server: &str, token: &str, report: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let auth_conf = write(dir.path(), "auth.conf", &format!("{}:{}\n", server, token));
        let report = write(dir.path(), "bench.out", report);
        Self {
            dir,
            auth_conf,
            report,
        }
    }
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// A listener that accepts connections but never answers. Keep it alive for
/// the duration of the test.
pub async fn hung_listener() -> (tokio::net::TcpListener, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

/// Executable stand-in for `tarantool --version`.
#[cfg(unix)]
pub fn version_script(dir: &Path, line: &str, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-tarantool");
    std::fs::write(
        &path,
        format!("#!/bin/sh\necho \"{}\"\nexit {}\n", line, exit_code),
    )
    .unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
