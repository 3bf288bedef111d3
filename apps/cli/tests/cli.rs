use assert_cmd::Command;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Runs the binary with an isolated config file pointing at `base_url`.
struct CliTestContext {
    dir: TempDir,
}

impl CliTestContext {
    fn new(base_url: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(
            dir.path().join("client.toml"),
            format!(
                "[api]\nbase_url = \"{base_url}\"\ntimeout_secs = 5\n\n[form]\nmatch_debounce_ms = 20\n"
            ),
        )
        .expect("write config");
        Self { dir }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_portal"));
        cmd.arg("--config")
            .arg(self.dir.path().join("client.toml"))
            .args(args)
            .env_remove("RUST_LOG");
        cmd
    }
}

async fn spawn_stub(status: StatusCode, body: Value) -> String {
    let router = Router::new()
        .route("/api/auth/register", post(move || async move { (status, Json(body)) }));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{addr}")
}

/// Registers `ana` with the password piped through stdin.
async fn register(base_url: String) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || {
        CliTestContext::new(&base_url)
            .command(&[
                "register",
                "--username",
                "ana",
                "--email",
                "ana@example.com",
                "--password-stdin",
            ])
            .write_stdin("Secret#123\n")
            .assert()
    })
    .await
    .expect("cli task")
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_registration_points_to_login() {
    let base = spawn_stub(StatusCode::CREATED, json!({ "success": true })).await;

    register(base)
        .await
        .success()
        .stdout(predicate::str::contains("/login"))
        .stdout(predicate::str::contains("Cont creat."));
}

#[tokio::test(flavor = "multi_thread")]
async fn server_rejection_is_printed_per_field() {
    let base = spawn_stub(
        StatusCode::BAD_REQUEST,
        json!({ "success": false, "message": ["Username already taken"] }),
    )
    .await;

    register(base)
        .await
        .failure()
        .stdout(predicate::str::contains("Nume de utilizator"))
        .stdout(predicate::str::contains("Username already taken"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_api_shows_the_generic_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let base = format!("http://{}", listener.local_addr().expect("address"));
    drop(listener);

    register(base)
        .await
        .failure()
        .stdout(predicate::str::contains("An error occurred. Please try again later."));
}

#[test]
fn socials_lists_every_network() {
    let assert = CliTestContext::new("http://127.0.0.1:9").command(&["socials", "--json"]).assert();
    let output = assert.success().get_output().stdout.clone();

    let links: Value = serde_json::from_slice(&output).expect("json output");
    let labels: Vec<_> =
        links.as_array().expect("array").iter().map(|l| l["ariaLabel"].clone()).collect();
    assert_eq!(labels, [json!("twitter"), json!("instagram"), json!("facebook"), json!("youtube")]);
}

#[test]
fn help_lists_both_commands() {
    Command::new(env!("CARGO_BIN_EXE_portal"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("register").and(predicate::str::contains("socials")));
}
