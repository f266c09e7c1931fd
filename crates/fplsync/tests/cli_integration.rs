//! End-to-end CLI integration tests.
//!
//! These tests verify the complete CLI workflow by:
//! 1. Serving a canned bootstrap-static payload from a local socket
//! 2. Running fplsync against a temporary git repository
//! 3. Verifying the written CSV and the resulting commits

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::Command as StdCommand;
use std::thread::{self, JoinHandle};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

fn fplsync() -> Command {
    let mut cmd = Command::cargo_bin("fplsync").expect("failed to find fplsync binary");
    cmd.env_remove("FPLSYNC_CONFIG")
        .env_remove("FPLSYNC_REPO")
        .env_remove("FPLSYNC_URL");
    cmd
}

/// Creates a temporary git repository.
fn setup_git_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    git2::Repository::init(temp_dir.path()).expect("failed to init git repo");
    temp_dir
}

fn commit_count(dir: &Path) -> usize {
    let output = StdCommand::new("git")
        .args(["rev-list", "--count", "HEAD"])
        .current_dir(dir)
        .output()
        .expect("failed to run git rev-list");
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse()
        .unwrap_or(0)
}

fn element(first_name: &str, web_name: &str, team: u32, now_cost: i32, total_points: i32) -> Value {
    json!({
        "first_name": first_name,
        "web_name": web_name,
        "team": team,
        "element_type": 3,
        "now_cost": now_cost,
        "total_points": total_points,
        "event_points": 6,
        "points_per_game": "5.5",
        "selected_by_percent": "30.1",
        "goals_scored": 10,
        "assists": 8,
        "minutes": 2900,
        "clean_sheets": 11,
        "goals_conceded": 30,
        "own_goals": 0,
        "penalties_saved": 0,
        "penalties_missed": 0,
        "saves": 0,
        "yellow_cards": 3,
        "red_cards": 0,
        "bonus": 14,
        "influence": "900.2",
        "creativity": "1100.5",
        "threat": "1200.0",
        "ict_index": "320.4",
        "form": "6.1",
        "dreamteam_count": 4,
        "value_form": "0.6",
        "value_season": "18.0",
        "transfers_in": 2_000_000,
        "transfers_out": 1_500_000,
        "transfers_in_event": 25_000,
        "transfers_out_event": 12_000,
        "cost_change_start": 3,
        "cost_change_start_fall": -3,
        "cost_change_event": 0,
        "cost_change_event_fall": 0
    })
}

fn payload(elements: &[Value]) -> String {
    json!({
        "teams": [
            { "id": 1, "name": "Arsenal" },
            { "id": 12, "name": "Liverpool" }
        ],
        "element_types": [
            { "id": 3, "singular_name_short": "MID" }
        ],
        "elements": elements
    })
    .to_string()
}

fn default_payload() -> String {
    payload(&[
        element("Bukayo", "Saka", 1, 100, 180),
        element("Mohamed", "Salah", 12, 145, 344),
        element("Loan", "Return", 99, 45, 0),
    ])
}

/// Serves `count` identical HTTP responses on a local port.
fn serve(status_line: &'static str, body: String, count: usize) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let url = format!(
        "http://{}/api/bootstrap-static/",
        listener.local_addr().unwrap()
    );

    let handle = thread::spawn(move || {
        for _ in 0..count {
            let (stream, _) = listener.accept().expect("failed to accept");
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
        }
    });

    (url, handle)
}

fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);
    url
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    fplsync()
        .args(["init"])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = fs::read_to_string(dir.join("fplsync.toml")).expect("failed to read config");
    assert!(content.contains("[source]"), "config should have source section");
    assert!(content.contains("[output]"), "config should have output section");
    assert!(content.contains("[git]"), "config should have git section");
    assert!(content.contains("fpl_player_statistics.csv"));
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("fplsync.toml"), "# old config\n").unwrap();

    fplsync()
        .args(["init"])
        .current_dir(dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fplsync()
        .args(["init", "--force"])
        .current_dir(dir)
        .assert()
        .success();

    let content = fs::read_to_string(dir.join("fplsync.toml")).unwrap();
    assert!(!content.contains("# old config"), "config should be overwritten");
}

#[test]
fn test_fetch_to_stdout() {
    let (url, handle) = serve("200 OK", default_payload(), 1);
    let temp_dir = TempDir::new().unwrap();

    let output = fplsync()
        .args(["fetch", "--url", &url])
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to run fplsync fetch");
    handle.join().unwrap();

    assert!(
        output.status.success(),
        "fetch should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "header plus one row per player: {stdout}");
    assert!(lines[0].starts_with("player_name,club_name,position_name,now_cost,total_points,"));
    assert!(lines[1].starts_with("Mohamed Salah,Liverpool,MID,14.5,344,"));
    assert!(lines[2].starts_with("Bukayo Saka,Arsenal,MID,10.0,180,"));
    assert!(lines[3].starts_with("Loan Return,N/A,MID,4.5,0,"));
}

#[test]
fn test_fetch_to_file() {
    let (url, handle) = serve("200 OK", default_payload(), 1);
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("players.csv");

    fplsync()
        .args(["fetch", "--url", &url, "--output"])
        .arg(&out)
        .current_dir(temp_dir.path())
        .assert()
        .success();
    handle.join().unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_fetch_empty_elements_fails() {
    let (url, handle) = serve("200 OK", payload(&[]), 1);
    let temp_dir = TempDir::new().unwrap();

    fplsync()
        .args(["fetch", "--url", &url])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no player data"));
    handle.join().unwrap();
}

#[test]
fn test_sync_commits_then_skips_unchanged() {
    let (url, handle) = serve("200 OK", default_payload(), 2);
    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();

    fplsync()
        .args(["sync", "--no-push", "--url", &url])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Committed"))
        .stdout(predicate::str::contains("Push skipped."));

    assert!(dir.join("fpl_player_statistics.csv").exists());
    assert_eq!(commit_count(dir), 1);

    fplsync()
        .args(["sync", "--no-push", "--url", &url])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to commit."));
    handle.join().unwrap();

    assert_eq!(commit_count(dir), 1);
}

#[test]
fn test_sync_commit_message_has_timestamp() {
    let (url, handle) = serve("200 OK", default_payload(), 1);
    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();

    fplsync()
        .args(["sync", "--no-push", "--url", &url, "--repo"])
        .arg(dir)
        .assert()
        .success();
    handle.join().unwrap();

    let output = StdCommand::new("git")
        .args(["log", "-1", "--format=%s"])
        .current_dir(dir)
        .output()
        .unwrap();
    let subject = String::from_utf8_lossy(&output.stdout);
    let pattern = predicate::str::is_match(
        r"^FPL data update: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$",
    )
    .unwrap();
    assert!(pattern.eval(subject.trim()), "unexpected subject: {subject}");
}

#[test]
fn test_sync_uses_config_file() {
    let (url, handle) = serve("200 OK", default_payload(), 1);
    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();

    fs::write(
        dir.join("fplsync.toml"),
        format!(
            r#"
[source]
url = "{url}"

[output]
filename = "data/players.csv"

[git]
user_name = "Stats Bot"
user_email = "stats@example.com"
message_prefix = "Player stats"
push = false
"#
        ),
    )
    .unwrap();

    fplsync().args(["sync"]).current_dir(dir).assert().success();
    handle.join().unwrap();

    assert!(dir.join("data/players.csv").exists());

    let output = StdCommand::new("git")
        .args(["log", "-1", "--format=%an|%s"])
        .current_dir(dir)
        .output()
        .unwrap();
    let log = String::from_utf8_lossy(&output.stdout);
    assert!(log.starts_with("Stats Bot|Player stats: "), "unexpected log: {log}");
}

#[test]
fn test_sync_no_data_does_not_publish() {
    let (url, handle) = serve("200 OK", payload(&[]), 1);
    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();

    fplsync()
        .args(["sync", "--url", &url])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("canceling save process"));
    handle.join().unwrap();

    assert!(!dir.join("fpl_player_statistics.csv").exists());
    assert_eq!(commit_count(dir), 0);
}

#[test]
fn test_sync_fetch_failure_exits_cleanly() {
    let temp_dir = setup_git_repo();

    fplsync()
        .args(["sync", "--url", &unreachable_url()])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to fetch FPL data"));
}

#[test]
fn test_sync_strict_fails_on_http_error() {
    let (url, handle) = serve("500 Internal Server Error", "{}".to_string(), 1);
    let temp_dir = setup_git_repo();

    fplsync()
        .args(["sync", "--strict", "--url", &url])
        .current_dir(temp_dir.path())
        .assert()
        .failure();
    handle.join().unwrap();

    assert!(!temp_dir.path().join("fpl_player_statistics.csv").exists());
}

#[test]
fn test_sync_push_failure_keeps_file_and_commit() {
    let (url, handle) = serve("200 OK", default_payload(), 1);
    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();

    // No remote is configured, so the push step fails
    fplsync()
        .args(["sync", "--url", &url])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("An error occurred while publishing"));
    handle.join().unwrap();

    assert!(dir.join("fpl_player_statistics.csv").exists());
    assert_eq!(commit_count(dir), 1);
}

#[test]
fn test_sync_rejects_absolute_output() {
    let temp_dir = setup_git_repo();

    fplsync()
        .args(["sync", "--output", "/tmp/players.csv", "--url", &unreachable_url()])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("inside the repository"));
}

#[test]
fn test_sync_rejects_output_outside_repo() {
    let temp_dir = setup_git_repo();
    let repo = temp_dir.path().join("repo");
    fs::create_dir(&repo).unwrap();

    fplsync()
        .args(["sync", "--output", "../players.csv", "--url", &unreachable_url()])
        .current_dir(&repo)
        .assert()
        .failure()
        .stderr(predicate::str::contains("inside the repository"));

    assert!(!temp_dir.path().join("players.csv").exists());
}
