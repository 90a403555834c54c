//! End-to-end tests for the sync command against a mock Sleeper server

use std::{fs, path::Path, time::Duration};

use serde_json::{json, Value};
use sleeper_roster::{
    commands::sync_players::{handle_sync_players, SyncParams},
    core::FilterConfig,
    DefenseMode, RosterError,
};
use tempfile::tempdir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn feed() -> Value {
    json!({
        "4046": {
            "active": true, "sport": "nfl", "position": "QB", "status": "Active",
            "team": "KC", "full_name": "Patrick Mahomes", "years_exp": 8
        },
        "4034": {
            "active": true, "sport": "nfl", "position": "RB", "status": "Injured_Reserve",
            "team": "SF", "full_name": "Christian McCaffrey", "years_exp": 8
        },
        "1": {
            "active": false, "sport": "nfl", "position": "WR", "team": "DAL"
        }
    })
}

async fn serve(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/players/nfl"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

fn params(server: &MockServer, output: &Path) -> SyncParams {
    SyncParams {
        url: format!("{}/v1/players/nfl", server.uri()),
        output: output.to_path_buf(),
        timeout: Duration::from_secs(5),
        config: FilterConfig::default(),
        verbose: false,
        dry_run: false,
    }
}

#[tokio::test]
async fn test_sync_writes_filtered_roster() {
    let server = serve(ResponseTemplate::new(200).set_body_json(feed())).await;
    let dir = tempdir().unwrap();
    let output = dir.path().join("docs").join("players_2025.json");

    let summary = handle_sync_players(params(&server, &output)).await.unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.filtered, 1);
    assert_eq!(summary.destination, output.display().to_string());
    assert_eq!(summary.stats.inactive, 1);
    assert_eq!(summary.stats.excluded_status, 1);

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        r#"{
  "4046": {
    "full_name": "Patrick Mahomes",
    "player_id": "4046",
    "position": "QB",
    "status": "Active",
    "team": "KC",
    "years_exp": 8
  }
}"#
    );
}

#[tokio::test]
async fn test_sync_synthesized_defenses() {
    let server = serve(ResponseTemplate::new(200).set_body_json(feed())).await;
    let dir = tempdir().unwrap();
    let output = dir.path().join("players.json");

    let mut p = params(&server, &output);
    p.config = FilterConfig::default().defense_mode(DefenseMode::Synthesized);
    let summary = handle_sync_players(p).await.unwrap();

    assert_eq!(summary.filtered, 33);
    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["WAS"]["full_name"], "Washington Commanders");
}

#[tokio::test]
async fn test_sync_summary_line() {
    let server = serve(ResponseTemplate::new(200).set_body_json(feed())).await;
    let dir = tempdir().unwrap();
    let output = dir.path().join("players.json");

    let summary = handle_sync_players(params(&server, &output)).await.unwrap();
    let line = summary.to_string();

    assert!(line.starts_with("Total players: 3 | Filtered: 1 | Saved to "));
    // ISO-8601, second precision: "... @ YYYY-MM-DDTHH:MM:SS"
    let stamp = line.rsplit(" @ ").next().unwrap();
    assert_eq!(stamp.len(), 19);
    assert_eq!(&stamp[10..11], "T");
}

#[tokio::test]
async fn test_sync_dry_run_writes_nothing() {
    let server = serve(ResponseTemplate::new(200).set_body_json(feed())).await;
    let dir = tempdir().unwrap();
    let output = dir.path().join("players.json");

    let mut p = params(&server, &output);
    p.dry_run = true;
    let summary = handle_sync_players(p).await.unwrap();

    assert_eq!(summary.destination, "<stdout>");
    assert!(!output.exists());
}

#[tokio::test]
async fn test_sync_http_error_leaves_existing_file() {
    let server = serve(ResponseTemplate::new(503)).await;
    let dir = tempdir().unwrap();
    let output = dir.path().join("players.json");
    fs::write(&output, "previous roster").unwrap();

    let err = handle_sync_players(params(&server, &output)).await.unwrap_err();

    assert!(matches!(err, RosterError::Status { status: 503, .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous roster");
}

#[tokio::test]
async fn test_sync_malformed_body_writes_nothing() {
    let server = serve(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>")).await;
    let dir = tempdir().unwrap();
    let output = dir.path().join("nested").join("players.json");

    let err = handle_sync_players(params(&server, &output)).await.unwrap_err();

    assert!(matches!(err, RosterError::Json(_)));
    assert!(!output.exists());
    assert!(!output.parent().unwrap().exists());
}

#[tokio::test]
async fn test_sync_non_object_body_is_fatal() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!(["4046", "4034"]))).await;
    let dir = tempdir().unwrap();
    let output = dir.path().join("players.json");

    let err = handle_sync_players(params(&server, &output)).await.unwrap_err();

    assert!(matches!(err, RosterError::UnexpectedShape { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_sync_unwritable_destination() {
    let server = serve(ResponseTemplate::new(200).set_body_json(feed())).await;
    let dir = tempdir().unwrap();
    // Parent "directory" is a regular file, so it can't be created
    let blocker = dir.path().join("docs");
    fs::write(&blocker, "not a directory").unwrap();
    let output = blocker.join("players.json");

    let err = handle_sync_players(params(&server, &output)).await.unwrap_err();

    assert!(matches!(err, RosterError::Io(_)));
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}
