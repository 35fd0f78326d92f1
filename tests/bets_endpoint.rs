use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use nba_prop_signal::api::{create_router, AppState};
use nba_prop_signal::betting::FixedOdds;
use nba_prop_signal::data::DataContext;
use nba_prop_signal::models::{Odds, PlayerRecord, ScheduleEntry};

fn player(name: &str, team: &str, status: &str, stats: [f64; 4]) -> PlayerRecord {
    PlayerRecord {
        name: name.to_string(),
        team: team.to_string(),
        injury_status: status.to_string(),
        points: stats[0],
        assists: stats[1],
        rebounds: stats[2],
        pra: stats[3],
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn app_with(players: Vec<PlayerRecord>) -> Router {
    let data = DataContext::new(
        players,
        vec![
            ScheduleEntry::from_team_list(date(2024, 1, 15), "LAL, BOS"),
            ScheduleEntry::from_team_list(date(2024, 1, 16), ""),
        ],
    );
    let state = AppState::new(Arc::new(data), Arc::new(FixedOdds(Odds(-110))));
    create_router(state)
}

fn app() -> Router {
    app_with(vec![
        player("Jane Doe", "LAL", "Healthy", [20.0, 5.0, 7.0, 32.0]),
        player("John Roe", "BOS", "", [12.5, 3.0, 4.5, 20.0]),
        player("Max Poe", "BOS", "Questionable", [8.0, 2.0, 3.0, 13.0]),
        player("Sam Low", "LAL", "Healthy", [0.3, 0.3, 0.3, 0.3]),
        player("Far Away", "MIA", "Healthy", [30.0, 9.0, 9.0, 48.0]),
    ])
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = serde_json::from_slice(&bytes).expect("response is not JSON");

    (status, body)
}

#[tokio::test]
async fn missing_date_is_bad_request() {
    let app = app();

    let (status, body) = get(&app, "/bets").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Date parameter is required" }));

    let (status, body) = get(&app, "/bets?date=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Date parameter is required" }));
}

#[tokio::test]
async fn unparseable_date_is_bad_request() {
    let (status, body) = get(&app(), "/bets?date=someday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid date format: someday" }));
}

#[tokio::test]
async fn malformed_query_is_json_bad_request() {
    let request = Request::builder()
        .uri("/bets?date=2024-01-15&date=2024-01-16")
        .body(Body::empty())
        .expect("failed to build request");

    let response = app().oneshot(request).await.expect("router request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body: Value = serde_json::from_slice(&bytes).expect("response is not JSON");
    let error = body["error"].as_str().expect("missing error field");
    assert!(error.starts_with("Invalid query: "), "{error}");
    assert!(error.contains("date"), "{error}");
}

#[tokio::test]
async fn unscheduled_date_has_no_active_players() {
    let app = app();
    let expected = json!({ "message": "No active players found for the selected date." });

    let (status, body) = get(&app, "/bets?date=2031-06-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);

    // Scheduled, but no teams playing
    let (status, body) = get(&app, "/bets?date=2024-01-16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn scheduled_date_returns_ranked_picks() {
    let (status, body) = get(&app(), "/bets?date=2024-01-15").await;
    assert_eq!(status, StatusCode::OK);

    let picks = body.as_array().expect("expected an array");
    assert_eq!(picks.len(), 3);

    assert_eq!(
        picks[0],
        json!({
            "player": "Jane Doe",
            "team": "LAL",
            "bet_type": "Points",
            "line": 18.0,
            "odds": "-110",
            "confidence": "100%",
            "advice": "Over"
        })
    );

    let players: HashSet<&str> = picks
        .iter()
        .map(|p| p["player"].as_str().unwrap())
        .collect();
    assert_eq!(players.len(), picks.len());
    assert!(!players.contains("Far Away"));
    // Lowest confidence player is cut by the top-3 limit
    assert!(!players.contains("Sam Low"));

    for pick in picks {
        let line = pick["line"].as_f64().unwrap();
        assert_eq!((line * 2.0).fract(), 0.0);
        let confidence: f64 = pick["confidence"]
            .as_str()
            .unwrap()
            .trim_end_matches('%')
            .parse()
            .unwrap();
        assert!((0.0..=100.0).contains(&confidence));
    }
}

#[tokio::test]
async fn injured_player_is_excluded() {
    let app = app_with(vec![
        player("Jane Doe", "LAL", "Injured", [20.0, 5.0, 7.0, 32.0]),
        player("John Roe", "BOS", "", [12.5, 3.0, 4.5, 20.0]),
    ]);

    let (status, body) = get(&app, "/bets?date=2024-01-15").await;
    assert_eq!(status, StatusCode::OK);
    let picks = body.as_array().unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0]["player"], "John Roe");
}

#[tokio::test]
async fn all_unavailable_returns_empty_array() {
    let app = app_with(vec![player("Jane Doe", "LAL", "OUT", [20.0, 5.0, 7.0, 32.0])]);

    let (status, body) = get(&app, "/bets?date=2024-01-15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn repeated_requests_are_identical_with_fixed_odds() {
    let app = app();
    let (_, first) = get(&app, "/bets?date=01/15/2024").await;
    let (_, second) = get(&app, "/bets?date=2024-01-15").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/bets?date=2024-01-15")
        .header(header::ORIGIN, "https://frontend.example")
        .body(Body::empty())
        .expect("failed to build request");

    let response = app().oneshot(request).await.expect("router request failed");
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
