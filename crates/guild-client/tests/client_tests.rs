//! Client tests against a local stub server

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::{Query, RawQuery};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use guild_client::{ClientError, GuildApiClient, GuildParams, RaidBossesParams};
use serde_json::{json, Value};

const RAID_BOSSES: &str = include_str!("fixtures/raid_bosses.json");
const ROSTER: &str = include_str!("fixtures/roster.json");

fn fixture(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

async fn spawn_stub() -> SocketAddr {
    let app = Router::new()
        .route(
            "/api/raid-bosses",
            get(|RawQuery(query): RawQuery| async move {
                // The exact wire form is part of the contract.
                let expected = "raid=Nerub-ar+Palace&name=Guttakrutt&realm=Tarren+Mill&region=eu&difficulty=mythic";
                if query.as_deref() == Some(expected) {
                    (StatusCode::OK, Json(fixture(RAID_BOSSES)))
                } else {
                    (StatusCode::BAD_REQUEST, Json(json!({ "query": query })))
                }
            }),
        )
        .route("/api/roster", get(|| async { Json(fixture(ROSTER)) }))
        .route(
            "/api/guild",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                if params.get("name").map(String::as_str) == Some("Guttakrutt") {
                    (
                        StatusCode::OK,
                        Json(json!({
                            "id": 1,
                            "name": "Guttakrutt",
                            "realm": "Tarren Mill",
                            "serverRegion": "eu",
                            "faction": "horde",
                            "description": null,
                            "memberCount": 3,
                            "emblemUrl": null,
                            "lastUpdated": "2025-03-01T12:00:00Z"
                        })),
                    )
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "error": { "code": "UNKNOWN_GUILD", "message": "Guild not found" } })),
                    )
                }
            }),
        )
        .route(
            "/api/raid-progress",
            get(|| async {
                Json(json!({
                    "progresses": [{
                        "id": 5,
                        "guildId": 1,
                        "raidName": "Liberation of Undermine",
                        "raidSlug": "liberation-of-undermine",
                        "difficulty": "mythic",
                        "bosses": 8,
                        "bossesDefeated": 3,
                        "summary": "3/8 Mythic",
                        "worldRank": 812,
                        "regionRank": 402,
                        "realmRank": 9,
                        "lastUpdated": "2025-03-01T12:00:00Z"
                    }],
                    "apiStatus": "success",
                    "lastUpdated": "2025-03-01T12:00:00Z"
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr) -> GuildApiClient {
    GuildApiClient::new(&format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn test_fetch_raid_bosses_returns_served_json() {
    let addr = spawn_stub().await;
    let envelope = client(addr)
        .fetch_raid_bosses(&RaidBossesParams::new("Nerub-ar Palace"))
        .await
        .unwrap();

    assert_eq!(envelope.bosses.len(), 2);
    assert_eq!(envelope.bosses[1].status, "in_progress");
    assert_eq!(serde_json::to_value(&envelope).unwrap(), fixture(RAID_BOSSES));
}

#[tokio::test]
async fn test_fetch_roster_returns_served_json() {
    let addr = spawn_stub().await;
    let roster = client(addr).fetch_roster(&GuildParams::default()).await.unwrap();

    assert_eq!(roster.characters[0].rank_name, "Guild Master");
    assert_eq!(roster.characters[0].mythic_score, Some(2891.37));
    assert_eq!(serde_json::to_value(&roster).unwrap(), fixture(ROSTER));
}

#[tokio::test]
async fn test_fetch_raid_progress() {
    let addr = spawn_stub().await;
    let progress = client(addr).fetch_raid_progress(&GuildParams::default()).await.unwrap();

    let row = progress.find("liberation-of-undermine", "mythic").unwrap();
    assert_eq!(row.bosses_defeated, 3);
    assert!(progress.find("liberation-of-undermine", "heroic").is_none());
}

#[tokio::test]
async fn test_fetch_guild_info() {
    let addr = spawn_stub().await;
    let guild = client(addr).fetch_guild_info(&GuildParams::default()).await.unwrap();
    assert_eq!(guild.server_region, "eu");
    assert_eq!(guild.member_count, 3);
}

#[tokio::test]
async fn test_non_success_status_surfaces() {
    let addr = spawn_stub().await;
    let params = GuildParams::new("Nobody", "Tarren Mill", guild_core::Region::Eu);
    let err = client(addr).fetch_guild_info(&params).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    match err {
        ClientError::Status { body, .. } => assert!(body.contains("UNKNOWN_GUILD")),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_error() {
    let err = GuildApiClient::new("http://127.0.0.1:1")
        .unwrap()
        .fetch_roster(&GuildParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
