//! HTTP client tests against a local stub of the upstream APIs

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use guild_common::BattleNetConfig;
use guild_core::{Difficulty, GuildKey, Region};
use guild_sources::{BattleNetClient, GameDataSource, GuildSnapshotSource, RaiderIoClient, SnapshotAssembler};

const STATIC: &str = include_str!("fixtures/raider_io_static.json");
const PROFILE: &str = include_str!("fixtures/raider_io_profile.json");
const ENCOUNTERS: &str = include_str!("fixtures/raider_io_encounters.json");
const BNET_GUILD: &str = include_str!("fixtures/bnet_guild.json");
const BNET_ROSTER: &str = include_str!("fixtures/bnet_roster.json");

fn parse(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
}

async fn static_data(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    if params.get("expansion_id").map(String::as_str) == Some("10") {
        (StatusCode::OK, Json(parse(STATIC)))
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": "unknown expansion" })))
    }
}

async fn guild_profile(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    if params.get("realm").map(String::as_str) != Some("tarren-mill")
        || params.get("name").map(String::as_str) != Some("Guttakrutt")
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "statusCode": 400, "message": "Could not find requested guild" })),
        );
    }

    let fields = params.get("fields").cloned().unwrap_or_default();
    if fields == "raid_encounters:liberation-of-undermine:mythic" {
        (StatusCode::OK, Json(parse(ENCOUNTERS)))
    } else if fields.starts_with("raid_encounters:") {
        (StatusCode::OK, Json(json!({ "name": "Guttakrutt", "realm": "Tarren Mill", "raid_encounters": [] })))
    } else {
        (StatusCode::OK, Json(parse(PROFILE)))
    }
}

async fn token() -> Json<Value> {
    Json(json!({ "access_token": "stub-token", "token_type": "bearer", "expires_in": 86399 }))
}

async fn bnet_guild(headers: axum::http::HeaderMap) -> impl IntoResponse {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some("Bearer stub-token") => (StatusCode::OK, Json(parse(BNET_GUILD))),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({}))),
    }
}

async fn bnet_roster() -> Json<Value> {
    Json(parse(BNET_ROSTER))
}

async fn spawn_stub() -> SocketAddr {
    let app = Router::new()
        .route("/raiding/static-data", get(static_data))
        .route("/guilds/profile", get(guild_profile))
        .route("/token", post(token))
        .route("/data/wow/guild/tarren-mill/guttakrutt", get(bnet_guild))
        .route("/data/wow/guild/tarren-mill/guttakrutt/roster", get(bnet_roster));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn key() -> GuildKey {
    GuildKey::new("Guttakrutt", "Tarren Mill", Region::Eu)
}

#[tokio::test]
async fn test_raider_io_static_data() {
    let addr = spawn_stub().await;
    let client = RaiderIoClient::new(&format!("http://{addr}/")).unwrap();

    let data = client.static_data(10).await.unwrap();
    assert_eq!(data.raids.len(), 2);
    assert_eq!(data.raid("nerubar-palace").unwrap().encounters.len(), 8);
}

#[tokio::test]
async fn test_raider_io_unknown_guild_is_not_found() {
    let addr = spawn_stub().await;
    let client = RaiderIoClient::new(&format!("http://{addr}")).unwrap();

    let err = client
        .guild_profile(&GuildKey::new("Nobody", "Tarren Mill", Region::Eu))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.service(), "raider.io");
}

#[tokio::test]
async fn test_raider_io_encounters() {
    let addr = spawn_stub().await;
    let client = RaiderIoClient::new(&format!("http://{addr}")).unwrap();

    let kills = client
        .raid_encounters(&key(), "liberation-of-undermine", Difficulty::Mythic)
        .await
        .unwrap();
    assert_eq!(kills.len(), 8);
    assert_eq!(kills.iter().filter(|k| k.defeated_at.is_some()).count(), 3);
}

#[tokio::test]
async fn test_battle_net_uses_cached_token() {
    let addr = spawn_stub().await;
    let config = BattleNetConfig {
        client_id: "id".to_string(),
        client_secret: "bnet-client-secret".into(),
        callback_url: None,
    };
    let client = BattleNetClient::with_endpoints(
        reqwest::Client::new(),
        &config,
        format!("http://{addr}/token"),
        &format!("http://{addr}/"),
    );

    let guild = client.guild(&key()).await.unwrap();
    assert_eq!(guild.member_count, Some(3));

    let roster = client.roster(&key()).await.unwrap();
    assert_eq!(roster.members.len(), 3);

    // credentials and the cached token stay out of debug output
    let printed = format!("{client:?}");
    assert!(!printed.contains("bnet-client-secret"));
    assert!(!printed.contains("stub-token"));
    assert_eq!(config.client_secret.expose_secret(), "bnet-client-secret");
}

#[tokio::test]
async fn test_battle_net_outage_marks_roster_partial() {
    let addr = spawn_stub().await;
    let raider_io = RaiderIoClient::new(&format!("http://{addr}")).unwrap();
    let config = BattleNetConfig {
        client_id: "id".to_string(),
        client_secret: "secret".into(),
        callback_url: None,
    };
    // nothing listens on the discard port
    let battle_net = BattleNetClient::with_endpoints(
        reqwest::Client::new(),
        &config,
        "http://127.0.0.1:9/token",
        "http://127.0.0.1:9/",
    );
    let source = GameDataSource::new(
        raider_io,
        Some(battle_net),
        SnapshotAssembler::new(vec!["liberation-of-undermine".to_string()]),
        10,
    );

    let snapshot = source.fetch_snapshot(&key()).await.unwrap();
    assert_eq!(snapshot.characters.len(), 2);
    assert!(!snapshot.roster_complete);
}

#[tokio::test]
async fn test_full_snapshot_from_stub() {
    let addr = spawn_stub().await;
    let raider_io = RaiderIoClient::new(&format!("http://{addr}")).unwrap();
    let source = GameDataSource::new(
        raider_io,
        None,
        SnapshotAssembler::new(vec!["liberation-of-undermine".to_string()]),
        10,
    );

    let snapshot = source.fetch_snapshot(&key()).await.unwrap();
    assert_eq!(snapshot.characters.len(), 2);
    assert_eq!(snapshot.progress.len(), 3);
    // mythic has eight encounters; heroic and normal came back empty
    assert_eq!(snapshot.bosses.len(), 8 + 8 + 8);
    assert_eq!(
        snapshot
            .bosses
            .iter()
            .filter(|b| b.difficulty == Difficulty::Mythic && b.defeated)
            .count(),
        3
    );
}
