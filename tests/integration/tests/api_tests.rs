//! API Integration Tests
//!
//! These tests require a database; migrations are applied on startup:
//! - PostgreSQL: `DATABASE_URL`
//! - MySQL: `DATABASE_TYPE=mysql` plus `MYSQL_*`
//!
//! Run with: cargo test -p integration-tests --test api_tests

use guild_client::{GuildApiClient, GuildParams, RaidBossesParams};
use guild_core::Difficulty;
use integration_tests::{
    assert_json, assert_status, check_test_env, seed_guild, test_config, unique_guild_key,
    TestServer, RAID_NAME, RAID_SLUG,
};
use reqwest::StatusCode;
use serde_json::Value;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Guild Data Tests
// ============================================================================

#[tokio::test]
async fn test_guild_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeded = seed_guild(server.state.service_context()).await.unwrap();

    let response = server
        .get(&format!("/api/guild?{}", seeded.query()))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["id"], seeded.guild_id);
    assert_eq!(body["name"], seeded.key.name.as_str());
    assert_eq!(body["faction"], "horde");
    assert_eq!(body["memberCount"], 2);
}

#[tokio::test]
async fn test_unknown_guild() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let key = unique_guild_key();

    let response = server
        .get(&format!("/api/roster?name={}&realm=Draenor", key.name.replace(' ', "%20")))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_GUILD");
}

#[tokio::test]
async fn test_roster_ordered_by_rank() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeded = seed_guild(server.state.service_context()).await.unwrap();

    let response = server
        .get(&format!("/api/roster?{}", seeded.query()))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["apiStatus"], "success");
    let characters = body["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0]["name"], "Krutt");
    assert_eq!(characters[0]["rankName"], "Guild Master");
    assert_eq!(characters[0]["classColor"]["hex"], "#C41E3A");
    assert_eq!(characters[0]["mythicScore"], 2891.37);
    assert_eq!(characters[1]["name"], "Bladewind");
}

#[tokio::test]
async fn test_raid_bosses_by_name_and_slug() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeded = seed_guild(server.state.service_context()).await.unwrap();

    for raid in [RAID_NAME.replace(' ', "%20"), RAID_SLUG.to_string()] {
        let response = server
            .get(&format!("/api/raid-bosses?raid={raid}&{}", seeded.query()))
            .await
            .unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

        let bosses = body["bosses"].as_array().unwrap();
        assert_eq!(bosses.len(), 3);
        assert_eq!(bosses[0]["slug"], "vexie");
        assert_eq!(bosses[0]["status"], "defeated");
        assert_eq!(bosses[1]["status"], "in_progress");
        assert_eq!(bosses[2]["status"], "not_started");
    }

    let response = server
        .get(&format!("/api/raid-bosses?raid={RAID_SLUG}&difficulty=heroic&{}", seeded.query()))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["apiStatus"], "empty");
    assert!(body["lastUpdated"].is_null());
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_client_against_live_server() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeded = seed_guild(server.state.service_context()).await.unwrap();
    let client = GuildApiClient::new(&server.base_url()).unwrap();
    let params = GuildParams::new(&seeded.key.name, &seeded.key.realm, seeded.key.region);

    let info = client.fetch_guild_info(&params).await.unwrap();
    assert_eq!(info.id, seeded.guild_id);

    let roster = client.fetch_roster(&params).await.unwrap();
    assert_eq!(roster.characters.len(), 2);

    let progress = client.fetch_raid_progress(&params).await.unwrap();
    let mythic = progress.find(RAID_SLUG, "mythic").unwrap();
    assert_eq!(mythic.summary, "1/8 Mythic");

    let bosses = client
        .fetch_raid_bosses(
            &RaidBossesParams::new(RAID_NAME)
                .guild(params.clone())
                .difficulty(Difficulty::Mythic),
        )
        .await
        .unwrap();
    assert_eq!(bosses.bosses.len(), 3);
}

// ============================================================================
// Sync Tests
// ============================================================================

#[tokio::test]
async fn test_sync_requires_token() {
    if !check_test_env() {
        return;
    }

    let mut config = test_config().unwrap();
    config.sync.token = Some("integration-secret".into());
    let server = TestServer::start_with_config(config).await.unwrap();

    let response = server.post_sync("/api/admin/sync", None).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.post_sync("/api/admin/sync", Some("wrong")).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_sync_upstream_unreachable() {
    if !check_test_env() {
        return;
    }

    let mut config = test_config().unwrap();
    config.sync.token = Some("integration-secret".into());
    // nothing listens on the discard port
    config.sync.raider_io_base_url = "http://127.0.0.1:9".to_string();
    config.battle_net = None;
    let server = TestServer::start_with_config(config).await.unwrap();

    let response = server
        .post_sync("/api/admin/sync", Some("integration-secret"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_GATEWAY).await.unwrap();
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");
}
