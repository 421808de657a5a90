//! API Integration Tests
//!
//! Each test spawns its own server over a fresh in-memory store, so no
//! external services are needed.
//!
//! Run with: cargo test -p fleet-integration-tests --test api_tests

use fleet_integration_tests::{
    assert_json, assert_status, ErrorBody, LogEntry, Paginated, RegisterRobot, Robot,
    StatusResponse, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn server() -> TestServer {
    TestServer::start().await.expect("Failed to start server")
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server().await;
    let response = server.get("/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = server().await;
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_unknown_route() {
    let server = server().await;
    let response = server.get("/robots/RBT001/telemetry").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "Route not found");
    assert_eq!(body.code, "NOT_FOUND");
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_robot() {
    let server = server().await;
    let registered = server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap();

    assert_eq!(registered.message, "Robot registered successfully");
    assert_eq!(registered.robot.id, "RBT001");
    assert_eq!(registered.robot.robot_type, "AMR");
    assert_eq!(registered.robot.status, "idle");
    assert!(registered.robot.battery.is_none());
    assert_eq!(registered.api_key.len(), 48);
    assert!(registered.api_key.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_register_duplicate_returns_existing_robot() {
    let server = server().await;
    let first = server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap();

    let mut again = RegisterRobot::new("RBT001", "Drone");
    again.name = "Impostor".to_string();
    let response = server.post("/robots", &again).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();

    assert_eq!(body.code, "ROBOT_ALREADY_EXISTS");
    let existing = body.robot.expect("conflict echoes the stored robot");
    assert_eq!(existing.name, "Bot");
    assert_eq!(existing.robot_type, "AMR");

    // Still exactly one robot, still reachable with the original key
    let response = server.get("/robots").await.unwrap();
    let page: Paginated<Robot> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.total, 1);

    let response = server
        .update_status("RBT001", &first.api_key, &json!({"battery": 50}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_register_validation() {
    let server = server().await;

    let response = server.post("/robots", &json!({"id": "RBT001"})).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "VALIDATION_ERROR");
    assert!(body.details.is_some());

    let response = server
        .post("/robots", &RegisterRobot::new("RBT001", "Submarine"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_ROBOT_TYPE");

    let response = server
        .post("/robots", &json!({"id": "RBT001", "name": "   ", "type": "Arm"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get("/robots/RBT001").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_reads_never_expose_the_key() {
    let server = server().await;
    server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap();

    let response = server.get("/robots/RBT001").await.unwrap();
    let robot: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(robot.get("apiKey").is_none());
    assert_eq!(robot["name"], "Bot");

    let response = server.get("/robots").await.unwrap();
    let text = response.text().await.unwrap();
    assert!(!text.contains("apiKey"));
}

#[tokio::test]
async fn test_get_unknown_robot() {
    let server = server().await;
    let response = server.get("/robots/ghost").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.code, "UNKNOWN_ROBOT");
}

// ============================================================================
// Authentication Guard
// ============================================================================

#[tokio::test]
async fn test_status_update_requires_valid_key() {
    let server = server().await;
    let registered = server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap();
    let body = json!({"battery": 10});

    let response = server
        .patch_with_key("/robots/RBT001/status", None, &body)
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.code, "MISSING_API_KEY");

    let response = server
        .update_status("RBT001", &"0".repeat(48), &body)
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.code, "INVALID_API_KEY");

    let response = server
        .update_status("ghost", &registered.api_key, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // A rejected call changes nothing
    let response = server.get("/robots/RBT001").await.unwrap();
    let robot: Robot = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(robot.battery.is_none());
}

#[tokio::test]
async fn test_key_is_bound_to_its_robot() {
    let server = server().await;
    let first = server
        .register_robot(&RegisterRobot::new("A1", "Arm"))
        .await
        .unwrap();
    server
        .register_robot(&RegisterRobot::new("A2", "Arm"))
        .await
        .unwrap();

    let response = server
        .update_status("A2", &first.api_key, &json!({"mode": "active"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Status Updates
// ============================================================================

#[tokio::test]
async fn test_battery_bounds() {
    let server = server().await;
    let key = server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap()
        .api_key;

    let response = server
        .update_status("RBT001", &key, &json!({"battery": 150}))
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.code, "INVALID_BATTERY");

    let response = server
        .update_status("RBT001", &key, &json!({"battery": 85}))
        .await
        .unwrap();
    let updated: StatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.message, "Status updated");
    assert_eq!(updated.robot.battery, Some(85.0));

    let response = server.get("/robots/RBT001").await.unwrap();
    let robot: Robot = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(robot.battery, Some(85.0));
}

#[tokio::test]
async fn test_error_takes_precedence_over_mode() {
    let server = server().await;
    let key = server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap()
        .api_key;

    let response = server
        .update_status(
            "RBT001",
            &key,
            &json!({"mode": "active", "error": "sensor fault"}),
        )
        .await
        .unwrap();
    let updated: StatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.robot.status, "error");
    assert_eq!(updated.robot.error.as_deref(), Some("sensor fault"));

    // null clears the text; the mode in the same call is then honoured
    let response = server
        .update_status("RBT001", &key, &json!({"mode": "idle", "error": null}))
        .await
        .unwrap();
    let updated: StatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.robot.status, "idle");
    assert!(updated.robot.error.is_none());
}

#[tokio::test]
async fn test_location_is_stored_and_cleared() {
    let server = server().await;
    let key = server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap()
        .api_key;

    let location = json!({"x": 12.5, "y": -3, "floor": "B2"});
    let response = server
        .update_status("RBT001", &key, &json!({"location": location}))
        .await
        .unwrap();
    let updated: StatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.robot.location, Some(location));

    let response = server
        .update_status("RBT001", &key, &json!({"location": null}))
        .await
        .unwrap();
    let updated: StatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.robot.location.is_none());
}

#[tokio::test]
async fn test_update_rejects_empty_and_invalid_bodies() {
    let server = server().await;
    let key = server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap()
        .api_key;

    let response = server.update_status("RBT001", &key, &json!({})).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.code, "NO_UPDATABLE_FIELDS");

    let response = server
        .update_status("RBT001", &key, &json!({"mode": "flying"}))
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.code, "INVALID_STATUS");
}

#[tokio::test]
async fn test_each_update_emits_one_system_log() {
    let server = server().await;
    let key = server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap()
        .api_key;

    for body in [
        json!({"battery": 70}),
        json!({"mode": "charging"}),
        json!({"error": "wheel jam"}),
    ] {
        let response = server.update_status("RBT001", &key, &body).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get("/robots/RBT001/logs").await.unwrap();
    let logs: Paginated<LogEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logs.meta.total, 3);
    assert!(logs.data.iter().all(|l| l.source == "system"));

    // Newest first: the error update is on top and logged at error level
    assert_eq!(logs.data[0].level, "error");
    assert!(logs.data[0].message.contains("error=wheel jam"));
    assert_eq!(logs.data[2].level, "info");
    assert!(logs.data[2].message.contains("battery=70%"));
}

// ============================================================================
// Logs
// ============================================================================

#[tokio::test]
async fn test_create_log() {
    let server = server().await;
    server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap();

    let response = server
        .post(
            "/robots/RBT001/logs",
            &json!({"message": "  door opened  ", "level": "WARN", "meta": {"door": 3}}),
        )
        .await
        .unwrap();
    let log: LogEntry = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(log.robot_id, "RBT001");
    assert_eq!(log.message, "door opened");
    assert_eq!(log.level, "warn");
    assert_eq!(log.source, "manual");
    assert_eq!(log.meta, Some(json!({"door": 3})));
}

#[tokio::test]
async fn test_robot_source_is_forbidden() {
    let server = server().await;
    server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap();

    for source in ["robot", "Robot", "ROBOT"] {
        let response = server
            .post(
                "/robots/RBT001/logs",
                &json!({"message": "spoofed", "source": source}),
            )
            .await
            .unwrap();
        let err: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
        assert_eq!(err.code, "ROBOT_SOURCE_FORBIDDEN");
    }

    let response = server.get("/robots/RBT001/logs").await.unwrap();
    let logs: Paginated<LogEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logs.meta.total, 0);
}

#[tokio::test]
async fn test_create_log_validation() {
    let server = server().await;
    server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap();

    let cases = [
        (json!({"message": "   "}), "EMPTY_LOG_MESSAGE"),
        (json!({"message": "x", "level": "fatal"}), "INVALID_LOG_LEVEL"),
        (json!({"message": "x", "source": "satellite"}), "INVALID_LOG_SOURCE"),
    ];
    for (body, code) in cases {
        let response = server.post("/robots/RBT001/logs", &body).await.unwrap();
        let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(err.code, code);
    }

    let response = server
        .post("/robots/ghost/logs", &json!({"message": "hello"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/robots/ghost/logs").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_logs_are_newest_first() {
    let server = server().await;
    server
        .register_robot(&RegisterRobot::example())
        .await
        .unwrap();

    for i in 1..=5 {
        let response = server
            .post("/robots/RBT001/logs", &json!({"message": format!("entry {i}")}))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/robots/RBT001/logs?limit=2&page=1").await.unwrap();
    let logs: Paginated<LogEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    let messages: Vec<&str> = logs.data.iter().map(|l| l.message.as_str()).collect();
    assert_eq!(messages, vec!["entry 5", "entry 4"]);
    assert_eq!(logs.meta.pages, 3);

    let response = server.get("/robots/RBT001/logs?limit=2&page=3").await.unwrap();
    let logs: Paginated<LogEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logs.data.len(), 1);
    assert_eq!(logs.data[0].message, "entry 1");
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_robot_list_pagination() {
    let server = server().await;
    for i in 0..45 {
        server
            .register_robot(&RegisterRobot::new(&format!("R{i:02}"), "Drone"))
            .await
            .unwrap();
    }

    let response = server.get("/robots?limit=20").await.unwrap();
    let page: Paginated<Robot> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.total, 45);
    assert_eq!(page.meta.limit, 20);
    assert_eq!(page.meta.pages, 3);
    assert_eq!(page.data.len(), 20);

    let response = server.get("/robots?limit=1000&page=0").await.unwrap();
    let page: Paginated<Robot> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.limit, 100);
    assert_eq!(page.meta.page, 1);
    assert_eq!(page.data.len(), 45);

    let response = server.get("/robots?limit=abc&page=xyz").await.unwrap();
    let page: Paginated<Robot> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.limit, 20);
    assert_eq!(page.meta.page, 1);
}

#[tokio::test]
async fn test_robot_list_most_recently_updated_first() {
    let server = server().await;
    let first = server
        .register_robot(&RegisterRobot::new("OLD", "Arm"))
        .await
        .unwrap();
    server
        .register_robot(&RegisterRobot::new("NEW", "Arm"))
        .await
        .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let response = server
        .update_status("OLD", &first.api_key, &json!({"battery": 1}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/robots").await.unwrap();
    let page: Paginated<Robot> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data[0].id, "OLD");
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[tokio::test]
async fn test_example_scenario() {
    let server = server().await;

    let response = server
        .post(
            "/robots",
            &json!({"id": "RBT001", "name": "Bot", "type": "AMR"}),
        )
        .await
        .unwrap();
    let registered: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let key = registered["apiKey"].as_str().unwrap().to_string();

    let response = server
        .update_status("RBT001", &key, &json!({"battery": 40}))
        .await
        .unwrap();
    let updated: StatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.robot.battery, Some(40.0));

    let response = server.get("/robots/RBT001/logs").await.unwrap();
    let logs: Paginated<LogEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!logs.data.is_empty());
    assert!(logs.data.iter().any(|l| l.message.contains("battery=40%")));
}
