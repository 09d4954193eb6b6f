//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Unique-ish serial number per test run
fn serial(prefix: &str) -> String {
    format!("{}-{}", prefix, std::process::id())
}

async fn create_equipment(client: &Client, serial_number: &str) -> i64 {
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("x-acting-user", "tester")
        .json(&json!({
            "serial_number": serial_number,
            "model": "ThinkPad T14",
            "equipment_type_id": 3,
            "purchase_date": "2024-01-01"
        }))
        .send()
        .await
        .expect("Failed to create equipment");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No equipment ID")
}

async fn create_user(client: &Client, full_name: &str) -> i64 {
    let response = client
        .post(format!("{}/users", BASE_URL))
        .header("x-acting-user", "tester")
        .json(&json!({
            "full_name": full_name,
            "department": "IT"
        }))
        .send()
        .await
        .expect("Failed to create user");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No user ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_seeded_equipment_types() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment-types", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let types = body.as_array().expect("Expected array");
    assert!(types.len() >= 7);

    let laptop = types
        .iter()
        .find(|t| t["name"] == "Laptop")
        .expect("Laptop type not seeded");
    assert_eq!(laptop["maintenance_interval_days"], 180);
}

#[tokio::test]
#[ignore]
async fn test_create_equipment_derives_next_maintenance_date() {
    let client = Client::new();
    let sn = serial("EQ-DERIVE");

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("x-acting-user", "tester")
        .json(&json!({
            "serial_number": sn,
            "equipment_type_id": 3,
            "purchase_date": "2024-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    // Laptop interval is 180 days
    assert_eq!(body["next_maintenance_date"], "2024-06-29");
    assert_eq!(body["status"], 1);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_serial_number_rejected() {
    let client = Client::new();
    let sn = serial("EQ-DUP");
    create_equipment(&client, &sn).await;

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("x-acting-user", "tester")
        .json(&json!({
            "serial_number": sn,
            "equipment_type_id": 3
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_issue_and_return_flow() {
    let client = Client::new();
    let sn = serial("EQ-FLOW");
    let equipment_id = create_equipment(&client, &sn).await;
    let user_id = create_user(&client, "Flow Tester").await;

    // Issue
    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .header("x-acting-user", "issuer")
        .json(&json!({
            "equipment_id": equipment_id,
            "user_id": user_id
        }))
        .send()
        .await
        .expect("Failed to issue equipment");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let assignment_id = body["id"].as_i64().expect("No assignment ID");

    // Equipment is now in use
    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to fetch equipment");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 0);

    // A second active assignment is rejected
    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .header("x-acting-user", "issuer")
        .json(&json!({
            "equipment_id": equipment_id,
            "user_id": user_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // Return
    let response = client
        .post(format!("{}/assignments/{}/return", BASE_URL, assignment_id))
        .header("x-acting-user", "returner")
        .json(&json!({ "return_notes": "all good" }))
        .send()
        .await
        .expect("Failed to return equipment");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "returned");

    // Equipment is back in reserve
    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to fetch equipment");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 1);

    // The audit log recorded the return as Return, not Update
    let response = client
        .get(format!(
            "{}/log-entries?action=Return&search=Equipment%20(ID:%20{})",
            BASE_URL, equipment_id
        ))
        .send()
        .await
        .expect("Failed to fetch log entries");
    let body: Value = response.json().await.expect("Failed to parse response");
    let entries = body["entries"].as_array().expect("Expected entries array");
    assert!(!entries.is_empty());
    assert_eq!(entries[0]["entity_name"], "Assignment");
    assert_eq!(entries[0]["username"], "returner");
    assert!(entries[0]["details"]
        .as_str()
        .unwrap()
        .contains("returned by returner"));
}

#[tokio::test]
#[ignore]
async fn test_failed_maintenance_decommissions_equipment() {
    let client = Client::new();
    let sn = serial("EQ-FAIL");
    let equipment_id = create_equipment(&client, &sn).await;

    let response = client
        .post(format!("{}/maintenance-logs", BASE_URL))
        .header("x-acting-user", "technician")
        .json(&json!({
            "equipment_id": equipment_id,
            "performed_by": "Service Center",
            "maintenance_type": 2,
            "result": 3
        }))
        .send()
        .await
        .expect("Failed to record maintenance");

    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to fetch equipment");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 3);
    assert!(!body["decommission_date"].is_null());

    // No further maintenance can be recorded
    let response = client
        .post(format!("{}/maintenance-logs", BASE_URL))
        .header("x-acting-user", "technician")
        .json(&json!({
            "equipment_id": equipment_id,
            "performed_by": "Service Center",
            "result": 1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_future_maintenance_date_rejected() {
    let client = Client::new();
    let sn = serial("EQ-FUTURE");
    let equipment_id = create_equipment(&client, &sn).await;

    let response = client
        .post(format!("{}/maintenance-logs", BASE_URL))
        .header("x-acting-user", "technician")
        .json(&json!({
            "equipment_id": equipment_id,
            "performed_by": "Service Center",
            "date": "2099-01-01",
            "result": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // Equipment fields were not mutated
    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to fetch equipment");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["last_maintenance_date"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_successful_maintenance_updates_dates() {
    let client = Client::new();
    let sn = serial("EQ-DATES");
    let equipment_id = create_equipment(&client, &sn).await;

    let response = client
        .post(format!("{}/maintenance-logs", BASE_URL))
        .header("x-acting-user", "technician")
        .json(&json!({
            "equipment_id": equipment_id,
            "performed_by": "Service Center",
            "date": "2024-06-29",
            "result": 1
        }))
        .send()
        .await
        .expect("Failed to record maintenance");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    // Laptop interval is 180 days
    assert_eq!(body["next_maintenance_date"], "2024-12-26");

    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to fetch equipment");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["last_maintenance_date"], "2024-06-29");
    assert_eq!(body["next_maintenance_date"], "2024-12-26");
    assert_eq!(body["status"], 1);
}

#[tokio::test]
#[ignore]
async fn test_create_produces_audit_entry() {
    let client = Client::new();
    let sn = serial("EQ-AUDIT");
    create_equipment(&client, &sn).await;

    let response = client
        .get(format!(
            "{}/log-entries?action=Create&entity=Equipment&search={}",
            BASE_URL, sn
        ))
        .send()
        .await
        .expect("Failed to fetch log entries");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 1);
    let entries = body["entries"].as_array().expect("Expected entries array");
    assert_eq!(entries[0]["username"], "tester");
    assert!(entries[0]["details"]
        .as_str()
        .unwrap()
        .starts_with("Created new Equipment record"));
}

#[tokio::test]
#[ignore]
async fn test_blocked_user_cannot_be_issued_equipment() {
    let client = Client::new();
    let sn = serial("EQ-BLOCK");
    let equipment_id = create_equipment(&client, &sn).await;
    let user_id = create_user(&client, "Blocked Tester").await;

    let response = client
        .put(format!("{}/users/{}", BASE_URL, user_id))
        .header("x-acting-user", "tester")
        .json(&json!({ "is_blocked": true }))
        .send()
        .await
        .expect("Failed to block user");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .header("x-acting-user", "issuer")
        .json(&json!({
            "equipment_id": equipment_id,
            "user_id": user_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}
