#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use chrono::NaiveDate;
use serde_json::json;

fn employee_json(id: i64, code: &str, department: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": code,
        "full_name": format!("Employee {}", id),
        "email": format!("emp{}@company.com", id),
        "department": department
    })
}

fn attendance_json(id: i64, date: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": 1,
        "date": date,
        "status": status
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn api_client_employee_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/");
        then.status(200).json_body(json!([
            employee_json(1, "EMP-001", "Engineering"),
            employee_json(2, "EMP-002", "Sales")
        ]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/employees/");
        then.status(201)
            .json_body(employee_json(3, "EMP-003", "Marketing"));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/2");
        then.status(200)
            .json_body(json!({ "message": "Deleted successfully" }));
    });

    let client = api_client(&server);
    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[1].employee_id, "EMP-002");

    let created = client
        .create_employee(&CreateEmployee {
            employee_id: "EMP-003".into(),
            full_name: "Employee 3".into(),
            email: "emp3@company.com".into(),
            department: "Marketing".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 3);

    let sent = server.received(POST, "/api/employees/");
    assert_eq!(
        sent[0].body,
        Some(json!({
            "employee_id": "EMP-003",
            "full_name": "Employee 3",
            "email": "emp3@company.com",
            "department": "Marketing"
        }))
    );

    client.delete_employee(2).await.unwrap();
    assert_eq!(server.hits(DELETE, "/api/employees/2"), 1);
}

#[tokio::test]
async fn api_client_attendance_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance/1");
        then.status(200).json_body(json!([
            attendance_json(10, "2024-01-03", "Present"),
            attendance_json(11, "2024-01-02", "Absent")
        ]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance/");
        then.status(201)
            .json_body(attendance_json(12, "2024-01-04", "Present"));
    });

    let client = api_client(&server);
    let records = client.list_attendance(1).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 10);
    assert_eq!(records[1].status, AttendanceStatus::Absent);

    let saved = client
        .upsert_attendance(&AttendanceUpsert {
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            status: AttendanceStatus::Present,
        })
        .await
        .unwrap();
    assert_eq!(saved.id, 12);
    let sent = server.received(POST, "/api/attendance/");
    assert_eq!(
        sent[0].body,
        Some(json!({ "employee_id": 1, "date": "2024-01-04", "status": "Present" }))
    );
}

#[tokio::test]
async fn api_client_surfaces_detail_from_error_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/employees/");
        then.status(400)
            .json_body(json!({ "detail": "Employee ID or Email already exists" }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/9");
        then.status(404)
            .json_body(json!({ "detail": "Employee not found" }));
    });

    let client = api_client(&server);
    let err = client
        .create_employee(&CreateEmployee {
            employee_id: "EMP-001".into(),
            full_name: "Dup".into(),
            email: "dup@company.com".into(),
            department: "Sales".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
    assert_eq!(err.detail.as_deref(), Some("Employee ID or Email already exists"));

    let err = client.delete_employee(9).await.unwrap_err();
    assert_eq!(err.code, "NOT_FOUND");
    assert_eq!(err.status, Some(404));
}

#[tokio::test]
async fn api_client_error_without_detail_uses_fallback() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/");
        then.status(500).json_body(json!({}));
    });

    let client = api_client(&server);
    let err = client.list_employees().await.unwrap_err();
    assert_eq!(err.code, "HTTP_ERROR");
    assert!(err.detail.is_none());
    assert_eq!(err.message_or("Failed to fetch employees."), "Failed to fetch employees.");
}

#[tokio::test]
async fn api_client_reports_unparseable_payload() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance/4");
        then.status(200).json_body(json!({ "unexpected": true }));
    });

    let client = api_client(&server);
    let err = client.list_attendance(4).await.unwrap_err();
    assert_eq!(err.code, "PARSE_ERROR");
}
