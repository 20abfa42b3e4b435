//! Employee endpoint tests

use admin_portal::models::EmployeeDto;
use rstest::rstest;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::common::{EmployeeBuilder, EmployeeFixtures, TestApp};

#[tokio::test]
async fn test_create_employee_returns_created_with_location() {
    let app = TestApp::new().await;

    let response = app.post_json("/api/employees", EmployeeFixtures::john()).await;
    response.assert_created();

    let employee: EmployeeDto = response.json();
    assert_eq!(employee.name, "John Doe");
    assert_eq!(employee.email, "john@test.com");
    assert_eq!(employee.phone.as_deref(), Some("123-456-7890"));
    assert_eq!(employee.salary, Decimal::from(50000));
    assert!(employee.department_id.is_none());
    assert!(employee.department.is_none());
    assert_ne!(employee.id, Uuid::nil());

    assert_eq!(
        response.location(),
        Some(format!("/api/employees/{}", employee.id))
    );
}

#[tokio::test]
async fn test_location_points_at_created_employee() {
    let app = TestApp::new().await;

    let created = app.post_json("/api/employees", EmployeeFixtures::john()).await;
    let location = created.location().expect("Location header missing");

    let fetched = app.get(&location).await;
    fetched.assert_ok();
    assert_eq!(fetched.json::<EmployeeDto>(), created.json::<EmployeeDto>());
}

#[tokio::test]
async fn test_create_minimal_employee_defaults_salary() {
    let app = TestApp::new().await;

    let id = app.create_employee(EmployeeFixtures::minimal()).await;
    let employee: EmployeeDto = app.get(&format!("/api/employees/{}", id)).await.json();

    assert_eq!(employee.salary, Decimal::ZERO);
    assert!(employee.phone.is_none());
}

#[rstest]
#[case::missing_name(json!({ "email": "a@x.com" }))]
#[case::missing_email(json!({ "name": "Ann" }))]
#[case::empty_name(json!({ "name": "", "email": "a@x.com" }))]
#[case::empty_email(json!({ "name": "Ann", "email": "" }))]
#[case::bad_department_id(json!({ "name": "Ann", "email": "a@x.com", "departmentId": "nope" }))]
#[tokio::test]
async fn test_create_rejects_invalid_body(#[case] body: serde_json::Value) {
    let app = TestApp::new().await;

    let response = app.post_json("/api/employees", body).await;
    response.assert_bad_request();

    let json: serde_json::Value = response.json();
    assert_eq!(json["error"], "validation_error");
    assert_eq!(app.employee_count().await, 0);
}

#[tokio::test]
async fn test_get_unknown_employee_returns_empty_404() {
    let app = TestApp::new().await;

    let response = app.get(&format!("/api/employees/{}", Uuid::new_v4())).await;
    response.assert_not_found();
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_get_with_non_uuid_id_returns_404() {
    let app = TestApp::new().await;
    app.get("/api/employees/42").await.assert_not_found();
}

#[tokio::test]
async fn test_list_returns_all_employees() {
    let app = TestApp::new().await;

    for _ in 0..3 {
        app.create_employee(EmployeeBuilder::new().build()).await;
    }

    assert_eq!(app.employee_count().await, 3);
}

#[tokio::test]
async fn test_update_overwrites_present_fields_only() {
    let app = TestApp::new().await;
    let id = app.create_employee(EmployeeFixtures::john()).await;

    let response = app
        .put_json(
            &format!("/api/employees?id={}", id),
            json!({
                "name": "Updated Name",
                "email": "updated@test.com",
                "salary": 60000
            }),
        )
        .await;
    response.assert_no_content();
    assert!(response.body.is_empty());

    let employee: EmployeeDto = app.get(&format!("/api/employees/{}", id)).await.json();
    assert_eq!(employee.name, "Updated Name");
    assert_eq!(employee.email, "updated@test.com");
    assert_eq!(employee.phone.as_deref(), Some("123-456-7890"));
    assert_eq!(employee.salary, Decimal::from(60000));
}

#[tokio::test]
async fn test_update_with_explicit_nulls_changes_nothing() {
    let app = TestApp::new().await;
    let id = app.create_employee(EmployeeFixtures::john()).await;
    let before: EmployeeDto = app.get(&format!("/api/employees/{}", id)).await.json();

    app.put_json(
        &format!("/api/employees?id={}", id),
        json!({ "name": null, "phone": null, "departmentId": null }),
    )
    .await
    .assert_no_content();

    let after: EmployeeDto = app.get(&format!("/api/employees/{}", id)).await.json();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_update_unknown_employee_returns_404() {
    let app = TestApp::new().await;

    app.put_json(
        &format!("/api/employees?id={}", Uuid::new_v4()),
        json!({ "name": "Test" }),
    )
    .await
    .assert_not_found();

    assert_eq!(app.employee_count().await, 0);
}

#[rstest]
#[case::missing_id("/api/employees")]
#[case::malformed_id("/api/employees?id=abc")]
#[tokio::test]
async fn test_update_requires_valid_id(#[case] uri: &str) {
    let app = TestApp::new().await;
    app.put_json(uri, json!({ "name": "Test" }))
        .await
        .assert_bad_request();
}

#[tokio::test]
async fn test_delete_employee() {
    let app = TestApp::new().await;
    let id = app.create_employee(EmployeeFixtures::john()).await;

    app.delete(&format!("/api/employees?id={}", id))
        .await
        .assert_no_content();

    app.get(&format!("/api/employees/{}", id))
        .await
        .assert_not_found();
}

#[tokio::test]
async fn test_delete_unknown_employee_returns_404() {
    let app = TestApp::new().await;
    app.delete(&format!("/api/employees?id={}", Uuid::new_v4()))
        .await
        .assert_not_found();
}

#[tokio::test]
async fn test_salary_is_a_json_number() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/employees",
            json!({ "name": "Ann", "email": "a@x.com", "salary": 50000 }),
        )
        .await;
    response.assert_created();

    let json: serde_json::Value = response.json();
    assert!(json["salary"].is_number(), "salary was {}", json["salary"]);

    let listed: Vec<serde_json::Value> = app.get("/api/employees").await.json();
    assert!(listed[0]["salary"].is_number());
}

#[tokio::test]
async fn test_salary_string_input_keeps_precision() {
    let app = TestApp::new().await;
    let department = app.create_department("Eng").await;

    let id = app.create_employee(EmployeeFixtures::ann_in(department)).await;
    let json: serde_json::Value = app.get(&format!("/api/employees/{}", id)).await.json();

    assert!(json["salary"].is_number());
    assert_eq!(json["salary"].to_string(), "61000.50");
}
