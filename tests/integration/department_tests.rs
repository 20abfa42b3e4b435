//! Department endpoint tests

use admin_portal::models::DepartmentDto;
use serde_json::json;
use uuid::Uuid;

use crate::common::{department_body, DepartmentFixtures, EmployeeBuilder, TestApp};

#[tokio::test]
async fn test_create_department_returns_created_with_location() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/departments", DepartmentFixtures::engineering())
        .await;
    response.assert_created();

    let department: DepartmentDto = response.json();
    assert_eq!(department.name, "Eng");
    assert_eq!(department.description.as_deref(), Some("Engineering"));
    assert!(department.employees.is_empty());
    assert_eq!(
        response.location(),
        Some(format!("/api/departments/{}", department.id))
    );
}

#[tokio::test]
async fn test_create_department_requires_name() {
    let app = TestApp::new().await;

    app.post_json("/api/departments", json!({ "description": "No name" }))
        .await
        .assert_bad_request();
    app.post_json("/api/departments", json!({ "name": "" }))
        .await
        .assert_bad_request();

    let list: Vec<DepartmentDto> = app.get("/api/departments").await.json();
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_create_department_rejects_malformed_json() {
    let app = TestApp::new().await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/departments")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{ not json"))
        .unwrap();

    app.request(request).await.assert_bad_request();
}

#[tokio::test]
async fn test_get_department_includes_employees() {
    let app = TestApp::new().await;
    let department_id = app.create_department("Eng").await;

    let first = app
        .create_employee(EmployeeBuilder::new().in_department(department_id).build())
        .await;
    let second = app
        .create_employee(EmployeeBuilder::new().in_department(department_id).build())
        .await;
    app.create_employee(EmployeeBuilder::new().build()).await;

    let department: DepartmentDto = app
        .get(&format!("/api/departments/{}", department_id))
        .await
        .json();

    let mut ids: Vec<Uuid> = department.employees.iter().map(|e| e.id).collect();
    ids.sort();
    let mut expected = vec![first, second];
    expected.sort();
    assert_eq!(ids, expected);

    for employee in &department.employees {
        assert_eq!(employee.department_id, Some(department_id));
        assert!(employee.department.is_none());
    }
}

#[tokio::test]
async fn test_list_departments_matches_get() {
    let app = TestApp::new().await;

    for _ in 0..3 {
        let response = app.post_json("/api/departments", department_body()).await;
        response.assert_created();
        let id = response.id();
        app.create_employee(EmployeeBuilder::new().in_department(id).build())
            .await;
    }

    let list: Vec<DepartmentDto> = app.get("/api/departments").await.json();
    assert_eq!(list.len(), 3);

    for department in list {
        let single: DepartmentDto = app
            .get(&format!("/api/departments/{}", department.id))
            .await
            .json();
        assert_eq!(single, department);
        assert_eq!(single.employees.len(), 1);
    }
}

#[tokio::test]
async fn test_get_unknown_department_returns_empty_404() {
    let app = TestApp::new().await;

    let response = app
        .get(&format!("/api/departments/{}", Uuid::new_v4()))
        .await;
    response.assert_not_found();
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_update_department_partial() {
    let app = TestApp::new().await;
    let id = app
        .post_json("/api/departments", DepartmentFixtures::engineering())
        .await
        .id();

    app.put_json(
        &format!("/api/departments/{}", id),
        json!({ "name": "Engineering" }),
    )
    .await
    .assert_no_content();

    let department: DepartmentDto = app.get(&format!("/api/departments/{}", id)).await.json();
    assert_eq!(department.name, "Engineering");
    assert_eq!(department.description.as_deref(), Some("Engineering"));
}

#[tokio::test]
async fn test_update_department_with_nulls_changes_nothing() {
    let app = TestApp::new().await;
    let id = app
        .post_json("/api/departments", DepartmentFixtures::engineering())
        .await
        .id();
    let before: DepartmentDto = app.get(&format!("/api/departments/{}", id)).await.json();

    app.put_json(
        &format!("/api/departments/{}", id),
        json!({ "name": null, "description": null }),
    )
    .await
    .assert_no_content();

    let after: DepartmentDto = app.get(&format!("/api/departments/{}", id)).await.json();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_update_unknown_department_returns_404() {
    let app = TestApp::new().await;

    app.put_json(
        &format!("/api/departments/{}", Uuid::new_v4()),
        json!({ "name": "Ghost" }),
    )
    .await
    .assert_not_found();
}

#[tokio::test]
async fn test_delete_department() {
    let app = TestApp::new().await;
    let id = app.create_department("Temp").await;

    app.delete(&format!("/api/departments/{}", id))
        .await
        .assert_no_content();

    app.get(&format!("/api/departments/{}", id))
        .await
        .assert_not_found();

    // Second delete finds nothing
    app.delete(&format!("/api/departments/{}", id))
        .await
        .assert_not_found();
}

#[tokio::test]
async fn test_department_routes_with_non_uuid_id_return_404() {
    let app = TestApp::new().await;

    app.get("/api/departments/eng").await.assert_not_found();
    app.put_json("/api/departments/eng", json!({ "name": "X" }))
        .await
        .assert_not_found();
    app.delete("/api/departments/eng").await.assert_not_found();
}
