//! Common step definitions used across features

use cucumber::then;

use crate::features::support::AdminWorld;

#[then(expr = "the response status should be {int}")]
async fn response_status(world: &mut AdminWorld, status: u16) {
    assert_eq!(
        world.response().status.as_u16(),
        status,
        "Body: {}",
        world.response().text()
    );
}

#[then("the response should contain an error")]
async fn response_contains_error(world: &mut AdminWorld) {
    let body: serde_json::Value = world.response().json();
    assert!(body.get("error").is_some());
}

#[then(expr = "the error type should be {string}")]
async fn error_type(world: &mut AdminWorld, expected: String) {
    let body: serde_json::Value = world.response().json();
    assert_eq!(body["error"], expected);
}

#[then("the response body should be empty")]
async fn response_body_empty(world: &mut AdminWorld) {
    assert!(world.response().body.is_empty());
}

#[then("the response should have a Location header for the created resource")]
async fn location_header(world: &mut AdminWorld) {
    let response = world.response();
    let location = response.location().expect("Location header missing");
    assert!(location.ends_with(&response.id().to_string()));
}
