//! Appointments API integration tests against a mock backend.

use chrono::DateTime;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use carelink_client::{ApiClient, ApiError, AppointmentsApi, Session};
use carelink_core::models::{Appointment, AppointmentStatus, Priority};

fn appointment_json(id: &str, scheduled_at: &str, status: &str, duration: u32) -> serde_json::Value {
    json!({
        "id": id,
        "patientId": "patient-1",
        "doctorId": "doctor-1",
        "scheduledAt": scheduled_at,
        "durationMinutes": duration,
        "status": status,
        "priority": "normal",
        "type": "checkup"
    })
}

async fn mock_list(server: &MockServer, user_id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/appointments/all"))
        .and(query_param("x", user_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_decodes_wire_shape() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mock_list(
        &server,
        "patient-1",
        json!([appointment_json("appo-1", "2025-03-10T10:00:00+00:00", "confirmed", 30)]),
    )
    .await;

    let client = ApiClient::new(Session::new(server.uri()));
    let appointments = AppointmentsApi::new(&client).list("patient-1").await?;

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].status, AppointmentStatus::Confirmed);
    assert_eq!(appointments[0].duration_minutes, Some(30));
    assert_eq!(appointments[0].priority, Priority::Normal);
    Ok(())
}

#[tokio::test]
async fn test_missing_collection_is_not_found_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/appointments/all"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ApiClient::new(Session::new(server.uri()));
    let err = AppointmentsApi::new(&client)
        .list("patient-1")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::NotFound));
}

#[tokio::test]
async fn test_bearer_token_attached_when_authenticated() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/appointments/all"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(Session::with_token(server.uri(), "jwt-abc"));
    let appointments = AppointmentsApi::new(&client).list("patient-1").await?;
    assert!(appointments.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_check_conflicts_detects_overlap() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mock_list(
        &server,
        "patient-1",
        json!([appointment_json("appo-1", "2025-03-10T10:00:00+00:00", "confirmed", 60)]),
    )
    .await;

    let client = ApiClient::new(Session::new(server.uri()));
    let api = AppointmentsApi::new(&client);

    let overlapping = DateTime::parse_from_rfc3339("2025-03-10T10:30:00+00:00")?;
    assert!(api.check_conflicts("patient-1", overlapping, 30).await?);

    // Touching the existing end is allowed (half-open intervals).
    let touching = DateTime::parse_from_rfc3339("2025-03-10T11:00:00+00:00")?;
    assert!(!api.check_conflicts("patient-1", touching, 30).await?);

    let next_day = DateTime::parse_from_rfc3339("2025-03-11T10:30:00+00:00")?;
    assert!(!api.check_conflicts("patient-1", next_day, 30).await?);
    Ok(())
}

#[tokio::test]
async fn test_check_conflicts_surfaces_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/appointments/all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ApiClient::new(Session::new(server.uri()));
    let start = DateTime::parse_from_rfc3339("2025-03-10T10:30:00+00:00").unwrap();

    // An unknown conflict state is an error, never a silent "no conflict".
    let err = AppointmentsApi::new(&client)
        .check_conflicts("patient-1", start, 30)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { code: 500 }));
}

#[tokio::test]
async fn test_upcoming_excludes_past_and_cancelled() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mock_list(
        &server,
        "patient-1",
        json!([
            appointment_json("past-confirmed", "2025-03-10T08:00:00+00:00", "confirmed", 30),
            appointment_json("future-cancelled", "2025-03-11T09:00:00+00:00", "cancelled", 30),
            appointment_json("later", "2025-03-12T09:00:00+00:00", "scheduled", 30),
            appointment_json("sooner", "2025-03-10T15:00:00+00:00", "scheduled", 30),
        ]),
    )
    .await;

    let client = ApiClient::new(Session::new(server.uri()));
    let now = DateTime::parse_from_rfc3339("2025-03-10T12:00:00+00:00")?;
    let upcoming = AppointmentsApi::new(&client).upcoming("patient-1", now).await?;

    let ids: Vec<&str> = upcoming.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["sooner", "later"]);
    Ok(())
}

#[tokio::test]
async fn test_create_validates_before_sending() {
    // No mock mounted: an invalid appointment must be rejected before any
    // request is made.
    let server = MockServer::start().await;
    let client = ApiClient::new(Session::new(server.uri()));
    let now = DateTime::parse_from_rfc3339("2025-03-10T12:00:00+00:00").unwrap();

    let stale = Appointment {
        id: String::new(),
        patient_id: "patient-1".into(),
        doctor_id: "doctor-1".into(),
        doctor_name: None,
        scheduled_at: "2025-03-09T10:00:00+00:00".into(),
        duration_minutes: Some(30),
        status: AppointmentStatus::Scheduled,
        priority: Priority::Normal,
        appointment_type: "checkup".into(),
        is_recurring: false,
        recurring_pattern: None,
        recurring_end_date: None,
        reminder_enabled: false,
        reminder_minutes_before: None,
        notes: None,
    };

    let err = AppointmentsApi::new(&client)
        .create(&stale, now)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_cancel_posts_to_cancel_route() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/appointments/cancel/appo-1"))
        .and(query_param("x", "patient-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(Session::new(server.uri()));
    AppointmentsApi::new(&client)
        .cancel("appo-1", "patient-1")
        .await?;
    Ok(())
}
