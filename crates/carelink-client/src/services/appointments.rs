//! Appointments service facade.
//!
//! Fetches the user's full appointment list and delegates every derived
//! query to `carelink-core`, so the temporal logic lives in exactly one
//! place.

use chrono::{DateTime, FixedOffset, NaiveDate};

use carelink_core::models::{Appointment, AppointmentStatus};
use carelink_core::pipeline::Pipeline;
use carelink_core::schedule;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Appointment operations for one API client.
pub struct AppointmentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AppointmentsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All appointments for a user. A 404 surfaces as
    /// [`crate::ApiError::NotFound`], never as an empty list.
    pub async fn list(&self, user_id: &str) -> ApiResult<Vec<Appointment>> {
        self.client
            .get_json(&format!("/api/appointments/all?x={user_id}"))
            .await
    }

    /// One appointment by ID.
    pub async fn get(&self, appointment_id: &str) -> ApiResult<Appointment> {
        self.client
            .get_json(&format!("/api/appointments/{appointment_id}"))
            .await
    }

    /// Create an appointment. The creation-time invariants (future start,
    /// non-zero duration) are checked before anything goes on the wire.
    pub async fn create(
        &self,
        appointment: &Appointment,
        now: DateTime<FixedOffset>,
    ) -> ApiResult<Appointment> {
        appointment.validate(now)?;
        self.client
            .post_json("/api/appointments/new", appointment)
            .await
    }

    /// Replace an existing appointment.
    pub async fn update(
        &self,
        appointment_id: &str,
        appointment: &Appointment,
    ) -> ApiResult<Appointment> {
        self.client
            .put_json(
                &format!("/api/appointments/update/{appointment_id}"),
                appointment,
            )
            .await
    }

    /// Cancel an appointment.
    pub async fn cancel(&self, appointment_id: &str, user_id: &str) -> ApiResult<()> {
        self.client
            .post_empty(&format!("/api/appointments/cancel/{appointment_id}?x={user_id}"))
            .await
    }

    /// Upcoming appointments, soonest first.
    pub async fn upcoming(
        &self,
        user_id: &str,
        now: DateTime<FixedOffset>,
    ) -> ApiResult<Vec<Appointment>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all)
            .retain(|appointment| schedule::is_upcoming(appointment, now))
            .chronological()
            .cloned())
    }

    /// Past appointments, most recent first.
    pub async fn past(
        &self,
        user_id: &str,
        now: DateTime<FixedOffset>,
    ) -> ApiResult<Vec<Appointment>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all)
            .retain(|appointment| schedule::is_past(appointment, now))
            .newest_first()
            .cloned())
    }

    /// Appointments with an exact status.
    pub async fn by_status(
        &self,
        user_id: &str,
        status: AppointmentStatus,
    ) -> ApiResult<Vec<Appointment>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all)
            .retain(|appointment| appointment.status == status)
            .cloned())
    }

    /// Appointments on one calendar date, in the given offset.
    pub async fn on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> ApiResult<Vec<Appointment>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all).on_day(date, offset).cloned())
    }

    /// Appointments within an inclusive instant range.
    pub async fn in_range(
        &self,
        user_id: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> ApiResult<Vec<Appointment>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all).between(start, end).cloned())
    }

    /// Whether a candidate slot conflicts with any same-day appointment.
    ///
    /// A failed fetch is an error, not `Ok(false)`: the caller decides what
    /// to do when the conflict state is unknown.
    pub async fn check_conflicts(
        &self,
        user_id: &str,
        start: DateTime<FixedOffset>,
        duration_minutes: u32,
    ) -> ApiResult<bool> {
        let same_day = self
            .on_date(user_id, start.date_naive(), start.timezone())
            .await?;
        Ok(schedule::has_conflict(&same_day, start, duration_minutes))
    }
}
