//! Booking submission workflow.
//!
//! A draft is seeded from a fetched service (editable price defaulting to
//! the list price), validated, then submitted through a gateway trait so
//! tests and tools can run against an in-memory marketplace.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use client::errors::ClientError;
use client::ApiClient;
use models::booking::{Booking, BookingStatus, NewBooking};
use models::service::{self, Service};

use crate::errors::ServiceError;

/// The slice of the remote API the booking workflow needs.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn create_booking(&self, booking: &NewBooking) -> Result<(), ClientError>;
    async fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, ClientError>;
    async fn cancel_booking(&self, id: &str) -> Result<(), ClientError>;
}

#[async_trait]
impl BookingGateway for ApiClient {
    async fn create_booking(&self, booking: &NewBooking) -> Result<(), ClientError> {
        ApiClient::create_booking(self, booking).await
    }

    async fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, ClientError> {
        ApiClient::list_bookings(self, email).await
    }

    async fn cancel_booking(&self, id: &str) -> Result<(), ClientError> {
        ApiClient::cancel_booking(self, id).await
    }
}

/// Editable booking form state. `price` starts at the service list price
/// and stays there until the user changes it.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingDraft {
    pub user_email: String,
    pub service_id: String,
    pub service_name: String,
    pub booking_date: String,
    pub price: f64,
}

impl BookingDraft {
    pub fn for_service(service: &Service, user_email: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            service_id: service.id.clone(),
            service_name: service.name.clone(),
            booking_date: String::new(),
            price: service.price,
        }
    }

    fn validate(&self) -> Result<(), ServiceError> {
        service::validate_email(&self.user_email)?;
        if self.booking_date.trim().is_empty() {
            return Err(ServiceError::Validation("booking date required".into()));
        }
        service::validate_price(self.price)?;
        Ok(())
    }

    fn into_payload(self) -> NewBooking {
        NewBooking {
            user_email: self.user_email,
            service_id: self.service_id,
            service_name: self.service_name,
            booking_date: self.booking_date,
            price: self.price,
        }
    }
}

/// Per-status counts for the bookings listing footer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub completed: usize,
}

pub fn stats(bookings: &[Booking]) -> BookingStats {
    let mut out = BookingStats { total: bookings.len(), ..Default::default() };
    for b in bookings {
        match b.status {
            BookingStatus::Pending => out.pending += 1,
            BookingStatus::Confirmed => out.confirmed += 1,
            BookingStatus::Cancelled => out.cancelled += 1,
            BookingStatus::Completed => out.completed += 1,
        }
    }
    out
}

/// Booking workflow independent of the HTTP layer.
pub struct BookingService<G: BookingGateway> {
    gateway: Arc<G>,
}

impl<G: BookingGateway> BookingService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Validate and submit a draft. No retry: a duplicate submission after
    /// a transient failure would create a second booking.
    #[instrument(skip(self, draft), fields(service_id = %draft.service_id, user = %draft.user_email))]
    pub async fn submit(&self, draft: BookingDraft) -> Result<(), ServiceError> {
        draft.validate()?;
        let payload = draft.into_payload();
        self.gateway.create_booking(&payload).await?;
        info!(service_id = %payload.service_id, "booking_submitted");
        Ok(())
    }

    pub async fn my_bookings(&self, email: &str) -> Result<Vec<Booking>, ServiceError> {
        Ok(self.gateway.list_bookings(email).await?)
    }

    /// Cancel by identifier. On success the caller drops the record from
    /// its local list; no refetch happens here.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: &str) -> Result<(), ServiceError> {
        self.gateway.cancel_booking(id).await?;
        info!(booking_id = %id, "booking_cancelled");
        Ok(())
    }
}

/// In-memory gateway for tests and doc examples.
pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct MockBookingGateway {
        bookings: Mutex<Vec<Booking>>,
        seq: AtomicUsize,
        fail_next: Mutex<Option<String>>,
    }

    impl MockBookingGateway {
        /// Make the next call fail with an API-style message.
        pub fn fail_next(&self, message: impl Into<String>) {
            *self.fail_next.lock().unwrap() = Some(message.into());
        }

        fn take_failure(&self) -> Option<ClientError> {
            self.fail_next.lock().unwrap().take().map(ClientError::api_message)
        }
    }

    #[async_trait]
    impl BookingGateway for MockBookingGateway {
        async fn create_booking(&self, booking: &NewBooking) -> Result<(), ClientError> {
            if let Some(err) = self.take_failure() {
                return Err(err);
            }
            let id = format!("b{}", self.seq.fetch_add(1, Ordering::SeqCst) + 1);
            let stored = Booking {
                id,
                user_email: Some(booking.user_email.clone()),
                service_id: Some(booking.service_id.clone()),
                service_name: Some(booking.service_name.clone()),
                service_category: None,
                booking_date: Some(booking.booking_date.clone()),
                preferred_date: None,
                preferred_time: None,
                special_instructions: None,
                price: Some(booking.price),
                total_price: None,
                status: BookingStatus::Pending,
            };
            self.bookings.lock().unwrap().push(stored);
            Ok(())
        }

        async fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, ClientError> {
            if let Some(err) = self.take_failure() {
                return Err(err);
            }
            Ok(self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.user_email.as_deref() == Some(email))
                .cloned()
                .collect())
        }

        async fn cancel_booking(&self, id: &str) -> Result<(), ClientError> {
            if let Some(err) = self.take_failure() {
                return Err(err);
            }
            let mut bookings = self.bookings.lock().unwrap();
            let before = bookings.len();
            bookings.retain(|b| b.id != id);
            if bookings.len() == before {
                return Err(ClientError::api_message("Cancel failed"));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fetched_service() -> Service {
        serde_json::from_value(json!({
            "_id": "s1",
            "name": "Deep Cleaning",
            "price": 49.99,
            "provider_email": "pro@x.com"
        }))
        .unwrap()
    }

    #[test]
    fn draft_price_is_seeded_from_list_price() {
        let draft = BookingDraft::for_service(&fetched_service(), "a@x.com");
        assert_eq!(draft.price, 49.99);
        assert_eq!(draft.service_id, "s1");
        assert!(draft.booking_date.is_empty());
    }

    #[test]
    fn edited_price_overrides_seed() {
        let mut draft = BookingDraft::for_service(&fetched_service(), "a@x.com");
        draft.price = 40.0;
        draft.booking_date = "2026-09-01".into();
        let payload = draft.into_payload();
        assert_eq!(payload.price, 40.0);
    }

    #[tokio::test]
    async fn submit_requires_a_date() {
        let gateway = Arc::new(mock::MockBookingGateway::default());
        let svc = BookingService::new(gateway);
        let draft = BookingDraft::for_service(&fetched_service(), "a@x.com");
        let err = svc.submit(draft).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn submit_then_list_then_cancel() -> anyhow::Result<()> {
        let gateway = Arc::new(mock::MockBookingGateway::default());
        let svc = BookingService::new(gateway);

        let mut draft = BookingDraft::for_service(&fetched_service(), "a@x.com");
        draft.booking_date = "2026-09-01".into();
        svc.submit(draft).await?;

        let mine = svc.my_bookings("a@x.com").await?;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].status, BookingStatus::Pending);
        assert_eq!(mine[0].effective_price(), Some(49.99));
        assert!(svc.my_bookings("b@x.com").await?.is_empty());

        svc.cancel(&mine[0].id).await?;
        assert!(svc.my_bookings("a@x.com").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn gateway_failure_surfaces_server_message() {
        let gateway = Arc::new(mock::MockBookingGateway::default());
        gateway.fail_next("Booking Failed");
        let svc = BookingService::new(gateway);

        let mut draft = BookingDraft::for_service(&fetched_service(), "a@x.com");
        draft.booking_date = "2026-09-01".into();
        let err = svc.submit(draft).await.unwrap_err();
        assert_eq!(err.user_message(), "Booking Failed");
    }

    #[tokio::test]
    async fn cancelling_unknown_id_fails() {
        let gateway = Arc::new(mock::MockBookingGateway::default());
        let svc = BookingService::new(gateway);
        let err = svc.cancel("nope").await.unwrap_err();
        assert_eq!(err.user_message(), "Cancel failed");
    }

    #[test]
    fn stats_counts_by_status() {
        let bookings: Vec<Booking> = serde_json::from_value(json!([
            {"_id": "b1", "status": "confirmed"},
            {"_id": "b2"},
            {"_id": "b3", "status": "cancelled"},
            {"_id": "b4", "status": "pending"},
        ]))
        .unwrap();
        let s = stats(&bookings);
        assert_eq!(s.total, 4);
        assert_eq!(s.confirmed, 1);
        assert_eq!(s.pending, 2);
        assert_eq!(s.cancelled, 1);
        assert_eq!(s.completed, 0);
    }
}
