//! `bookings` collection endpoints.

use tracing::instrument;

use models::booking::{Booking, NewBooking};

use crate::errors::ClientError;
use crate::ApiClient;

impl ApiClient {
    /// Bookings belonging to one user, filtered server-side by email.
    #[instrument(skip(self))]
    pub async fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, ClientError> {
        self.get_json("bookings", Some(&[("email", email)])).await
    }

    /// Submit a booking. No idempotency key is attached; a retried
    /// submission can create a duplicate record, which is why this client
    /// never retries on its own.
    #[instrument(skip(self, booking), fields(service_id = %booking.service_id))]
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<(), ClientError> {
        self.post_ack("bookings", booking).await
    }

    #[instrument(skip(self))]
    pub async fn cancel_booking(&self, id: &str) -> Result<(), ClientError> {
        self.delete_ack(&format!("bookings/{id}")).await
    }
}
