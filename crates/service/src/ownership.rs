//! Provider ownership filtering.
//!
//! The API has no "my services" endpoint; the whole collection is fetched
//! and narrowed here by exact `provider_email` equality. No case folding:
//! the identity provider and the API both store the address verbatim.

use models::service::Service;

/// Services listed by `email`, original order preserved. Records without a
/// provider email never match.
pub fn owned_by(services: &[Service], email: &str) -> Vec<Service> {
    services
        .iter()
        .filter(|s| s.provider_email.as_deref() == Some(email))
        .cloned()
        .collect()
}
