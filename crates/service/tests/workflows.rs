//! End-to-end domain flow against in-memory collaborators: sign in, browse
//! own listings, book a service, list and cancel bookings, debounced search.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use models::booking::BookingStatus;
use models::service::Service;
use service::auth::domain::SignUpInput;
use service::auth::provider::mock::MockIdentityProvider;
use service::auth::service::AuthService;
use service::auth::session::SessionTracker;
use service::booking_flow::{self, mock::MockBookingGateway, BookingDraft, BookingService};
use service::ownership;
use service::search::SearchDebouncer;

fn catalogue() -> Vec<Service> {
    serde_json::from_value(serde_json::json!([
        {"_id": "s1", "name": "Deep Cleaning", "price": 49.99, "provider_email": "pro@x.com"},
        {"_id": "s2", "name": "Lawn Care", "price": 25.0, "provider_email": "a@x.com"},
        {"_id": "s3", "name": "Plumbing", "price": 80.0, "provider_email": "a@x.com"},
    ]))
    .unwrap()
}

#[tokio::test]
async fn booking_journey_end_to_end() -> anyhow::Result<()> {
    common::init();

    // Sign in and mirror the session.
    let tracker = Arc::new(SessionTracker::new());
    let auth = AuthService::new(Arc::new(MockIdentityProvider::default()), tracker.clone());
    auth.sign_up(SignUpInput {
        email: "a@x.com".into(),
        password: "secret1".into(),
        display_name: None,
        photo_url: None,
    })
    .await?;
    let me = tracker.current_user().expect("signed in");

    // "My services" is the full catalogue narrowed by provider email.
    let services = catalogue();
    let mine = ownership::owned_by(&services, &me.email);
    assert_eq!(mine.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(), ["s2", "s3"]);

    // Book someone else's service; draft price is the list price.
    let bookings = BookingService::new(Arc::new(MockBookingGateway::default()));
    let mut draft = BookingDraft::for_service(&services[0], me.email.clone());
    assert_eq!(draft.price, 49.99);
    draft.booking_date = "2026-09-01".into();
    bookings.submit(draft).await?;

    let listed = bookings.my_bookings(&me.email).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, BookingStatus::Pending);
    let stats = booking_flow::stats(&listed);
    assert_eq!((stats.total, stats.pending), (1, 1));

    // Cancel and drop it from the local list.
    bookings.cancel(&listed[0].id).await?;
    assert!(bookings.my_bookings(&me.email).await?.is_empty());

    // Sign out clears the mirror.
    auth.sign_out().await?;
    assert!(!tracker.signed_in());
    Ok(())
}

#[tokio::test]
async fn debounce_delay_comes_from_config() {
    let cfg = configs::SearchConfig::default();
    let delay = Duration::from_millis(cfg.debounce_ms.min(40));

    let fetched: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = fetched.clone();
    let debouncer = SearchDebouncer::spawn(delay, move |q| {
        sink.lock().unwrap().push(q);
        std::future::ready(Ok(()))
    });

    debouncer.push("p");
    debouncer.push("pl");
    debouncer.push("plumbing");
    tokio::time::sleep(delay * 4).await;

    assert_eq!(*fetched.lock().unwrap(), vec!["plumbing".to_string()]);
}
