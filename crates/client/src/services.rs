//! `services` collection endpoints.

use tracing::instrument;

use models::service::{NewService, Service, ServiceUpdate};

use crate::errors::ClientError;
use crate::ApiClient;

impl ApiClient {
    /// Full service collection. The API does not paginate; filtering is the
    /// caller's job (see `service::ownership`).
    #[instrument(skip(self))]
    pub async fn list_services(&self) -> Result<Vec<Service>, ClientError> {
        self.get_json("services", None).await
    }

    /// Server-side search over the collection.
    #[instrument(skip(self))]
    pub async fn search_services(&self, query: &str) -> Result<Vec<Service>, ClientError> {
        self.get_json("services", Some(&[("q", query)])).await
    }

    /// The featured/landing subset served at `home-services`.
    #[instrument(skip(self))]
    pub async fn home_services(&self) -> Result<Vec<Service>, ClientError> {
        self.get_json("home-services", None).await
    }

    #[instrument(skip(self))]
    pub async fn get_service(&self, id: &str) -> Result<Service, ClientError> {
        self.get_json(&format!("services/{id}"), None).await
    }

    /// Create a listing. The API answers with an envelope whose `data` is an
    /// insert acknowledgement, not the stored record, so only success is
    /// reported here.
    #[instrument(skip(self, service), fields(name = %service.name))]
    pub async fn create_service(&self, service: &NewService) -> Result<(), ClientError> {
        self.post_ack("services", service).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_service(&self, id: &str, patch: &ServiceUpdate) -> Result<(), ClientError> {
        self.patch_ack(&format!("services/{id}"), patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_service(&self, id: &str) -> Result<(), ClientError> {
        self.delete_ack(&format!("services/{id}")).await
    }
}
