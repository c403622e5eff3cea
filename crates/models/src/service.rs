use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A bookable offering as returned by the marketplace API.
///
/// The shape is owned by the remote API; deserialization is lenient on
/// purpose. Some deployments send `title` instead of `name`, and most
/// descriptive fields can be missing entirely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub provider_email: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Payload for `POST /services`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub provider_name: String,
    pub provider_email: String,
    #[serde(default)]
    pub featured: bool,
}

impl NewService {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.name)?;
        validate_email(&self.provider_email)?;
        validate_price(self.price)?;
        Ok(())
    }
}

/// Partial update payload for `PATCH /services/{id}`.
/// Absent fields are omitted from the JSON body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ServiceUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.image.is_none()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if !email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ModelError::Validation("price must be a non-negative number".into()));
    }
    Ok(())
}
