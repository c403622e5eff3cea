use serde::{Deserialize, Serialize};

/// The slice of the identity provider's user object this client mirrors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl UserProfile {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self { uid: uid.into(), email: email.into(), display_name: None, photo_url: None }
    }
}
