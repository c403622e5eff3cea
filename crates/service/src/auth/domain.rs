/// Registration input. Display name and photo are applied as a profile
/// update right after the account is created, mirroring the provider flow.
#[derive(Clone, Debug)]
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}
