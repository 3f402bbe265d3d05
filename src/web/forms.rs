use serde::Deserialize;

use packsite::models::ContactMessageCreate;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl From<ContactForm> for ContactMessageCreate {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            company: form.company,
            message: form.message,
        }
    }
}

#[derive(Deserialize)]
pub struct ContactQuery {
    pub sent: Option<u8>,
}

#[derive(Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}
