//! Contact form and newsletter routes.
//!
//! There is no delivery backend; a valid submission is acknowledged and
//! logged, an invalid one is rejected with per-field messages the form can
//! show inline.

use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::validate;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ContactBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Validated only when the form includes the field.
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct NewsletterBody {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Rejection {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
    pub message: &'static str,
}

// =============================================================================
// VALIDATION
// =============================================================================

fn field_error(field: &'static str, message: &'static str) -> FieldError {
    FieldError { field, message }
}

pub(crate) fn validate_contact(body: &ContactBody) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !validate::valid_name(&body.name) {
        errors.push(field_error("name", "Please enter a valid name (at least 2 characters)"));
    }
    if !validate::valid_email(&body.email) {
        errors.push(field_error("email", "Please enter a valid email address"));
    }
    if let Some(phone) = &body.phone {
        if !validate::valid_phone(phone) {
            errors.push(field_error("phone", "Please enter a valid phone number"));
        }
    }
    if !validate::valid_message(&body.message) {
        errors.push(field_error("message", "Please enter a message (at least 10 characters)"));
    }
    errors
}

// =============================================================================
// ROUTES
// =============================================================================

/// `POST /api/contact` — validate a contact-form submission.
pub async fn submit_contact(
    Json(body): Json<ContactBody>,
) -> Result<Json<Ack>, (StatusCode, Json<Rejection>)> {
    let errors = validate_contact(&body);
    if !errors.is_empty() {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, Json(Rejection { errors })));
    }

    tracing::info!(name = %body.name.trim(), "contact form submitted");
    Ok(Json(Ack {
        ok: true,
        message: "Thank you! Your message has been sent successfully. We'll get back to you soon.",
    }))
}

/// `POST /api/newsletter` — validate a newsletter signup.
pub async fn subscribe_newsletter(
    Json(body): Json<NewsletterBody>,
) -> Result<Json<Ack>, (StatusCode, Json<Rejection>)> {
    if !validate::valid_email(&body.email) {
        let errors = vec![field_error("email", "Please enter a valid email address")];
        return Err((StatusCode::UNPROCESSABLE_ENTITY, Json(Rejection { errors })));
    }

    tracing::info!("newsletter signup");
    Ok(Json(Ack {
        ok: true,
        message: "Thanks for subscribing! We'll keep you updated with the latest tech insights.",
    }))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
