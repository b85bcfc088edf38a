//! Input validation utilities

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::models::{NewListing, RegisterRequest, UpdateListing};

/// A single rejected form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn validate_title(title: &str) -> Result<(), String> {
    if char_len(title) < 10 {
        return Err("Title must be at least 10 characters long".to_string());
    }
    Ok(())
}

fn validate_required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", label));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), String> {
    if char_len(description) < 20 {
        return Err("Description must be at least 20 characters long".to_string());
    }
    Ok(())
}

fn validate_price(price: u64, label: &str) -> Result<(), String> {
    if price == 0 {
        return Err(format!("{} must be greater than 0", label));
    }
    Ok(())
}

fn validate_location(location: &str) -> Result<(), String> {
    if char_len(location) < 3 {
        return Err("Location must be at least 3 characters long".to_string());
    }
    Ok(())
}

fn validate_images(images: &[String]) -> Result<(), String> {
    if images.iter().all(|image| image.trim().is_empty()) {
        return Err("At least one image is required".to_string());
    }
    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email.trim()) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Collects failures so the caller can report every bad field at once
#[derive(Default)]
struct Report(Vec<FieldError>);

impl Report {
    fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.0.push(FieldError::new(field, message));
        }
    }

    fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.0.is_empty() { Ok(()) } else { Err(self.0) }
    }
}

/// Validate a sell form submission
pub fn validate_new_listing(listing: &NewListing) -> Result<(), Vec<FieldError>> {
    let mut report = Report::default();
    report.check("title", validate_title(&listing.title));
    report.check("brand", validate_required(&listing.brand, "Brand"));
    report.check("model", validate_required(&listing.model, "Model"));
    report.check("description", validate_description(&listing.description));
    report.check("price", validate_price(listing.price, "Price"));
    if let Some(original_price) = listing.original_price {
        report.check(
            "originalPrice",
            validate_price(original_price, "Original price"),
        );
    }
    report.check("location", validate_location(&listing.location));
    report.check("images", validate_images(&listing.images));
    report.finish()
}

/// Validate the fields present in a listing update
pub fn validate_update_listing(update: &UpdateListing) -> Result<(), Vec<FieldError>> {
    let mut report = Report::default();
    if let Some(title) = &update.title {
        report.check("title", validate_title(title));
    }
    if let Some(brand) = &update.brand {
        report.check("brand", validate_required(brand, "Brand"));
    }
    if let Some(model) = &update.model {
        report.check("model", validate_required(model, "Model"));
    }
    if let Some(description) = &update.description {
        report.check("description", validate_description(description));
    }
    if let Some(price) = update.price {
        report.check("price", validate_price(price, "Price"));
    }
    if let Some(Some(original_price)) = update.original_price {
        report.check(
            "originalPrice",
            validate_price(original_price, "Original price"),
        );
    }
    if let Some(location) = &update.location {
        report.check("location", validate_location(location));
    }
    if let Some(images) = &update.images {
        report.check("images", validate_images(images));
    }
    report.finish()
}

/// Validate a registration form
pub fn validate_registration(request: &RegisterRequest) -> Result<(), Vec<FieldError>> {
    let mut report = Report::default();
    report.check(
        "name",
        validate_required(request.name.as_deref().unwrap_or_default(), "Name"),
    );
    report.check("email", validate_email(&request.email));
    report.check("password", validate_required(&request.password, "Password"));
    report.finish()
}
