// src/favorites/validators.rs

use super::models::ToggleFavoriteRequest;
use crate::common::{ValidationResult, Validator};

pub struct ToggleFavoriteValidator;

impl Validator<ToggleFavoriteRequest> for ToggleFavoriteValidator {
    fn validate(&self, data: &ToggleFavoriteRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.quote_id <= 0 {
            result.add_error("quote_id", "Quote id must be a positive integer");
        }

        result
    }
}
