//! User-facing error texts of one profile.

use crate::validation::ValidationError;

/// Route-level texts, identical in every profile.
pub const ROUTE_NOT_FOUND: &str = "Not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub missing_fields: &'static str,
    pub not_found: &'static str,
    pub nothing_to_update: &'static str,
    pub malformed_body: &'static str,
    pub invalid_field: &'static str,
}

impl Messages {
    pub const ENGLISH: Messages = Messages {
        missing_fields: "Missing required fields",
        not_found: "Instrument not found",
        nothing_to_update: "Nothing to update",
        malformed_body: "Request body must be a JSON object",
        invalid_field: "Invalid value for field",
    };

    pub const RUSSIAN: Messages = Messages {
        missing_fields: "Не указаны название или цена",
        not_found: "Товар не найден",
        nothing_to_update: "Нет данных для обновления",
        malformed_body: "Тело запроса должно быть JSON-объектом",
        invalid_field: "Некорректное значение поля",
    };

    /// The `error` text returned for a rejected body.
    pub fn render(&self, err: &ValidationError) -> String {
        match err {
            ValidationError::MissingFields => self.missing_fields.to_string(),
            ValidationError::NothingToUpdate => self.nothing_to_update.to_string(),
            ValidationError::MalformedBody => self.malformed_body.to_string(),
            ValidationError::InvalidField { field, .. } => {
                format!("{} '{}'", self.invalid_field, field)
            }
        }
    }
}
