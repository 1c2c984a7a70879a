use crate::error::{TkaniError, TkaniResult};
use validator::{Validate, ValidationErrors};

pub fn validate_model<T: Validate>(model: &T) -> TkaniResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(TkaniError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match &error.code {
                std::borrow::Cow::Borrowed("length") => {
                    format!("Length validation failed for field '{}'", field)
                }
                std::borrow::Cow::Borrowed("too_many_list_entries") => {
                    format!(
                        "Field '{}' holds more than {} entries",
                        field,
                        tkani_models::MAX_LIST_SLOTS
                    )
                }
                std::borrow::Cow::Borrowed("required") => {
                    format!("Field '{}' is required", field)
                }
                _ => format!("Validation failed for field '{}': {}", field, error.code),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

/// Admin create/edit workflow rule: a price of zero or less is invalid.
///
/// Deliberately not applied on CSV import, which keeps the lenient
/// parse-or-zero policy.
pub fn validate_price(price: f64) -> TkaniResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(TkaniError::validation(
            "price",
            "Price must be greater than zero",
        ));
    }
    Ok(())
}

pub fn validate_file_type(file_name: &str, allowed_types: &[&str]) -> TkaniResult<()> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !allowed_types.contains(&extension.to_lowercase().as_str()) {
        return Err(TkaniError::validation(
            "file_type",
            format!(
                "File type '{}' not allowed. Allowed types: {}",
                extension,
                allowed_types.join(", ")
            ),
        ));
    }

    Ok(())
}

pub fn validate_file_size(file_size: u64, max_size: u64) -> TkaniResult<()> {
    if file_size > max_size {
        return Err(TkaniError::validation(
            "file_size",
            format!(
                "File size {} bytes exceeds maximum allowed size {} bytes",
                file_size, max_size
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tkani_models::FabricDraft;

    #[test]
    fn test_validate_price() {
        assert!(validate_price(850.0).is_ok());
        assert!(validate_price(0.01).is_ok());
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-120.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_model_reports_field() {
        let mut draft = FabricDraft::sample();
        draft.category = String::new();
        let error = validate_model(&draft).unwrap_err();
        assert!(error.to_string().contains("category"));
    }

    #[test]
    fn test_validate_file_type() {
        let allowed_types = &["csv"];
        assert!(validate_file_type("catalog.csv", allowed_types).is_ok());
        assert!(validate_file_type("catalog.CSV", allowed_types).is_ok());
        assert!(validate_file_type("catalog.xlsx", allowed_types).is_err());
        assert!(validate_file_type("catalog", allowed_types).is_err());
    }

    #[test]
    fn test_validate_file_size() {
        assert!(validate_file_size(1024, 2048).is_ok());
        assert!(validate_file_size(4096, 2048).is_err());
    }
}
