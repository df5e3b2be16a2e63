use crate::core::parser;
use crate::utils::error::{Result, SignalError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SignalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SignalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Checks that a configured divider is a well-formed packet literal.
pub fn validate_packet_literal(field_name: &str, literal: &str) -> Result<()> {
    match parser::parse_packet(literal) {
        Ok(_) => Ok(()),
        Err(e) => Err(SignalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: literal.to_string(),
            reason: format!("Not a valid packet literal: {}", e),
        }),
    }
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    let allowed: HashSet<&str> = ["json", "text"].into_iter().collect();

    if formats.is_empty() {
        return Err(SignalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one output format is required".to_string(),
        });
    }

    for format in formats {
        if !allowed.contains(format.as_str()) {
            return Err(SignalError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: "Supported formats: json, text".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SignalError::MissingConfigError {
        field: field_name.to_string(),
    })
}
