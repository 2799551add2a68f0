use crate::utils::error::{ProcessorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ProcessorError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProcessorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 分隔字串可以只含空白字元（例如 "\r\n"），但不能是空字串
pub fn validate_non_empty_separator(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ProcessorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Separator cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// 回傳 value 在 allowed 中的位置
pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<usize> {
    if let Some(index) = allowed.iter().position(|candidate| *candidate == value) {
        return Ok(index);
    }
    Err(ProcessorError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}
