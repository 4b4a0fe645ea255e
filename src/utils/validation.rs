use crate::utils::error::{PlanError, Result};
use chrono::NaiveDate;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_formats(field_name: &str, formats: &[String], allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();

    for format in formats {
        if !allowed_set.contains(format.as_str()) {
            return Err(PlanError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!("Unsupported format. Valid formats: {}", allowed.join(", ")),
            });
        }
    }

    Ok(())
}

/// 接受 `8:00` 或 `20:00` 這類時間字串
pub fn validate_time_of_day(field_name: &str, value: &str) -> Result<()> {
    let invalid = |reason: &str| PlanError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (hours, minutes) = value
        .trim()
        .split_once(':')
        .ok_or_else(|| invalid("Expected a time of day like 8:00 or 20:00"))?;

    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(invalid("Expected a time of day like 8:00 or 20:00"));
    }

    let hours: u32 = hours
        .parse()
        .map_err(|_| invalid("Hours must be a number"))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| invalid("Minutes must be a number"))?;

    if hours > 23 || minutes > 59 {
        return Err(invalid("Time of day must be between 0:00 and 23:59"));
    }

    Ok(())
}

/// 解析表單日期欄位。空白視為未填寫。
pub fn parse_date_field(field_name: &str, value: Option<&str>) -> Result<NaiveDate> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            PlanError::invalid_input(field_name, format!("{} date is required", field_name))
        })?;

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        PlanError::invalid_input(
            field_name,
            format!("'{}' is not a YYYY-MM-DD date ({})", raw, e),
        )
    })
}
