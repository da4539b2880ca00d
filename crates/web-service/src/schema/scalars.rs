//! 自定义标量以及参数解析
//!
//! - `Date`: ISO-8601 日期字符串，例如 `2021-06-11`
//! - `ID`: 同时接受整数和数字字符串

use crate::models::{AppError, AppResult};
use async_graphql::dynamic::{Scalar, ValueAccessor};
use async_graphql::Value;
use chrono::NaiveDate;

pub const DATE_SCALAR: &str = "Date";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn date_scalar() -> Scalar {
    Scalar::new(DATE_SCALAR).description("ISO-8601 calendar date, e.g. `2021-06-11`")
}

pub fn date_value(date: NaiveDate) -> Value {
    Value::String(date.format(DATE_FORMAT).to_string())
}

pub fn id_value(id: i32) -> Value {
    Value::String(id.to_string())
}

pub fn parse_date(value: ValueAccessor<'_>) -> AppResult<NaiveDate> {
    let raw = value
        .string()
        .map_err(|_| AppError::InvalidInput(format!("date must be a YYYY-MM-DD string, got {}", value.as_value())))?;

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| AppError::InvalidInput(format!("invalid date `{raw}`: {e}")))
}

pub fn parse_id(value: ValueAccessor<'_>) -> AppResult<i32> {
    let id = match value.as_value() {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };

    id.ok_or_else(|| AppError::InvalidInput(format!("invalid id: {}", value.as_value())))
}

pub fn parse_int(value: ValueAccessor<'_>) -> AppResult<i32> {
    value
        .i64()
        .ok()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| AppError::InvalidInput(format!("expected a 32-bit integer, got {}", value.as_value())))
}
