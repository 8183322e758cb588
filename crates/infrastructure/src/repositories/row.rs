//! Storage-class driven conversion of SQLite rows to JSON objects.
//!
//! SQLite does not enforce declared column types, so a row is read by the
//! type each value is actually stored with. Nothing a table can hold makes
//! the conversion fail.

use serde_json::{Map, Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::Result;

/// One row: column name to JSON value, in column order.
pub type JsonRow = Map<String, Value>;

/// Convert a row, reading stored `0`/`1` in `flag_columns` as booleans.
pub(crate) fn row_to_json(row: &SqliteRow, flag_columns: &[&str]) -> Result<JsonRow> {
    let mut object = Map::with_capacity(row.columns().len());

    for column in row.columns() {
        let mut value = column_value(row, column.ordinal())?;
        if flag_columns.contains(&column.name()) {
            value = as_flag(value);
        }
        object.insert(column.name().to_string(), value);
    }

    Ok(object)
}

fn as_flag(value: Value) -> Value {
    match value.as_i64() {
        Some(0) => Value::Bool(false),
        Some(1) => Value::Bool(true),
        _ => value,
    }
}

fn column_value(row: &SqliteRow, index: usize) -> Result<Value> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let storage_class = raw.type_info().name().to_string();
    let value = match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" | "NUMERIC" => Number::from_f64(row.try_get_unchecked::<f64, _>(index)?)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "BLOB" => Value::from(row.try_get_unchecked::<Vec<u8>, _>(index)?),
        _ => {
            let bytes = row.try_get_unchecked::<Vec<u8>, _>(index)?;
            Value::from(String::from_utf8_lossy(&bytes).into_owned())
        }
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flag_conversion_only_touches_zero_and_one() {
        assert_eq!(as_flag(json!(0)), json!(false));
        assert_eq!(as_flag(json!(1)), json!(true));
        assert_eq!(as_flag(json!(2)), json!(2));
        assert_eq!(as_flag(json!("True")), json!("True"));
        assert_eq!(as_flag(Value::Null), Value::Null);
    }
}
