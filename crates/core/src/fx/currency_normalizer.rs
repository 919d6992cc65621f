use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde_json::{Number, Value};

use super::fx_errors::CurrencyError;
use super::region::Region;
use crate::constants::{CURRENCY_COLUMN, REFERENCE_CURRENCY, REGION_COLUMN};
use crate::rows::ResultRow;

/// Stamps a currency on every row, converting `amount_columns` to the
/// reference currency when `to_reference` is set.
///
/// With `to_reference`, each amount is multiplied by the rate of the row's
/// region and `currency` becomes the reference code on every row. Without it,
/// amounts are left as they are and `currency` is the region's native code.
///
/// Every row must carry a known `region_name` and all of `amount_columns`;
/// the first row that does not aborts the whole call.
pub fn normalize(
    mut rows: Vec<ResultRow>,
    amount_columns: &[&str],
    to_reference: bool,
) -> Result<Vec<ResultRow>, CurrencyError> {
    for row in rows.iter_mut() {
        normalize_row(row, amount_columns, to_reference)?;
    }
    Ok(rows)
}

fn normalize_row(
    row: &mut ResultRow,
    amount_columns: &[&str],
    to_reference: bool,
) -> Result<(), CurrencyError> {
    let region = row_region(row)?;
    if let Some(missing) = amount_columns.iter().find(|column| !row.contains(column)) {
        return Err(CurrencyError::MissingColumn(missing.to_string()));
    }

    if !to_reference {
        row.insert(CURRENCY_COLUMN, region.currency_code());
        return Ok(());
    }

    let rate = region.to_reference_rate();
    for column in amount_columns {
        if let Some(value) = row.get_mut(column) {
            *value = convert_amount(value, rate, column)?;
        }
    }
    row.insert(CURRENCY_COLUMN, REFERENCE_CURRENCY);
    Ok(())
}

/// Reads and parses the region label of a row.
pub fn row_region(row: &ResultRow) -> Result<Region, CurrencyError> {
    match row.get(REGION_COLUMN) {
        Some(Value::String(label)) => label.parse(),
        Some(other) => Err(CurrencyError::UnknownRegion(other.to_string())),
        None => Err(CurrencyError::MissingColumn(REGION_COLUMN.to_string())),
    }
}

fn convert_amount(value: &Value, rate: Decimal, column: &str) -> Result<Value, CurrencyError> {
    let number = match value {
        Value::Null => return Ok(Value::Null),
        Value::Number(number) => number,
        other => {
            return Err(CurrencyError::InvalidAmount {
                column: column.to_string(),
                value: other.to_string(),
            })
        }
    };

    // Amounts beyond the Decimal range are multiplied as floats.
    number_to_decimal(number)
        .and_then(|amount| amount.checked_mul(rate))
        .and_then(|converted| converted.to_f64())
        .or_else(|| Some(number.as_f64()? * rate.to_f64()?))
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| CurrencyError::Unrepresentable(column.to_string()))
}

fn number_to_decimal(number: &Number) -> Option<Decimal> {
    match number.as_i64() {
        Some(int) => Some(Decimal::from(int)),
        None => number.as_f64().and_then(Decimal::from_f64),
    }
}
