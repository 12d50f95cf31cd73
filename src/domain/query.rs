use crate::error::{QueryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw `date_range` as received from the caller. Dates are parsed by
/// [`Filters::from_request`], not during deserialization, so a bad date
/// surfaces as [`QueryError::InvalidDate`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// A query payload. Every field is optional; unknown fields are ignored.
///
/// `customer_id` and `item_id` are kept as raw JSON because callers send
/// them either as numbers or as numeric strings. `group_by` is raw as well:
/// any value that is not a known key means no grouping.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct QueryRequest {
    pub customer_id: Option<Value>,
    pub item_id: Option<Value>,
    pub date_range: Option<DateRange>,
    pub group_by: Option<Value>,
}

/// Inclusive date interval.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DateBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parsed filter specification. `None` means no constraint on that dimension.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Filters {
    pub customer_id: Option<i64>,
    pub item_id: Option<i64>,
    pub date_range: Option<DateBounds>,
}

impl Filters {
    /// Coerces and parses every filter value in the request.
    ///
    /// Fails on the first value that cannot be converted, before any record
    /// is looked at.
    pub fn from_request(request: &QueryRequest) -> Result<Self> {
        let customer_id = request
            .customer_id
            .as_ref()
            .map(|value| coerce_integer("customer_id", value))
            .transpose()?;
        let item_id = request
            .item_id
            .as_ref()
            .map(|value| coerce_integer("item_id", value))
            .transpose()?;
        let date_range = request
            .date_range
            .as_ref()
            .map(|range| -> Result<DateBounds> {
                Ok(DateBounds {
                    start: parse_date("date_range.start", &range.start)?,
                    end: parse_date("date_range.end", &range.end)?,
                })
            })
            .transpose()?;

        Ok(Self {
            customer_id,
            item_id,
            date_range,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.customer_id.is_none() && self.item_id.is_none() && self.date_range.is_none()
    }
}

/// Grouping keys understood by the aggregation stage.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GroupBy {
    Customer,
    Item,
    Date,
}

impl GroupBy {
    /// Returns `None` for anything that is not a known key, including `""`.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "customer_id" => Some(Self::Customer),
            "item_id" => Some(Self::Item),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer_id",
            Self::Item => "item_id",
            Self::Date => "date",
        }
    }
}

/// Integer conversion with the same leniency as a plain integer cast:
/// integral numbers, floats (truncated toward zero) and strings holding an
/// integer with optional surrounding whitespace.
fn coerce_integer(field: &'static str, value: &Value) -> Result<i64> {
    let invalid = |raw: String| QueryError::InvalidInteger { field, value: raw };

    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            match number.as_f64() {
                Some(float) if float.is_finite() && float >= i64::MIN as f64 && float < i64::MAX as f64 => {
                    Ok(float.trunc() as i64)
                }
                _ => Err(invalid(number.to_string())),
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(text.clone())),
        other => Err(invalid(other.to_string())),
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| QueryError::InvalidDate {
        field,
        value: value.to_string(),
        source,
    })
}
