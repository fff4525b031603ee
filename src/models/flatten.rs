use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::warn;

use crate::models::{FlatRecord, TransactionType};

/// Reduces a raw transaction object to a `FlatRecord`.
///
/// Never fails: every missing or malformed field is logged and replaced by an empty value.
pub fn flatten(raw: &Value) -> FlatRecord {
    let description = text_field(raw, "description");
    let signed_amount = signed_amount(raw, &description);

    let transaction_type = if signed_amount < Decimal::ZERO {
        TransactionType::Debit
    } else {
        TransactionType::Credit
    };

    FlatRecord {
        date: text_field(raw, "date"),
        merchant: nested_name(raw, "merchant", &description),
        amount: signed_amount.abs(),
        transaction_type,
        category: nested_name(raw, "category", &description),
        account: nested_name(raw, "account", &description),
        description
    }
}

fn text_field(raw: &Value, field: &str) -> String {
    match raw.get(field).and_then(Value::as_str) {
        Some(value) => value.to_string(),
        None => {
            warn!("Transaction is missing {field}: {raw}");
            String::new()
        }
    }
}

fn nested_name(raw: &Value, field: &str, description: &str) -> Option<String> {
    let name = raw.get(field)
        .and_then(|nested| nested.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string);

    if name.is_none() {
        warn!("Transaction [{description}] has no {field} name");
    }

    name
}

fn signed_amount(raw: &Value, description: &str) -> Decimal {
    //NOTE: Parsing the number's textual form keeps the exact cents instead of going through f64
    let parsed = match raw.pointer("/amount/value") {
        Some(Value::Number(number)) => Decimal::from_str(&number.to_string())
            .or_else(|_| Decimal::from_scientific(&number.to_string()))
            .ok(),
        Some(Value::String(text)) => Decimal::from_str(text.trim()).ok(),
        _ => None
    };

    parsed.unwrap_or_else(|| {
        warn!("Transaction [{description}] has no readable amount, recording zero");
        Decimal::ZERO
    })
}
