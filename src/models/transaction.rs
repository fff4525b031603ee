use rust_decimal::Decimal;

use crate::models::TransactionType;

/// One transaction reduced to the fields of the tabular export.
///
/// Nested names that are missing upstream stay `None` and are written as empty cells.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FlatRecord {
    /// Posting date, verbatim from the API.
    pub date: String,
    /// Merchant display name.
    pub merchant: Option<String>,
    /// Description as reported by the institution.
    pub description: String,
    /// Magnitude of the amount, sign removed.
    pub amount: Decimal,
    /// Debit for negative raw amounts, credit otherwise.
    pub transaction_type: TransactionType,
    pub category: Option<String>,
    pub account: Option<String>
}
