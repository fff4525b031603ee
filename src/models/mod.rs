mod errors;
mod flatten;
mod page;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

pub use errors::PageError;
pub use flatten::flatten;
pub use page::Page;
#[cfg(test)]
pub use page::PageInfo;
pub use transaction::FlatRecord;

/// Direction of a transaction, derived from the sign of its raw amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Debit,
    Credit
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Debit => formatter.write_str("debit"),
            TransactionType::Credit => formatter.write_str("credit")
        }
    }
}
