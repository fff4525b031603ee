use serde::Deserialize;
use serde_json::Value;

use crate::models::errors::PageError;

const TRANSACTION_PAGE: &str = "/data/prime/transactionsHub/transactionPage";
const PAGE_INFO: &str = "/data/prime/transactionsHub/transactionPage/pageInfo";

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>
}

/// One response of the transaction feed.
#[derive(Debug, Clone)]
pub struct Page {
    /// Raw transaction objects in response order. `None` when the response carries no list at all.
    pub transactions: Option<Vec<Value>>,
    pub page_info: PageInfo
}

impl Page {
    /// Whether `response` carries a transaction list, checked without requiring `pageInfo`.
    pub fn has_transaction_list(response: &Value) -> bool {
        transaction_list(response).is_some()
    }

    pub fn from_response(response: &Value) -> Result<Self, PageError> {
        let transactions = transaction_list(response).cloned();

        let page_info = response.pointer(PAGE_INFO)
            .filter(|value| !value.is_null())
            .ok_or(PageError::MissingPageInfo { path: PAGE_INFO })?;

        Ok(Self {
            transactions,
            page_info: PageInfo::deserialize(page_info)?
        })
    }
}

fn transaction_list(response: &Value) -> Option<&Vec<Value>> {
    response.pointer(TRANSACTION_PAGE)
        .and_then(|page| page.get("transactions"))
        .and_then(Value::as_array)
}
