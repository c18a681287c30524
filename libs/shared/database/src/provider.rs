use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Equality or exclusion predicate on a record field.
#[derive(Debug, Clone)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
}

#[derive(Debug, Clone)]
pub enum FilterOp {
    Eq(String),
    NotIn(Vec<String>),
}

impl Filter {
    pub fn eq(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            op: FilterOp::Eq(value.into()),
        }
    }

    pub fn not_in<I, V>(field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            field: field.to_string(),
            op: FilterOp::NotIn(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn to_query(&self) -> String {
        match &self.op {
            FilterOp::Eq(value) => format!("{}=eq.{}", self.field, value),
            FilterOp::NotIn(values) => format!("{}=not.in.({})", self.field, values.join(",")),
        }
    }
}

/// Read-only access to the host application's record store.
///
/// Every service takes the provider as an explicit dependency; nothing in the
/// codebase reaches for the store through ambient state.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// List records of a kind, projected to the named fields.
    async fn list(&self, kind: &str, fields: &[&str], filters: &[Filter]) -> Result<Vec<Value>>;

    /// Fetch a single field from the first record matching the filters.
    async fn get_value(&self, kind: &str, filters: &[Filter], field: &str)
        -> Result<Option<Value>>;

    /// Fetch a full record by identifier.
    async fn get_record(&self, kind: &str, id: &str) -> Result<Option<Value>>;

    /// Count records matching the filters.
    async fn count(&self, kind: &str, filters: &[Filter]) -> Result<u64>;
}
