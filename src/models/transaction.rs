//! Transaction and ledger models
//!
//! A transaction is a single income or expense event. The ledger is the full
//! ordered collection of transactions and the unit of persistence: it maps
//! one-to-one onto the persisted JSON document.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::money::Money;

/// Kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Parse a kind from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense event, immutable once created
///
/// Date fields deserialize leniently: a missing or unparseable value becomes
/// `None` instead of failing the whole document, and `effective_date`
/// resolves which calendar date buckets the transaction into a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Whether this is income or an expense (persisted as "type")
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount in minor units; never negative for a stored transaction
    pub amount: Money,

    /// Optional short label
    #[serde(default)]
    pub category: String,

    /// Optional free-text note
    #[serde(default)]
    pub note: String,

    /// Explicit date used for monthly bucketing
    #[serde(default, deserialize_with = "de_lenient_date")]
    pub date: Option<NaiveDate>,

    /// When the record was created; always set for transactions built here
    #[serde(default, deserialize_with = "de_lenient_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

impl Transaction {
    /// Create a new transaction dated today
    pub fn new(kind: TransactionKind, amount: Money) -> Self {
        let now = Local::now().naive_local();
        Self {
            kind,
            amount,
            category: String::new(),
            note: String::new(),
            date: Some(now.date()),
            created_at: Some(now),
        }
    }

    /// Set the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the free-text note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Set an explicit effective date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Resolve the date used for monthly bucketing
    ///
    /// Prefers the explicit `date`, falls back to the date part of
    /// `created_at`, and yields `None` when neither is usable. Transactions
    /// with no resolvable date fall out of every monthly view.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.date.or_else(|| self.created_at.map(|dt| dt.date()))
    }
}

/// The full ordered collection of transactions, the unit of persistence
///
/// Insertion order is the only order. Duplicates are permitted. Mutation
/// goes through the [`Store`](crate::storage::Store); callers only ever see
/// snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// View the transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check whether the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub(crate) fn push(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }
}

/// Parse a calendar date from an ISO-8601 date or datetime string
fn parse_date_str(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime_str(s).map(|dt| dt.date()))
}

/// Parse a timestamp from an ISO-8601 datetime string, with or without offset
fn parse_datetime_str(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

fn de_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => parse_date_str(&s),
        _ => None,
    })
}

fn de_lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => parse_datetime_str(&s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_date_and_created_at() {
        let tx = Transaction::new(TransactionKind::Income, Money::from_major(100));
        assert!(tx.date.is_some());
        assert!(tx.created_at.is_some());
        assert_eq!(tx.effective_date(), tx.date);
        assert_eq!(tx.category, "");
        assert_eq!(tx.note, "");
    }

    #[test]
    fn test_builder_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let tx = Transaction::new(TransactionKind::Expense, Money::from_major(500))
            .with_category("Rent")
            .with_note("March rent")
            .with_date(date);
        assert_eq!(tx.category, "Rent");
        assert_eq!(tx.note, "March rent");
        assert_eq!(tx.effective_date(), Some(date));
    }

    #[test]
    fn test_kind_serialized_as_type_tag() {
        let tx = Transaction::new(TransactionKind::Income, Money::from_major(1));
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "income");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("EXPENSE"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("transfer"), None);
    }

    #[test]
    fn test_optional_fields_default() {
        let tx: Transaction =
            serde_json::from_str(r#"{"type": "expense", "amount": 1000}"#).unwrap();
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.amount, Money::from_minor(1000));
        assert_eq!(tx.category, "");
        assert_eq!(tx.note, "");
        assert_eq!(tx.date, None);
        assert_eq!(tx.created_at, None);
        assert_eq!(tx.effective_date(), None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let tx: Transaction = serde_json::from_str(
            r#"{"type": "income", "amount": 1, "currency": "IDR", "tags": ["a"]}"#,
        )
        .unwrap();
        assert_eq!(tx.kind, TransactionKind::Income);
    }

    #[test]
    fn test_unparseable_date_falls_back_to_created_at() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "type": "income",
                "amount": 1,
                "date": "not-a-date",
                "created_at": "2024-05-10T10:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(tx.date, None);
        assert_eq!(
            tx.effective_date(),
            NaiveDate::from_ymd_opt(2024, 5, 10)
        );
    }

    #[test]
    fn test_datetime_string_accepted_as_date() {
        let tx: Transaction = serde_json::from_str(
            r#"{"type": "income", "amount": 1, "date": "2024-03-01T08:30:00"}"#,
        )
        .unwrap();
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_rfc3339_created_at_accepted() {
        let tx: Transaction = serde_json::from_str(
            r#"{"type": "income", "amount": 1, "created_at": "2024-05-10T10:00:00+07:00"}"#,
        )
        .unwrap();
        assert_eq!(
            tx.effective_date(),
            NaiveDate::from_ymd_opt(2024, 5, 10)
        );
    }

    #[test]
    fn test_no_usable_date_excluded() {
        let tx: Transaction = serde_json::from_str(
            r#"{"type": "income", "amount": 1, "date": "garbage", "created_at": 42}"#,
        )
        .unwrap();
        assert_eq!(tx.effective_date(), None);
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let tx = Transaction::new(TransactionKind::Expense, Money::from_minor(123_456))
            .with_category("Food")
            .with_note("groceries")
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }

    #[test]
    fn test_decimal_amount_document_loads() {
        // Documents written by other tools record amounts as decimal major
        // units; they must load rather than condemn the whole ledger
        let ledger: Ledger = serde_json::from_str(
            r#"{"transactions": [
                {"type": "income", "amount": 150000.0, "date": "2024-03-01"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(
            ledger.transactions()[0].amount,
            Money::from_major(150_000)
        );
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(
            serde_json::to_string(&ledger).unwrap(),
            r#"{"transactions":[]}"#
        );
    }
}
