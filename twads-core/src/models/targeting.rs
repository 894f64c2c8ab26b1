//! Targeting criteria records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A targeting criteria record as returned by the remote service.
///
/// The remote service owns the field set; everything beyond the id is
/// deserialized leniently so schema additions on the remote side do not
/// break existing callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetingCriteria {
    /// Unique id of the criteria record within its account.
    pub id: String,

    /// Advertising account the record is scoped under.
    #[serde(default)]
    pub account_id: Option<String>,

    /// Line item (ad group) the criteria is attached to.
    #[serde(default)]
    pub line_item_id: Option<String>,

    /// Display name for the criteria.
    #[serde(default)]
    pub name: Option<String>,

    /// Targeting dimension, e.g. `LOCATION` or `FOLLOWERS_OF_USER`.
    #[serde(default)]
    pub targeting_type: Option<String>,

    /// Value for the targeting dimension; shape varies by type.
    #[serde(default)]
    pub targeting_value: Option<serde_json::Value>,

    /// When the record was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the record was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// True once the record has been deleted remotely.
    #[serde(default)]
    pub deleted: bool,
}
