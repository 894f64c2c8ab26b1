//! Remote response envelope.

use serde::{Deserialize, Serialize};

/// Generic envelope wrapping every remote payload.
///
/// The remote service returns `{"data": ..., "next_cursor": ...}` for both
/// single records and collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdsResponse<T> {
    /// The wrapped payload.
    pub data: T,

    /// Cursor for the next page of a collection, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TargetingCriteria;

    #[test]
    fn test_collection_envelope() {
        let envelope: AdsResponse<Vec<TargetingCriteria>> = serde_json::from_str(
            r#"{"data": [{"id": "a"}, {"id": "b"}], "next_cursor": "c-9x1"}"#,
        )
        .unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.next_cursor.as_deref(), Some("c-9x1"));
    }

    #[test]
    fn test_single_record_envelope() {
        let envelope: AdsResponse<TargetingCriteria> =
            serde_json::from_str(r#"{"data": {"id": "a"}}"#).unwrap();
        assert_eq!(envelope.data.id, "a");
        assert!(envelope.next_cursor.is_none());
    }
}
