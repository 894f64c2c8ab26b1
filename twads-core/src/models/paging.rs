//! Paging parameter construction.
//!
//! The remote API traverses large collections with the
//! `page`/`count`/`since_id`/`max_id` convention. These builders translate
//! numeric paging inputs into the ordered wire parameter set; a `since_id`
//! or `max_id` of zero or below means "not specified" and is omitted rather
//! than transmitted.

use super::QueryParams;

/// Builds the paging parameter set without a page number.
///
/// Always emits `count`. Emits `since_id`/`max_id` only for strictly
/// positive values. `count` is not validated locally; the remote service
/// rejects out-of-range page sizes.
pub fn paging_params(count: i32, since_id: i64, max_id: i64) -> QueryParams {
    let mut params = Vec::with_capacity(3);
    params.push(("count".to_string(), count.to_string()));
    if since_id > 0 {
        params.push(("since_id".to_string(), since_id.to_string()));
    }
    if max_id > 0 {
        params.push(("max_id".to_string(), max_id.to_string()));
    }
    params
}

/// Builds the paging parameter set with an explicit page number.
///
/// Same sentinel handling as [`paging_params`], with a leading `page`
/// entry that is always present.
pub fn paging_params_with_page(page: i32, count: i32, since_id: i64, max_id: i64) -> QueryParams {
    let mut params = Vec::with_capacity(4);
    params.push(("page".to_string(), page.to_string()));
    params.extend(paging_params(count, since_id, max_id));
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &QueryParams) -> Vec<&str> {
        params.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_count_only_when_ids_unset() {
        for (since_id, max_id) in [(0, 0), (-1, 0), (0, -5), (-10, -10)] {
            let params = paging_params(50, since_id, max_id);
            assert_eq!(params, vec![("count".to_string(), "50".to_string())]);
        }
    }

    #[test]
    fn test_positive_ids_included() {
        let params = paging_params(20, 1000, 5000);
        assert_eq!(keys(&params), vec!["count", "since_id", "max_id"]);
        assert_eq!(params[1].1, "1000");
        assert_eq!(params[2].1, "5000");
    }

    #[test]
    fn test_page_variant_always_emits_page() {
        let params = paging_params_with_page(1, 50, 0, 0);
        assert_eq!(keys(&params), vec!["page", "count"]);
    }

    #[test]
    fn test_page_with_since_id_scenario() {
        let params = paging_params_with_page(2, 50, 1000, 0);
        assert_eq!(
            params,
            vec![
                ("page".to_string(), "2".to_string()),
                ("count".to_string(), "50".to_string()),
                ("since_id".to_string(), "1000".to_string()),
            ]
        );
    }

    #[test]
    fn test_max_id_scenario_without_page() {
        let params = paging_params(20, 0, 5000);
        assert_eq!(
            params,
            vec![
                ("count".to_string(), "20".to_string()),
                ("max_id".to_string(), "5000".to_string()),
            ]
        );
    }

    #[test]
    fn test_both_ids_may_coexist() {
        let params = paging_params_with_page(3, 10, 7, 9);
        assert_eq!(keys(&params), vec!["page", "count", "since_id", "max_id"]);
    }
}
