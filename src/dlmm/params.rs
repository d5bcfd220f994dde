use crate::Query;

/// Filters for [`DlmmClient::list_pools`](super::DlmmClient::list_pools).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPoolsParams {
    /// 1-based page number.
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Free-text search over pool name, address and mints.
    pub query: Option<String>,
    /// Filter expression, e.g. `tvl>1000 && is_blacklisted=false`.
    pub filter_by: Option<String>,
    /// Sort expression, e.g. `volume_24h:desc`.
    pub sort_by: Option<String>,
}

impl ListPoolsParams {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .set_opt("page", self.page)
            .set_opt("page_size", self.page_size)
            .set_opt("query", self.query.as_deref())
            .set_opt("filter_by", self.filter_by.as_deref())
            .set_opt("sort_by", self.sort_by.as_deref());
        query
    }
}

/// Filters for [`DlmmClient::get_group`](super::DlmmClient::get_group).
pub type GetGroupParams = ListPoolsParams;

/// Filters for [`DlmmClient::list_groups`](super::DlmmClient::list_groups).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListGroupsParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub query: Option<String>,
    pub filter_by: Option<String>,
    pub sort_by: Option<String>,
    /// Window for the volume column, e.g. `24h`.
    pub volume_tw: Option<String>,
    /// Window for the fee/TVL ratio column.
    pub fee_tvl_ratio_tw: Option<String>,
}

impl ListGroupsParams {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .set_opt("page", self.page)
            .set_opt("page_size", self.page_size)
            .set_opt("query", self.query.as_deref())
            .set_opt("filter_by", self.filter_by.as_deref())
            .set_opt("sort_by", self.sort_by.as_deref())
            .set_opt("volume_tw", self.volume_tw.as_deref())
            .set_opt("fee_tvl_ratio_tw", self.fee_tvl_ratio_tw.as_deref());
        query
    }
}

#[cfg(test)]
mod tests {
    use super::{ListGroupsParams, ListPoolsParams};

    #[test]
    fn list_pools_params_encode_set_fields_only() {
        assert!(ListPoolsParams::default().to_query().is_empty());

        let params = ListPoolsParams {
            page: Some(2),
            page_size: Some(50),
            sort_by: Some("tvl:desc".into()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().encode(),
            "page=2&page_size=50&sort_by=tvl%3Adesc"
        );
    }

    #[test]
    fn list_groups_params_include_time_windows() {
        let params = ListGroupsParams {
            volume_tw: Some("24h".into()),
            fee_tvl_ratio_tw: Some("1h".into()),
            ..Default::default()
        };
        let query = params.to_query();
        assert_eq!(query.get("volume_tw"), Some("24h"));
        assert_eq!(query.get("fee_tvl_ratio_tw"), Some("1h"));
        assert_eq!(query.get("page"), None);
    }
}
