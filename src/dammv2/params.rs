use crate::Query;

/// Filters for [`DammV2Client::list_pools`](super::DammV2Client::list_pools).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPoolsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
    pub search_term: Option<String>,
    pub hide_blacklist: Option<bool>,
    /// Comma-separated tags a pool must carry.
    pub include_tags: Option<String>,
    /// Comma-separated tags a pool must not carry.
    pub exclude_tags: Option<String>,
}

impl ListPoolsParams {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .set_opt("page", self.page)
            .set_opt("limit", self.limit)
            .set_opt("sort_by", self.sort_by.as_deref())
            .set_opt("sort_order", self.sort_order.as_deref())
            .set_opt("search_term", self.search_term.as_deref())
            .set_opt("hide_blacklist", self.hide_blacklist)
            .set_opt("include_tags", self.include_tags.as_deref())
            .set_opt("exclude_tags", self.exclude_tags.as_deref());
        query
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListGroupsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub search_term: Option<String>,
    pub hide_blacklist: Option<bool>,
}

impl ListGroupsParams {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .set_opt("page", self.page)
            .set_opt("limit", self.limit)
            .set_opt("sort_by", self.sort_by.as_deref())
            .set_opt("sort_order", self.sort_order.as_deref())
            .set_opt("search_term", self.search_term.as_deref())
            .set_opt("hide_blacklist", self.hide_blacklist);
        query
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetGroupParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl GetGroupParams {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .set_opt("page", self.page)
            .set_opt("limit", self.limit)
            .set_opt("sort_by", self.sort_by.as_deref())
            .set_opt("sort_order", self.sort_order.as_deref());
        query
    }
}

#[cfg(test)]
mod tests {
    use super::{GetGroupParams, ListPoolsParams};

    #[test]
    fn list_pools_params_encode_booleans_and_tags() {
        let params = ListPoolsParams {
            page: Some(1),
            limit: Some(10),
            hide_blacklist: Some(false),
            include_tags: Some("lst,meme".into()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().encode(),
            "hide_blacklist=false&include_tags=lst%2Cmeme&limit=10&page=1"
        );
    }

    #[test]
    fn empty_group_params_produce_no_query() {
        assert!(GetGroupParams::default().to_query().is_empty());
    }
}
