use crate::Query;

/// Filters for [`DammV1Client::search_pools`](super::DammV1Client::search_pools).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// 0-based page number.
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub search_term: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl SearchParams {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .set_opt("page", self.page)
            .set_opt("size", self.size)
            .set_opt("search_term", self.search_term.as_deref())
            .set_opt("sort_by", self.sort_by.as_deref())
            .set_opt("sort_order", self.sort_order.as_deref());
        query
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PaginationParams {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .set_opt("page", self.page)
            .set_opt("size", self.size);
        query
    }
}

/// Filters for [`DammV1Client::list_alpha_vaults`](super::DammV1Client::list_alpha_vaults).
///
/// Every value is sent as its own query pair; an empty list sends nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlphaVaultParams {
    pub vault_address: Vec<String>,
    pub pool_address: Vec<String>,
    pub base_mint: Vec<String>,
}

impl AlphaVaultParams {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .extend("vault_address", &self.vault_address)
            .extend("pool_address", &self.pool_address)
            .extend("base_mint", &self.base_mint);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::{AlphaVaultParams, PaginationParams, SearchParams};

    #[test]
    fn search_params_use_size_not_limit() {
        let params = SearchParams {
            page: Some(0),
            size: Some(20),
            search_term: Some("SOL".into()),
            ..Default::default()
        };
        assert_eq!(params.to_query().encode(), "page=0&search_term=SOL&size=20");
    }

    #[test]
    fn pagination_params_default_to_empty() {
        assert!(PaginationParams::default().to_query().is_empty());
    }

    #[test]
    fn alpha_vault_params_repeat_keys() {
        let params = AlphaVaultParams {
            vault_address: vec!["v1".into(), "v2".into()],
            pool_address: Vec::new(),
            base_mint: vec!["m1".into()],
        };
        assert_eq!(
            params.to_query().encode(),
            "base_mint=m1&vault_address=v1&vault_address=v2"
        );
        assert!(AlphaVaultParams::default().to_query().is_empty());
    }
}
