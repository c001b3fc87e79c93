//! Portfolio and catalog DTOs

use serde::Serialize;

use domain_fund::{Fund, FundListing};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundListResponse {
    pub funds: Vec<Fund>,
    pub categories: Vec<String>,
    pub total_funds: usize,
}

impl From<FundListing> for FundListResponse {
    fn from(listing: FundListing) -> Self {
        Self {
            total_funds: listing.funds.len(),
            funds: listing.funds,
            categories: listing.categories,
        }
    }
}
