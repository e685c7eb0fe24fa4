use crate::models::entities::listing::Listing;
use crate::models::money::Money;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub category: String,
    pub daily_rate: Money,
    pub deposit_amount: Money,
}

impl From<Listing> for ListingDto {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            owner_id: listing.owner_id,
            name: listing.name,
            category: listing.category,
            daily_rate: listing.daily_rate,
            deposit_amount: listing.deposit_amount,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingsResponse {
    pub listings: Vec<ListingDto>,
}
