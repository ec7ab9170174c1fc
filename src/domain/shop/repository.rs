use crate::domain::errors::DomainResult;
use crate::domain::shop::entity::Shop;
use crate::domain::shop::value_objects::ShopSlug;
use async_trait::async_trait;

/// Read-side view of shop storage. Storage itself belongs to the host
/// application's shop service; this crate only needs to probe whether a
/// slug is already taken.
#[async_trait]
pub trait ShopReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &ShopSlug) -> DomainResult<Option<Shop>>;
}
