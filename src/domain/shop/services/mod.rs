// src/domain/shop/services/mod.rs
use std::sync::Arc;

use chrono::Utc;

use crate::domain::errors::DomainResult;
use crate::domain::shop::repository::ShopReadRepository;
use crate::domain::shop::value_objects::{ShopId, ShopName, ShopSlug};
use crate::slug::SlugGenerator;

/// Domain service responsible for producing unique slugs for shops.
pub struct ShopSlugService {
    read_repo: Arc<dyn ShopReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ShopSlugService {
    pub fn new(
        read_repo: Arc<dyn ShopReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Slugifies `name` and probes the repository until the candidate is
    /// free, appending `-1`, `-2`, … on collisions. A name with nothing
    /// sluggable in it falls back to a timestamped `shop-…` identifier.
    /// When renaming, pass the shop's own id as `ignore_id` so it may keep
    /// its current slug.
    pub async fn generate_unique_slug(
        &self,
        name: &ShopName,
        ignore_id: Option<ShopId>,
    ) -> DomainResult<ShopSlug> {
        let base = self.generator.slugify(name.as_str());
        let base_slug = if base.is_empty() {
            let fallback = format!("shop-{}", Utc::now().timestamp());
            tracing::debug!(name = %name, slug = %fallback, "name produced an empty slug, using fallback");
            fallback
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ShopSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id.is_some_and(|id| id == existing.id) => {
                    return Ok(slug);
                }
                Some(_) => {
                    tracing::debug!(slug = %slug, "slug already taken, trying next suffix");
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
