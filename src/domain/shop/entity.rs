// src/domain/shop/entity.rs
use crate::domain::shop::value_objects::{ShopId, ShopName, ShopSlug};

#[derive(Debug, Clone)]
pub struct Shop {
    pub id: ShopId,
    pub name: ShopName,
    pub slug: ShopSlug,
}

impl Shop {
    pub fn rename(&mut self, name: ShopName) {
        self.name = name;
    }

    pub fn set_slug(&mut self, slug: ShopSlug) {
        self.slug = slug;
    }
}
