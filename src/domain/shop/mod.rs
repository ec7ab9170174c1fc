pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::Shop;
pub use repository::ShopReadRepository;
pub use services::ShopSlugService;
pub use value_objects::{ShopId, ShopName, ShopSlug};
