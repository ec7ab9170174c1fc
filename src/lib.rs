//! Domain core for a multi-tenant shop platform.
//!
//! The centrepiece is [`slug::slugify`], which turns a shop's display name
//! (or any other displayable value) into a URL-safe, lowercase, hyphenated
//! identifier. Around it sit the shop identity value objects and
//! [`domain::shop::ShopSlugService`], which a shop-creation flow uses to
//! produce a slug no existing shop already holds. Storage, HTTP, and
//! authentication live in the host application; they reach this crate only
//! through the [`domain::shop::ShopReadRepository`] port.

pub mod domain;
pub mod slug;

pub use slug::{DefaultSlugGenerator, SlugGenerator, slugify};
