// src/slug.rs
use std::fmt;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Turns any displayable value into a URL-safe identifier.
///
/// The input is rendered to text and pushed through a fixed pipeline:
/// canonical decomposition with combining marks dropped (so `Café` reduces
/// to `Cafe`), lowercasing, whitespace runs becoming single hyphens, and an
/// ASCII allow-list (letters, digits, underscore, hyphen) filtering out
/// everything else. Hyphen runs collapse to one hyphen and the ends are
/// stripped, so the result never starts or ends with `-` and never contains
/// `--`.
///
/// Degenerate input (empty, all punctuation) yields an empty string. That
/// is a valid result, not an error; callers that need a non-empty
/// identifier enforce it themselves, as
/// [`ShopSlug`](crate::domain::shop::ShopSlug) does.
///
/// The function is pure and idempotent: feeding a slug back in returns it
/// unchanged.
#[must_use]
pub fn slugify(input: impl fmt::Display) -> String {
    let text = input.to_string();
    let mut slug = String::with_capacity(text.len());
    let mut hyphen_pending = false;

    for ch in text.nfd().filter(|&c| !is_combining_mark(c)) {
        for low in ch.to_lowercase() {
            if low.is_whitespace() || low == '-' {
                // Separator runs become a single hyphen, and only an
                // interior one: nothing is emitted before the first word
                // character, and a trailing run is never flushed.
                hyphen_pending = !slug.is_empty();
            } else if low.is_ascii_alphanumeric() || low == '_' {
                if hyphen_pending {
                    slug.push('-');
                    hyphen_pending = false;
                }
                slug.push(low);
            }
        }
    }

    slug
}

/// Pluggable slug source for domain services, so tests can substitute a
/// canned generator for the real pipeline.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds_invariant(slug: &str) -> bool {
        !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
            && slug.chars().all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'
            })
    }

    #[test]
    fn basic_phrases() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("My Little Shop"), "my-little-shop");
        assert_eq!(slugify("Top 10 Deals"), "top-10-deals");
    }

    #[test]
    fn diacritics_reduce_to_base_letters() {
        assert_eq!(slugify("  Café   au Lait!! "), "cafe-au-lait");
        assert_eq!(slugify("Héllö Wörld"), "hello-world");
        assert_eq!(slugify("Crème brûlée"), "creme-brulee");
    }

    #[test]
    fn separator_runs_collapse() {
        assert_eq!(slugify("so   many\t\tspaces"), "so-many-spaces");
        assert_eq!(slugify("hyphen--happy---name"), "hyphen-happy-name");
        assert_eq!(slugify(" - leading and trailing - "), "leading-and-trailing");
    }

    #[test]
    fn non_word_characters_drop_out() {
        assert_eq!(slugify("Price: $99.99"), "price-9999");
        assert_eq!(slugify("shop@example.com"), "shopexamplecom");
        assert_eq!(slugify("Hello 世界"), "hello");
    }

    #[test]
    fn underscores_are_word_characters() {
        assert_eq!(slugify("snake_case_name"), "snake_case_name");
        assert_eq!(slugify("_wrapped_"), "_wrapped_");
    }

    #[test]
    fn degenerate_input_yields_empty_string() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn already_slugged_input_survives_lowercased() {
        assert_eq!(slugify("Already-Slugged-123"), "already-slugged-123");
        assert_eq!(slugify("already-slugged-123"), "already-slugged-123");
    }

    #[test]
    fn numeric_input_is_rendered_first() {
        assert_eq!(slugify(12345), "12345");
        assert_eq!(slugify(-7), "7");
    }

    #[test]
    fn idempotent_over_varied_inputs() {
        let inputs = [
            "  Café   au Lait!! ",
            "Hello, World!",
            "Already-Slugged-123",
            "snake_case_name",
            "--- odd -- spacing ---",
            "Ünïcödé Sälàd",
            "",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn output_always_holds_the_slug_invariant() {
        let inputs = [
            "plain",
            "  Café   au Lait!! ",
            "a - b -- c --- d",
            "\t\nwild\u{a0}whitespace\r",
            "punctuation!@#$%^&*()only",
            "MIXED Case With 123 and _underscores_",
            "日本語のみ",
            "-starts-and-ends-",
        ];
        for input in inputs {
            let slug = slugify(input);
            assert!(holds_invariant(&slug), "invariant broken for {input:?}: {slug:?}");
        }
    }

    #[test]
    fn default_generator_delegates_to_pipeline() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("Hello, World!"), slugify("Hello, World!"));
    }
}
