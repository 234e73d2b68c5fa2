//! URL slugs derived from titles and names.

use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("valid slug regex"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid slug regex"));

/// Lowercases, drops anything that is not an ASCII word character, whitespace
/// or `-`, collapses separator runs into a single `-` and trims dashes at
/// both ends.
///
/// May return an empty string (e.g. for `"!!!"`); callers treat that as an
/// invalid title.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = DISALLOWED.replace_all(lowered.trim(), "");
    let dashed = SEPARATORS.replace_all(&stripped, "-");
    dashed.trim_matches('-').to_string()
}

/// Slug for an experience: title and company joined, then slugified.
pub fn experience_slug(title: &str, company: &str) -> String {
    slugify(&format!("{title}-{company}"))
}

/// Canonical form of a slug taken from a URL path. Stored slugs are always
/// lowercase, so lookups and self-comparisons go through this.
pub fn normalize_path_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}

/// `base` for the first attempt, `base-n` for retries.
pub fn with_suffix(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates_words() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust Web Services"), "rust-web-services");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("Next.js 14: Advanced!"), "nextjs-14-advanced");
        assert_eq!(slugify("Rust & Go"), "rust-go");
    }

    #[test]
    fn collapses_separator_runs_and_trims_dashes() {
        assert_eq!(slugify("  --Case__Study --  "), "case-study");
        assert_eq!(slugify("a - b _ c"), "a-b-c");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(slugify("Optimización"), "optimizacin");
        assert_eq!(slugify("Café Déjà Vu"), "caf-dj-vu");
    }

    #[test]
    fn punctuation_only_input_yields_empty_slug() {
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn is_deterministic_and_idempotent() {
        let once = slugify("Senior Backend Engineer");
        assert_eq!(once, slugify("Senior Backend Engineer"));
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn experience_slug_joins_title_and_company() {
        assert_eq!(
            experience_slug("Backend Engineer", "Acme Corp"),
            "backend-engineer-acme-corp"
        );
    }

    #[test]
    fn path_slugs_are_trimmed_and_lowercased() {
        assert_eq!(normalize_path_slug(" Rust "), "rust");
        assert_eq!(normalize_path_slug("Portfolio-CMS"), "portfolio-cms");
    }

    #[test]
    fn suffixes_start_after_the_base() {
        assert_eq!(with_suffix("dev-acme", 0), "dev-acme");
        assert_eq!(with_suffix("dev-acme", 1), "dev-acme-1");
        assert_eq!(with_suffix("dev-acme", 12), "dev-acme-12");
    }
}
