//! Search query generation for movies, seasons and episodes.
//!
//! Indexers index the same content under different titles, locales and
//! numbering conventions. Recall beats precision here: over-generating
//! variants is cheap because downstream deduplication absorbs the overlap.

use std::collections::HashSet;

use super::title;

/// Queries for a movie: localized title plus, when the transliterated
/// original title is Latin-representable and different, that variant too.
pub fn movie_queries(title_text: &str, original_title: &str, year: i32) -> Vec<String> {
    let mut queries = vec![format!("{} {}", title_text.trim(), year)];

    let original_latin = title::transliterate(original_title);
    if title::is_latin(&original_latin) {
        let variant = format!("{} {}", original_latin.trim(), year);
        if !queries.contains(&variant) {
            queries.push(variant);
        }
    }

    queries
}

/// Queries for a whole season, covering S-number, padded, and per-locale
/// "Season" wordings plus the season-pack `e01-e` convention.
pub fn season_queries(
    localized_title: &str,
    english_title: &str,
    original_title: &str,
    season: u32,
) -> Vec<String> {
    let mut queries = Vec::new();
    for t in title_variants(localized_title, english_title, original_title) {
        queries.push(format!("{t} S{season}"));
        queries.push(format!("{t} S{season:02}"));
        queries.push(format!("{t} Season {season:02}"));
        queries.push(format!("{t} Sezona {season:02}"));
        queries.push(format!("{t} Saison {season:02}"));
        queries.push(format!("{t} e01-e"));
    }
    dedup_queries(queries)
}

/// Queries for a single episode, covering padded/unpadded season numbers,
/// dotted separators and per-locale wordings.
pub fn episode_queries(
    localized_title: &str,
    english_title: &str,
    original_title: &str,
    season: u32,
    episode: u32,
) -> Vec<String> {
    let mut queries = Vec::new();
    for t in title_variants(localized_title, english_title, original_title) {
        queries.push(format!("{t} S{season:02}E{episode:02}"));
        queries.push(format!("{t} S{season}E{episode:02}"));
        queries.push(format!("{t} S{season:02}.E{episode:02}"));
        queries.push(format!("{t} S{season}.E{episode:02}"));
        queries.push(format!("{t} Season {season:02} Episode {episode:02}"));
        queries.push(format!("{t} Saison {season:02} Episode {episode:02}"));
    }
    dedup_queries(queries)
}

/// Remove exact duplicates (case-sensitive), preserving first-occurrence
/// order. Applied once more by the engine after combining query sets.
pub fn dedup_queries(queries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    queries
        .into_iter()
        .filter(|q| !q.is_empty())
        .filter(|q| seen.insert(q.clone()))
        .collect()
}

/// Deduplicated union of the localized and English titles, plus the
/// transliterated original title when it is Latin-representable. Strips
/// `!` so titles like "American Dad!" match indexed releases.
fn title_variants(localized: &str, english: &str, original: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::new();
    let original_latin = title::transliterate(original);

    let mut push = |candidate: &str| {
        let cleaned = candidate.replace('!', "");
        let cleaned = cleaned.trim();
        if !cleaned.is_empty() && !variants.iter().any(|v| v == cleaned) {
            variants.push(cleaned.to_string());
        }
    };

    push(localized);
    push(english);
    if title::is_latin(&original_latin) {
        push(&original_latin);
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_queries_basic() {
        let queries = movie_queries("The Matrix", "The Matrix", 1999);
        assert_eq!(queries, vec!["The Matrix 1999"]);
    }

    #[test]
    fn test_movie_queries_transliterated_original() {
        let queries = movie_queries("Underground", "Подземље", 1995);
        assert_eq!(queries, vec!["Underground 1995", "Podzemlje 1995"]);
    }

    #[test]
    fn test_movie_queries_non_latin_original_skipped() {
        // Untransliterable scripts stay out of the query set.
        let queries = movie_queries("Oldboy", "올드보이", 2003);
        assert_eq!(queries, vec!["Oldboy 2003"]);
    }

    #[test]
    fn test_season_queries_cover_numbering_conventions() {
        let queries = season_queries("Silo", "Silo", "Silo", 2);
        for expected in [
            "Silo S2",
            "Silo S02",
            "Silo Season 02",
            "Silo Sezona 02",
            "Silo Saison 02",
            "Silo e01-e",
        ] {
            assert!(queries.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_season_queries_pad_collapses_for_double_digit_seasons() {
        let queries = season_queries("Silo", "Silo", "Silo", 12);
        // S12 appears once even though both the padded and unpadded
        // variants produce it.
        assert_eq!(queries.iter().filter(|q| *q == "Silo S12").count(), 1);
    }

    #[test]
    fn test_season_queries_strip_exclamation() {
        let queries = season_queries("American Dad!", "American Dad!", "American Dad!", 5);
        assert!(queries.contains(&"American Dad S05".to_string()));
        assert!(queries.iter().all(|q| !q.contains('!')));
    }

    #[test]
    fn test_season_queries_union_of_titles() {
        let queries = season_queries("La Casa de Papel", "Money Heist", "La Casa de Papel", 1);
        assert!(queries.contains(&"La Casa de Papel S01".to_string()));
        assert!(queries.contains(&"Money Heist S01".to_string()));
    }

    #[test]
    fn test_episode_queries_formats() {
        let queries = episode_queries("Dark", "Dark", "Dark", 1, 5);
        assert_eq!(
            queries,
            vec![
                "Dark S01E05",
                "Dark S1E05",
                "Dark S01.E05",
                "Dark S1.E05",
                "Dark Season 01 Episode 05",
                "Dark Saison 01 Episode 05",
            ]
        );
    }

    #[test]
    fn test_episode_queries_unpadded_season_collapses() {
        let queries = episode_queries("Dark", "Dark", "Dark", 10, 3);
        assert!(queries.contains(&"Dark S10E03".to_string()));
        assert_eq!(queries.iter().filter(|q| *q == "Dark S10E03").count(), 1);
    }

    #[test]
    fn test_dedup_queries_is_case_sensitive() {
        let queries = dedup_queries(vec![
            "Silo S02".to_string(),
            "silo s02".to_string(),
            "Silo S02".to_string(),
        ]);
        assert_eq!(queries, vec!["Silo S02", "silo s02"]);
    }

    #[test]
    fn test_dedup_queries_preserves_order() {
        let queries = dedup_queries(vec!["b".into(), "a".into(), "b".into(), "c".into()]);
        assert_eq!(queries, vec!["b", "a", "c"]);
    }
}
