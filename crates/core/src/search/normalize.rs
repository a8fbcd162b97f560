//! Candidate normalization: dedup, link checks and rule scoring.

use std::collections::HashSet;

use tracing::debug;

use super::title;
use super::{Candidate, Quality, QualityRule, RawCandidate, Tag, TagRule};

/// Turn the flattened raw hits from all (indexer, query) pairs into scored
/// candidates.
///
/// Duplicate guids keep their first occurrence; hits with neither a direct
/// link nor a magnet URI are dropped. Both passes preserve input order.
pub fn normalize_candidates(
    raw: Vec<RawCandidate>,
    quality_rules: &[QualityRule],
    tag_rules: &[TagRule],
) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::with_capacity(raw.len());

    for hit in raw {
        if !seen.insert(hit.guid.clone()) {
            continue;
        }
        if hit.link.is_none() && hit.magnet_uri.is_none() {
            debug!(guid = %hit.guid, title = %hit.title, "Dropping candidate without link or magnet");
            continue;
        }

        let (normalized_title, tokens) = title::normalize(&hit.title);
        let quality = match_quality(&tokens, quality_rules);
        let tag = match_tag(&tokens, tag_rules);

        candidates.push(Candidate {
            guid: hit.guid,
            title: hit.title,
            normalized_title,
            tokens,
            indexer: hit.indexer,
            quality,
            tag,
            size_bytes: hit.size_bytes,
            seeders: hit.seeders,
            peers: hit.peers,
            link: hit.link,
            magnet_uri: hit.magnet_uri,
            publish_date: hit.publish_date,
        });
    }

    candidates
}

/// First rule (in list order) with a keyword equal to one of the tokens,
/// case-insensitively; unknown quality scores 0.
pub fn match_quality(tokens: &[String], rules: &[QualityRule]) -> Quality {
    for rule in rules {
        let matched = rule.keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            tokens.iter().any(|t| *t == keyword)
        });
        if matched {
            return Quality {
                label: rule.name.clone(),
                score: rule.score,
            };
        }
    }
    Quality {
        label: "unknown".to_string(),
        score: 0,
    }
}

/// First rule whose lowercased name appears as a token. With no rules
/// configured everything is acceptable (score 1); with rules configured an
/// unmatched candidate scores 0.
pub fn match_tag(tokens: &[String], rules: &[TagRule]) -> Tag {
    if rules.is_empty() {
        return Tag {
            label: "unknown".to_string(),
            score: 1,
        };
    }
    for rule in rules {
        let name = rule.name.to_lowercase();
        if tokens.iter().any(|t| *t == name) {
            return Tag {
                label: rule.name.clone(),
                score: rule.score,
            };
        }
    }
    Tag {
        label: "unknown".to_string(),
        score: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Indexer;

    fn make_raw(guid: &str, title: &str) -> RawCandidate {
        RawCandidate {
            guid: guid.to_string(),
            title: title.to_string(),
            indexer: Indexer {
                id: "ix".to_string(),
                title: "Indexer".to_string(),
                priority: 0,
            },
            size_bytes: 1_000_000,
            seeders: 10,
            peers: 2,
            link: Some(format!("http://example.org/{guid}")),
            magnet_uri: None,
            publish_date: None,
        }
    }

    fn quality_rules() -> Vec<QualityRule> {
        vec![
            QualityRule {
                name: "2160p".to_string(),
                score: 200,
                keywords: vec!["2160p".to_string(), "4k".to_string()],
            },
            QualityRule {
                name: "1080p".to_string(),
                score: 100,
                keywords: vec!["1080p".to_string(), "FullHD".to_string()],
            },
        ]
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let raw = vec![
            make_raw("g1", "Show S01 1080p"),
            make_raw("g2", "Show S01 2160p"),
            make_raw("g1", "Show S01 720p"),
        ];
        let candidates = normalize_candidates(raw, &[], &[]);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].guid, "g1");
        assert_eq!(candidates[0].title, "Show S01 1080p");
        assert_eq!(candidates[1].guid, "g2");
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let raw = vec![
            make_raw("g1", "A"),
            make_raw("g1", "B"),
            make_raw("g2", "C"),
        ];
        let once = normalize_candidates(raw, &[], &[]);
        let guids: Vec<_> = once.iter().map(|c| c.guid.clone()).collect();

        let again = normalize_candidates(
            once.iter()
                .map(|c| make_raw(&c.guid, &c.title))
                .collect(),
            &[],
            &[],
        );
        let guids_again: Vec<_> = again.iter().map(|c| c.guid.clone()).collect();
        assert_eq!(guids, guids_again);
    }

    #[test]
    fn test_drops_candidates_without_any_link() {
        let mut linkless = make_raw("g1", "Show");
        linkless.link = None;
        linkless.magnet_uri = None;
        let mut magnet_only = make_raw("g2", "Show");
        magnet_only.link = None;
        magnet_only.magnet_uri = Some("magnet:?xt=urn:btih:abc".to_string());

        let candidates = normalize_candidates(vec![linkless, magnet_only], &[], &[]);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].guid, "g2");
    }

    #[test]
    fn test_match_quality_first_rule_in_order_wins() {
        let (_, tokens) = crate::search::title::normalize("Show 2160p 1080p");
        let quality = match_quality(&tokens, &quality_rules());
        assert_eq!(quality.label, "2160p");
        assert_eq!(quality.score, 200);
    }

    #[test]
    fn test_match_quality_keyword_is_case_insensitive() {
        let (_, tokens) = crate::search::title::normalize("Show FULLHD");
        let quality = match_quality(&tokens, &quality_rules());
        assert_eq!(quality.label, "1080p");
    }

    #[test]
    fn test_match_quality_unknown() {
        let (_, tokens) = crate::search::title::normalize("Show CAM");
        let quality = match_quality(&tokens, &quality_rules());
        assert_eq!(quality.label, "unknown");
        assert_eq!(quality.score, 0);
    }

    #[test]
    fn test_match_tag_empty_rule_set_accepts_everything() {
        let (_, tokens) = crate::search::title::normalize("Show S01 1080p NOGRP");
        let tag = match_tag(&tokens, &[]);
        assert_eq!(tag.score, 1);
    }

    #[test]
    fn test_match_tag_no_match_scores_zero() {
        let rules = vec![TagRule {
            name: "SPARKS".to_string(),
            score: 50,
        }];
        let (_, tokens) = crate::search::title::normalize("Show S01 1080p NOGRP");
        let tag = match_tag(&tokens, &rules);
        assert_eq!(tag.score, 0);
    }

    #[test]
    fn test_match_tag_matches_token_exactly() {
        let rules = vec![TagRule {
            name: "SPARKS".to_string(),
            score: 50,
        }];
        let (_, tokens) = crate::search::title::normalize("Show.S01.1080p-SPARKS");
        let tag = match_tag(&tokens, &rules);
        assert_eq!(tag.label, "SPARKS");
        assert_eq!(tag.score, 50);
    }
}
