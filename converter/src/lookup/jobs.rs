//! Job vocabulary.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::normalize_alias;
use crate::error::{LookupError, LookupResult};

/// Lower-case alias (abbreviation or full name) to job code.
pub const JOB_ALIASES: &[(&str, &str)] = &[
    ("brd", "BRD"),
    ("bard", "BRD"),
    ("bst", "BST"),
    ("beastmaster", "BST"),
    ("blm", "BLM"),
    ("black mage", "BLM"),
    ("blu", "BLU"),
    ("blue mage", "BLU"),
    ("cor", "COR"),
    ("corsair", "COR"),
    ("dnc", "DNC"),
    ("dancer", "DNC"),
    ("drk", "DRK"),
    ("dark knight", "DRK"),
    ("drg", "DRG"),
    ("dragoon", "DRG"),
    ("geo", "GEO"),
    ("geomancer", "GEO"),
    ("mnk", "MNK"),
    ("monk", "MNK"),
    ("nin", "NIN"),
    ("ninja", "NIN"),
    ("pld", "PLD"),
    ("paladin", "PLD"),
    ("pup", "PUP"),
    ("puppetmaster", "PUP"),
    ("rng", "RNG"),
    ("ranger", "RNG"),
    ("rdm", "RDM"),
    ("red mage", "RDM"),
    ("run", "RUN"),
    ("rune fencer", "RUN"),
    ("sam", "SAM"),
    ("samurai", "SAM"),
    ("sch", "SCH"),
    ("scholar", "SCH"),
    ("smn", "SMN"),
    ("summoner", "SMN"),
    ("thf", "THF"),
    ("thief", "THF"),
    ("war", "WAR"),
    ("warrior", "WAR"),
    ("whm", "WHM"),
    ("white mage", "WHM"),
];

/// Values the source uses in the job column that do not name a job.
pub const NOT_A_JOB: &[&str] = &["toau", "maze rune", ":", "job"];

static JOBS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| JOB_ALIASES.iter().copied().collect());

/// Resolve a job alias to its canonical code.
///
/// `sam/war` style aliases resolve each segment and rejoin them with `/`.
/// Empty input and the [`NOT_A_JOB`] placeholders resolve to no job; any
/// other unknown segment fails the whole alias.
pub fn resolve_job(alias: &str) -> LookupResult<Option<String>> {
    let normalized = normalize_alias(alias);
    if normalized.is_empty() || NOT_A_JOB.contains(&normalized.as_str()) {
        return Ok(None);
    }

    let codes = normalized
        .split('/')
        .map(|segment| {
            JOBS.get(segment.trim())
                .copied()
                .ok_or_else(|| LookupError::UnknownJob(alias.to_string()))
        })
        .collect::<LookupResult<Vec<_>>>()?;

    Ok(Some(codes.join("/")))
}
