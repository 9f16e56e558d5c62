// Category Resolver
//
// Concept: Map a normalized term set plus the detection confidence to exactly
// one canonical category through a five-tier cascade:
//
// 1. Direct lookup   - a term is itself a knowledge base key
// 2. Keyword lookup  - a term exactly equals some record's keyword
// 3. Rule matching   - highest-scoring synonym rule (strict improvement only)
// 4. Overrides       - always run on whatever tiers 1-3 produced
// 5. Fallback        - confident unmapped label passes through, else "Object"
//
// Tiers 1-3 short-circuit each other; tier 4 never gets skipped. `resolve` is
// total: every input, including an empty term set, yields a category.

use super::matching_rules::{self, MatchingRule, MATCHING_RULES};
use super::normalizer::TermSet;
use super::overrides::{self, OverrideGroup, OverrideRule, OVERRIDE_RULES};
use super::snake::SnakeFallback;
use crate::config::Thresholds;
use crate::knowledge::{CategoryKey, KnowledgeBase};
use serde::Serialize;

/// Which tier settled the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionTier {
    DirectLookup,
    KeywordLookup,
    RuleMatch,
    ConfidencePassthrough,
    GenericBucket,
}

/// Resolved category plus the trace of how it was reached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub key: CategoryKey,
    pub tier: ResolutionTier,
    /// Tier 1-3 result before overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<&'static str>,
    /// Name of the override that replaced `base`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_override: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_group: Option<OverrideGroup>,
}

/// Category resolver
///
/// Pure: reads only the static knowledge base and rule tables.
pub struct CategoryResolver {
    kb: &'static KnowledgeBase,
    rules: &'static [MatchingRule],
    overrides: &'static [OverrideRule],
    thresholds: Thresholds,
    snake_fallback: SnakeFallback,
}

impl Default for CategoryResolver {
    fn default() -> Self {
        Self::new(Thresholds::default(), SnakeFallback::default())
    }
}

impl CategoryResolver {
    pub fn new(thresholds: Thresholds, snake_fallback: SnakeFallback) -> Self {
        Self {
            kb: KnowledgeBase::global(),
            rules: MATCHING_RULES,
            overrides: OVERRIDE_RULES,
            thresholds,
            snake_fallback,
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn snake_fallback(&self) -> SnakeFallback {
        self.snake_fallback
    }

    /// Resolve to one canonical category
    pub fn resolve(&self, terms: &TermSet, confidence: f64) -> CategoryKey {
        self.resolve_detailed(terms, confidence).key
    }

    /// Resolve and report which tier (and override) decided
    pub fn resolve_detailed(&self, terms: &TermSet, confidence: f64) -> Resolution {
        let base = self
            .direct_lookup(terms)
            .map(|k| (k, ResolutionTier::DirectLookup))
            .or_else(|| self.keyword_lookup(terms).map(|k| (k, ResolutionTier::KeywordLookup)))
            .or_else(|| self.rule_match(terms).map(|k| (k, ResolutionTier::RuleMatch)));

        // Tier 4: overrides run on whatever tiers 1-3 produced
        if let Some((base_key, tier)) = base {
            let applied =
                overrides::apply_overrides(self.overrides, base_key, terms, self.snake_fallback);
            let final_key = applied.map_or(base_key, |o| o.category);

            tracing::debug!(
                "Resolved '{}' via {:?} (base '{}')",
                final_key,
                tier,
                base_key
            );

            return Resolution {
                key: self.static_key(final_key),
                tier,
                base: Some(base_key),
                applied_override: applied.map(|o| o.rule),
                override_group: applied.map(|o| o.group),
            };
        }

        // Tier 5: confidence-gated fallback
        let (key, tier) = match terms.primary() {
            Some(primary) if confidence > self.thresholds.high_confidence_passthrough => {
                tracing::debug!(
                    "No tier matched, passing through confident label '{}' ({:.2})",
                    primary,
                    confidence
                );
                (
                    CategoryKey::Passthrough(primary.to_string()),
                    ResolutionTier::ConfidencePassthrough,
                )
            }
            _ => {
                tracing::debug!("No tier matched, using generic bucket ({:.2})", confidence);
                (CategoryKey::Object, ResolutionTier::GenericBucket)
            }
        };

        Resolution {
            key,
            tier,
            base: None,
            applied_override: None,
            override_group: None,
        }
    }

    /// Tier 1: first term (in order) that is a key
    fn direct_lookup(&self, terms: &TermSet) -> Option<&'static str> {
        terms.iter().find_map(|term| self.kb.canonical_key(term))
    }

    /// Tier 2: first term (in order) that is some record's keyword
    fn keyword_lookup(&self, terms: &TermSet) -> Option<&'static str> {
        terms.iter().find_map(|term| self.kb.key_for_keyword(term))
    }

    /// Tier 3
    fn rule_match(&self, terms: &TermSet) -> Option<&'static str> {
        matching_rules::best_match(self.rules, terms).map(|(category, score)| {
            tracing::debug!("Rule match '{}' scored {}", category, score);
            category
        })
    }

    fn static_key(&self, key: &'static str) -> CategoryKey {
        if key == crate::knowledge::OBJECT_KEY {
            CategoryKey::Object
        } else {
            CategoryKey::Static(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(terms: &[&str], confidence: f64) -> CategoryKey {
        CategoryResolver::default().resolve(&TermSet::from_terms(terms.iter().copied()), confidence)
    }

    #[test]
    fn test_direct_lookup() {
        assert_eq!(resolve(&["oak"], 0.2), CategoryKey::Static("oak"));
        assert_eq!(resolve(&["plastic"], 0.2), CategoryKey::Static("plastic"));
    }

    #[test]
    fn test_keyword_lookup() {
        let resolution = CategoryResolver::default()
            .resolve_detailed(&TermSet::from_terms(["acorn", "brown"]), 0.5);
        assert_eq!(resolution.key, CategoryKey::Static("oak"));
        assert_eq!(resolution.tier, ResolutionTier::KeywordLookup);
    }

    #[test]
    fn test_rule_match() {
        let resolution = CategoryResolver::default()
            .resolve_detailed(&TermSet::from_terms(["tall trunk", "timber"]), 0.5);
        assert_eq!(resolution.key, CategoryKey::Static("tree"));
        assert_eq!(resolution.tier, ResolutionTier::RuleMatch);
    }

    #[test]
    fn test_override_runs_after_direct_lookup() {
        let resolution = CategoryResolver::default()
            .resolve_detailed(&TermSet::from_terms(["flower", "sunflower"]), 0.8);
        assert_eq!(resolution.key, CategoryKey::Static("sunflower"));
        assert_eq!(resolution.base, Some("flower"));
        assert_eq!(resolution.applied_override, Some("flower-species"));
    }

    #[test]
    fn test_pollution_dominance() {
        assert_eq!(resolve(&["river", "plastic"], 0.8), CategoryKey::Static("plastic"));
        assert_eq!(resolve(&["plastic", "river"], 0.8), CategoryKey::Static("plastic"));
    }

    #[test]
    fn test_confidence_gating() {
        assert_eq!(
            resolve(&["xyz123"], 0.95),
            CategoryKey::Passthrough("xyz123".to_string())
        );
        assert_eq!(resolve(&["xyz123"], 0.5), CategoryKey::Object);
        // Strictly above the threshold
        assert_eq!(resolve(&["xyz123"], 0.9), CategoryKey::Object);
    }

    #[test]
    fn test_empty_terms_fall_to_generic_bucket() {
        assert_eq!(resolve(&[], 1.0), CategoryKey::Object);
        assert_eq!(resolve(&[], 0.0), CategoryKey::Object);
    }

    #[test]
    fn test_snake_misread_as_bear() {
        assert_eq!(
            resolve(&["bear", "snake", "swamp"], 0.6),
            CategoryKey::Static("cottonmouth")
        );
    }

    #[test]
    fn test_random_snake_strategy_stays_in_family() {
        let resolver = CategoryResolver::new(Thresholds::default(), SnakeFallback::RandomSpecies);
        let key = resolver.resolve(&TermSet::from_terms(["tree", "serpent"]), 0.6);
        assert!(
            crate::engine::snake::SNAKE_SPECIES
                .iter()
                .any(|(_, c)| *c == key.as_str()),
            "unexpected {}",
            key
        );
    }

    #[test]
    fn test_custom_passthrough_threshold() {
        let thresholds = Thresholds {
            high_confidence_passthrough: 0.5,
            ..Thresholds::default()
        };
        let resolver = CategoryResolver::new(thresholds, SnakeFallback::default());
        assert_eq!(
            resolver.resolve(&TermSet::from_terms(["xyz123"]), 0.6),
            CategoryKey::Passthrough("xyz123".to_string())
        );
    }
}
