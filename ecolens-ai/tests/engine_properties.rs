//! Behavioural properties of the core engine
//!
//! normalize → resolve → compose → quiz, exercised through the public API only.

use ecolens_ai::config::Thresholds;
use ecolens_ai::engine::{normalize, CategoryResolver, NatureEngine, ResolutionTier, SnakeFallback, TermSet};
use ecolens_ai::knowledge::{CategoryKey, KnowledgeBase};
use ecolens_ai::narrative::{NarrativeComposer, PresentationMode, SectionKind};
use ecolens_ai::quiz::{QuizGenerator, QuizProgress, QuizSession, ScoreTier, MAX_QUESTIONS};
use ecolens_ai::types::DetectionResult;

fn terms(list: &[&str]) -> TermSet {
    TermSet::from_terms(list.iter().copied())
}

fn resolve(list: &[&str], confidence: f64) -> CategoryKey {
    CategoryResolver::default().resolve(&terms(list), confidence)
}

fn detection(name: &str, confidence: f64, concepts: &[&str]) -> DetectionResult {
    DetectionResult::host_supplied(name, confidence, concepts.iter().copied())
}

// ============================================================================
// Resolver
// ============================================================================

#[test]
fn test_resolve_is_total() {
    let inputs: &[&[&str]] = &[
        &[],
        &["xyz123"],
        &["a b c"],
        &["person"],
        &["snake"],
        &["river", "plastic", "oil"],
        &["!!!", "???"],
    ];
    for input in inputs {
        for confidence in [0.0, 0.5, 0.9, 0.95, 1.0] {
            let key = resolve(input, confidence);
            assert!(!key.as_str().is_empty(), "{:?} @ {}", input, confidence);
        }
    }
}

#[test]
fn test_empty_term_set_is_object() {
    assert_eq!(resolve(&[], 1.0), CategoryKey::Object);
}

#[test]
fn test_direct_lookup_beats_rule_match() {
    // "tall trunk" alone would rule-match "tree"
    let resolution =
        CategoryResolver::default().resolve_detailed(&terms(&["tall trunk", "oak"]), 0.5);
    assert_eq!(resolution.key, CategoryKey::Static("oak"));
    assert_eq!(resolution.tier, ResolutionTier::DirectLookup);
}

#[test]
fn test_specific_flower_beats_generic() {
    assert_eq!(resolve(&["sunflower", "flower"], 0.7), CategoryKey::Static("sunflower"));
    assert_eq!(resolve(&["flower", "sunflower"], 0.7), CategoryKey::Static("sunflower"));
}

#[test]
fn test_pollution_dominates_river() {
    assert_eq!(resolve(&["river", "plastic"], 0.7), CategoryKey::Static("plastic"));

    let resolution =
        CategoryResolver::default().resolve_detailed(&terms(&["river", "plastic", "bottle"]), 0.7);
    assert_eq!(resolution.base, Some("river"));
    assert_eq!(resolution.applied_override, Some("pollution-over-nature"));
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
fn test_passthrough_threshold_is_configurable() {
    let resolver = CategoryResolver::new(
        Thresholds {
            high_confidence_passthrough: 0.5,
            ..Thresholds::default()
        },
        SnakeFallback::default(),
    );
    assert_eq!(
        resolver.resolve(&terms(&["xyz123"]), 0.6),
        CategoryKey::Passthrough("xyz123".to_string())
    );
}

#[test]
fn test_snake_context_fallback() {
    // Misread as a bear, but a snake in a swamp
    let key = resolve(&["bear", "snake", "swamp"], 0.6);
    assert_eq!(key, CategoryKey::Static("cottonmouth"));

    let key = resolve(&["bear", "reptile"], 0.6);
    assert_eq!(key, CategoryKey::Static("python"));
}

#[test]
fn test_random_snake_fallback_stays_in_family() {
    let resolver = CategoryResolver::new(Thresholds::default(), SnakeFallback::RandomSpecies);
    let species: Vec<&str> = ecolens_ai::engine::snake::SNAKE_SPECIES
        .iter()
        .map(|(_, key)| *key)
        .collect();
    for _ in 0..50 {
        let key = resolver.resolve(&terms(&["bear", "snake"]), 0.6);
        assert!(species.contains(&key.as_str()), "{}", key);
    }
}

// ============================================================================
// Normalizer
// ============================================================================

#[test]
fn test_normalize_is_idempotent() {
    let d = detection("Golden retriever, dog", 0.9, &["no person", "puppy", "the"]);
    assert_eq!(normalize(&d), normalize(&d));
    assert!(!normalize(&d).contains("no person"));
}

// ============================================================================
// Narrative
// ============================================================================

fn compose(key: CategoryKey, name: &str) -> ecolens_ai::narrative::NarrativeRecord {
    NarrativeComposer::default().compose(&key, &detection(name, 0.8, &[]))
}

#[test]
fn test_plastic_renders_warning_and_plea() {
    let record = compose(CategoryKey::Static("plastic"), "plastic");
    assert_eq!(record.mode, PresentationMode::Pollutant);

    let text = record.display_text();
    let warning = record.warning.clone().unwrap();
    assert!(text.contains(&warning));
    assert!(text.contains(&record.plea));
    assert_ne!(record.mode, PresentationMode::GeneralObject);
}

#[test]
fn test_dog_renders_short_form() {
    let record = compose(CategoryKey::Static("dog"), "dog");
    let kinds: Vec<SectionKind> = record.sections().iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SectionKind::Message, SectionKind::Explanation]);

    let text = record.display_text();
    assert!(!text.contains(&record.plea));
    if let Some(consequences) = &record.consequences {
        assert!(!text.contains(consequences.as_str()));
    }
}

#[test]
fn test_every_catalogued_key_composes() {
    let composer = NarrativeComposer::default();
    for key in KnowledgeBase::global().keys() {
        let category = KnowledgeBase::global().parse_key(key);
        let record = composer.compose(&category, &detection(key, 0.7, &[]));
        assert!(!record.display_text().is_empty(), "{}", key);
    }
}

// ============================================================================
// Quiz
// ============================================================================

#[test]
fn test_quiz_lengths() {
    let generator = QuizGenerator::new();
    for key in KnowledgeBase::global().keys() {
        let questions = generator.generate_questions(&KnowledgeBase::global().parse_key(key));
        assert!(
            (2..=MAX_QUESTIONS).contains(&questions.len()),
            "{} has {} questions",
            key,
            questions.len()
        );
    }
}

#[test]
fn test_quiz_score_boundary() {
    let questions = QuizGenerator::new().questions_for("oak");
    let count = questions.len();
    let correct: Vec<usize> = questions.iter().map(|q| q.correct).collect();

    let mut session = QuizSession::new("oak", questions);
    session.start().unwrap();

    let mut summary = None;
    for (index, answer) in correct.iter().enumerate() {
        // First two right, the rest wrong
        let choice = if index < 2 { *answer } else { (*answer + 1) % 4 };
        session.answer(choice).unwrap();
        if let QuizProgress::Complete { summary: s } = session.advance().unwrap() {
            summary = Some(s);
        }
    }

    let summary = summary.unwrap();
    assert!(count >= 3);
    assert_eq!(summary.score, 20);
    assert_eq!(summary.tier, ScoreTier::Expert);
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_golden_retriever_scenario() {
    let analysis = NatureEngine::default().analyze(&detection("Golden retriever", 0.92, &["dog", "puppy"]));

    assert_eq!(analysis.category, CategoryKey::Static("dog"));
    assert_eq!(analysis.narrative.mode, PresentationMode::Animal);
    assert_eq!(analysis.narrative.sections().len(), 2);
    assert!(!analysis.narrative.display_text().contains(&analysis.narrative.plea));
    assert!(!analysis.questions.is_empty());
}

#[test]
fn test_unknown_label_still_renders() {
    let analysis = NatureEngine::default().analyze(&detection("zz", 0.1, &[]));
    assert_eq!(analysis.category, CategoryKey::Object);
    assert!(!analysis.narrative.display_text().is_empty());
    assert!(!analysis.questions.is_empty());
}
