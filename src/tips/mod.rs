//! Tip recommender
//!
//! Maps answer tokens to static advice. Each rule is an independent
//! membership check: if any of its trigger tokens was answered, its tip is
//! appended. Rules never suppress each other. When fewer than
//! `MIN_MATCHED_TIPS` rules fire, the fallback tips are appended in order.

pub mod rules;

use serde::Serialize;
use tracing::debug;

use crate::quiz::Icon;
pub use rules::{MIN_MATCHED_TIPS, STANDARD_FALLBACK, STANDARD_RULES};

/// A piece of advice shown on the results view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// One row of the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipRule {
    pub triggers: &'static [&'static str],
    pub tip: Tip,
}

impl TipRule {
    pub fn matches<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        tokens.iter().any(|t| {
            let token = t.as_ref();
            self.triggers.iter().any(|trigger| *trigger == token)
        })
    }
}

/// Ordered rules plus the fallback applied below a threshold
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<TipRule>,
    fallback: Vec<Tip>,
    min_matched: usize,
}

impl RuleSet {
    pub fn new(rules: Vec<TipRule>, fallback: Vec<Tip>, min_matched: usize) -> Self {
        Self {
            rules,
            fallback,
            min_matched,
        }
    }

    /// The rule table used by the quiz
    pub fn standard() -> Self {
        Self::new(
            STANDARD_RULES.to_vec(),
            STANDARD_FALLBACK.to_vec(),
            MIN_MATCHED_TIPS,
        )
    }

    pub fn rules(&self) -> &[TipRule] {
        &self.rules
    }

    /// Every token that can fire a rule
    pub fn trigger_tokens(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .flat_map(|r| r.triggers.iter().copied())
            .collect()
    }

    pub fn recommend<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<Tip> {
        let mut tips: Vec<Tip> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(tokens))
            .map(|rule| rule.tip)
            .collect();

        let matched = tips.len();
        if matched < self.min_matched {
            tips.extend(self.fallback.iter().copied());
        }

        debug!(matched, total = tips.len(), "tips recommended");
        tips
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Recommend tips using the standard rule table
pub fn recommend<S: AsRef<str>>(tokens: &[S]) -> Vec<Tip> {
    RuleSet::standard().recommend(tokens)
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;

    #[test]
    fn test_no_triggers_gives_fallback_only() {
        let tips = recommend(&["ganhar_massa", "saudavel", "diario", "mais_60", "conhecimento"]);
        assert_eq!(tips, vec![HYDRATION, SLEEP_WELL]);
    }

    #[test]
    fn test_single_trigger_plus_fallback() {
        let tips = recommend(&["tempo"]);
        assert_eq!(tips, vec![OPTIMIZE_TIME, HYDRATION, SLEEP_WELL]);
    }

    #[test]
    fn test_three_matches_skip_fallback() {
        let tips = recommend(&["perder_peso", "irregular", "raramente", "30_60", "conhecimento"]);
        assert_eq!(tips, vec![CALORIC_DEFICIT, SMALL_CHANGES, SHORT_WORKOUTS]);
    }

    #[test]
    fn test_rules_fire_once_in_declaration_order() {
        // both triggers of the exercise rule present, still one tip
        let tips = recommend(&["tempo", "menos_15", "raramente", "perder_peso", "motivacao"]);
        assert_eq!(
            tips,
            vec![CALORIC_DEFICIT, SHORT_WORKOUTS, SUSTAINABLE_ROUTINE, OPTIMIZE_TIME]
        );
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(recommend(&empty).len(), 2);
    }

    #[test]
    fn test_trigger_tokens() {
        let tokens = RuleSet::standard().trigger_tokens();
        assert_eq!(tokens.len(), 8);
        assert!(tokens.contains(&"consistencia"));
    }

    #[test]
    fn test_custom_rule_set() {
        let set = RuleSet::new(
            vec![TipRule {
                triggers: &["x"],
                tip: SLEEP_WELL,
            }],
            vec![HYDRATION],
            1,
        );
        assert_eq!(set.recommend(&["x"]), vec![SLEEP_WELL]);
        assert_eq!(set.recommend(&["y"]), vec![HYDRATION]);
    }

    #[test]
    fn test_owned_strings_accepted() {
        let tokens = vec!["perder_peso".to_string()];
        assert_eq!(recommend(&tokens)[0], CALORIC_DEFICIT);
    }
}
