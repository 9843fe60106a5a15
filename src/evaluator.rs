//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::analyze_charset;
use crate::crack_time::{crack_time_seconds, entropy_bits};
use crate::sections::{
    breach_section, character_variety_section, length_section, PasswordProfile, SectionResult,
};
use crate::types::{EvaluationResult, StrengthTier, Verdict};
use crate::wordlist::WordSet;

/// Shown when no section has anything to recommend.
pub const AFFIRMATIVE_RECOMMENDATION: &str = "This is an excellent password. Well done.";

/// Delay before a keystroke-triggered evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Spaces are not allowed")]
    InvalidInput,
}

/// Evaluates password strength against an optional breach wordlist.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `words` - The currently loaded wordlist, if any
///
/// # Returns
/// An `EvaluationResult`, or `EvaluationError::InvalidInput` if the
/// password contains a space.
pub fn evaluate_password(
    password: &SecretString,
    words: Option<&WordSet>,
) -> Result<EvaluationResult, EvaluationError> {
    let pwd = password.expose_secret();

    if pwd.contains(' ') {
        return Err(EvaluationError::InvalidInput);
    }
    if pwd.is_empty() {
        return Ok(EvaluationResult::awaiting());
    }

    let length = pwd.chars().count();
    let charset = analyze_charset(pwd);
    let entropy = entropy_bits(length, charset.pool_size);

    if let Some(reason) = breach_section(pwd, words) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Password found in wordlist {:?}", words.and_then(|w| w.source()));

        return Ok(EvaluationResult {
            pool_size: charset.pool_size,
            active_classes: charset.active_classes,
            entropy_bits: entropy,
            crack_time_seconds: 0.0,
            verdict: Verdict::Compromised,
            recommendations: vec![reason],
        });
    }

    let profile = PasswordProfile {
        length,
        charset: &charset,
    };

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&PasswordProfile<'_>) -> SectionResult); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut recommendations = Vec::new();
    for (_section_name, section_fn) in sections {
        if let Some(recommendation) = section_fn(&profile) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Section {} triggered", _section_name);
            recommendations.push(recommendation);
        }
    }
    if recommendations.is_empty() {
        recommendations.push(AFFIRMATIVE_RECOMMENDATION.to_string());
    }

    Ok(EvaluationResult {
        crack_time_seconds: crack_time_seconds(length, charset.pool_size),
        pool_size: charset.pool_size,
        active_classes: charset.active_classes,
        entropy_bits: entropy,
        verdict: Verdict::Rated(StrengthTier::from_entropy(entropy)),
        recommendations,
    })
}

/// Debounced version that sends the evaluation result via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled in the meantime (a newer
/// keystroke arrived) nothing is evaluated or sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    words: Option<&WordSet>,
    token: CancellationToken,
    tx: mpsc::Sender<Result<EvaluationResult, EvaluationError>>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password(password, words);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharacterClass;
    use crate::crack_time::format_crack_time;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn words(entries: &[&str]) -> WordSet {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_evaluate_empty_password() {
        let result = evaluate_password(&secret(""), None).unwrap();
        assert_eq!(result.entropy_bits, 0.0);
        assert_eq!(result.verdict, Verdict::Awaiting);
        assert!(result.recommendations.is_empty());
        assert_eq!(result.pool_size, 0);
    }

    #[test]
    fn test_evaluate_empty_password_ignores_wordlist() {
        let set = words(&["", "password"]);
        let result = evaluate_password(&secret(""), Some(&set)).unwrap();
        assert_eq!(result.verdict, Verdict::Awaiting);
    }

    #[test]
    fn test_evaluate_space_is_invalid() {
        assert_eq!(
            evaluate_password(&secret("a b"), None),
            Err(EvaluationError::InvalidInput)
        );
        assert_eq!(
            evaluate_password(&secret(" "), None),
            Err(EvaluationError::InvalidInput)
        );
    }

    #[test]
    fn test_evaluate_space_checked_before_wordlist() {
        let set = words(&["a b"]);
        assert_eq!(
            evaluate_password(&secret("a b"), Some(&set)),
            Err(EvaluationError::InvalidInput)
        );
    }

    #[test]
    fn test_evaluate_compromised_password() {
        let set = words(&["password"]);
        let result = evaluate_password(&secret("password"), Some(&set)).unwrap();

        assert_eq!(result.verdict, Verdict::Compromised);
        assert!(result.is_compromised());
        assert_eq!(result.crack_time_seconds, 0.0);
        assert_eq!(format_crack_time(result.crack_time_seconds), "instantly");
        assert_eq!(result.pool_size, 26);
        assert!((result.entropy_bits - 8.0 * 26f64.log2()).abs() < 1e-9);
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn test_evaluate_compromised_ignores_entropy() {
        let strong = "Zq8!vR2#kL9$wX4%";
        let set = words(&[strong]);
        let result = evaluate_password(&secret(strong), Some(&set)).unwrap();
        assert!(result.entropy_bits > 100.0);
        assert_eq!(result.verdict, Verdict::Compromised);
        assert_eq!(result.strength_tier(), None);
    }

    #[test]
    fn test_evaluate_lowercase_only() {
        let result = evaluate_password(&secret("abcdefgh"), None).unwrap();
        assert_eq!(
            result.active_classes.iter().copied().collect::<Vec<_>>(),
            vec![CharacterClass::Lowercase]
        );
        assert_eq!(result.pool_size, 26);
        assert!((result.entropy_bits - 37.6).abs() < 0.05);
        assert_eq!(result.strength_tier(), Some(StrengthTier::Weak));
        assert_eq!(result.recommendations.len(), 2);
    }

    #[test]
    fn test_evaluate_all_classes() {
        let result = evaluate_password(&secret("Abc123!@"), None).unwrap();
        assert_eq!(result.active_classes.len(), 4);
        assert_eq!(result.pool_size, 94);
        assert!((result.entropy_bits - 52.44).abs() < 0.05);
        assert_eq!(result.strength_tier(), Some(StrengthTier::Weak));
        // Only the length recommendation applies
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].contains("longer"));
    }

    #[test]
    fn test_evaluate_excellent_password() {
        let result = evaluate_password(&secret("Tr0ub4dor&3-Horse!Staple"), None).unwrap();
        assert_eq!(result.strength_tier(), Some(StrengthTier::VeryStrong));
        assert_eq!(result.recommendations, vec![AFFIRMATIVE_RECOMMENDATION.to_string()]);
    }

    #[test]
    fn test_evaluate_not_in_wordlist() {
        let set = words(&["password", "123456"]);
        let result = evaluate_password(&secret("password1"), Some(&set)).unwrap();
        assert!(!result.is_compromised());
        assert!(result.strength_tier().is_some());
    }

    #[test]
    fn test_evaluate_foreign_characters_only() {
        let result = evaluate_password(&secret("ééé"), None).unwrap();
        assert_eq!(result.pool_size, 0);
        assert_eq!(result.entropy_bits, 0.0);
        assert_eq!(result.crack_time_seconds, 0.0);
        assert_eq!(result.strength_tier(), Some(StrengthTier::VeryWeak));
    }

    #[test]
    fn test_evaluate_very_long_password_is_finite_entropy() {
        let long = "a".repeat(5_000);
        let result = evaluate_password(&secret(&long), None).unwrap();
        assert!(result.entropy_bits.is_finite());
        assert!(result.crack_time_seconds.is_infinite());
        assert_eq!(result.crack_time_display(), "eons");
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let set = words(&["qwerty"]);
        let pwd = secret("MyPass123!");
        let first = evaluate_password(&pwd, Some(&set));
        let second = evaluate_password(&pwd, Some(&set));
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_tier_boundaries() {
        let cases = [
            ("abc", StrengthTier::VeryWeak),
            ("abcdefgh", StrengthTier::Weak),
            ("Abcdefgh1234", StrengthTier::Moderate),
            ("Abcdefgh123!@", StrengthTier::Strong),
            ("Abcdefgh1234!@#", StrengthTier::Strong),
            ("Abcdefgh1234!@#$", StrengthTier::VeryStrong),
        ];
        for (pwd, expected) in cases {
            let result = evaluate_password(&secret(pwd), None).unwrap();
            assert_eq!(
                result.strength_tier(),
                Some(expected),
                "password '{}' has {} bits",
                pwd,
                result.entropy_bits
            );
        }
    }
}
