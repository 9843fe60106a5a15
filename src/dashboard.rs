//! Dashboard view model.
//!
//! Maps evaluation outcomes to what the front-end shows: status text, tone,
//! crack-time line, recommendations, character-class checklist and gauge
//! needle. [`Dashboard`] ties the password field and wordlist selection
//! together.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{analyze_charset, CharacterClass};
use crate::crack_time::group_thousands;
use crate::evaluator::{evaluate_password, EvaluationError, AFFIRMATIVE_RECOMMENDATION};
use crate::types::{EvaluationResult, StrengthTier, Verdict};
use crate::wordlist::{discover_wordlists, ReloadPolicy, WordlistError, WordlistStore};

/// Entropy at which the gauge needle reaches full scale.
pub const MAX_ENTROPY_GAUGE: f64 = 128.0;

/// Outcome of a single evaluation.
pub type Outcome = Result<EvaluationResult, EvaluationError>;

/// Which of the four display states the dashboard is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    /// The password contains a space.
    Invalid,
    /// Awaiting input.
    Default,
    Compromised,
    Analyzing(StrengthTier),
}

impl DashboardState {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Err(EvaluationError::InvalidInput) => DashboardState::Invalid,
            Ok(result) => match result.verdict {
                Verdict::Awaiting => DashboardState::Default,
                Verdict::Compromised => DashboardState::Compromised,
                Verdict::Rated(tier) => DashboardState::Analyzing(tier),
            },
        }
    }

    pub fn status_text(self) -> &'static str {
        match self {
            DashboardState::Invalid => "INVALID",
            DashboardState::Default => "AWAITING INPUT",
            DashboardState::Compromised => "COMPROMISED",
            DashboardState::Analyzing(tier) => tier.label(),
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            DashboardState::Invalid => Tone::Alert,
            DashboardState::Default => Tone::Muted,
            DashboardState::Compromised => Tone::Danger,
            DashboardState::Analyzing(StrengthTier::VeryWeak) => Tone::Danger,
            DashboardState::Analyzing(StrengthTier::Weak) => Tone::Warning,
            DashboardState::Analyzing(StrengthTier::Moderate) => Tone::Caution,
            DashboardState::Analyzing(StrengthTier::Strong) => Tone::Good,
            DashboardState::Analyzing(StrengthTier::VeryStrong) => Tone::Excellent,
        }
    }
}

/// Semantic color of the status line; the front-end picks concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Alert,
    Danger,
    Warning,
    Caution,
    Good,
    Excellent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub class: CharacterClass,
    pub active: bool,
    pub label: &'static str,
}

impl ChecklistItem {
    fn new(class: CharacterClass, active: bool) -> Self {
        let label = match (class, active) {
            (CharacterClass::Lowercase, true) => "✔ Lowercase",
            (CharacterClass::Lowercase, false) => "a-z Lowercase",
            (CharacterClass::Uppercase, true) => "✔ Uppercase",
            (CharacterClass::Uppercase, false) => "A-Z Uppercase",
            (CharacterClass::Digit, true) => "✔ Numbers",
            (CharacterClass::Digit, false) => "0-9 Numbers",
            (CharacterClass::Symbol, true) => "✔ Symbols",
            (CharacterClass::Symbol, false) => "#$& Symbols",
        };
        Self { class, active, label }
    }
}

/// Needle position of the strength gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeReading {
    /// Needle position in `[0, 1]`, left (weak) to right (strong).
    pub ratio: f64,
    /// Needle drawn in the alarm color.
    pub alert: bool,
}

impl GaugeReading {
    pub fn from_entropy(entropy_bits: f64, alert: bool) -> Self {
        Self {
            ratio: (entropy_bits / MAX_ENTROPY_GAUGE).clamp(0.0, 1.0),
            alert,
        }
    }

    /// Needle angle in radians: π at the left end, 0 at the right end.
    pub fn angle(&self) -> f64 {
        (1.0 - self.ratio) * PI
    }
}

/// Everything the front-end renders for one password-field value.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub state: DashboardState,
    pub status_text: &'static str,
    pub tone: Tone,
    pub crack_time_text: String,
    pub recommendation_text: String,
    pub checklist: [ChecklistItem; 4],
    pub gauge: GaugeReading,
}

impl DashboardView {
    /// Builds the view for `password` and its evaluation outcome.
    ///
    /// The checklist reflects the password's classes even when it is invalid.
    pub fn render(password: &str, outcome: &Outcome) -> Self {
        let state = DashboardState::from_outcome(outcome);
        let charset = analyze_charset(password);
        let checklist = CharacterClass::ALL
            .map(|class| ChecklistItem::new(class, charset.active_classes.contains(&class)));

        let (crack_time_text, recommendation_text, gauge) = match outcome {
            Err(EvaluationError::InvalidInput) => (
                "Spaces are not allowed".to_string(),
                "Please remove spaces to continue analysis.".to_string(),
                GaugeReading::from_entropy(0.0, true),
            ),
            Ok(result) => match result.verdict {
                Verdict::Awaiting => (
                    "Est. Crack Time: -".to_string(),
                    "Start typing a password to see recommendations.".to_string(),
                    GaugeReading::from_entropy(0.0, false),
                ),
                Verdict::Compromised => (
                    "Est. Crack Time: INSTANT".to_string(),
                    result.recommendations.join("\n"),
                    GaugeReading::from_entropy(result.entropy_bits, true),
                ),
                Verdict::Rated(_) => (
                    format!("Est. Crack Time: {}", result.crack_time_display()),
                    bulleted(&result.recommendations),
                    GaugeReading::from_entropy(result.entropy_bits, false),
                ),
            },
        };

        Self {
            state,
            status_text: state.status_text(),
            tone: state.tone(),
            crack_time_text,
            recommendation_text,
            checklist,
            gauge,
        }
    }
}

/// The affirmative message stays unbulleted.
fn bulleted(recommendations: &[String]) -> String {
    if let [only] = recommendations {
        if only == AFFIRMATIVE_RECOMMENDATION {
            return only.clone();
        }
    }
    recommendations
        .iter()
        .map(|r| format!("• {}", r))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Status line of the wordlist selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistStatus {
    NotScanned,
    NoneFound,
    Loaded { path: PathBuf, count: usize },
    Failed { path: PathBuf, reason: String },
}

impl WordlistStatus {
    pub fn text(&self) -> String {
        match self {
            WordlistStatus::NotScanned => "No wordlist selected".to_string(),
            WordlistStatus::NoneFound => "No wordlists found".to_string(),
            WordlistStatus::Loaded { count, .. } => {
                format!("Loaded {} words", group_thousands(*count as f64))
            }
            WordlistStatus::Failed { .. } => "Error loading file".to_string(),
        }
    }
}

/// Password field plus wordlist selector.
///
/// Every password change is evaluated synchronously against the currently
/// installed wordlist.
#[derive(Debug)]
pub struct Dashboard {
    store: WordlistStore,
    password: SecretString,
    candidates: Vec<PathBuf>,
    wordlist_status: WordlistStatus,
}

impl Dashboard {
    pub fn new(policy: ReloadPolicy) -> Self {
        Self {
            store: WordlistStore::new(policy),
            password: SecretString::new(String::new().into()),
            candidates: Vec::new(),
            wordlist_status: WordlistStatus::NotScanned,
        }
    }

    /// Lists wordlists under `dir` and loads the first one found.
    ///
    /// A missing directory reports `NoneFound`; an unreadable one reports
    /// `Failed` with the directory as path.
    pub fn scan_wordlists<P: AsRef<Path>>(&mut self, dir: P) -> &[PathBuf] {
        let dir = dir.as_ref();
        match discover_wordlists(dir) {
            Ok(candidates) => self.candidates = candidates,
            Err(e) => {
                self.candidates = Vec::new();
                self.wordlist_status = match e {
                    WordlistError::DirectoryNotFound(_) => WordlistStatus::NoneFound,
                    other => WordlistStatus::Failed {
                        path: dir.to_path_buf(),
                        reason: other.to_string(),
                    },
                };
                return &self.candidates;
            }
        }
        match self.candidates.first().cloned() {
            Some(first) => {
                self.select_wordlist(first);
            }
            None => self.wordlist_status = WordlistStatus::NoneFound,
        }
        &self.candidates
    }

    /// Loads `path` as the active wordlist and re-evaluates the current
    /// password against it.
    ///
    /// On failure the store's reload policy decides whether the previous
    /// wordlist stays active.
    pub fn select_wordlist<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> (&WordlistStatus, DashboardView) {
        let path = path.as_ref();
        self.wordlist_status = match self.store.reload(path) {
            Ok(count) => WordlistStatus::Loaded {
                path: path.to_path_buf(),
                count,
            },
            Err(e) => WordlistStatus::Failed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        };
        (&self.wordlist_status, self.view())
    }

    /// Replaces the password field content and returns the refreshed view.
    pub fn set_password(&mut self, password: SecretString) -> DashboardView {
        self.password = password;
        self.view()
    }

    /// View for the current password against the current wordlist.
    pub fn view(&self) -> DashboardView {
        let pwd = self.password.expose_secret();
        let outcome = self.evaluate();
        DashboardView::render(pwd, &outcome)
    }

    pub fn evaluate(&self) -> Outcome {
        evaluate_password(&self.password, Some(self.store.words()))
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn wordlist_status(&self) -> &WordlistStatus {
        &self.wordlist_status
    }

    pub fn store(&self) -> &WordlistStore {
        &self.store
    }
}
