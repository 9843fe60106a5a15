//! Password entropy and breach-exposure library
//!
//! This library estimates password strength from the character classes a
//! password uses, converts it into a brute-force crack time and checks the
//! password against a breach wordlist. A dashboard view model maps results to
//! what a live-updating front-end displays.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-gauge` terminal dashboard
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_DIR`: Directory scanned for `*.txt` wordlists
//!   (default: `./wordlists`)
//! - `PWD_WORDLIST_ON_ERROR`: `clear` or `preserve`, what a failed wordlist
//!   reload does to the previous wordlist (default: `clear`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_gauge::{evaluate_password, format_crack_time, load_wordlist};
//! use secrecy::SecretString;
//!
//! let words = load_wordlist("./wordlists/rockyou.txt").expect("Failed to load wordlist");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! match evaluate_password(&password, Some(&words)) {
//!     Ok(result) => {
//!         println!("Entropy: {:.1} bits", result.entropy_bits);
//!         println!("Verdict: {:?}", result.verdict);
//!         println!("Crack time: {}", format_crack_time(result.crack_time_seconds));
//!     }
//!     Err(e) => println!("{}", e),
//! }
//! ```

// Internal modules
mod charset;
mod crack_time;
mod dashboard;
mod evaluator;
mod sections;
mod types;
mod wordlist;

// Public API
pub use charset::{analyze_charset, CharacterClass, CharsetInfo};
pub use crack_time::{crack_time_seconds, entropy_bits, format_crack_time, CRACKING_SPEED_PER_SECOND};
pub use dashboard::{
    ChecklistItem, Dashboard, DashboardState, DashboardView, GaugeReading, Outcome, Tone,
    WordlistStatus, MAX_ENTROPY_GAUGE,
};
pub use evaluator::{evaluate_password, EvaluationError, AFFIRMATIVE_RECOMMENDATION};
pub use sections::BREACH_RECOMMENDATION;
pub use types::{EvaluationResult, StrengthTier, Verdict};
pub use wordlist::{
    discover_wordlists, load_wordlist, wordlist_dir, ReloadPolicy, WordSet, WordlistError,
    WordlistStore,
};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_tx, DEBOUNCE};
