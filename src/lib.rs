//! Password entropy estimation with dictionary-word adjustment
//!
//! This library estimates how resistant a password is to guessing attacks.
//! It computes a NIST 800-63 style positional entropy, scans the password
//! (and normalized variants of it - case-folded, leet-decoded, reversed)
//! for embedded dictionary words, penalizes each match down to the cost of
//! a dictionary lookup, and compares the adjusted bit count against a
//! configurable minimum.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_entropy::{AdjusterConfig, StrengthChecker};
//! use secrecy::SecretString;
//!
//! let checker = StrengthChecker::new(AdjusterConfig::default())?;
//!
//! let password = SecretString::new("E_!3password".to_string().into());
//! assert!(checker.is_weak(Some(&password)));
//!
//! let password = SecretString::new("h#e0zbPas".to_string().into());
//! assert!(checker.is_strong(Some(&password)));
//! # Ok::<(), pwd_entropy::ConfigError>(())
//! ```
//!
//! For the raw bit estimate, use the adjuster directly:
//!
//! ```rust
//! use pwd_entropy::{AdjusterConfig, DictionaryAdjuster};
//!
//! let adjuster = DictionaryAdjuster::new(AdjusterConfig::default())?;
//! let bits = adjuster.adjusted_entropy("password123456");
//! assert!(bits < 18.0);
//! # Ok::<(), pwd_entropy::ConfigError>(())
//! ```

// Internal modules
mod adjuster;
mod bonus;
mod checker;
mod config;
mod dictionary;
mod entropy;
mod variants;

// Public API
pub use adjuster::DictionaryAdjuster;
pub use bonus::{BonusPolicy, nist_bonus_bits, zero_bonus};
pub use checker::StrengthChecker;
pub use config::{AdjusterConfig, ConfigError};
pub use dictionary::Dictionary;
pub use entropy::{base_entropy, position_bits};
pub use variants::all_variants;
