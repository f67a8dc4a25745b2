//! # empath_core
//!
//! Core domain logic for Empath: emotion classification and
//! templated empathetic reply composition.

pub mod emotion;
pub mod phrases;
pub mod reply;

pub use emotion::{EmotionLabel, classify};
pub use phrases::PhraseBank;
pub use reply::compose;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns a greeting string with the crate version.
pub fn greeting() -> String {
    format!("Hello from empath_core v{}", version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn greeting_contains_version() {
        let greeting = greeting();
        assert!(greeting.starts_with("Hello from empath_core v"));
        assert!(greeting.contains(env!("CARGO_PKG_VERSION")));
    }
}
