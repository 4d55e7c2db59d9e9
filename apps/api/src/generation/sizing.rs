//! Verbosity levels for generated resume content.

use tracing::warn;

/// Requested verbosity. Drives the sentence-count targets in the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ContentSize {
    /// Resolves a raw size label. Missing or unrecognized labels fall back to
    /// `Medium`; unrecognized ones are logged.
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(label) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        match label.to_ascii_lowercase().as_str() {
            "small" => ContentSize::Small,
            "medium" => ContentSize::Medium,
            "large" => ContentSize::Large,
            _ => {
                warn!("Unrecognized content size {label:?}, falling back to medium");
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSize::Small => "small",
            ContentSize::Medium => "medium",
            ContentSize::Large => "large",
        }
    }

    /// Sentence-count guidance embedded in the generation prompt.
    pub fn guidance(&self) -> &'static str {
        match self {
            ContentSize::Small => {
                "Keep it brief. Write a summary of 2-3 sentences. \
                 Write each project description in 1-2 sentences."
            }
            ContentSize::Medium => {
                "Use a balanced length. Write a summary of 3-4 sentences. \
                 Write each project description in 2-3 sentences."
            }
            ContentSize::Large => {
                "Be detailed. Write a summary of 4-6 sentences. \
                 Write each project description in 3-5 sentences, covering scope, \
                 approach and outcome."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sizes_resolve() {
        assert_eq!(ContentSize::resolve(Some("small")), ContentSize::Small);
        assert_eq!(ContentSize::resolve(Some("medium")), ContentSize::Medium);
        assert_eq!(ContentSize::resolve(Some("large")), ContentSize::Large);
    }

    #[test]
    fn test_resolve_is_case_insensitive_and_trims() {
        assert_eq!(ContentSize::resolve(Some("  LARGE ")), ContentSize::Large);
        assert_eq!(ContentSize::resolve(Some("Small")), ContentSize::Small);
    }

    #[test]
    fn test_missing_size_defaults_to_medium() {
        assert_eq!(ContentSize::resolve(None), ContentSize::Medium);
        assert_eq!(ContentSize::resolve(Some("")), ContentSize::Medium);
    }

    #[test]
    fn test_unknown_size_falls_back_to_medium() {
        assert_eq!(ContentSize::resolve(Some("huge")), ContentSize::Medium);
    }

    #[test]
    fn test_guidance_differs_by_size() {
        assert!(ContentSize::Small.guidance().contains("2-3 sentences"));
        assert!(ContentSize::Medium.guidance().contains("3-4 sentences"));
        assert!(ContentSize::Large.guidance().contains("4-6 sentences"));
    }
}
