/// Shared DaisyUI color tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DaisyColor {
    Neutral,
}

impl DaisyColor {
    /// Returns the class suffix (e.g. `"neutral"`) for the color.
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
        }
    }
}

/// Common sizing tokens used by DaisyUI controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum DaisySize {
    Xs,
    Sm,
    #[default]
    Md,
}

impl DaisySize {
    /// Adds a prefix (e.g. `btn`) to the size suffix for class composition.
    #[must_use]
    pub(crate) fn with_prefix(self, prefix: &str) -> String {
        let suffix = match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
        };
        format!("{prefix}-{suffix}")
    }
}

/// Variants used across button-like elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum DaisyVariant {
    #[default]
    Solid,
    Outline,
}

impl DaisyVariant {
    /// Maps the variant to the DaisyUI class name.
    #[must_use]
    pub(crate) const fn as_class(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Outline => Some("btn-outline"),
        }
    }
}

/// Class for an optional tone under `prefix`.
#[must_use]
pub(crate) fn tone_class(prefix: &str, tone: Option<DaisyColor>) -> Option<String> {
    tone.map(|color| format!("{prefix}-{}", color.as_str()))
}
