//! Button markup with variants and sizes.

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Outline button.
    Outline,
    /// Subtle ghost button.
    Ghost,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Outline => "btn-outline",
            Self::Ghost => "btn-ghost",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "btn-sm",
            Self::Md => "btn-md",
            Self::Lg => "btn-lg",
        }
    }
}

fn classes(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("btn {} {}", variant.classes(), size.classes())
}

/// `<button>` element. `attrs` and `content` are trusted markup.
#[must_use]
pub fn button(variant: ButtonVariant, size: ButtonSize, attrs: &str, content: &str) -> String {
    let classes = classes(variant, size);
    format!(r#"<button type="button" class="{classes}" {attrs}>{content}</button>"#)
}

/// `<a>` styled as a button.
#[must_use]
pub fn link_button(variant: ButtonVariant, size: ButtonSize, href: &str, content: &str) -> String {
    let classes = classes(variant, size);
    format!(r#"<a href="{href}" class="{classes}">{content}</a>"#)
}
