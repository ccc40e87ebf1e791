//! Viewport width as reported by the client.

/// Width of the client viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Viewport {
    /// No width hint; treated as wide.
    #[default]
    Unknown,
    /// Width in CSS pixels.
    Width(u32),
}

impl Viewport {
    /// Parse a width hint such as `390` or `390.5`.
    pub fn from_hint(hint: Option<&str>) -> Self {
        hint.and_then(|h| h.trim().parse::<f64>().ok())
            .filter(|w| w.is_finite() && *w >= 0.0)
            .map(|w| Viewport::Width(w as u32))
            .unwrap_or_default()
    }

    /// True when narrower than `breakpoint_px`.
    pub fn is_narrow(&self, breakpoint_px: u32) -> bool {
        match self {
            Viewport::Unknown => false,
            Viewport::Width(w) => *w < breakpoint_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_narrow() {
        assert!(Viewport::Width(390).is_narrow(768));
        assert!(!Viewport::Width(768).is_narrow(768));
        assert!(!Viewport::Unknown.is_narrow(768));
    }

    #[test]
    fn test_from_hint() {
        assert_eq!(Viewport::from_hint(Some("390")), Viewport::Width(390));
        assert_eq!(Viewport::from_hint(Some(" 1280.5 ")), Viewport::Width(1280));
        assert_eq!(Viewport::from_hint(Some("wide")), Viewport::Unknown);
        assert_eq!(Viewport::from_hint(Some("-4")), Viewport::Unknown);
        assert_eq!(Viewport::from_hint(None), Viewport::Unknown);
    }
}
