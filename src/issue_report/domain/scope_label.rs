use std::fmt;

/// Which subset of issues was requested upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeLabel {
    /// Issues introduced in the new-code period
    NewCode,
    /// All open issues
    #[default]
    Overall,
}

impl ScopeLabel {
    /// Interprets a `SONAR_NEW_CODE`-style value; only the exact string
    /// `"true"` selects new code.
    pub fn from_flag_value(value: Option<&str>) -> Self {
        match value {
            Some("true") => ScopeLabel::NewCode,
            _ => ScopeLabel::Overall,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeLabel::NewCode => "new code",
            ScopeLabel::Overall => "overall",
        }
    }
}

impl fmt::Display for ScopeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
