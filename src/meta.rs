//! Tool identity used in user-facing messages.

/// Read-only tool metadata, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    /// Display name used in the failure banner
    pub title: &'static str,
    /// Version string as published
    pub version: &'static str,
}

/// The identity reported by `--version` and the failure banner.
pub const TOOL: ToolInfo = ToolInfo {
    title: "amplimap",
    version: env!("CARGO_PKG_VERSION"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_info_matches_crate_metadata() {
        assert_eq!(TOOL.title, env!("CARGO_PKG_NAME"));
        assert!(!TOOL.version.is_empty());
    }
}
