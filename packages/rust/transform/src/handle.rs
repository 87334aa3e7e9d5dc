//! URL-safe handle derivation.

use std::sync::LazyLock;

use regex::Regex;

/// Derive a URL-safe handle from a display name.
///
/// Lowercases, strips everything outside `[a-z0-9 \s-]`, collapses
/// whitespace/hyphen runs into single hyphens, and trims edge hyphens.
/// Total and deterministic; a name made entirely of stripped characters
/// yields an empty string, and substituting a fallback is the caller's job.
pub fn normalize_handle(display_name: &str) -> String {
    static STRIP_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid regex"));
    static COLLAPSE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

    let lowered = display_name.to_lowercase();
    let stripped = STRIP_RE.replace_all(&lowered, "");
    let collapsed = COLLAPSE_RE.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(normalize_handle("BPC-157"), "bpc-157");
        assert_eq!(normalize_handle("StaRter Kit R"), "starter-kit-r");
    }

    #[test]
    fn strips_symbols() {
        assert_eq!(normalize_handle("NAD+"), "nad");
        assert_eq!(normalize_handle("GLP-2 (T*)"), "glp-2-t");
    }

    #[test]
    fn collapses_runs() {
        assert_eq!(normalize_handle("a  - -  b"), "a-b");
        assert_eq!(normalize_handle("--edge--case--"), "edge-case");
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_empty() {
        assert_eq!(normalize_handle(""), "");
        assert_eq!(normalize_handle("***"), "");
    }

    #[test]
    fn idempotent() {
        for name in ["BPC-157 5mg", "GLP-2 (T*)", "  weird   input!! ", "nad"] {
            let once = normalize_handle(name);
            assert_eq!(normalize_handle(&once), once);
        }
    }
}
