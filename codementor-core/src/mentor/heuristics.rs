//! Text-pattern guesses about a code submission.
//!
//! Raw text only, no knowledge of the language. The signals select canned
//! statements for the offline fallback and are not a complexity analysis.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static LOOP_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:for|while|forEach)\b").expect("loop pattern is valid"));

static FUNCTION_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:def|fn|func|function)\s+([A-Za-z_][A-Za-z0-9_]*)")
        .expect("function pattern is valid")
});

static CALL_SITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(").expect("call pattern is valid")
});

/// Boolean signals derived from the raw source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeSignals {
    /// A `for`/`while`/`forEach` keyword appears.
    pub has_loop: bool,
    /// A named function's name is called again after its definition.
    pub has_recursion: bool,
    /// `Map`, `Set`, `{` or `[` appears anywhere.
    pub has_hash_storage: bool,
}

impl CodeSignals {
    pub fn detect(code: &str) -> Self {
        Self {
            has_loop: LOOP_KEYWORD.is_match(code),
            has_recursion: looks_recursive(code),
            has_hash_storage: ["Map", "Set", "{", "["].iter().any(|t| code.contains(t)),
        }
    }
}

/// Whether some function defined in `code` is called after its definition.
///
/// Function bodies are not delimited, so a call from top-level code that
/// follows the definition also counts. Anonymous functions and lambdas are
/// never detected. Runs in two linear scans regardless of how many functions
/// are defined.
fn looks_recursive(code: &str) -> bool {
    // Name -> end offset of its first definition.
    let mut defined: HashMap<&str, usize> = HashMap::new();
    for caps in FUNCTION_DEF.captures_iter(code) {
        if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
            defined.entry(name.as_str()).or_insert(whole.end());
        }
    }
    if defined.is_empty() {
        return false;
    }

    CALL_SITE.captures_iter(code).any(|caps| {
        caps.get(1).is_some_and(|name| {
            defined
                .get(name.as_str())
                .is_some_and(|&def_end| name.start() >= def_end)
        })
    })
}
