//! Language allow-list for code generation and refactoring.
//!
//! Output simulation uses its own per-language table, see
//! [`crate::prompts::execution_template`].

/// Languages accepted by `/generate_code` and `/refactor_code`.
pub const SUPPORTED_LANGUAGES: [&str; 19] = [
    "python",
    "javascript",
    "rust",
    "mongodb",
    "swift",
    "ruby",
    "dart",
    "perl",
    "scala",
    "julia",
    "go",
    "java",
    "cpp",
    "csharp",
    "c",
    "sql",
    "typescript",
    "kotlin",
    "verilog",
];

/// Payload returned when generation or refactoring is asked for an unknown language.
pub const UNSUPPORTED_LANGUAGE: &str = "Error: Unsupported language.";

/// Payload returned when output simulation has no template for the language.
pub const UNSUPPORTED_EXECUTION_LANGUAGE: &str = "Error: Language not supported.";

/// Check a language identifier against the allow-list.
///
/// Matching is exact; callers send lowercase identifiers.
pub fn is_supported(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_membership() {
        assert!(is_supported("python"));
        assert!(is_supported("verilog"));
        assert!(!is_supported("brainfuck"));
        assert!(!is_supported("Python"));
        assert!(!is_supported(""));
    }
}
