//! Languages offered for code-block highlighting, and their bundled syntect grammars.

use syntect::parsing::SyntaxSet;

/// Tags the renderer highlights. Anything else renders as plain text.
pub const CODE_LANGUAGE_SUBSET: &[&str] = &[
    "python",
    "javascript",
    "java",
    "go",
    "bash",
    "c",
    "cpp",
    "csharp",
    "css",
    "diff",
    "graphql",
    "json",
    "kotlin",
    "less",
    "lua",
    "makefile",
    "markdown",
    "objectivec",
    "perl",
    "php",
    "php-template",
    "plaintext",
    "python-repl",
    "r",
    "ruby",
    "rust",
    "scss",
    "shell",
    "sql",
    "swift",
    "typescript",
    "vbnet",
    "wasm",
    "xml",
    "yaml",
];

static SYNTAX_SET: std::sync::OnceLock<SyntaxSet> = std::sync::OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

pub fn is_supported(tag: &str) -> bool {
    CODE_LANGUAGE_SUBSET.contains(&tag)
}

/// Map a tag to the file extension syntect registers its grammar under.
fn tag_to_extension(tag: &str) -> &str {
    match tag {
        "python" | "python-repl" => "py",
        "javascript" => "js",
        "bash" | "shell" => "sh",
        "csharp" => "cs",
        "markdown" => "md",
        "objectivec" => "m",
        "perl" => "pl",
        "php" | "php-template" => "php",
        "plaintext" => "txt",
        "ruby" => "rb",
        "rust" => "rs",
        "typescript" => "ts",
        "yaml" => "yaml",
        "makefile" => "mk",
        other => other,
    }
}

/// Name of the bundled grammar for a tag in [`CODE_LANGUAGE_SUBSET`], if syntect ships one.
/// Tags outside the subset always render as plain text.
pub fn bundled_grammar(tag: &str) -> Option<&'static str> {
    if !is_supported(tag) {
        return None;
    }
    let ps = syntax_set();
    ps.find_syntax_by_extension(tag_to_extension(tag))
        .or_else(|| ps.find_syntax_by_token(tag))
        .map(|s| s.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn subset_has_no_duplicates() {
        let set: HashSet<&str> = CODE_LANGUAGE_SUBSET.iter().copied().collect();
        assert_eq!(set.len(), CODE_LANGUAGE_SUBSET.len());
    }

    #[test]
    fn is_supported_is_exact_match() {
        assert!(is_supported("rust"));
        assert!(is_supported("php-template"));
        assert!(!is_supported("Rust"));
        assert!(!is_supported("brainfuck"));
    }

    #[test]
    fn common_tags_have_bundled_grammars() {
        assert_eq!(bundled_grammar("rust"), Some("Rust"));
        assert_eq!(bundled_grammar("python"), Some("Python"));
        assert_eq!(bundled_grammar("javascript"), Some("JavaScript"));
        assert!(bundled_grammar("json").is_some());
        assert!(bundled_grammar("bash").is_some());
    }

    #[test]
    fn unknown_tag_has_no_grammar() {
        assert_eq!(bundled_grammar("no-such-language"), None);
    }

    #[test]
    fn tags_outside_subset_have_no_grammar() {
        // syntect ships HTML, but the renderer does not offer it
        assert_eq!(bundled_grammar("html"), None);
        assert_eq!(bundled_grammar("HTML"), None);
    }
}
