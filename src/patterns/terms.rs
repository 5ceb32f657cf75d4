//! Term dictionaries for entity extraction.
//!
//! Three fixed lists of lowercase terms: technologies, architectural/design
//! patterns, and CLI/editor tools. Technology and tool terms are matched by
//! case-insensitive substring containment; design-pattern names are matched
//! through a compiled regex that treats hyphens and spaces interchangeably,
//! so "cursor-pagination" also matches "cursor pagination".

use regex::Regex;

/// Databases, frameworks, languages, auth protocols, AI/ML libraries, infra,
/// testing tools, build tools. All lowercase; matched by containment.
const TECHNOLOGIES: &[&str] = &[
    // databases & stores
    "postgresql",
    "postgres",
    "mysql",
    "sqlite",
    "mongodb",
    "redis",
    "kafka",
    "rabbitmq",
    "elasticsearch",
    "dynamodb",
    "cassandra",
    "clickhouse",
    // frontend frameworks
    "react",
    "vue",
    "angular",
    "svelte",
    "nextjs",
    "next.js",
    "tailwind",
    // backend frameworks
    "express",
    "fastify",
    "django",
    "flask",
    "fastapi",
    "rails",
    "spring",
    "axum",
    "actix",
    // languages & runtimes
    "typescript",
    "javascript",
    "python",
    "rust",
    "golang",
    "java",
    "kotlin",
    "swift",
    "ruby",
    "php",
    "c++",
    "c#",
    "nodejs",
    "node.js",
    "deno",
    "bun",
    // auth
    "oauth",
    "jwt",
    "saml",
    "openid",
    // AI/ML
    "pytorch",
    "tensorflow",
    "langchain",
    "llamaindex",
    "openai",
    "anthropic",
    "huggingface",
    "transformers",
    // infra
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "nginx",
    "aws",
    "gcp",
    "azure",
    "lambda",
    "graphql",
    "grpc",
    "websocket",
    "prisma",
    "sqlalchemy",
    // testing
    "jest",
    "vitest",
    "pytest",
    "cypress",
    "playwright",
    "mocha",
    // build tools
    "webpack",
    "vite",
    "rollup",
    "esbuild",
    "babel",
];

/// Architectural and design-pattern names. Hyphen/space-insensitive.
const DESIGN_PATTERNS: &[&str] = &[
    "cursor-pagination",
    "offset-pagination",
    "repository-pattern",
    "circuit-breaker",
    "event-sourcing",
    "dependency-injection",
    "rate-limiting",
    "feature-flags",
    "message-queue",
    "load-balancing",
    "pub-sub",
    "blue-green-deployment",
    "microservices",
    "monorepo",
    "cqrs",
    "rag",
    "tdd",
    "bdd",
    "ddd",
    "mvc",
    "mvvm",
    "solid",
];

/// CLI and editor tools. All lowercase; matched by containment.
const TOOLS: &[&str] = &[
    "git",
    "github",
    "gitlab",
    "vscode",
    "neovim",
    "vim",
    "emacs",
    "npm",
    "yarn",
    "pnpm",
    "cargo",
    "poetry",
    "cmake",
    "bazel",
    "eslint",
    "prettier",
    "clippy",
    "rustfmt",
    "ruff",
    "tmux",
    "zsh",
    "curl",
    "kubectl",
    "helm",
];

/// The three term dictionaries, with design-pattern matchers pre-compiled.
#[derive(Debug)]
pub struct TermDictionary {
    technologies: Vec<String>,
    design_patterns: Vec<(String, Regex)>,
    tools: Vec<String>,
}

impl TermDictionary {
    /// Build a dictionary from caller-supplied term lists.
    ///
    /// Terms are lowercased. Design-pattern names get a hyphen/space
    /// insensitive matcher: each hyphen- or space-separated part is escaped
    /// and rejoined with `[\s-]?`, so the compiled regex is always valid.
    pub fn new(technologies: &[&str], design_patterns: &[&str], tools: &[&str]) -> Self {
        let design_patterns = design_patterns
            .iter()
            .map(|name| {
                let name = name.to_lowercase();
                let parts: Vec<String> =
                    name.split(['-', ' ']).filter(|p| !p.is_empty()).map(regex::escape).collect();
                let pattern = format!(r"(?i){}", parts.join(r"[\s-]?"));
                let matcher = Regex::new(&pattern).unwrap();
                (name, matcher)
            })
            .collect();

        TermDictionary {
            technologies: technologies.iter().map(|t| t.to_lowercase()).collect(),
            design_patterns,
            tools: tools.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// The stock dictionary.
    pub fn builtin() -> Self {
        Self::new(TECHNOLOGIES, DESIGN_PATTERNS, TOOLS)
    }

    /// Technology and tool terms contained in `lower` (already lowercased).
    pub(crate) fn contained_terms<'a>(&'a self, lower: &'a str) -> impl Iterator<Item = &'a str> {
        self.technologies
            .iter()
            .chain(self.tools.iter())
            .filter(move |term| lower.contains(term.as_str()))
            .map(|term| term.as_str())
    }

    /// Design-pattern names whose normalized matcher hits `text`.
    pub(crate) fn matched_patterns<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> {
        self.design_patterns
            .iter()
            .filter(move |(_, matcher)| matcher.is_match(text))
            .map(|(name, _)| name.as_str())
    }
}

impl Default for TermDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_names_match_hyphen_or_space() {
        let dict = TermDictionary::builtin();

        let hits: Vec<&str> = dict.matched_patterns("we use cursor pagination here").collect();
        assert!(hits.contains(&"cursor-pagination"));

        let hits: Vec<&str> = dict.matched_patterns("we use Cursor-Pagination here").collect();
        assert!(hits.contains(&"cursor-pagination"));
    }

    #[test]
    fn containment_is_case_insensitive_via_lowered_input() {
        let dict = TermDictionary::builtin();
        let lower = "let's use postgresql".to_lowercase();
        let hits: Vec<&str> = dict.contained_terms(&lower).collect();
        assert!(hits.contains(&"postgresql"));
        // "postgres" is a substring of "postgresql" and matches too
        assert!(hits.contains(&"postgres"));
    }
}
