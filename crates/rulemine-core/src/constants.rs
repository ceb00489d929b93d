//! Shared constants for the rulemine analysis engine.

/// rulemine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum file size in bytes for scanning (default: 1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Default number of threads (0 = auto-detect).
pub const DEFAULT_THREADS: usize = 0;

/// Domains with fewer attributes than this are pruned after discovery.
pub const DEFAULT_MIN_DOMAIN_ATTRIBUTES: usize = 2;

/// Enrichment score above which a confirmed rule is promoted to `high`.
pub const DEFAULT_HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Number of hex characters kept from the index record hash.
pub const RECORD_ID_HEX_LEN: usize = 32;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "rulemine.toml";

/// Project-level ignore file name.
pub const IGNORE_FILE: &str = ".rulemineignore";

// ---- Source files ----

/// Extensions treated as C-family headers.
pub const HEADER_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "hxx", "h++", "inl", "ipp"];

/// Extensions treated as C-family sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx", "c++"];

// ---- Rule vocabularies ----

/// Function-name prefixes that mark a business rule (matched lower-cased).
pub const DEFAULT_RULE_PREFIXES: &[&str] = &[
    "validate",
    "check",
    "calculate",
    "process",
    "verify",
    "validar",
    "calcular",
];

/// Function-name suffixes that mark a business rule (matched lower-cased).
pub const DEFAULT_RULE_SUFFIXES: &[&str] = &["Rule", "Policy", "Validation"];

/// Body tokens that signal validation / error handling.
pub const DEFAULT_VALIDATION_INDICATORS: &[&str] =
    &["return false", "seterror", "throw", "invalid", "validate"];

/// Body tokens that signal a computation.
pub const DEFAULT_CALCULATION_INDICATORS: &[&str] =
    &["calculate", "compute", "sum", "total", "average"];

/// Type and attribute names too generic to be domain concepts.
pub const DEFAULT_GENERIC_TYPE_NAMES: &[&str] = &[
    "string", "int", "bool", "void", "char", "double", "float", "data", "info", "details",
    "result", "value", "item", "node",
];
