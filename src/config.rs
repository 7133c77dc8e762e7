//! Analyzer configuration.

/// Configuration for the sequence analyzer.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use frameseq::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .minimum_items(1)
///     .extension_hint("exr")
///     .build();
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyzerConfig {
    /// Minimum number of distinct indexes required before a group of file
    /// names counts as a collection. A lone numbered file is ambiguous, so
    /// the default is 2.
    pub minimum_items: usize,

    /// Only consider file names carrying this extension (with or without a
    /// leading dot, matched case-insensitively). A hint that matches nothing
    /// behaves as "no sequence detected".
    /// Default: None
    pub extension_hint: Option<String>,

    /// Whether head/tail comparison is case-sensitive.
    /// Default: true
    pub case_sensitive: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            minimum_items: 2,
            extension_hint: None,
            case_sensitive: true,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }
}

/// Builder for `AnalyzerConfig`.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfigBuilder {
    minimum_items: Option<usize>,
    extension_hint: Option<String>,
    case_sensitive: Option<bool>,
}

impl AnalyzerConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of indexes required to form a collection.
    pub fn minimum_items(mut self, minimum_items: usize) -> Self {
        self.minimum_items = Some(minimum_items);
        self
    }

    /// Restrict analysis to file names with the given extension.
    pub fn extension_hint(mut self, extension: impl Into<String>) -> Self {
        self.extension_hint = Some(extension.into());
        self
    }

    /// Set whether head/tail comparison is case-sensitive.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AnalyzerConfig {
        let defaults = AnalyzerConfig::default();
        AnalyzerConfig {
            minimum_items: self.minimum_items.unwrap_or(defaults.minimum_items),
            extension_hint: self.extension_hint,
            case_sensitive: self.case_sensitive.unwrap_or(defaults.case_sensitive),
        }
    }
}
