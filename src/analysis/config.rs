//! Serializable analyzer configuration.
//!
//! An [`AnalyzerConfig`] names a tokenizer and an ordered list of filters.
//! Both are internally tagged by `type`, so a config reads like:
//!
//! ```json
//! {
//!   "name": "titles",
//!   "tokenizer": { "type": "unicode_word" },
//!   "filters": [
//!     { "type": "substitution", "mappings": { "Mr": "mister" } },
//!     { "type": "classification", "classes": [ { "name": "male", "terms": ["mister"] } ] }
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use lexis::analysis::config::{AnalyzerConfig, FilterConfig};
//!
//! let config = AnalyzerConfig::preset("standard").unwrap();
//! assert_eq!(config.filters.len(), 2);
//! assert!(matches!(config.filters[0], FilterConfig::Lowercase));
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::attribute::Classification;
use crate::analysis::token_filter::FilterFactory;
use crate::analysis::token_filter::classification::ClassificationSets;
use crate::analysis::token_filter::lowercase::Lowercase;
use crate::analysis::token_filter::stop::{DEFAULT_STOP_WORDS, ENGLISH_STOP_WORDS, StopWords};
use crate::analysis::token_filter::substitution::{COURTESY_TITLES, TermSubstitutions};
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::analysis::tokenizer::TokenizerFactory;
use crate::error::{LexisError, Result};

/// Names accepted by [`AnalyzerConfig::preset`].
pub const PRESETS: &[&str] = &["simple", "standard", "courtesy_title"];

fn default_name() -> String {
    "custom".to_string()
}

fn default_pattern() -> String {
    r"\w+".to_string()
}

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Tokenizer section of an analyzer config.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Split on whitespace.
    #[default]
    Whitespace,

    /// Emit matches of `pattern` (default `\w+`).
    Regex {
        #[serde(default = "default_pattern")]
        pattern: String,
    },

    /// Split on Unicode word boundaries.
    UnicodeWord,
}

impl TokenizerConfig {
    /// Build the tokenizer factory this section describes.
    pub fn build(&self) -> Result<Arc<dyn TokenizerFactory>> {
        let tokenizer: Arc<dyn TokenizerFactory> = match self {
            TokenizerConfig::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerConfig::Regex { pattern } => Arc::new(
                RegexTokenizer::with_pattern(pattern)
                    .map_err(|e| LexisError::config(format!("tokenizer: {e}")))?,
            ),
            TokenizerConfig::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
        };
        Ok(tokenizer)
    }
}

/// A named class and its member terms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassConfig {
    /// `male`, `female`, or any other label.
    pub name: String,

    /// Terms belonging to the class (matched case-insensitively).
    pub terms: Vec<String>,
}

/// One filter in an analyzer config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    /// Lower-case every term.
    Lowercase,

    /// Drop stop words, folding their positions into the next token.
    Stop {
        #[serde(default = "default_stop_words")]
        words: Vec<String>,
        #[serde(default)]
        ignore_case: bool,
    },

    /// Replace mapped terms.
    Substitution { mappings: BTreeMap<String, String> },

    /// Tag tokens with the first class containing their term.
    Classification { classes: Vec<ClassConfig> },
}

impl FilterConfig {
    /// Build the filter factory this entry describes.
    pub fn build(&self) -> Result<Arc<dyn FilterFactory>> {
        let filter: Arc<dyn FilterFactory> = match self {
            FilterConfig::Lowercase => Arc::new(Lowercase),
            FilterConfig::Stop { words, ignore_case } => {
                Arc::new(StopWords::from_words(words).ignore_case(*ignore_case))
            }
            FilterConfig::Substitution { mappings } => {
                if mappings.keys().any(String::is_empty) {
                    return Err(LexisError::config("substitution keys must not be empty"));
                }
                Arc::new(TermSubstitutions::from_pairs(mappings.clone()))
            }
            FilterConfig::Classification { classes } => {
                if let Some(class) = classes.iter().find(|c| c.name.trim().is_empty()) {
                    return Err(LexisError::config(format!(
                        "classification class with terms {:?} has no name",
                        class.terms
                    )));
                }
                Arc::new(ClassificationSets::from_classes(classes.iter().map(|c| {
                    (Classification::from_name(&c.name), c.terms.iter())
                })))
            }
        };
        Ok(filter)
    }

    /// The filter's `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            FilterConfig::Lowercase => "lowercase",
            FilterConfig::Stop { .. } => "stop",
            FilterConfig::Substitution { .. } => "substitution",
            FilterConfig::Classification { .. } => "classification",
        }
    }
}

/// A tokenizer plus an ordered filter list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Name reported by analyzers built from this config.
    #[serde(default = "default_name")]
    pub name: String,

    /// Source of the chain.
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    /// Filters, applied in order.
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::simple()
    }
}

impl AnalyzerConfig {
    /// Whitespace tokenization with no filters.
    pub fn simple() -> Self {
        AnalyzerConfig {
            name: "simple".to_string(),
            tokenizer: TokenizerConfig::Whitespace,
            filters: Vec::new(),
        }
    }

    /// Unicode words, lower-cased, English stop words removed.
    pub fn standard() -> Self {
        AnalyzerConfig {
            name: "standard".to_string(),
            tokenizer: TokenizerConfig::UnicodeWord,
            filters: vec![
                FilterConfig::Lowercase,
                FilterConfig::Stop {
                    words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
                    ignore_case: false,
                },
            ],
        }
    }

    /// Courtesy titles expanded and tagged with a gender class.
    pub fn courtesy_title() -> Self {
        AnalyzerConfig {
            name: "courtesy_title".to_string(),
            tokenizer: TokenizerConfig::UnicodeWord,
            filters: vec![
                FilterConfig::Substitution {
                    mappings: COURTESY_TITLES
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                },
                FilterConfig::Classification {
                    classes: vec![
                        ClassConfig {
                            name: "male".to_string(),
                            terms: vec!["mr".to_string(), "mister".to_string()],
                        },
                        ClassConfig {
                            name: "female".to_string(),
                            terms: vec!["mrs".to_string(), "misters".to_string()],
                        },
                    ],
                },
            ],
        }
    }

    /// Look up a built-in config by name.
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "simple" => Ok(Self::simple()),
            "standard" => Ok(Self::standard()),
            "courtesy_title" => Ok(Self::courtesy_title()),
            other => Err(LexisError::config(format!(
                "unknown preset {other:?} (expected one of: {})",
                PRESETS.join(", ")
            ))),
        }
    }

    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
            .map_err(|e| LexisError::config(format!("{}: {e}", path.display())))
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
