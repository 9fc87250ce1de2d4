use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::utils::error::TocError;
use crate::utils::fs;

/// One heading as handed over by the heading extractor.
///
/// Every field is required: a record missing `id` fails to deserialize
/// instead of turning into an empty anchor. Extra fields (such as the
/// `html` member some extractors emit) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingToken {
    /// Display title, already HTML-escaped by the producer
    pub name: String,
    /// Anchor identifier
    pub id: String,
    /// Heading depth as classified upstream
    pub level: u32,
    /// Nested headings in document order
    pub children: Vec<HeadingToken>,
}

impl HeadingToken {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        level: u32,
        children: Vec<HeadingToken>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            level,
            children,
        }
    }

    /// Create a token without children
    pub fn leaf(name: impl Into<String>, id: impl Into<String>, level: u32) -> Self {
        Self::new(name, id, level, Vec::new())
    }
}

/// Total number of tokens in a forest, nested ones included
pub fn count_tokens(tokens: &[HeadingToken]) -> usize {
    tokens
        .iter()
        .map(|token| 1 + count_tokens(&token.children))
        .sum()
}

/// Check a token forest once at ingestion.
pub fn validate_tokens(tokens: &[HeadingToken]) -> Result<(), TocError> {
    for token in tokens {
        if token.level == 0 {
            return Err(TocError::Token(format!(
                "heading '{}' has level 0, levels start at 1",
                token.id
            )));
        }
        validate_tokens(&token.children)?;
    }
    Ok(())
}

/// Parse a JSON array of heading tokens, nested to any depth
pub fn parse_tokens_json(content: &str) -> Result<Vec<HeadingToken>, TocError> {
    let json_error =
        |e: serde_json::Error| TocError::Token(format!("Failed to parse JSON tokens: {}", e));

    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    let tokens = Vec::<HeadingToken>::deserialize(&mut deserializer).map_err(json_error)?;
    deserializer.end().map_err(json_error)?;
    validate_tokens(&tokens)?;
    Ok(tokens)
}

/// Parse a YAML sequence of heading tokens.
///
/// serde_yaml caps nesting depth, so very deep forests need the JSON form.
pub fn parse_tokens_yaml(content: &str) -> Result<Vec<HeadingToken>, TocError> {
    let tokens: Vec<HeadingToken> = serde_yaml::from_str(content)
        .map_err(|e| TocError::Token(format!("Failed to parse YAML tokens: {}", e)))?;
    validate_tokens(&tokens)?;
    Ok(tokens)
}

/// Load a token forest from a `.json`, `.yml` or `.yaml` file
pub fn load_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<HeadingToken>, TocError> {
    let path = path.as_ref();
    let content = fs::read_file(path)?;

    let tokens = match fs::extension_of(path).as_deref() {
        Some("json") => parse_tokens_json(&content)?,
        Some("yml") | Some("yaml") => parse_tokens_yaml(&content)?,
        Some(other) => {
            return Err(TocError::Token(format!(
                "Unsupported token file format: {}",
                other
            )));
        }
        None => {
            return Err(TocError::Token(format!(
                "Cannot tell the format of {} without an extension",
                path.display()
            )));
        }
    };

    debug!(
        "Loaded {} heading tokens ({} top-level) from {}",
        count_tokens(&tokens),
        tokens.len(),
        path.display()
    );
    Ok(tokens)
}
