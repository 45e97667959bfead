//! Parser configuration.

use std::io;

use serde::Deserialize;

/// HTML block-level tags as defined by the CommonMark spec. A line opening
/// one of these starts a tag-kind HTML block that runs to the next blank line.
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "base",
    "basefont",
    "blockquote",
    "body",
    "caption",
    "center",
    "col",
    "colgroup",
    "dd",
    "details",
    "dialog",
    "dir",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "frame",
    "frameset",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hr",
    "html",
    "iframe",
    "legend",
    "li",
    "link",
    "main",
    "menu",
    "menuitem",
    "nav",
    "noframes",
    "ol",
    "optgroup",
    "option",
    "p",
    "param",
    "section",
    "source",
    "summary",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "title",
    "tr",
    "track",
    "ul",
];

/// Tags whose content is raw; their block ends only at the matching
/// closing tag.
const VERBATIM_TAGS: &[&str] = &["script", "pre", "style"];

/// Configuration data for the block parser.
///
/// The defaults reproduce the CommonMark tag tables; both lists can be
/// replaced wholesale from a config file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Tag names that open a tag-kind HTML block (ends at a blank line).
    pub html_block_tags: Vec<String>,
    /// Tag names that open a verbatim HTML block (ends at the closing tag).
    pub html_verbatim_tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html_block_tags: BLOCK_TAGS.iter().map(|t| t.to_string()).collect(),
            html_verbatim_tags: VERBATIM_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(s: &str) -> io::Result<Config> {
        toml::from_str::<Config>(s)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("invalid config: {e}")))
    }

    pub(crate) fn is_block_tag(&self, name: &str) -> bool {
        self.html_block_tags.iter().any(|t| t == name)
    }

    pub(crate) fn is_verbatim_tag(&self, name: &str) -> bool {
        self.html_verbatim_tags.iter().any(|t| t == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let config = Config::default();
        assert!(config.is_block_tag("div"));
        assert!(config.is_verbatim_tag("script"));
        assert!(!config.is_block_tag("span"));
    }

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml("html_block_tags = [\"div\"]").unwrap();
        assert!(config.is_block_tag("div"));
        assert!(!config.is_block_tag("p"));
        // Unset fields keep their defaults.
        assert!(config.is_verbatim_tag("pre"));
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(Config::from_toml("html_block_tags = 3").is_err());
    }
}
