//! Installed extension records parsed from the editor's inventory listing

use std::fmt;

use crate::error::{Error, Result};

/// Separator between an extension's identifier and its version.
pub const VERSION_SEPARATOR: char = '@';

/// One installed extension as reported by `--list-extensions --show-versions`.
///
/// Records only come out of [`ExtensionRecord::parse`], so `raw` is always
/// `name@version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionRecord {
    raw: String,
    name: String,
    version: String,
}

impl ExtensionRecord {
    /// Parse a single `name@version` inventory token.
    ///
    /// The token must contain exactly one separator with text on both sides.
    pub fn parse(token: &str) -> Result<Self> {
        let malformed = || Error::MalformedInventoryToken {
            token: token.to_string(),
        };

        let (name, version) = token.split_once(VERSION_SEPARATOR).ok_or_else(malformed)?;
        if name.is_empty() || version.is_empty() || version.contains(VERSION_SEPARATOR) {
            return Err(malformed());
        }

        Ok(Self {
            raw: token.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether a desired identifier refers to this record, either pinned
    /// (`name@version`) or by bare name.
    pub fn matches(&self, identifier: &str) -> bool {
        identifier == self.raw || identifier == self.name
    }
}

impl fmt::Display for ExtensionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse the whitespace-separated output of the inventory query.
///
/// The first malformed token fails the whole listing.
pub fn parse_inventory(output: &str) -> Result<Vec<ExtensionRecord>> {
    output.split_whitespace().map(ExtensionRecord::parse).collect()
}
