use serde::Serialize;

/// Display information for one gateway extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtensionMetadata {
    pub display_name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub website: &'static str,
}
