#![forbid(unsafe_code)]

//! Render-ready result rows.

use docsearch_text::{MatchResult, segments};
use serde::{Deserialize, Serialize};

/// One piece of a highlighted name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentView {
    pub text: String,
    /// Render inside `<mark>`.
    pub mark: bool,
}

/// Everything the page needs to draw one result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub name: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Badge class such as `role-event`; absent for unclassified types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    pub segments: Vec<SegmentView>,
}

impl ResultView {
    #[must_use]
    pub fn from_match(result: &MatchResult<'_>) -> Self {
        let item = result.item;
        Self {
            name: item.name.clone(),
            uri: item.uri.clone(),
            kind: item.kind.as_str().to_owned(),
            class: item.kind.css_class(),
            docs: item.docs().map(str::to_owned),
            segments: segments(&item.name, &result.regions)
                .into_iter()
                .map(|s| SegmentView {
                    text: s.text.to_owned(),
                    mark: s.highlighted,
                })
                .collect(),
        }
    }
}
