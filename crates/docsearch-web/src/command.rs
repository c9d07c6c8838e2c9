#![forbid(unsafe_code)]

//! Host commands.
//!
//! The widget's [`RenderSink`] calls are buffered as [`HostCommand`]s and
//! handed back to the page, which applies them in order. Serialized with an
//! `op` tag:
//!
//! ```json
//! [{"op": "show_results", "results": [...]}, {"op": "set_active", "previous": null, "current": 0}]
//! ```

use crate::view::ResultView;
use docsearch_text::MatchResult;
use docsearch_widgets::{RenderSink, SelectionChange};
use serde::{Deserialize, Serialize};

/// A single DOM-side action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HostCommand {
    /// Replace the result card contents and show it.
    ShowResults { results: Vec<ResultView> },
    /// Replace the result card contents with a muted message and show it.
    ShowNoResults { message: String },
    HideResults,
    /// Drop the active marker from `previous`, add it to `current` and
    /// scroll `current` into view.
    SetActive {
        previous: Option<usize>,
        current: Option<usize>,
    },
    FocusSearch,
    ClearQuery,
    /// Follow a link.
    Navigate { uri: String },
}

/// [`RenderSink`] that records commands for the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBuffer {
    commands: Vec<HostCommand>,
}

impl CommandBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[HostCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take every buffered command, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSink for CommandBuffer {
    fn show_results(&mut self, results: &[MatchResult<'_>]) {
        self.commands.push(HostCommand::ShowResults {
            results: results.iter().map(ResultView::from_match).collect(),
        });
    }

    fn show_no_results(&mut self, message: &str) {
        self.commands.push(HostCommand::ShowNoResults {
            message: message.to_owned(),
        });
    }

    fn hide_results(&mut self) {
        self.commands.push(HostCommand::HideResults);
    }

    fn set_active(&mut self, change: SelectionChange) {
        self.commands.push(HostCommand::SetActive {
            previous: change.previous.index(),
            current: change.current.index(),
        });
    }

    fn focus_search(&mut self) {
        self.commands.push(HostCommand::FocusSearch);
    }

    fn clear_query(&mut self) {
        self.commands.push(HostCommand::ClearQuery);
    }

    fn activate(&mut self, uri: &str) {
        self.commands.push(HostCommand::Navigate {
            uri: uri.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsearch_widgets::SelectionState;

    #[test]
    fn wire_format() {
        let mut buffer = CommandBuffer::new();
        buffer.set_active(SelectionChange {
            previous: SelectionState::NoSelection,
            current: SelectionState::Selected(0),
        });
        buffer.hide_results();
        buffer.activate("/m/x");
        let json = serde_json::to_string(&buffer.drain()).unwrap();
        assert_eq!(
            json,
            r#"[{"op":"set_active","previous":null,"current":0},{"op":"hide_results"},{"op":"navigate","uri":"/m/x"}]"#
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn decodes_its_own_output() {
        let json = r#"{"op":"show_no_results","message":"No results match this query."}"#;
        let command: HostCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            command,
            HostCommand::ShowNoResults {
                message: "No results match this query.".into()
            }
        );
    }
}
