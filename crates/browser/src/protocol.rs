//! JSON line protocol between the session and the Node driver

use serde::{Deserialize, Serialize};

/// A single command sent to the driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PageCommand {
    /// Navigate the page to an absolute URL and wait for the load event
    Goto { url: String },

    /// Reload the page and wait for the navigation to complete
    Reload,

    /// Clear an input field and type a value into it
    Fill { selector: String, value: String },

    /// Click the first element matching the selector
    Click { selector: String },

    /// Inner text of the first matching element
    Text { selector: String },

    /// Inner texts of every matching element, in document order.
    /// Zero matches yields an empty list, not an error.
    TextAll { selector: String },

    /// Value of an attribute on the first matching element
    Attribute { selector: String, name: String },

    /// Wait for the first matching element to reach a state
    WaitFor {
        selector: String,
        #[serde(default)]
        state: WaitState,
        #[serde(default = "default_wait_timeout")]
        timeout_ms: u64,
    },

    /// Shut the driver down cleanly
    Close,
}

fn default_wait_timeout() -> u64 {
    5000
}

impl PageCommand {
    /// Short name used in error messages and logs.
    pub fn action(&self) -> &'static str {
        match self {
            PageCommand::Goto { .. } => "goto",
            PageCommand::Reload => "reload",
            PageCommand::Fill { .. } => "fill",
            PageCommand::Click { .. } => "click",
            PageCommand::Text { .. } => "text",
            PageCommand::TextAll { .. } => "text_all",
            PageCommand::Attribute { .. } => "attribute",
            PageCommand::WaitFor { .. } => "wait_for",
            PageCommand::Close => "close",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaitState {
    #[default]
    Visible,
    Hidden,
    Attached,
    Detached,
}

/// Envelope written to the driver: a correlation id plus the command.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    pub id: u64,
    #[serde(flatten)]
    pub command: PageCommand,
}

/// One line of driver output.
///
/// Unsolicited lines (no `id`) are events; the only one the session cares
/// about is the `ready` handshake emitted once the page is open.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub id: Option<u64>,
    pub ok: bool,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub values: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serializes_with_snake_case_tag() {
        let request = Request {
            id: 3,
            command: PageCommand::Fill {
                selector: "#username".into(),
                value: "tomsmith".into(),
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["action"], "fill");
        assert_eq!(json["selector"], "#username");
        assert_eq!(json["value"], "tomsmith");
    }

    #[test]
    fn test_wait_for_defaults() {
        let command: PageCommand =
            serde_json::from_str(r##"{"action":"wait_for","selector":"#flash"}"##).unwrap();
        assert_eq!(
            command,
            PageCommand::WaitFor {
                selector: "#flash".into(),
                state: WaitState::Visible,
                timeout_ms: 5000,
            }
        );
    }

    #[test]
    fn test_response_parses_event_and_values() {
        let ready: PageResponse = serde_json::from_str(r#"{"ok":true,"event":"ready"}"#).unwrap();
        assert!(ready.ok);
        assert_eq!(ready.event.as_deref(), Some("ready"));
        assert!(ready.id.is_none());

        let texts: PageResponse =
            serde_json::from_str(r#"{"id":7,"ok":true,"values":["a","b"]}"#).unwrap();
        assert_eq!(texts.id, Some(7));
        assert_eq!(texts.values.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));

        let failure: PageResponse =
            serde_json::from_str(r#"{"id":8,"ok":false,"error":"no element"}"#).unwrap();
        assert!(!failure.ok);
        assert_eq!(failure.error.as_deref(), Some("no element"));
    }
}
