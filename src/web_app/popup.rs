// web_app/popup.rs - Toast messages and error text extraction
//
// The wording of every toast the answers page raises lives here, next to the
// logic that digs a readable message out of a backend error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How long a popup stays on screen
pub const POPUP_TIMEOUT_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopupKind {
    Success,
    Error,
}

/// A single toast notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupSpec {
    pub message: String,
    pub kind: PopupKind,
}

impl PopupSpec {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: PopupKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: PopupKind::Error,
        }
    }
}

/// Toast for a finished delete; `Err` carries the server's message body.
pub fn delete_popup(id: i32, outcome: Result<(), String>) -> PopupSpec {
    match outcome {
        Ok(()) => PopupSpec::success(format!("Standard answer {} deleted", id)),
        Err(detail) => PopupSpec::error(format!(
            "Failed to delete standard answer - {}",
            detail
        )),
    }
}

/// Toast for a failed create/update from the editor
pub fn save_failed_popup(detail: &str) -> PopupSpec {
    PopupSpec::error(format!("Failed to save standard answer - {}", detail))
}

/// Message for the "Error loading standard answers" panel.
///
/// Backends have shipped two envelopes: `{"info": {"message": ..}}` and
/// `{"message": {"info": {"detail": ..}}}`. The first defined value wins;
/// anything that is not such an envelope is shown verbatim.
pub fn load_error_message(raw: &str) -> String {
    let Ok(envelope) = serde_json::from_str::<Value>(raw) else {
        return raw.to_string();
    };

    let info_message = envelope
        .pointer("/info/message")
        .and_then(Value::as_str);
    let nested_detail = envelope
        .pointer("/message/info/detail")
        .and_then(Value::as_str);

    info_message
        .or(nested_detail)
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}

/// CSS classes for a popup variant
pub fn popup_class(kind: PopupKind) -> &'static str {
    match kind {
        PopupKind::Success => {
            "fixed bottom-6 right-6 z-50 px-5 py-3 rounded-lg shadow-lg bg-green-600 text-white font-medium"
        }
        PopupKind::Error => {
            "fixed bottom-6 right-6 z-50 px-5 py-3 rounded-lg shadow-lg bg-red-600 text-white font-medium"
        }
    }
}
