//! Wire types for the platform protocol.
//!
//! Both directions carry one JSON object per line, tagged by a `type`
//! field. Inbound lines that fail to parse, or carry an unknown type,
//! are dropped silently — the platform may speak a newer dialect, and a
//! partial read must never wedge the session.

use serde::{Deserialize, Serialize};

use crate::action::RemoteAction;

/// Serde `with`-module encoding binary payloads as standard base64.
pub mod base64_serde {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        STANDARD.encode(bytes).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

/// A request received from the platform.
///
/// Upload fields stay optional through parsing so an incomplete upload
/// reaches the dispatcher, which answers it with an error message
/// instead of the line vanishing. The payload stays base64-encoded
/// here; decoding happens at dispatch where a failure can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Upload {
        filename: Option<String>,
        data: Option<String>,
    },
    DownloadRequest,
    Delete,
}

#[derive(Deserialize)]
struct RawCommand {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    data: Option<String>,
}

/// Parses one inbound line into a [`Command`].
///
/// Returns `None` for malformed JSON and for unknown `type` values.
pub fn parse_line(line: &str) -> Option<Command> {
    let raw: RawCommand = serde_json::from_str(line).ok()?;
    match raw.kind.as_str() {
        "upload" => Some(Command::Upload {
            filename: raw.filename,
            data: raw.data,
        }),
        "download_request" => Some(Command::DownloadRequest),
        "delete" => Some(Command::Delete),
        _ => None,
    }
}

/// A message sent to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Snapshot of current path, selection, and permitted actions.
    State {
        path: String,
        selected: Option<String>,
        actions: Vec<RemoteAction>,
    },
    UploadComplete {
        filename: String,
    },
    DownloadData {
        filename: String,
        #[serde(with = "base64_serde")]
        data: Vec<u8>,
    },
    DeleteComplete,
    Error {
        message: String,
    },
}
