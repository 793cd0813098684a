use serde::Deserialize;

use crate::errors::RelayError;

/// Query parameters a 400 response reports back to the caller.
pub const REQUIRED_PARAMS: [&str; 4] = ["server", "tc", "uid1", "emote_id"];

/// Raw query parameters as they arrive on the inbound request.
///
/// Every field is optional at this stage; `validate` decides which ones the
/// relay actually needs. Unknown query keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct EmoteParams {
    pub server: Option<String>,
    pub tc: Option<String>,
    pub uid1: Option<String>,
    pub uid2: Option<String>,
    pub uid3: Option<String>,
    pub uid4: Option<String>,
    pub uid5: Option<String>,
    pub emote_id: Option<String>,
}

/// A validated emote request, ready for URL construction.
#[derive(Debug)]
pub struct EmoteRequest {
    pub server: String,
    pub tc: String,
    // Slot i holds uid{i+1}; slot 0 is always populated after validation.
    pub uids: [Option<String>; 5],
    pub emote_id: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl EmoteParams {
    /// Checks the required parameters and produces an [`EmoteRequest`].
    ///
    /// `server`, `tc`, `uid1` and `emote_id` must be present and non-empty.
    /// `uid2`..`uid5` are passed through when present and dropped silently
    /// when absent or empty; a missing `uid1` is an error.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::MissingParams`] if any required parameter is
    /// missing or empty.
    pub fn validate(self) -> Result<EmoteRequest, RelayError> {
        let server = non_empty(self.server).ok_or(RelayError::MissingParams)?;
        let tc = non_empty(self.tc).ok_or(RelayError::MissingParams)?;
        let uid1 = non_empty(self.uid1).ok_or(RelayError::MissingParams)?;
        let emote_id = non_empty(self.emote_id).ok_or(RelayError::MissingParams)?;

        Ok(EmoteRequest {
            server,
            tc,
            uids: [
                Some(uid1),
                non_empty(self.uid2),
                non_empty(self.uid3),
                non_empty(self.uid4),
                non_empty(self.uid5),
            ],
            emote_id,
        })
    }
}

impl EmoteRequest {
    /// Builds the upstream `/join` URL.
    ///
    /// Values are percent-encoded individually; keys, separators and the
    /// `server` base are left as-is. Populated uid slots appear in ascending
    /// numeric order.
    pub fn join_url(&self) -> String {
        let mut parts = vec![format!(
            "{}/join?tc={}",
            self.server,
            urlencoding::encode(&self.tc)
        )];

        for (i, uid) in self.uids.iter().enumerate() {
            if let Some(uid) = uid {
                parts.push(format!("uid{}={}", i + 1, urlencoding::encode(uid)));
            }
        }

        parts.push(format!("emote_id={}", urlencoding::encode(&self.emote_id)));
        parts.join("&")
    }
}
