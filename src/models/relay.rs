// Local API contract for /ask-gemini
// Author: kelexine (https://github.com/kelexine)

use crate::error::{RelayError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a `POST /ask-gemini` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    /// The question for the model.
    pub prompt: String,

    /// Base64 image data, sent upstream as JPEG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl AskRequest {
    /// Build a request from an arbitrary JSON body.
    ///
    /// Only the presence of `prompt` is checked. A missing body, a body that is
    /// not an object, or a `prompt` that is absent or not a string all yield
    /// [`RelayError::MissingPrompt`]. A non-string `image` is ignored.
    pub fn from_json(body: Option<&Value>) -> Result<Self> {
        let object = body
            .and_then(Value::as_object)
            .ok_or(RelayError::MissingPrompt)?;

        let prompt = object
            .get("prompt")
            .and_then(Value::as_str)
            .ok_or(RelayError::MissingPrompt)?
            .to_string();

        let image = object
            .get("image")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self { prompt, image })
    }

    /// Image payload, if one was actually supplied (empty strings count as absent).
    pub fn image_data(&self) -> Option<&str> {
        self.image.as_deref().filter(|data| !data.is_empty())
    }
}

/// Successful answer returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
