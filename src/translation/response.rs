// Response translation (Gemini → relay)
// Author: kelexine (https://github.com/kelexine)

use crate::error::{RelayError, Result};
use crate::models::gemini::GenerateContentResponse;
use crate::models::relay::AskResponse;
use crate::utils::logging::sanitize;
use tracing::{debug, error};

/// Translate a raw Gemini response body into the relay answer.
///
/// Any body that does not deserialize, or that lacks
/// `candidates[0].content.parts[0].text`, is a [`RelayError::Shape`]. The raw
/// body is logged on that path and never returned to the caller.
pub fn translate_response(body: &str, sanitize_tokens: bool) -> Result<AskResponse> {
    let parsed = serde_json::from_str::<GenerateContentResponse>(body);

    let answer = match &parsed {
        Ok(resp) => {
            if let Some(candidate) = resp.first_candidate() {
                debug!("Response finish_reason: {:?}", candidate.finish_reason);
            }
            resp.first_text()
        }
        Err(e) => {
            debug!("Gemini response did not deserialize: {}", e);
            None
        }
    };

    match answer {
        Some(answer) => Ok(AskResponse { answer }),
        None => {
            let logged = if sanitize_tokens {
                sanitize(body)
            } else {
                body.to_string()
            };
            error!("Unexpected Gemini response format: {}", logged);
            Err(RelayError::Shape)
        }
    }
}
