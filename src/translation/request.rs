// Request translation (relay → Gemini)
// Author: kelexine (https://github.com/kelexine)

use crate::models::gemini::{Content, GenerateContentRequest, InlineData, Part};
use crate::models::relay::AskRequest;
use tracing::debug;

/// Media type declared for every inline image. The payload is not sniffed.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Translate an `/ask-gemini` request into a Gemini `generateContent` body.
///
/// The text part always comes first; the image part follows only when an
/// image was supplied. Image data is forwarded untouched.
pub fn translate_request(req: &AskRequest) -> GenerateContentRequest {
    let mut parts = vec![Part::Text {
        text: req.prompt.clone(),
    }];

    if let Some(data) = req.image_data() {
        debug!("Attaching inline image ({} base64 chars)", data.len());
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: IMAGE_MIME_TYPE.to_string(),
                data: data.to_string(),
            },
        });
    }

    GenerateContentRequest {
        contents: vec![Content { parts }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_only_request() {
        let req = AskRequest {
            prompt: "How often should I water a fern?".to_string(),
            image: None,
        };

        let value = serde_json::to_value(translate_request(&req)).unwrap();
        assert_eq!(
            value,
            json!({"contents": [{"parts": [{"text": "How often should I water a fern?"}]}]})
        );
    }

    #[test]
    fn test_image_part_follows_text() {
        let req = AskRequest {
            prompt: "What is this?".to_string(),
            image: Some("iVBORw0KGgo=".to_string()),
        };

        let gemini_req = translate_request(&req);
        let parts = &gemini_req.contents[0].parts;

        assert_eq!(parts.len(), 2);
        assert!(matches!(&parts[0], Part::Text { text } if text == "What is this?"));
        match &parts[1] {
            Part::InlineData { inline_data } => {
                // PNG bytes still go out labelled as JPEG
                assert_eq!(inline_data.mime_type, "image/jpeg");
                assert_eq!(inline_data.data, "iVBORw0KGgo=");
            }
            other => panic!("expected inline data, got {:?}", other),
        }
    }
}
