// Translation layer between the relay API and Gemini
// Author: kelexine (https://github.com/kelexine)

pub mod request;
pub mod response;

pub use request::{translate_request, IMAGE_MIME_TYPE};
pub use response::translate_response;
