// HTTP middleware
// Author: kelexine (https://github.com/kelexine)

use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Create request ID layers for the application
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// Browser front ends post straight to the relay from another origin
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
