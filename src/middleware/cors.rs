//! Middleware de CORS
//!
//! Permite requests desde cualquier origen.
//! NOTA: solo para desarrollo.

use tower_http::cors::CorsLayer;

pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
