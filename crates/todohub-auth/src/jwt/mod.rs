//! JWT token encoding, decoding, and lifetime parsing.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod ttl;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
