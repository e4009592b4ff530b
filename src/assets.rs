//! Sprite bitmaps: file decoding, background loading slots and generated fallbacks.

pub mod decode;
pub mod procedural;
pub mod sprite;
