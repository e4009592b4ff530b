use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::foundation::error::{DriftlineError, DriftlineResult};

/// The two bitmap inputs the layers draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteKind {
    /// Floating marker that follows the pointer over the weather layer.
    Indicator,
    /// Cloud drawn per sentiment point.
    Cloud,
}

/// Premultiplied RGBA8 bitmap.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl Sprite {
    pub fn new(width: u32, height: u32, rgba8_premul: Arc<Vec<u8>>) -> DriftlineResult<Self> {
        if width == 0 || height == 0 {
            return Err(DriftlineError::asset("sprite must be at least 1x1"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(DriftlineError::asset(format!(
                "sprite {width}x{height} exceeds the rasterizer limit"
            )));
        }
        if rgba8_premul.len() != width as usize * height as usize * 4 {
            return Err(DriftlineError::asset("sprite byte length mismatch"));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Height over width.
    pub fn aspect(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.rgba8_premul
    }

    /// Shared pixel buffer; backends key their caches on its identity.
    pub fn shared_pixels(&self) -> &Arc<Vec<u8>> {
        &self.rgba8_premul
    }
}

/// A sprite that may still be decoding on a background thread.
#[derive(Debug)]
pub enum SpriteSlot {
    Pending(Receiver<DriftlineResult<Sprite>>),
    Ready(Sprite),
    Failed(String),
}

impl SpriteSlot {
    pub fn ready(sprite: Sprite) -> Self {
        Self::Ready(sprite)
    }

    /// Start reading and decoding `path` off the frame thread.
    pub fn spawn_decode(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let result = std::fs::read(&path)
                .map_err(|e| {
                    DriftlineError::asset(format!("read sprite '{}': {e}", path.display()))
                })
                .and_then(|bytes| crate::assets::decode::decode_image(&bytes));
            // The slot may have been dropped; nothing to report then.
            let _ = tx.send(result);
        });
        Self::Pending(rx)
    }

    /// Wrap an existing channel, e.g. a host-side loader.
    pub fn from_receiver(rx: Receiver<DriftlineResult<Sprite>>) -> Self {
        Self::Pending(rx)
    }

    /// Non-blocking check for a finished decode. Called once per frame.
    pub fn poll(&mut self) {
        let Self::Pending(rx) = self else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(sprite)) => {
                tracing::debug!(
                    width = sprite.width(),
                    height = sprite.height(),
                    "sprite decoded"
                );
                *self = Self::Ready(sprite);
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "sprite decode failed");
                *self = Self::Failed(e.to_string());
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                *self = Self::Failed("sprite loader went away".to_owned());
            }
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn sprite(&self) -> Option<&Sprite> {
        match self {
            Self::Ready(s) => Some(s),
            _ => None,
        }
    }
}

/// Sprites available to a backend for one frame.
#[derive(Clone, Debug, Default)]
pub struct SpriteSheet {
    pub indicator: Option<Sprite>,
    pub cloud: Option<Sprite>,
}

impl SpriteSheet {
    pub fn get(&self, kind: SpriteKind) -> Option<&Sprite> {
        match kind {
            SpriteKind::Indicator => self.indicator.as_ref(),
            SpriteKind::Cloud => self.cloud.as_ref(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sprite.rs"]
mod tests;
