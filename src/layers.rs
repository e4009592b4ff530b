//! Layer identities, toggle flags and the presentation derived from them.

use crate::foundation::core::Rgba;

/// The four procedural layers, in bottom-to-top stacking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Weather,
    Harvest,
    Wave,
    Sentiment,
}

impl LayerKind {
    /// Stacking order, bottom first.
    pub const STACK: [LayerKind; 4] = [Self::Weather, Self::Harvest, Self::Wave, Self::Sentiment];

    /// Axis-label ownership order, highest precedence first.
    pub const AXIS_PRECEDENCE: [LayerKind; 4] =
        [Self::Weather, Self::Wave, Self::Harvest, Self::Sentiment];

    pub fn name(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Harvest => "harvest",
            Self::Wave => "wave",
            Self::Sentiment => "sentiment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weather" => Some(Self::Weather),
            "harvest" | "cabbage" => Some(Self::Harvest),
            "wave" | "price" => Some(Self::Wave),
            "sentiment" | "inflation" | "cloud" => Some(Self::Sentiment),
            _ => None,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Weather => "Weather Wave",
            Self::Harvest => "Monthly Harvest (Simulated)",
            Self::Wave => "Price Trend",
            Self::Sentiment => "Sentiment Cloud",
        }
    }

    fn title_glow(self) -> Rgba {
        match self {
            Self::Weather | Self::Wave => Rgba::rgba(0, 191, 255, 0.6),
            Self::Harvest => Rgba::rgba(0, 255, 127, 0.6),
            Self::Sentiment => Rgba::rgba(255, 69, 0, 0.6),
        }
    }
}

/// Which layers the host UI has switched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayerToggles {
    pub weather: bool,
    pub harvest: bool,
    pub wave: bool,
    pub sentiment: bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            weather: true,
            harvest: false,
            wave: false,
            sentiment: false,
        }
    }
}

/// Header text, legends and axis ownership for one toggle set.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Presentation {
    pub title: &'static str,
    pub title_glow: Option<Rgba>,
    /// Layers whose legend is shown; empty when several layers are combined.
    pub legends: Vec<LayerKind>,
    /// Harvest chart is overlaid on other layers.
    pub harvest_merged: bool,
    pub axis_owner: Option<LayerKind>,
}

impl LayerToggles {
    pub const NONE: Self = Self {
        weather: false,
        harvest: false,
        wave: false,
        sentiment: false,
    };

    pub const ALL: Self = Self {
        weather: true,
        harvest: true,
        wave: true,
        sentiment: true,
    };

    pub fn only(kind: LayerKind) -> Self {
        Self::NONE.with(kind, true)
    }

    pub fn from_kinds(kinds: impl IntoIterator<Item = LayerKind>) -> Self {
        kinds
            .into_iter()
            .fold(Self::NONE, |acc, k| acc.with(k, true))
    }

    pub fn with(mut self, kind: LayerKind, on: bool) -> Self {
        self.set(kind, on);
        self
    }

    pub fn set(&mut self, kind: LayerKind, on: bool) {
        match kind {
            LayerKind::Weather => self.weather = on,
            LayerKind::Harvest => self.harvest = on,
            LayerKind::Wave => self.wave = on,
            LayerKind::Sentiment => self.sentiment = on,
        }
    }

    pub fn toggle(&mut self, kind: LayerKind) {
        self.set(kind, !self.is_enabled(kind));
    }

    pub fn is_enabled(&self, kind: LayerKind) -> bool {
        match kind {
            LayerKind::Weather => self.weather,
            LayerKind::Harvest => self.harvest,
            LayerKind::Wave => self.wave,
            LayerKind::Sentiment => self.sentiment,
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = LayerKind> + '_ {
        LayerKind::STACK
            .into_iter()
            .filter(|&k| self.is_enabled(k))
    }

    pub fn count(&self) -> usize {
        self.enabled().count()
    }

    /// Highest-precedence enabled layer; it alone draws axis labels.
    pub fn axis_owner(&self) -> Option<LayerKind> {
        LayerKind::AXIS_PRECEDENCE
            .into_iter()
            .find(|&k| self.is_enabled(k))
    }

    /// Derived fresh from the flags on every call.
    pub fn presentation(&self) -> Presentation {
        let merged = self.count() > 1;
        let single = if merged {
            None
        } else {
            [
                LayerKind::Weather,
                LayerKind::Harvest,
                LayerKind::Wave,
                LayerKind::Sentiment,
            ]
            .into_iter()
            .find(|&k| self.is_enabled(k))
        };
        let (title, title_glow) = match (merged, single) {
            (true, _) => ("Combined View", Some(Rgba::rgba(255, 255, 255, 0.5))),
            (false, Some(k)) => (k.title(), Some(k.title_glow())),
            (false, None) => ("Select Data", None),
        };
        Presentation {
            title,
            title_glow,
            legends: single.into_iter().collect(),
            harvest_merged: self.harvest && (self.weather || self.wave || self.sentiment),
            axis_owner: self.axis_owner(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/layers.rs"]
mod tests;
