use crate::data::record::Record;
use crate::foundation::core::{Point, Rgba};
use crate::layers::{LayerKind, LayerToggles};

/// Weather classification shown through the weather line's color.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum WeatherStatus {
    Normal,
    Heatwave,
    ColdWave,
    HeavyRain,
    HeatwaveAndHeavyRain,
    ColdWaveAndHeavyRain,
}

impl WeatherStatus {
    pub fn classify(temperature: f64, precipitation: f64) -> Self {
        let heavy = precipitation > 200.0;
        match (temperature > 28.0, temperature < 0.0, heavy) {
            (true, _, false) => Self::Heatwave,
            (true, _, true) => Self::HeatwaveAndHeavyRain,
            (false, true, false) => Self::ColdWave,
            (false, true, true) => Self::ColdWaveAndHeavyRain,
            (false, false, true) => Self::HeavyRain,
            (false, false, false) => Self::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Heatwave => "Heatwave",
            Self::ColdWave => "Cold Wave",
            Self::HeavyRain => "Normal & Heavy Rain",
            Self::HeatwaveAndHeavyRain => "Heatwave & Heavy Rain",
            Self::ColdWaveAndHeavyRain => "Cold Wave & Heavy Rain",
        }
    }

    /// Temperature extremes win the color; heavy rain only recolors an otherwise normal month.
    pub fn color(&self) -> Rgba {
        match self {
            Self::Normal => Rgba::rgb(0xb0, 0xe0, 0xe6),
            Self::Heatwave | Self::HeatwaveAndHeavyRain => Rgba::rgb(0xFF, 0x7F, 0x50),
            Self::ColdWave | Self::ColdWaveAndHeavyRain => Rgba::rgb(0x4B, 0x00, 0x82),
            Self::HeavyRain => Rgba::rgb(0x7f, 0xff, 0xd4),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TooltipLine {
    pub layer: LayerKind,
    pub text: String,
    pub color: Rgba,
    pub status: Option<WeatherStatus>,
}

/// Date header plus one formatted line per enabled layer. Markup is left to the host.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Tooltip {
    pub date_label: String,
    pub lines: Vec<TooltipLine>,
    /// Top-left corner in window coordinates.
    pub anchor: Point,
}

/// Offset of the tooltip from the pointer.
const ANCHOR_OFFSET: (f64, f64) = (15.0, -15.0);

/// Format the tooltip for `record`; `None` when no layer is enabled.
pub fn format_tooltip(
    record: &Record,
    harvest_value: Option<f64>,
    toggles: &LayerToggles,
    screen: Point,
) -> Option<Tooltip> {
    let mut lines = Vec::new();

    if toggles.weather {
        let status = WeatherStatus::classify(record.temperature, record.precipitation);
        lines.push(TooltipLine {
            layer: LayerKind::Weather,
            text: format!("{}°C / {}mm", record.temperature, record.precipitation),
            color: status.color(),
            status: Some(status),
        });
    }
    if toggles.harvest
        && let Some(value) = harvest_value
    {
        lines.push(TooltipLine {
            layer: LayerKind::Harvest,
            text: format!("Est. Harvest: {value}"),
            color: Rgba::rgb(0x00, 0xff, 0x7f),
            status: None,
        });
    }
    if toggles.wave {
        lines.push(TooltipLine {
            layer: LayerKind::Wave,
            text: format!("Price: {} Won", record.price),
            color: Rgba::rgb(0x00, 0xbf, 0xff),
            status: None,
        });
    }
    if toggles.sentiment {
        lines.push(TooltipLine {
            layer: LayerKind::Sentiment,
            text: format!(
                "Infl. Risk: {:.1}",
                crate::fields::cloud::inflation_metric(record.sentiment)
            ),
            color: Rgba::rgb(0xFF, 0x7F, 0x50),
            status: None,
        });
    }

    if lines.is_empty() {
        return None;
    }
    Some(Tooltip {
        date_label: record.date_label(),
        lines,
        anchor: Point::new(screen.x + ANCHOR_OFFSET.0, screen.y + ANCHOR_OFFSET.1),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/tooltip.rs"]
mod tests;
