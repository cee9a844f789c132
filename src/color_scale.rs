//! Five-stop temperature color scale driven by user thresholds.
//!
//! Thresholds arrive in slider order but may cross each other, so they are
//! sorted before being projected onto `[0, 1]`.

use serde::Serialize;

use crate::error::HeatmapError;

/// Stop colors from coldest to hottest.
pub const STOP_COLORS: [&str; 5] = ["darkblue", "dodgerblue", "lightyellow", "tomato", "darkred"];

/// Bounds and starting value of one threshold slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

pub const SLIDERS: [Slider; 5] = [
    Slider {
        min: -40.0,
        max: 0.0,
        default: -10.0,
    },
    Slider {
        min: -20.0,
        max: 15.0,
        default: 0.0,
    },
    Slider {
        min: -10.0,
        max: 25.0,
        default: 10.0,
    },
    Slider {
        min: 0.0,
        max: 35.0,
        default: 20.0,
    },
    Slider {
        min: 15.0,
        max: 50.0,
        default: 30.0,
    },
];

/// Fills omitted thresholds from the slider defaults and range-checks the rest.
pub fn resolve_thresholds(inputs: [Option<f64>; 5]) -> Result<[f64; 5], HeatmapError> {
    let mut out = [0.0; 5];
    for (i, (input, slider)) in inputs.iter().zip(SLIDERS.iter()).enumerate() {
        let value = input.unwrap_or(slider.default);
        if !(slider.min..=slider.max).contains(&value) {
            return Err(HeatmapError::ThresholdOutOfRange {
                index: i + 1,
                value,
                min: slider.min,
                max: slider.max,
            });
        }
        out[i] = value;
    }
    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: &'static str,
}

/// Normalized gradient plus the temperature range it spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScale {
    pub stops: [ColorStop; 5],
    pub range: [f64; 2],
}

impl ColorScale {
    /// Builds the scale from five thresholds in any order.
    ///
    /// When all thresholds are equal the span is taken as 1 degree, so the
    /// interior stops collapse onto 0.0 and the range becomes `[t, t + 1]`.
    pub fn from_thresholds(thresholds: [f64; 5]) -> Self {
        let mut t = thresholds;
        t.sort_by(f64::total_cmp);

        let min = t[0];
        let mut max = t[4];
        if max == min {
            max = min + 1.0;
        }
        let span = max - min;

        let position = |i: usize| match i {
            0 => 0.0,
            4 => 1.0,
            _ => (t[i] - min) / span,
        };
        let stops = std::array::from_fn(|i| ColorStop {
            position: position(i),
            color: STOP_COLORS[i],
        });

        Self {
            stops,
            range: [min, max],
        }
    }

    pub fn positions(&self) -> [f64; 5] {
        std::array::from_fn(|i| self.stops[i].position)
    }

    /// Plotly `colorscale` form: `[[position, color], ...]`.
    pub fn to_plotly(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.stops
                .iter()
                .map(|s| serde_json::json!([s.position, s.color]))
                .collect(),
        )
    }
}
