//! Plotly figure description for the heat map.
//!
//! The output is plain figure JSON (`data`, `layout`, `config`) so any Plotly
//! front end can render it without further processing.

use serde_json::{json, Value};

use crate::color_scale::ColorScale;
use crate::snapshot::Snapshot;

const MAP_HEIGHT: u32 = 650;
const STATE_LABEL_COLOR: &str = "rgba(255, 255, 255, 0.7)";
const LABEL_FONT: &str = "Arial Black";

pub fn build_figure(snapshot: &Snapshot, scale: &ColorScale, show_cities: bool) -> Value {
    let codes: Vec<&str> = snapshot.states.iter().map(|p| p.name).collect();
    let temps: Vec<f64> = snapshot.states.iter().map(|p| p.temperature_c).collect();

    let mut data = vec![
        json!({
            "type": "choropleth",
            "locationmode": "USA-states",
            "locations": codes,
            "z": temps,
            "text": codes,
            "hoverinfo": "text+z",
            "colorscale": scale.to_plotly(),
            "zmin": scale.range[0],
            "zmax": scale.range[1],
            "colorbar": { "title": { "text": "Temperature (°C)" } },
        }),
        json!({
            "type": "scattergeo",
            "locationmode": "USA-states",
            "locations": codes,
            "text": codes,
            "mode": "text",
            "textfont": { "color": STATE_LABEL_COLOR, "size": 12, "family": LABEL_FONT },
            "hoverinfo": "skip",
            "showlegend": false,
        }),
    ];

    if show_cities {
        data.push(city_trace(snapshot));
    }

    json!({
        "data": data,
        "layout": {
            "geo": { "scope": "usa" },
            "height": MAP_HEIGHT,
            "margin": { "r": 0, "t": 40, "l": 0, "b": 0 },
            "dragmode": "zoom",
        },
        "config": {
            "scrollZoom": true,
            "displayModeBar": true,
        },
    })
}

fn city_trace(snapshot: &Snapshot) -> Value {
    let lon: Vec<f64> = snapshot.cities.iter().map(|p| p.lon).collect();
    let lat: Vec<f64> = snapshot.cities.iter().map(|p| p.lat).collect();
    let labels: Vec<String> = snapshot
        .cities
        .iter()
        .map(|p| format!("{}: {:.1}℃", p.name, p.temperature_c))
        .collect();

    json!({
        "type": "scattergeo",
        "name": "Major cities",
        "lon": lon,
        "lat": lat,
        "text": labels,
        "mode": "markers+text",
        "textposition": "bottom center",
        "marker": {
            "size": 7,
            "color": "black",
            "line": { "width": 1.5, "color": "white" },
        },
        "textfont": { "color": "black", "size": 11, "family": LABEL_FONT },
        "hoverinfo": "text",
        "showlegend": false,
    })
}
