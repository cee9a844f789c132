use crate::color_scale::ColorScale;
use crate::models::MapPoint;
use crate::snapshot::Snapshot;

/// Formats the state and city temperature tables, hottest first
pub fn format_tables(snapshot: &Snapshot) -> String {
    let mut output = String::from("State Temperatures:\n\n");
    push_table(&mut output, &snapshot.states);

    output.push_str("\nMajor City Temperatures:\n\n");
    push_table(&mut output, &snapshot.cities);
    output
}

fn push_table(output: &mut String, points: &[MapPoint]) {
    if points.is_empty() {
        output.push_str("  (no readings)\n");
        return;
    }

    output.push_str(&format!(
        "  {:<16} {:>9} {:>10} {:>10}\n",
        "Name", "Lat", "Lon", "Temp (\u{00b0}C)"
    ));
    for point in points {
        output.push_str(&format!(
            "  {:<16} {:>9.4} {:>10.4} {:>10.1}\n",
            point.name, point.lat, point.lon, point.temperature_c
        ));
    }
}

/// Formats a one-screen summary of what the map shows
pub fn format_summary(snapshot: &Snapshot, scale: &ColorScale, show_cities: bool) -> String {
    let mut output = format!(
        "US Temperature Heat Map (Open-Meteo)\nStates: {}\nCities: {}{}\n",
        snapshot.states.len(),
        snapshot.cities.len(),
        if show_cities { "" } else { " (overlay hidden)" }
    );

    output.push_str(&format!(
        "Color range: {:.1}\u{00b0}C to {:.1}\u{00b0}C\n",
        scale.range[0], scale.range[1]
    ));
    for stop in &scale.stops {
        output.push_str(&format!("  {:.3} {}\n", stop.position, stop.color));
    }

    if let Some((hottest, coldest)) = snapshot.states.first().zip(snapshot.states.last()) {
        output.push_str(&format!(
            "Hottest state: {} ({:.1}\u{00b0}C)\nColdest state: {} ({:.1}\u{00b0}C)\n",
            hottest.name, hottest.temperature_c, coldest.name, coldest.temperature_c
        ));
    }

    if let Ok(age) = snapshot.fetched_at.elapsed() {
        output.push_str(&format!("Data age: {}s\n", age.as_secs()));
    }

    if !snapshot.dropped.is_empty() {
        output.push_str(&format!(
            "No reading for {} location(s): {}\n",
            snapshot.dropped.len(),
            snapshot.dropped.join(", ")
        ));
    }
    output
}
