//! Terminal rendering: current-conditions metrics and the forecast
//! temperature chart. Pure presentation; all decisions about what to show
//! were already made by the fetch-state machine.

use dashboard_core::{ForecastPoint, QueryState, WeatherSnapshot, icon_for};

const CHART_HEIGHT: usize = 8;
const COL_WIDTH: usize = 7;

pub fn loading() {
    println!("Loading weather data...");
}

pub fn render(state: &QueryState) {
    match state {
        QueryState::Idle | QueryState::Pending => loading(),
        QueryState::Failure { message } => render_error(message),
        QueryState::Success { weather, forecast } => {
            render_current(weather);
            render_forecast(forecast);
        }
    }
}

fn render_error(message: &str) {
    let width = message.chars().count() + 4;
    println!("┌{}┐", "─".repeat(width));
    println!("│  {message}  │");
    println!("└{}┘", "─".repeat(width));
}

fn render_current(weather: &WeatherSnapshot) {
    let icon = icon_for(Some(&weather.description));

    println!();
    println!("  {}", weather.location);
    println!("  {}", capitalize(&weather.description));
    println!();
    println!("  {}  {}°C", icon.symbol(), weather.temperature);
    println!();
    println!("  Humidity    {}%", weather.humidity);
    println!("  Wind Speed  {} km/h", weather.wind_speed);
    println!("  Pressure    {} hPa", weather.pressure);
    println!();
}

fn render_forecast(forecast: &[ForecastPoint]) {
    println!("  7-Day Temperature Forecast");
    println!();
    for line in chart_lines(forecast) {
        println!("  {line}");
    }
    println!();
}

/// Plot the forecast as rows of markers: one column per point, scaled
/// between the series min and max. Points keep the order the backend
/// delivered them in.
fn chart_lines(points: &[ForecastPoint]) -> Vec<String> {
    if points.is_empty() {
        return vec!["(no forecast data)".to_string()];
    }

    let min = points.iter().map(|p| p.temp).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.temp).fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };

    let levels: Vec<usize> = points
        .iter()
        .map(|p| (((p.temp - min) / span) * (CHART_HEIGHT - 1) as f64).round() as usize)
        .collect();

    let mut lines = Vec::with_capacity(CHART_HEIGHT + 2);
    for row in (0..CHART_HEIGHT).rev() {
        let threshold = min + span * row as f64 / (CHART_HEIGHT - 1) as f64;
        let mut line = format!("{threshold:>6.1} ┤");
        for level in &levels {
            let cell = if *level == row { "●" } else { " " };
            line.push_str(&format!("{cell:^width$}", width = COL_WIDTH));
        }
        lines.push(line);
    }

    let mut axis = String::from("       └");
    axis.push_str(&"─".repeat(COL_WIDTH * points.len()));
    lines.push(axis);

    let mut labels = String::from("        ");
    for p in points {
        labels.push_str(&format!("{:^width$}", clip(&p.day, COL_WIDTH - 1), width = COL_WIDTH));
    }
    lines.push(labels);

    lines
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
