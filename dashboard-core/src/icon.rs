//! Weather-description to icon mapping.
//!
//! Pure lookup over the snapshot's `description` field. The keyword list is
//! checked in a fixed priority order and the first match wins, so a
//! description like "light rain and cloud" resolves to the cloud icon.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Clear,
    Cloud,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    /// Fallback when the description is empty or matches nothing.
    Thermometer,
}

impl WeatherIcon {
    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherIcon::Clear => "☀️",
            WeatherIcon::Cloud => "☁️",
            WeatherIcon::Rain => "🌧️",
            WeatherIcon::Drizzle => "🌦️",
            WeatherIcon::Thunderstorm => "⛈️",
            WeatherIcon::Snow => "❄️",
            WeatherIcon::Mist => "🌫️",
            WeatherIcon::Thermometer => "🌡️",
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Keyword rules in priority order. First substring match wins.
const ICON_RULES: &[(&[&str], WeatherIcon)] = &[
    (&["clear"], WeatherIcon::Clear),
    (&["cloud"], WeatherIcon::Cloud),
    (&["rain"], WeatherIcon::Rain),
    (&["drizzle"], WeatherIcon::Drizzle),
    (&["thunderstorm"], WeatherIcon::Thunderstorm),
    (&["snow"], WeatherIcon::Snow),
    (&["mist", "fog", "haze"], WeatherIcon::Mist),
];

/// Pick an icon for a weather description, case-insensitively.
///
/// Absent or empty descriptions fall back to [`WeatherIcon::Thermometer`].
pub fn icon_for(description: Option<&str>) -> WeatherIcon {
    let Some(description) = description else {
        return WeatherIcon::Thermometer;
    };

    let lower = description.to_lowercase();

    for (keywords, icon) in ICON_RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *icon;
        }
    }

    WeatherIcon::Thermometer
}
