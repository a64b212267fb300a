//! Lifecycle of a weather query: pending, success or failure, plus the
//! discard rule that keeps stale responses from clobbering newer ones.

use crate::model::{ForecastPoint, WeatherReport, WeatherSnapshot};
use crate::service::{ServiceError, WeatherService};

/// Current phase of the weather query. Exactly one variant holds at a
/// time; every transition fully replaces the previous data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    /// Before the first fetch resolves. Rendered like `Pending`.
    #[default]
    Idle,
    Pending,
    Success {
        weather: WeatherSnapshot,
        forecast: Vec<ForecastPoint>,
    },
    Failure {
        message: String,
    },
}

impl QueryState {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Idle | QueryState::Pending)
    }
}

/// Identifies one issued request. Outcomes carrying a tag from a
/// superseded request are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag(u64);

/// Owns the [`QueryState`] and enforces commit-order application of
/// responses via a generation counter: `begin` bumps the generation and
/// `apply` only accepts the outcome whose tag matches it.
///
/// No in-flight request is ever cancelled; discarding stale outcomes is
/// equivalent in observable behavior.
#[derive(Debug, Default)]
pub struct FetchState {
    state: QueryState,
    generation: u64,
}

impl FetchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view for rendering.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Start a new request: transition to `Pending` and supersede any
    /// request still in flight.
    pub fn begin(&mut self) -> RequestTag {
        self.generation += 1;
        self.state = QueryState::Pending;
        RequestTag(self.generation)
    }

    /// Publish a request's outcome. Returns `false` when the outcome was
    /// stale and left the state untouched. Staleness is expected, so it
    /// is only traced, never surfaced.
    pub fn apply(
        &mut self,
        tag: RequestTag,
        outcome: Result<WeatherReport, ServiceError>,
    ) -> bool {
        if tag.0 != self.generation {
            tracing::debug!(
                issued = tag.0,
                current = self.generation,
                "discarding stale weather response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(report) => QueryState::Success {
                weather: report.weather,
                forecast: report.forecast,
            },
            Err(err) => QueryState::Failure { message: err.user_message() },
        };

        true
    }
}

/// Run one full fetch cycle for `location`: begin, call the service,
/// apply the outcome. Returns `false` if a newer request superseded this
/// one while it was in flight.
pub async fn refresh(
    machine: &mut FetchState,
    service: &dyn WeatherService,
    location: &str,
) -> bool {
    let tag = machine.begin();
    tracing::debug!(%location, "requesting weather");

    let outcome = service.fetch(location).await;
    machine.apply(tag, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::FALLBACK_MESSAGE;
    use async_trait::async_trait;

    fn report(location: &str, description: &str, temperature: f64) -> WeatherReport {
        WeatherReport {
            weather: WeatherSnapshot {
                location: location.to_string(),
                description: description.to_string(),
                temperature,
                humidity: 40.0,
                wind_speed: 10.0,
                pressure: 1012.0,
            },
            forecast: vec![
                ForecastPoint { day: "Mon".into(), temp: temperature + 1.0 },
                ForecastPoint { day: "Tue".into(), temp: temperature - 1.0 },
            ],
        }
    }

    /// Serves a canned report for every location it knows about and
    /// "City not found" for the rest.
    #[derive(Debug)]
    struct CannedService;

    #[async_trait]
    impl WeatherService for CannedService {
        async fn fetch(&self, location: &str) -> Result<WeatherReport, ServiceError> {
            match location {
                "Bengaluru" => Ok(report("Bengaluru", "clear sky", 28.0)),
                "London" => Ok(report("London", "light rain", 12.0)),
                _ => Err(ServiceError::Service { message: "City not found".into() }),
            }
        }
    }

    #[test]
    fn initial_state_is_idle_and_renders_as_pending() {
        let machine = FetchState::new();
        assert_eq!(*machine.state(), QueryState::Idle);
        assert!(machine.state().is_pending());
    }

    #[test]
    fn begin_enters_pending() {
        let mut machine = FetchState::new();
        machine.begin();
        assert_eq!(*machine.state(), QueryState::Pending);
    }

    #[test]
    fn stale_success_never_overwrites_newer_result() {
        let mut machine = FetchState::new();

        // Request A issued, then superseded by request B.
        let tag_a = machine.begin();
        let tag_b = machine.begin();

        // B resolves first.
        assert!(machine.apply(tag_b, Ok(report("London", "light rain", 12.0))));

        // A resolves later; its result must be dropped.
        assert!(!machine.apply(tag_a, Ok(report("Bengaluru", "clear sky", 28.0))));

        match machine.state() {
            QueryState::Success { weather, .. } => assert_eq!(weather.location, "London"),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn stale_failure_is_discarded_too() {
        let mut machine = FetchState::new();

        let tag_a = machine.begin();
        let tag_b = machine.begin();

        assert!(machine.apply(tag_b, Ok(report("London", "light rain", 12.0))));
        assert!(!machine.apply(
            tag_a,
            Err(ServiceError::Service { message: "City not found".into() })
        ));

        assert!(matches!(machine.state(), QueryState::Success { .. }));
    }

    #[test]
    fn failure_replaces_prior_success_completely() {
        let mut machine = FetchState::new();

        let tag = machine.begin();
        machine.apply(tag, Ok(report("London", "light rain", 12.0)));

        let tag = machine.begin();
        machine.apply(
            tag,
            Err(ServiceError::Service { message: "City not found".into() }),
        );

        assert_eq!(
            *machine.state(),
            QueryState::Failure { message: "City not found".to_string() }
        );
    }

    #[test]
    fn malformed_payload_becomes_generic_failure() {
        let mut machine = FetchState::new();

        let inner = serde_json::from_str::<WeatherReport>(r#"{"forecast": []}"#).unwrap_err();
        let tag = machine.begin();
        machine.apply(tag, Err(ServiceError::Malformed(inner)));

        assert_eq!(
            *machine.state(),
            QueryState::Failure { message: FALLBACK_MESSAGE.to_string() }
        );
    }

    #[tokio::test]
    async fn refresh_publishes_success_for_known_location() {
        let mut machine = FetchState::new();

        assert!(refresh(&mut machine, &CannedService, "Bengaluru").await);

        match machine.state() {
            QueryState::Success { weather, forecast } => {
                assert_eq!(weather.location, "Bengaluru");
                assert_eq!(format!("{}°C", weather.temperature), "28°C");
                assert_eq!(crate::icon::icon_for(Some(&weather.description)), crate::icon::WeatherIcon::Clear);
                assert_eq!(forecast.len(), 2);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refresh_publishes_service_error_text_verbatim() {
        let mut machine = FetchState::new();

        assert!(refresh(&mut machine, &CannedService, "Atlantis").await);

        assert_eq!(
            *machine.state(),
            QueryState::Failure { message: "City not found".to_string() }
        );
    }

    #[tokio::test]
    async fn consecutive_refreshes_apply_in_commit_order() {
        let mut machine = FetchState::new();

        refresh(&mut machine, &CannedService, "Bengaluru").await;
        refresh(&mut machine, &CannedService, "London").await;

        match machine.state() {
            QueryState::Success { weather, .. } => assert_eq!(weather.location, "London"),
            other => panic!("expected success, got {other:?}"),
        }
    }
}
