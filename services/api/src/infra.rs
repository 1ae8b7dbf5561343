use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use studio_viability::assessment::{AssessmentEngine, AssessmentService};
use studio_viability::config::BookingConfig;
use studio_viability::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Assessment service over the standard table, refusing to start on an invalid table.
pub(crate) fn assessment_service(booking: &BookingConfig) -> Result<AssessmentService, AppError> {
    let engine = AssessmentEngine::standard();
    engine.table().validate()?;
    Ok(AssessmentService::new(engine, booking.url.clone()))
}

/// Parse `QUESTION=OPTION` from the command line.
pub(crate) fn parse_selection(raw: &str) -> Result<(String, String), String> {
    let (question, option) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=OPTION, got '{raw}'"))?;
    let (question, option) = (question.trim(), option.trim());
    if question.is_empty() || option.is_empty() {
        return Err(format!("expected QUESTION=OPTION, got '{raw}'"));
    }
    Ok((question.to_string(), option.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_question_option_pairs() {
        assert_eq!(
            parse_selection(" floor_type = slab "),
            Ok(("floor_type".to_string(), "slab".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_selection("floor_type").is_err());
        assert!(parse_selection("=slab").is_err());
        assert!(parse_selection("floor_type=").is_err());
    }

    #[test]
    fn service_uses_configured_booking_url() {
        let booking = BookingConfig {
            url: "https://example.com/call".to_string(),
        };
        let service = assessment_service(&booking).expect("standard table is valid");
        assert_eq!(service.booking_url(), "https://example.com/call");
    }
}
