use std::collections::BTreeMap;

use crate::domain::a003_functional_service::aggregate::FunctionalService;
use crate::domain::a004_usage_indicator::aggregate::UsageIndicator;
use crate::shared::options::{status_by_text, CatalogOption};

type Status = Option<&'static CatalogOption<u8>>;

/// Keeps `current` when it outranks `new` or when `new` is unresolved,
/// otherwise takes `new`.
fn merge(current: Status, new: Status) -> Status {
    match (current, new) {
        (Some(c), Some(n)) if c.value > n.value => Some(c),
        (Some(c), None) => Some(c),
        _ => new,
    }
}

/// Status to surface for a functional service
///
/// Folds the statuses of every indicator reporting on one of the service's
/// technical services. Unknown status texts never override a resolved one.
/// `None` when `services` is undefined or empty, or nothing resolves.
pub fn get_service_status(
    service: &FunctionalService,
    indicators: &[UsageIndicator],
) -> Option<&'static CatalogOption<u8>> {
    let technical = service.services.as_ref()?;

    technical
        .iter()
        .flat_map(|name| indicators.iter().filter(move |i| &i.service == name))
        .map(|indicator| status_by_text(&indicator.status))
        .fold(None, merge)
}

/// Indicators matching each technical service of `service`, keyed by name
pub fn indicators_by_service<'a>(
    service: &FunctionalService,
    indicators: &'a [UsageIndicator],
) -> BTreeMap<&'a str, Vec<&'a UsageIndicator>> {
    let mut grouped: BTreeMap<&'a str, Vec<&'a UsageIndicator>> = BTreeMap::new();
    for indicator in indicators {
        if service.technical_services().contains(&indicator.service) {
            grouped
                .entry(indicator.service.as_str())
                .or_default()
                .push(indicator);
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_functional_service::aggregate::ServiceId;

    fn ci_service() -> FunctionalService {
        FunctionalService {
            services: Some(vec!["jenkins".into(), "gitlabci".into(), "tfs".into()]),
            ..FunctionalService::new(ServiceId::new("ci"), "Continuous Integration", "Build")
        }
    }

    fn indicator(service: &str, status: &str) -> UsageIndicator {
        UsageIndicator::new("GROUP-A", service, status)
    }

    fn status_text(service: &FunctionalService, indicators: &[UsageIndicator]) -> Option<&'static str> {
        get_service_status(service, indicators).map(|o| o.text)
    }

    #[test]
    fn test_single_indicator() {
        let indicators = vec![indicator("jenkins", "Undetermined")];
        assert_eq!(status_text(&ci_service(), &indicators), Some("Undetermined"));
    }

    #[test]
    fn test_second_indicator_replaces_first() {
        let indicators = vec![
            indicator("jenkins", "Undetermined"),
            indicator("gitlabci", "Inactive"),
        ];
        assert_eq!(status_text(&ci_service(), &indicators), Some("Inactive"));
    }

    #[test]
    fn test_most_active_status_wins_in_any_order() {
        let forward = vec![
            indicator("jenkins", "Empty"),
            indicator("gitlabci", "Active"),
            indicator("tfs", "Inactive"),
        ];
        assert_eq!(status_text(&ci_service(), &forward), Some("Active"));

        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(status_text(&ci_service(), &backward), Some("Active"));
    }

    #[test]
    fn test_unrelated_indicators_are_ignored() {
        let indicators = vec![
            indicator("jenkins", "Empty"),
            indicator("sonar", "Active"),
        ];
        assert_eq!(status_text(&ci_service(), &indicators), Some("Empty"));
    }

    #[test]
    fn test_unknown_status_text() {
        let alone = vec![indicator("jenkins", "Broken")];
        assert_eq!(status_text(&ci_service(), &alone), None);

        let mixed = vec![
            indicator("jenkins", "Inactive"),
            indicator("gitlabci", "Broken"),
        ];
        assert_eq!(status_text(&ci_service(), &mixed), Some("Inactive"));

        // an unresolved status before a resolved one does not block it
        let unresolved_first = vec![
            indicator("jenkins", "Broken"),
            indicator("gitlabci", "Empty"),
        ];
        assert_eq!(status_text(&ci_service(), &unresolved_first), Some("Empty"));
    }

    #[test]
    fn test_undefined_or_empty_services() {
        let indicators = vec![indicator("jenkins", "Active")];

        let undefined = FunctionalService::new(ServiceId::new("x"), "X", "P");
        assert_eq!(status_text(&undefined, &indicators), None);

        let empty = FunctionalService {
            services: Some(vec![]),
            ..undefined
        };
        assert_eq!(status_text(&empty, &indicators), None);

        assert_eq!(status_text(&ci_service(), &[]), None);
    }

    #[test]
    fn test_indicators_by_service() {
        let indicators = vec![
            indicator("jenkins", "Active"),
            indicator("sonar", "Active"),
            indicator("jenkins", "Empty"),
        ];
        let grouped = indicators_by_service(&ci_service(), &indicators);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped["jenkins"].len(), 2);
    }
}
