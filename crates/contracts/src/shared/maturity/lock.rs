//! Admin-only options of the matrix editors
//!
//! Once a service has moved past "0%" (or has been deployed), only an admin
//! may set it back. Catalogs are borrowed, the overlay lives in the result.

use crate::enums::level::Level;
use crate::shared::options::CatalogOption;

/// Tooltip of a locked option
pub const LOCKED_TITLE: &str = "Only Admin users can now return back to these values";

/// Catalog option with the computed lock overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectableOption<V: 'static> {
    pub option: &'static CatalogOption<V>,
    pub disabled: bool,
    pub title: &'static str,
}

impl<V: 'static> SelectableOption<V> {
    fn open(option: &'static CatalogOption<V>) -> Self {
        Self {
            option,
            disabled: false,
            title: option.title,
        }
    }

    fn locked(option: &'static CatalogOption<V>) -> Self {
        Self {
            option,
            disabled: true,
            title: LOCKED_TITLE,
        }
    }

    pub fn value(&self) -> &V {
        &self.option.value
    }

    pub fn text(&self) -> &'static str {
        self.option.text
    }
}

fn overlay<V: 'static>(
    options: &'static [CatalogOption<V>],
    locked_below: usize,
) -> Vec<SelectableOption<V>> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if i < locked_below {
                SelectableOption::locked(option)
            } else {
                SelectableOption::open(option)
            }
        })
        .collect()
}

/// Progress or goal options for the current level
///
/// For non-admins, the first two entries ("N/A" and "0%") are locked once
/// `current` reaches the level of the third entry.
pub fn get_progress_options(
    options: &'static [CatalogOption<Level>],
    current: Level,
    is_admin: bool,
) -> Vec<SelectableOption<Level>> {
    let threshold = options.get(2).and_then(|o| o.value);
    let past_threshold = match (current, threshold) {
        (Some(current), Some(threshold)) => current >= threshold,
        _ => false,
    };

    if is_admin || !past_threshold {
        return overlay(options, 0);
    }
    overlay(options, 2)
}

/// Deployment options for the current state
///
/// For non-admins, "not deployed" is locked once the service is deployed.
pub fn get_deployed_options(
    options: &'static [CatalogOption<bool>],
    deployed: bool,
    is_admin: bool,
) -> Vec<SelectableOption<bool>> {
    if is_admin || !deployed {
        return overlay(options, 0);
    }
    overlay(options, 1)
}
