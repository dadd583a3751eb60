use crate::domain::a001_project::aggregate::{MatrixEntry, Project};

/// Contribution of one entry with a goal, in percent, capped at 100
///
/// A zero goal cannot be divided by: the entry contributes 0 but still
/// counts as one goal in the mean.
fn contribution(entry: &MatrixEntry, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    let progress = f64::from(entry.progress.unwrap_or(0));
    (progress * 100.0 / f64::from(goal)).min(100.0)
}

/// Overall completion of a project, in percent
///
/// Mean of the contributions of entries having a goal. `NaN` when no entry
/// has a goal, so callers must check `is_nan()` before formatting.
pub fn calculate_progress(project: &Project) -> f64 {
    let (sum, count) = project
        .matrix
        .iter()
        .filter_map(|entry| entry.goal.map(|goal| contribution(entry, goal)))
        .fold((0.0, 0usize), |(sum, count), c| (sum + c, count + 1));

    if count == 0 {
        return f64::NAN;
    }
    sum / count as f64
}

/// Progress as shown on a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSummary {
    /// No goal and no progress anywhere: "-"
    NotStarted,
    /// Progress recorded but no goal set: "N/A"
    NoGoal,
    /// Floor of the calculated progress
    Percent(u32),
}

impl ProgressSummary {
    pub fn of(project: &Project) -> Self {
        if !project.has_goal() {
            return if project.has_progress() {
                ProgressSummary::NoGoal
            } else {
                ProgressSummary::NotStarted
            };
        }
        // has_goal guarantees a finite mean in [0, 100]
        ProgressSummary::Percent(calculate_progress(project).floor() as u32)
    }

    pub fn label(&self) -> String {
        match self {
            ProgressSummary::NotStarted => "-".to_string(),
            ProgressSummary::NoGoal => "N/A".to_string(),
            ProgressSummary::Percent(p) => format!("{}%", p),
        }
    }
}

impl std::fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_project::aggregate::ProjectId;
    use crate::domain::a003_functional_service::aggregate::ServiceId;
    use crate::enums::level::Level;

    fn project_with(levels: &[(Level, Level)]) -> Project {
        let mut project = Project::new(ProjectId::new("p"), "P");
        project.matrix = levels
            .iter()
            .enumerate()
            .map(|(i, (progress, goal))| {
                MatrixEntry::with_levels(ServiceId::new(&format!("s{}", i)), *progress, *goal)
            })
            .collect();
        project
    }

    #[test]
    fn test_empty_matrix_is_nan() {
        assert!(calculate_progress(&project_with(&[])).is_nan());
    }

    #[test]
    fn test_entries_without_goal_are_ignored() {
        let project = project_with(&[(Some(5), None), (Some(1), Some(2))]);
        assert_eq!(calculate_progress(&project), 50.0);

        let only_progress = project_with(&[(Some(5), None)]);
        assert!(calculate_progress(&only_progress).is_nan());
    }

    #[test]
    fn test_mean_of_capped_contributions() {
        let project = project_with(&[(Some(3), Some(5)), (Some(1), Some(2))]);
        assert!((calculate_progress(&project) - 55.0).abs() < 1e-9);

        let overshoot = project_with(&[(Some(5), Some(2))]);
        assert_eq!(calculate_progress(&overshoot), 100.0);
    }

    #[test]
    fn test_unset_progress_counts_as_zero() {
        let project = project_with(&[(None, Some(4)), (Some(4), Some(4))]);
        assert_eq!(calculate_progress(&project), 50.0);
    }

    #[test]
    fn test_zero_goal_counts_in_denominator_only() {
        let project = project_with(&[(Some(3), Some(0)), (Some(2), Some(2))]);
        assert_eq!(calculate_progress(&project), 50.0);

        let only_zero = project_with(&[(Some(3), Some(0))]);
        assert_eq!(calculate_progress(&only_zero), 0.0);
    }

    #[test]
    fn test_summary() {
        assert_eq!(ProgressSummary::of(&project_with(&[])).label(), "-");
        assert_eq!(ProgressSummary::of(&project_with(&[(Some(0), None)])).label(), "N/A");

        let project = project_with(&[(Some(3), Some(5)), (Some(1), Some(2)), (Some(1), Some(3))]);
        // (60 + 50 + 33.33) / 3 = 47.77
        assert_eq!(ProgressSummary::of(&project), ProgressSummary::Percent(47));
        assert_eq!(ProgressSummary::of(&project).to_string(), "47%");
    }
}
