//! Grammar of the project search box
//!
//! The whole filter string is one of:
//! * a keyword, matched exactly and case-sensitively: `started`, `no goal`,
//!   `not started`;
//! * a percentage `NN%`, compared to the floor of the project progress;
//! * anything else, used as plain text.
//!
//! Plain text matching applies to every query, the predicate is OR-ed on top.

use crate::domain::a001_project::aggregate::Project;
use crate::shared::maturity::progress::calculate_progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Some progress recorded, with or without goal
    Started,
    /// Progress recorded but no goal anywhere
    NoGoal,
    /// Neither goal nor progress anywhere
    NotStarted,
}

impl Keyword {
    pub fn code(&self) -> &'static str {
        match self {
            Keyword::Started => "started",
            Keyword::NoGoal => "no goal",
            Keyword::NotStarted => "not started",
        }
    }

    pub fn all() -> Vec<Keyword> {
        vec![Keyword::Started, Keyword::NoGoal, Keyword::NotStarted]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Keyword::all().into_iter().find(|k| k.code() == code)
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Keyword::Started => {
                calculate_progress(project).floor() >= 0.0 || project.has_progress()
            }
            Keyword::NoGoal => !project.has_goal() && project.has_progress(),
            Keyword::NotStarted => !project.has_goal() && !project.has_progress(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPredicate {
    /// `NN%`: at least `NN` percent complete
    Percentage(i64),
    Keyword(Keyword),
    /// No predicate beyond text matching; also used for `xx%` with a
    /// non-numeric prefix
    FreeText,
}

impl QueryPredicate {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            QueryPredicate::Percentage(min) => {
                // NaN compares false, so projects without goal never match
                calculate_progress(project).floor() >= *min as f64
            }
            QueryPredicate::Keyword(keyword) => keyword.matches(project),
            QueryPredicate::FreeText => false,
        }
    }
}

/// Parsed search box content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    pub text: String,
    pub predicate: QueryPredicate,
}

impl ProjectQuery {
    pub fn parse(filter: &str) -> Self {
        let predicate = if let Some(keyword) = Keyword::from_code(filter) {
            QueryPredicate::Keyword(keyword)
        } else if let Some(number) = filter.strip_suffix('%') {
            number
                .trim()
                .parse::<i64>()
                .map(QueryPredicate::Percentage)
                .unwrap_or(QueryPredicate::FreeText)
        } else {
            QueryPredicate::FreeText
        };

        Self {
            text: filter.to_string(),
            predicate,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_project::aggregate::{MatrixEntry, ProjectId};
    use crate::domain::a003_functional_service::aggregate::ServiceId;

    fn project(progress: Option<u32>, goal: Option<u32>) -> Project {
        let mut p = Project::new(ProjectId::new("p"), "P");
        p.matrix = vec![MatrixEntry::with_levels(ServiceId::new("s"), progress, goal)];
        p
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            ProjectQuery::parse("started").predicate,
            QueryPredicate::Keyword(Keyword::Started)
        );
        assert_eq!(
            ProjectQuery::parse("not started").predicate,
            QueryPredicate::Keyword(Keyword::NotStarted)
        );
        assert_eq!(ProjectQuery::parse("Started").predicate, QueryPredicate::FreeText);
        assert_eq!(ProjectQuery::parse("50%").predicate, QueryPredicate::Percentage(50));
        assert_eq!(ProjectQuery::parse("0%").predicate, QueryPredicate::Percentage(0));
        assert_eq!(ProjectQuery::parse("abc%").predicate, QueryPredicate::FreeText);
        assert_eq!(ProjectQuery::parse("50.5%").predicate, QueryPredicate::FreeText);
        assert_eq!(ProjectQuery::parse("%").predicate, QueryPredicate::FreeText);
        assert_eq!(ProjectQuery::parse("Rennes").predicate, QueryPredicate::FreeText);
    }

    #[test]
    fn test_keywords() {
        let goal_and_progress = project(Some(1), Some(2));
        let progress_only = project(Some(0), None);
        let goal_only = project(None, Some(2));
        let nothing = project(None, None);

        assert!(Keyword::Started.matches(&goal_and_progress));
        assert!(Keyword::Started.matches(&progress_only));
        // a goal alone gives a defined 0% progress
        assert!(Keyword::Started.matches(&goal_only));
        assert!(!Keyword::Started.matches(&nothing));

        assert!(Keyword::NoGoal.matches(&progress_only));
        assert!(!Keyword::NoGoal.matches(&goal_and_progress));
        assert!(!Keyword::NoGoal.matches(&nothing));

        assert!(Keyword::NotStarted.matches(&nothing));
        assert!(!Keyword::NotStarted.matches(&progress_only));
        assert!(!Keyword::NotStarted.matches(&goal_only));
    }

    #[test]
    fn test_percentage() {
        let half = project(Some(1), Some(2));
        assert!(QueryPredicate::Percentage(50).matches(&half));
        assert!(!QueryPredicate::Percentage(51).matches(&half));
        assert!(QueryPredicate::Percentage(0).matches(&half));
        assert!(!QueryPredicate::Percentage(0).matches(&project(Some(3), None)));
    }
}
