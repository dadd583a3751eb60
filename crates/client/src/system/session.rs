use contracts::domain::a001_project::aggregate::Project;
use contracts::system::users::{can_modify, modifiable_projects_for_user, projects_for_user, User};

/// Acting user of a command
///
/// Without a configured username the tool runs with admin visibility, as
/// an operator working on a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    pub user: Option<&'a User>,
}

impl<'a> Session<'a> {
    /// Look up `username` among `users`; empty means operator session
    pub fn open(users: &'a [User], username: &str) -> anyhow::Result<Self> {
        let username = username.trim();
        if username.is_empty() {
            tracing::info!("No session.username configured, using operator view");
            return Ok(Self { user: None });
        }

        let user = users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .ok_or_else(|| anyhow::anyhow!("Unknown user '{}'", username))?;
        tracing::info!("Session user: {} ({})", user.username, user.role.label());
        Ok(Self { user: Some(user) })
    }

    pub fn is_admin(&self) -> bool {
        self.user.map(User::is_admin).unwrap_or(true)
    }

    pub fn visible<'p>(&self, projects: &'p [Project]) -> Vec<&'p Project> {
        match self.user {
            Some(user) => projects_for_user(user, projects),
            None => projects.iter().collect(),
        }
    }

    pub fn modifiable<'p>(&self, projects: &'p [Project]) -> Vec<&'p Project> {
        match self.user {
            Some(user) => modifiable_projects_for_user(user, projects),
            None => projects.iter().collect(),
        }
    }

    pub fn can_modify(&self, project: &Project) -> bool {
        self.user.map(|u| can_modify(u, project)).unwrap_or(true)
    }

    pub fn describe(&self) -> String {
        match self.user {
            Some(user) => format!("{} ({})", user.name(), user.role.label()),
            None => "operator".to_string(),
        }
    }
}
