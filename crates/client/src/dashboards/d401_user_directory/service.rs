use contracts::shared::search::get_filtered_users;
use contracts::system::users::User;

use crate::shared::format::fit;

/// Users matching `filter`, admins first
pub fn list_users<'a>(users: &'a [User], filter: &str) -> Vec<&'a User> {
    get_filtered_users(users, filter)
}

pub fn render(users: &[&User]) -> String {
    let mut out = format!(
        "{} {} {} {}\n",
        fit("NAME", 28),
        fit("USERNAME", 16),
        fit("ROLE", 16),
        "EMAIL"
    );
    for user in users {
        out.push_str(&format!(
            "{} {} {} {}\n",
            fit(user.name(), 28),
            fit(&user.username, 16),
            fit(user.role.label(), 16),
            user.email
        ));
    }
    out.push_str(&format!("{} user(s)\n", users.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::role::Role;
    use contracts::system::users::UserId;

    #[test]
    fn test_list_and_render() {
        let mut pm = User::new(UserId::new("u1"), "jdoe", Role::Pm);
        pm.display_name = "Jérôme Doe".into();
        let admin = User::new(UserId::new("u2"), "root", Role::Admin);
        let users = vec![pm, admin];

        let listed = list_users(&users, "");
        assert_eq!(listed[0].username, "root");

        let listed = list_users(&users, "jerome");
        assert_eq!(listed.len(), 1);

        let text = render(&listed);
        assert!(text.contains("Project Manager"));
        assert!(text.ends_with("1 user(s)\n"));
    }
}
