//! Free-text search over projects, users and reference data

pub mod filter;
pub mod query;

pub use filter::{filter_list, get_filtered_projects, get_filtered_users, sort_users, Searchable};
pub use query::{Keyword, ProjectQuery, QueryPredicate};
