pub mod maturity;
pub mod options;
pub mod search;
pub mod text;
