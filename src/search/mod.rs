pub mod expansion;
pub mod query;
pub mod results;
