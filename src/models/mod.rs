pub mod project;
pub mod tag;
