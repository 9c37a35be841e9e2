//! Markup builders for the portfolio section.

pub mod filters;
pub mod portfolio;
