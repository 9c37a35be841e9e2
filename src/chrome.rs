use chrono::Datelike;

use crate::dom::{Document, Region};

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Write `year` into the footer slot, if the page has one.
pub fn init_footer_year(doc: &mut dyn Document, year: i32) -> bool {
    doc.set_text(Region::FooterYear, &year.to_string())
}
