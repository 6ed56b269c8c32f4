//! Occurrence report assembly
//!
//! Turns closed occurrences into the structure the PDF renderer consumes:
//! a [`ReportOutline`] with header lines plus a [`PaginationPlan`] that
//! distributes photos across the first page and continuation pages.

pub mod outline;
pub mod pagination;

pub use outline::ReportOutline;
pub use pagination::{GridLayout, PageSlice, PaginationPlan, paginate_photos};
