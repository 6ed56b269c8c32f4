//! Photo-grid pagination for occurrence reports
//!
//! The PDF report lays photos out on a fixed grid. The first page shares
//! space with the occurrence header, so it holds fewer rows than the
//! continuation pages. [`paginate_photos`] turns a photo count into the
//! exact page-by-page slices the renderer will draw.

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;

/// Photo grid geometry of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Photos per row
    pub columns: usize,
    /// Rows on the first page, below the header
    pub rows_first_page: usize,
    /// Rows on every continuation page
    pub rows_full_page: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 2,
            rows_first_page: 2,
            rows_full_page: 3,
        }
    }
}

impl GridLayout {
    /// Photo slots available on the first page
    pub fn first_page_slots(&self) -> usize {
        self.columns * self.rows_first_page
    }

    /// Photo slots available on a continuation page
    pub fn full_page_slots(&self) -> usize {
        self.columns * self.rows_full_page
    }
}

impl From<&ReportConfig> for GridLayout {
    fn from(config: &ReportConfig) -> Self {
        Self {
            columns: config.columns,
            rows_first_page: config.rows_first_page,
            rows_full_page: config.rows_full_page,
        }
    }
}

/// The photo range drawn on one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSlice {
    /// Page number, starting at 1
    pub page: usize,
    /// Index of the first photo on the page
    pub start: usize,
    /// One past the index of the last photo on the page
    pub end: usize,
}

impl PageSlice {
    /// Number of photos on the page
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the page holds no photos
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Full pagination plan for one occurrence's photo set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationPlan {
    /// Pages in render order
    pub pages: Vec<PageSlice>,
    /// Total photos placed
    pub total_photos: usize,
}

impl PaginationPlan {
    /// Number of pages in the report
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page number a given photo lands on
    pub fn page_for_photo(&self, index: usize) -> Option<usize> {
        self.pages
            .iter()
            .find(|p| p.start <= index && index < p.end)
            .map(|p| p.page)
    }
}

/// Lay out `photo_count` photos across report pages.
///
/// The first page always exists, even with zero photos, because it carries
/// the occurrence header. Remaining photos fill continuation pages in order,
/// each slice half-open so consecutive pages tile the photo list exactly.
pub fn paginate_photos(photo_count: usize, layout: &GridLayout) -> PaginationPlan {
    let first_end = layout.first_page_slots().min(photo_count);
    let mut pages = vec![PageSlice {
        page: 1,
        start: 0,
        end: first_end,
    }];

    // A continuation page must advance by at least one photo.
    let step = layout.full_page_slots().max(1);
    let mut start = first_end;
    while start < photo_count {
        let end = (start + step).min(photo_count);
        pages.push(PageSlice {
            page: pages.len() + 1,
            start,
            end,
        });
        start = end;
    }

    PaginationPlan {
        pages,
        total_photos: photo_count,
    }
}
