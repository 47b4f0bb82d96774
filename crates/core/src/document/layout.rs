//! Page geometry and pagination.
//!
//! All distances are whole millimetres measured from the top edge of the
//! page. The renderer converts them to PDF coordinates.

/// Fixed geometry of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Page width.
    pub page_width_mm: u32,
    /// Page height.
    pub page_height_mm: u32,
    /// Space above the header.
    pub top_margin_mm: u32,
    /// Height of the per-page header band.
    pub header_height_mm: u32,
    /// Height of the title block on the first page.
    pub title_height_mm: u32,
    /// Space kept free below the last body line.
    pub bottom_margin_mm: u32,
    /// Distance between body lines.
    pub line_height_mm: u32,
    /// Footer baseline, measured from the bottom edge.
    pub footer_offset_mm: u32,
    /// Left margin for the title block and body.
    pub left_margin_mm: u32,
}

impl PageLayout {
    /// A4 portrait.
    pub const A4: Self = Self {
        page_width_mm: 210,
        page_height_mm: 297,
        top_margin_mm: 10,
        header_height_mm: 20,
        title_height_mm: 30,
        bottom_margin_mm: 20,
        line_height_mm: 6,
        footer_offset_mm: 15,
        left_margin_mm: 10,
    };

    /// Where the header band ends.
    #[must_use]
    pub const fn header_bottom(&self) -> u32 {
        self.top_margin_mm + self.header_height_mm
    }

    /// Where body text starts on a page.
    #[must_use]
    pub const fn body_top(&self, has_title: bool) -> u32 {
        if has_title {
            self.header_bottom() + self.title_height_mm
        } else {
            self.header_bottom()
        }
    }

    /// How many body lines fit on a page. Never zero.
    #[must_use]
    pub const fn capacity(&self, has_title: bool) -> usize {
        let limit = self.page_height_mm.saturating_sub(self.bottom_margin_mm);
        let room = limit.saturating_sub(self.body_top(has_title));
        let lines = if self.line_height_mm == 0 {
            0
        } else {
            room / self.line_height_mm
        };
        if lines == 0 { 1 } else { lines as usize }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::A4
    }
}

/// One physical page of body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// 1-based page number.
    pub number: usize,
    /// Whether the title block is drawn on this page.
    pub has_title: bool,
    /// Body lines in reading order.
    pub lines: &'a [String],
}

/// Splits wrapped lines across pages. The first page carries the title
/// block. At least one page is always returned.
#[must_use]
pub fn paginate<'a>(lines: &'a [String], layout: &PageLayout) -> Vec<Page<'a>> {
    let first = layout.capacity(true).min(lines.len());
    let mut pages = vec![Page {
        number: 1,
        has_title: true,
        lines: &lines[..first],
    }];

    for chunk in lines[first..].chunks(layout.capacity(false)) {
        pages.push(Page {
            number: pages.len() + 1,
            has_title: false,
            lines: chunk,
        });
    }
    pages
}
