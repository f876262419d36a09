use crate::LayoutError;
use crate::area::{FlowArea, PlacedUnit};
use crate::config::LayoutConfig;
use crate::interface::{LayoutContext, LayoutEnvironment, LayoutStatus};
use crate::tree::FoTree;
use folio_types::BreakKind;

/// A finished page: the units each of its areas accepted, in area order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOutput {
    pub number: usize,
    pub areas: Vec<Vec<PlacedUnit>>,
    /// Inserted only to satisfy an even/odd break.
    pub is_blank: bool,
}

impl PageOutput {
    fn blank(number: usize) -> Self {
        Self {
            number,
            areas: Vec::new(),
            is_blank: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.areas.iter().all(|a| a.is_empty())
    }

    pub fn unit_count(&self) -> usize {
        self.areas.iter().map(Vec::len).sum()
    }

    /// Glyphs of each area.
    pub fn area_texts(&self) -> Vec<String> {
        self.areas
            .iter()
            .map(|units| units.iter().filter_map(|p| p.unit.glyph).collect())
            .collect()
    }

    /// Glyphs of the whole page, areas concatenated.
    pub fn text(&self) -> String {
        self.area_texts().concat()
    }
}

/// Drives a formatting tree through a sequence of pages.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Returns a lazy iterator over the pages of `tree`, continuing from the
    /// tree's current markers. Iteration ends after the first error.
    pub fn paginate<'a>(&'a self, tree: &'a mut FoTree) -> Paginator<'a> {
        Paginator {
            config: &self.config,
            tree,
            page_number: self.config.first_page_number,
            pending_break: None,
            emitted: 0,
            queued: None,
            finished: false,
        }
    }

    pub fn paginate_all(&self, tree: &mut FoTree) -> Result<Vec<PageOutput>, LayoutError> {
        self.paginate(tree).collect()
    }
}

/// How the content of one page ended.
#[derive(Debug, Clone, Copy)]
enum PageEnd {
    Done,
    Overflow,
    Break(BreakKind),
}

pub struct Paginator<'a> {
    config: &'a LayoutConfig,
    tree: &'a mut FoTree,
    /// Number of the next page to emit.
    page_number: usize,
    /// Parity the next content page must satisfy.
    pending_break: Option<BreakKind>,
    emitted: usize,
    /// A content page held back while the blank page before it is returned.
    queued: Option<PageOutput>,
    finished: bool,
}

impl Paginator<'_> {
    fn target_number(&self) -> usize {
        match self.pending_break {
            Some(kind) if !kind.accepts(self.page_number) => self.page_number + 1,
            _ => self.page_number,
        }
    }

    fn layout_page(&mut self, number: usize) -> Result<(Vec<Vec<PlacedUnit>>, PageEnd), LayoutError> {
        let mut areas = Vec::with_capacity(self.config.areas_per_page);

        for area_index in 0..self.config.areas_per_page {
            let mut area = FlowArea::new(self.config.area_extent);
            let status = {
                let env = LayoutEnvironment {
                    page_number: number,
                    area_index,
                };
                let mut ctx = LayoutContext::new(&mut area, env);
                self.tree.layout(&mut ctx)?
            };
            let accepted_nothing = area.is_empty();
            areas.push(area.into_units());

            match status {
                LayoutStatus::Complete => return Ok((areas, PageEnd::Done)),
                LayoutStatus::ForcedBreak(kind) => return Ok((areas, PageEnd::Break(kind))),
                LayoutStatus::AreaExhaustedEmpty if accepted_nothing => {
                    return Err(LayoutError::NoProgress { page: number });
                }
                LayoutStatus::AreaExhaustedEmpty | LayoutStatus::AreaExhaustedPartial => {
                    log::trace!("Area {} of page {} is full", area_index, number);
                }
            }
        }
        Ok((areas, PageEnd::Overflow))
    }

    fn check_limit(&self, pages: usize) -> Result<(), LayoutError> {
        if self.emitted + pages > self.config.max_pages {
            return Err(LayoutError::PageLimitExceeded(self.config.max_pages));
        }
        Ok(())
    }

    fn next_page(&mut self) -> Result<Option<PageOutput>, LayoutError> {
        if let Some(page) = self.queued.take() {
            return Ok(Some(page));
        }

        loop {
            if self.finished {
                return Ok(None);
            }

            let mut number = self.target_number();
            let (areas, end) = self.layout_page(number)?;
            let empty = areas.iter().all(|a| a.is_empty());

            match end {
                PageEnd::Break(kind) if empty => {
                    // Nothing precedes the break on this page; the page is not
                    // emitted and the new break decides the next page's parity.
                    log::debug!("Break ({}) on an empty page {}, page not emitted", kind.as_str(), number);
                    self.pending_break = Some(kind);
                    continue;
                }
                PageEnd::Done if empty && self.emitted > 0 => {
                    self.finished = true;
                    return Ok(None);
                }
                PageEnd::Done if empty => {
                    // No content follows the pending break, so its parity is void.
                    log::debug!("Document has no content, emitting empty page {}", self.page_number);
                    number = self.page_number;
                }
                _ => {}
            }

            let skipped = number > self.page_number;
            let blank = skipped && self.config.emit_blank_pages;
            self.check_limit(if blank { 2 } else { 1 })?;

            let page = PageOutput {
                number,
                areas,
                is_blank: false,
            };
            log::debug!("Page {} finished with {} units", number, page.unit_count());

            if skipped && !blank {
                log::debug!("Page number {} skipped to satisfy a forced break", self.page_number);
            }
            let blank_number = self.page_number;

            self.page_number = number + 1;
            self.pending_break = None;
            match end {
                PageEnd::Done => self.finished = true,
                PageEnd::Break(kind) => self.pending_break = Some(kind),
                PageEnd::Overflow => {}
            }

            if blank {
                log::debug!("Blank page {} inserted to satisfy a forced break", blank_number);
                self.emitted += 2;
                self.queued = Some(page);
                return Ok(Some(PageOutput::blank(blank_number)));
            }
            self.emitted += 1;
            return Ok(Some(page));
        }
    }
}

impl Iterator for Paginator<'_> {
    type Item = Result<PageOutput, LayoutError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished && self.queued.is_none() {
            return None;
        }
        match self.next_page() {
            Ok(page) => page.map(Ok),
            Err(e) => {
                log::warn!("Pagination stopped: {}", e);
                self.finished = true;
                self.queued = None;
                Some(Err(e))
            }
        }
    }
}
