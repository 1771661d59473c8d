use crate::domain::entities::dataset::{Dataset, Field, Record};
use crate::domain::entities::view::{Category, FilterState, PageState, SortState, SummaryScope};
use crate::usecase::view::filter::filter_records;
use crate::usecase::view::options::{derive_filter_options, FilterOptions};
use crate::usecase::view::paginate::{clamp_page, paginate, PageWindow};
use crate::usecase::view::sort::{sort_view, toggle_sort};
use crate::usecase::view::summary::{summarize, Summary};

/// The rows on the current page plus the pagination indicator state.
#[derive(Debug, Clone)]
pub struct PageSlice<'a> {
    pub rows: Vec<&'a Record>,
    pub window: PageWindow,
}

/// Owns the dataset and all view state. Every mutation recomputes the
/// filtered view from scratch; nothing here touches the display surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewController {
    dataset: Dataset,
    options: FilterOptions,
    filter: FilterState,
    sort: Option<SortState>,
    page: PageState,
    view: Vec<usize>,
}

impl ViewController {
    pub fn new(dataset: Dataset, page_size: usize) -> Self {
        let options = derive_filter_options(&dataset);
        let view = (0..dataset.len()).collect();
        Self {
            dataset,
            options,
            filter: FilterState::default(),
            sort: None,
            page: PageState::first(page_size),
            view,
        }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Record> + '_ {
        self.view.iter().map(|&idx| &self.dataset[idx])
    }

    pub fn set_filter(&mut self, category: Category, value: impl Into<String>) {
        self.filter.select(category, value.into());
        self.refilter();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search = text.into();
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.refilter();
    }

    /// Header click. Keeps the current page number.
    pub fn toggle_column(&mut self, column: Field) {
        let next = toggle_sort(self.sort, column);
        tracing::debug!(column = column.key(), direction = next.direction.as_attr(), "sort");
        self.sort = Some(next);
        sort_view(&self.dataset, &mut self.view, &next);
        self.page.current = clamp_page(self.page.current, self.view.len(), self.page.size);
    }

    pub fn next_page(&mut self) -> bool {
        let window = self.window();
        if !window.has_next {
            return false;
        }
        self.page.current = window.page + 1;
        tracing::debug!(page = self.page.current, "next page");
        true
    }

    pub fn prev_page(&mut self) -> bool {
        let window = self.window();
        if !window.has_prev {
            return false;
        }
        self.page.current = window.page - 1;
        tracing::debug!(page = self.page.current, "previous page");
        true
    }

    pub fn window(&self) -> PageWindow {
        paginate(self.view.len(), self.page)
    }

    pub fn current_page(&self) -> PageSlice<'_> {
        let window = self.window();
        let rows = self.view[window.range.clone()]
            .iter()
            .map(|&idx| &self.dataset[idx])
            .collect();
        PageSlice { rows, window }
    }

    pub fn summary(&self, scope: SummaryScope) -> Summary {
        match scope {
            SummaryScope::Dataset => summarize(self.dataset.iter()),
            SummaryScope::Filtered => summarize(self.filtered()),
        }
    }

    fn refilter(&mut self) {
        self.view = filter_records(&self.dataset, &self.filter);
        if let Some(sort) = self.sort {
            sort_view(&self.dataset, &mut self.view, &sort);
        }
        self.page.current = 1;
        tracing::debug!(matches = self.view.len(), "filters applied");
    }
}
