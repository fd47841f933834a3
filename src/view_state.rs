use crate::domain::{
    chart::ChartFilter,
    listing::{Asset, AssetId},
    pagination::Paginator,
};

/// State owned by the listing view: loaded assets, current page, the asset
/// shown in the detail modal and the chart range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingViewState {
    assets: Vec<Asset>,
    paginator: Paginator,
    selected: Option<Asset>,
    filter: ChartFilter,
}

impl ListingViewState {
    pub fn with_assets(assets: Vec<Asset>) -> Self {
        let mut state = Self::default();
        state.replace_assets(assets);
        state
    }

    /// Swap in a freshly loaded collection.
    ///
    /// The page is clamped back into range. The selection is kept as-is,
    /// even if the asset is no longer part of the collection.
    pub fn replace_assets(&mut self, assets: Vec<Asset>) {
        self.assets = assets;
        self.paginator.clamp(self.assets.len());
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.assets.len())
    }

    pub fn page_items(&self) -> &[Asset] {
        self.paginator.slice(&self.assets)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.paginator.go_to_page(page, self.assets.len())
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next(self.assets.len())
    }

    pub fn prev_page(&mut self) -> bool {
        self.paginator.prev(self.assets.len())
    }

    pub fn has_prev(&self) -> bool {
        self.paginator.has_prev()
    }

    pub fn has_next(&self) -> bool {
        self.paginator.has_next(self.assets.len())
    }

    /// `Page 2 of 3`
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page(), self.total_pages())
    }

    /// Open the modal for a loaded asset. Unknown ids are ignored.
    pub fn select(&mut self, id: AssetId) -> bool {
        match self.assets.iter().find(|asset| asset.id == id) {
            Some(asset) => {
                self.selected = Some(asset.clone());
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&Asset> {
        self.selected.as_ref()
    }

    pub fn close_modal(&mut self) {
        self.selected = None;
    }

    pub fn filter(&self) -> ChartFilter {
        self.filter
    }

    /// Does not touch the selection.
    pub fn set_filter(&mut self, filter: ChartFilter) {
        self.filter = filter;
    }
}
