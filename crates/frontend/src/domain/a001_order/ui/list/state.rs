use contracts::domain::a001_order::{OrderListQuery, OrderListResponse};
use leptos::prelude::*;

/// Значения фильтров на момент последней загрузки
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderFilters {
    pub status: String,
    pub category: String,
}

#[derive(Clone, Debug)]
pub struct OrdersListState {
    pub filters: OrderFilters,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub is_loaded: bool,
}

impl Default for OrdersListState {
    fn default() -> Self {
        Self {
            filters: OrderFilters::default(),
            page: 1,
            per_page: OrderListQuery::DEFAULT_PER_PAGE,
            total: 0,
            total_pages: 0,
            is_loaded: false,
        }
    }
}

impl OrdersListState {
    /// Snapshot the filter inputs and move to `page`
    pub fn begin_load(&mut self, page: u32, filters: OrderFilters) -> OrderListQuery {
        self.filters = filters;
        self.page = page.max(1);
        OrderListQuery::new(
            self.page,
            self.per_page,
            &self.filters.status,
            &self.filters.category,
        )
    }

    /// A filter change always starts over from the first page
    pub fn begin_filter(&mut self, filters: OrderFilters) -> OrderListQuery {
        self.begin_load(1, filters)
    }

    pub fn apply(&mut self, response: &OrderListResponse) {
        self.total = response.total;
        self.total_pages = response.total_pages;
        self.is_loaded = true;
    }
}

pub fn create_state(per_page: u32) -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState {
        per_page,
        ..OrdersListState::default()
    })
}
