use crate::shared::config::page_sizes;
use crate::shared::list_view::{create_list_state, LayoutMode, ListViewController};
use contracts::domain::a003_product::Product;
use leptos::prelude::*;

pub fn page_size(layout: LayoutMode) -> usize {
    let sizes = page_sizes();
    layout.page_size(sizes.products_table, sizes.products_grid)
}

pub fn create_state() -> RwSignal<ListViewController<Product>> {
    create_list_state(page_size(LayoutMode::Table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_page_sizes() {
        assert_eq!(page_size(LayoutMode::Table), 10);
        assert_eq!(page_size(LayoutMode::Grid), 8);
    }
}
