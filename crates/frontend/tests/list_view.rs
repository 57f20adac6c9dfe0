use contracts::domain::a001_category::Category;
use contracts::domain::a003_product::Product;
use contracts::enums::ProductStatus;
use frontend::domain::a003_product::list::{set_price_range, DIM_CATEGORY, DIM_STATUS};
use frontend::shared::list_view::{
    compute_view, reduce, FilterSpec, HeaderCheckState, ListRow, ListViewController,
    PageMarker, SelectionAction, SelectionSet, SortSpec,
};
use pretty_assertions::assert_eq;

fn product(n: usize, category: &str, price: f64, stock: i64) -> Product {
    Product {
        id: format!("{}", n),
        name: Some(format!("Product {:02}", n)),
        price: Some(price),
        stock_quantity: Some(stock),
        reorder_level: Some(10),
        category: Some(Category {
            id: category.to_lowercase(),
            name: Some(category.to_string()),
            description: None,
        }),
        ..Default::default()
    }
}

/// 25 products, ids "1".."25"; every third is low on stock
fn catalog() -> Vec<Product> {
    (1..=25)
        .map(|n| {
            let category = if n % 2 == 0 { "Office" } else { "Electronics" };
            let stock = if n % 3 == 0 { 5 } else { 50 };
            product(n, category, n as f64 * 10.0, stock)
        })
        .collect()
}

#[test]
fn low_stock_under_100_keeps_only_matching_row() {
    let rows = vec![product(1, "Office", 50.0, 5), product(2, "Office", 500.0, 50)];
    let mut filter = FilterSpec::new().with_values(DIM_STATUS, [ProductStatus::LowStock.code()]);
    set_price_range(&mut filter, 0.0, 100.0);

    let view = compute_view(&rows, &SortSpec::default(), &filter, 1, 10);
    let ids: Vec<&str> = view.visible_rows.iter().map(|p| p.row_id()).collect();
    assert_eq!(ids, vec!["1"]);
    assert_eq!(view.total_pages, 1);
}

#[test]
fn pages_cover_the_filtered_collection_in_order() {
    let mut controller = ListViewController::new(4).with_rows(catalog());
    controller.update_filter(|f| f.toggle_value(DIM_CATEGORY, "Electronics"));
    controller.set_sort(SortSpec::desc("price"));

    let mut seen = Vec::new();
    for page in 1..=controller.total_pages() {
        assert!(controller.go_to_page(page));
        seen.extend(controller.visible_ids());
    }
    let expected: Vec<String> = (1..=25).rev().filter(|n| n % 2 == 1).map(|n| n.to_string()).collect();
    assert_eq!(seen, expected);
    assert!(!controller.go_to_page(controller.total_pages() + 1));
}

#[test]
fn sort_or_filter_change_returns_to_first_page() {
    let mut controller = ListViewController::new(10).with_rows(catalog());
    assert!(controller.go_to_page(3));
    controller.toggle_sort("name");
    assert_eq!(controller.page_index(), 1);

    assert!(controller.go_to_page(3));
    controller.set_search("product 2");
    assert_eq!(controller.page_index(), 1);
    assert_eq!(controller.filtered_count(), 6);
}

#[test]
fn header_checkbox_on_second_page() {
    let mut controller = ListViewController::new(10).with_rows(catalog());
    assert!(controller.go_to_page(2));
    let page_ids = controller.visible_ids();
    assert_eq!(page_ids.first().map(String::as_str), Some("11"));
    assert_eq!(page_ids.last().map(String::as_str), Some("20"));

    controller.toggle_all_on_page();
    assert_eq!(controller.header_state(), HeaderCheckState::Checked);
    assert_eq!(controller.selection().len(), 10);

    controller.toggle_all_on_page();
    assert!(controller.selection().is_empty());
    assert_eq!(controller.header_state(), HeaderCheckState::Unchecked);
}

#[test]
fn selection_survives_paging_and_reports_partial_state() {
    let mut controller = ListViewController::new(10).with_rows(catalog());
    controller.toggle_selected("3");
    assert!(controller.go_to_page(2));
    assert_eq!(controller.header_state(), HeaderCheckState::Unchecked);
    assert!(controller.go_to_page(1));
    assert_eq!(controller.header_state(), HeaderCheckState::Indeterminate);

    let selected: Vec<String> = controller.selected_rows().into_iter().map(|p| p.id).collect();
    assert_eq!(selected, vec!["3"]);
}

#[test]
fn selection_reducer() {
    let page: Vec<String> = (11..=20).map(|n| n.to_string()).collect();
    let selection = reduce(SelectionSet::new(), SelectionAction::Toggle("12".into()));
    let selection = reduce(selection, SelectionAction::ToggleAllOnPage(page.clone()));
    assert!(selection.all_selected(&page));
    let selection = reduce(selection, SelectionAction::Clear);
    assert!(selection.is_empty());
}

#[test]
fn first_page_window_of_ten() {
    let controller = ListViewController::new(10).with_rows(
        (1..=100).map(|n| product(n, "Office", 1.0, 50)).collect::<Vec<_>>(),
    );
    let window = controller.view().page_window;
    assert_eq!(
        window,
        vec![
            PageMarker::Page(1),
            PageMarker::Page(2),
            PageMarker::Ellipsis,
            PageMarker::Page(10),
        ]
    );
}
