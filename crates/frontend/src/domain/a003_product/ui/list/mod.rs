mod state;

use self::state::{create_state, page_size};
use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a003_product::api::fetch_products;
use crate::domain::a003_product::list::{
    category_options, price_range, set_price_range, status_options, DIM_CATEGORY, DIM_STATUS,
    PRICE_BOUNDS,
};
use crate::shared::components::filter_panel::{FilterOptions, FilterPanel, RangeFilter};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    format_count, format_currency, SortableHeaderCell, TableCellCheckbox, TableCellMoney,
    TableHeaderCheckbox,
};
use crate::shared::components::ui::StatusBadge;
use crate::shared::list_view::{FilterValue, LayoutMode, ListViewController};
use contracts::domain::a001_category::Category;
use contracts::domain::a003_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Inventory table: search, category/status/price filters, sortable columns,
/// pagination and row selection over the fetched product snapshot
#[component]
pub fn ProductsTable() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (layout, set_layout) = signal(LayoutMode::Table);
    let is_filter_expanded = RwSignal::new(false);
    let (catalog, set_catalog) = signal(Vec::<Category>::new());

    spawn_local(async move {
        match fetch_categories().await {
            Ok(items) => set_catalog.set(items),
            Err(e) => log::warn!("Category list unavailable, using product categories: {}", e),
        }
    });

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            match fetch_products().await {
                Ok(items) => {
                    log::debug!("loaded {} products", items.len());
                    state.update(|s| s.set_rows(items));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    load_items();

    let switch_layout = move |mode: LayoutMode| {
        set_layout.set(mode);
        state.update(|s| s.set_page_size(page_size(mode)));
    };

    let sort = Signal::derive(move || state.with(|s| s.sort().clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    let categories =
        Memo::new(move |_| catalog.with(|c| state.with(|s| category_options(c, s.rows()))));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Inventory"</h1>
                    <span class="header__subtitle">
                        {move || format!("{} products", format_count(state.with(|s| s.filtered_count()) as i64))}
                    </span>
                </div>
                <div class="header__actions">
                    <button
                        class=move || if layout.get() == LayoutMode::Table { "button button--primary" } else { "button button--secondary" }
                        on:click=move |_| switch_layout(LayoutMode::Table)
                    >
                        "Table"
                    </button>
                    <button
                        class=move || if layout.get() == LayoutMode::Grid { "button button--primary" } else { "button button--secondary" }
                        on:click=move |_| switch_layout(LayoutMode::Grid)
                    >
                        "Grid"
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || loading.get()
                        on:click=move |_| load_items()
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=Signal::derive(move || state.with(|s| s.filter().active_count()))
                search=Signal::derive(move || state.with(|s| s.filter().search().to_string()))
                on_search=Callback::new(move |term: String| state.update(|s| s.set_search(term)))
                on_reset=Callback::new(move |_| state.update(|s| s.reset_filters()))
            >
                {move || view! {
                    <FilterOptions
                        title="Category"
                        options=categories.get()
                        is_selected=Callback::new(move |v: FilterValue| state.with(|s| s.filter().is_selected(DIM_CATEGORY, &v)))
                        on_toggle=Callback::new(move |v: FilterValue| state.update(|s| s.update_filter(|f| f.toggle_value(DIM_CATEGORY, v))))
                    />
                }}
                <FilterOptions
                    title="Status"
                    options=status_options()
                    is_selected=Callback::new(move |v: FilterValue| state.with(|s| s.filter().is_selected(DIM_STATUS, &v)))
                    on_toggle=Callback::new(move |v: FilterValue| state.update(|s| s.update_filter(|f| f.toggle_value(DIM_STATUS, v))))
                />
                <RangeFilter
                    title="Price"
                    bounds=PRICE_BOUNDS
                    range=Signal::derive(move || state.with(|s| price_range(s.filter())))
                    on_change=Callback::new(move |(min, max): (f64, f64)| {
                        state.update(|s| s.update_filter(|f| set_price_range(f, min, max)))
                    })
                />
            </FilterPanel>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table__selection-bar">
                {move || {
                    let count = state.with(|s| s.selection().len());
                    (count > 0).then(|| view! {
                        <span>{format!("{} selected", count)}</span>
                        <button class="button button--secondary" on:click=move |_| state.update(|s| s.clear_selection())>
                            "Clear selection"
                        </button>
                    })
                }}
            </div>

            <Show
                when=move || layout.get() == LayoutMode::Table
                fallback=move || view! { <ProductsGrid state=state /> }
            >
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                state=Signal::derive(move || state.with(|s| s.header_state()))
                                on_toggle=Callback::new(move |_| state.update(|s| s.toggle_all_on_page()))
                            />
                            <SortableHeaderCell label="Name" sort_field="name" sort=sort on_sort=on_sort min_width=180.0 />
                            <SortableHeaderCell label="SKU" sort_field="sku" sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Category" sort_field="category" sort=sort on_sort=on_sort min_width=140.0 />
                            <SortableHeaderCell label="Supplier" sort_field="supplier" sort=sort on_sort=on_sort min_width=140.0 />
                            <SortableHeaderCell label="Price" sort_field="price" sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Quantity" sort_field="quantity" sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort />
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || state.with(|s| s.visible_rows())
                            key=|item: &Product| item.id.clone()
                            children=move |item: Product| {
                                let id_for_checked = item.id.clone();
                                let status = item.effective_status();
                                let price = item.price;
                                let name = item.display_name().to_string();
                                let sku = item.sku.clone().unwrap_or_default();
                                let category = item.category_name().unwrap_or("-").to_string();
                                let supplier = item.supplier_name().unwrap_or("-").to_string();
                                let quantity = item
                                    .stock_quantity
                                    .map(format_count)
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <TableRow>
                                        <TableCellCheckbox
                                            item_id=item.id.clone()
                                            checked=Signal::derive(move || state.with(|s| s.is_selected(&id_for_checked)))
                                            on_toggle=Callback::new(move |id: String| state.update(|s| s.toggle_selected(&id)))
                                        />
                                        <TableCell>
                                            <TableCellLayout truncate=true>{name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{sku}</TableCell>
                                        <TableCell>{category}</TableCell>
                                        <TableCell>{supplier}</TableCell>
                                        <TableCellMoney value=Signal::derive(move || price) />
                                        <TableCell class="text-right">{quantity}</TableCell>
                                        <TableCell>
                                            <StatusBadge label=status.map(|s| s.label()) tone=status.map(|s| s.tone()) />
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>

            {move || {
                (state.with(|s| s.filtered_count()) == 0 && !loading.get()).then(|| view! {
                    <div class="table__empty">"No products match the current filters"</div>
                })
            }}

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page_index()))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                total_count=Signal::derive(move || state.with(|s| s.filtered_count()))
                on_page_change=Callback::new(move |page: usize| {
                    state.update(|s| {
                        s.go_to_page(page);
                    })
                })
            />
        </div>
    }
}

/// Card layout of the current page
#[component]
fn ProductsGrid(state: RwSignal<ListViewController<Product>>) -> impl IntoView {
    view! {
        <div class="product-grid">
            <For
                each=move || state.with(|s| s.visible_rows())
                key=|item: &Product| item.id.clone()
                children=move |item: Product| {
                    let id_for_class = item.id.clone();
                    let id_for_click = item.id.clone();
                    let status = item.effective_status();
                    let name = item.display_name().to_string();
                    let category = item.category_name().unwrap_or("-").to_string();
                    let price = item.price.map(format_currency).unwrap_or_else(|| "-".to_string());
                    view! {
                        <div
                            class=move || {
                                if state.with(|s| s.is_selected(&id_for_class)) {
                                    "product-card product-card--selected"
                                } else {
                                    "product-card"
                                }
                            }
                            on:click=move |_| state.update(|s| s.toggle_selected(&id_for_click))
                        >
                            <div class="product-card__name">{name}</div>
                            <div class="product-card__category">{category}</div>
                            <div class="product-card__price">{price}</div>
                            <StatusBadge label=status.map(|s| s.label()) tone=status.map(|s| s.tone()) />
                        </div>
                    }
                }
            />
        </div>
    }
}
