use crate::domain::a002_supplier::performance::supplier_kpis;
use crate::domain::a003_product::api::fetch_products_by_supplier;
use crate::domain::a004_order::api::fetch_orders_by_supplier;
use crate::shared::api_utils::ApiError;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_count, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::page_sizes;
use crate::shared::date_utils::format_date;
use crate::shared::list_view::{create_list_state, ListRow, ListViewController};
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::a003_product::Product;
use contracts::domain::a004_order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use thaw::*;

/// Supplier header, performance indicators, and the supplier's products and orders
#[component]
pub fn SupplierDetail(supplier: Supplier, on_close: Callback<()>) -> impl IntoView {
    let name = supplier.display_name().to_string();
    let email = supplier.contact_email.clone().unwrap_or_default();
    let phone = supplier.phone.clone().unwrap_or_default();
    let status = supplier.status;
    let kpis = supplier_kpis(&supplier.id);

    view! {
        <div class="card supplier-detail">
            <div class="card__header">
                <h2 class="card__title">{name}</h2>
                <StatusBadge label=status.map(|s| s.label()) tone=status.map(|s| s.tone()) />
                <button class="button button--secondary" on:click=move |_| on_close.run(())>"Close"</button>
            </div>
            <div class="supplier-detail__contact">
                <span>{email}</span>
                <span>{phone}</span>
            </div>
            <div class="stat-card-grid">
                {kpis
                    .into_iter()
                    .map(|kpi| view! {
                        <div class="kpi">
                            <div class="kpi__label">{kpi.label}</div>
                            <div class="kpi__value">{kpi.value}</div>
                            <div class=kpi.trend.css_class()>{kpi.change}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <SupplierProductsTable supplier_id=supplier.id.clone() />
            <SupplierOrdersTable supplier_id=supplier.id />
        </div>
    }
}

/// Loads rows into a detail table, logging failures
fn load_rows<T, F>(state: RwSignal<ListViewController<T>>, what: &'static str, fetch: F)
where
    T: ListRow + Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    spawn_local(async move {
        match fetch.await {
            Ok(items) => state.update(|s| s.set_rows(items)),
            Err(e) => log::error!("Failed to load supplier {}: {}", what, e),
        }
    });
}

#[component]
fn SupplierProductsTable(supplier_id: String) -> impl IntoView {
    let state = create_list_state::<Product>(page_sizes().supplier_detail);
    load_rows(state, "products", async move { fetch_products_by_supplier(&supplier_id).await });

    let sort = Signal::derive(move || state.with(|s| s.sort().clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <h3 class="card__subtitle">"Products"</h3>
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <SortableHeaderCell label="Name" sort_field="name" sort=sort on_sort=on_sort min_width=180.0 />
                    <TableHeaderCell resizable=false>"SKU"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Category"</TableHeaderCell>
                    <SortableHeaderCell label="Price" sort_field="price" sort=sort on_sort=on_sort align="right" />
                    <SortableHeaderCell label="Stock" sort_field="stockQuantity" sort=sort on_sort=on_sort align="right" />
                    <TableHeaderCell resizable=false>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || state.with(|s| s.visible_rows())
                    key=|item: &Product| item.id.clone()
                    children=move |item: Product| {
                        let name = item.display_name().to_string();
                        let sku = item.sku.clone().unwrap_or_default();
                        let category = item.category_name().unwrap_or("-").to_string();
                        let price = item.price;
                        let stock = item.stock_quantity.map(format_count).unwrap_or_else(|| "-".to_string());
                        let status = item.effective_status();
                        view! {
                            <TableRow>
                                <TableCell>{name}</TableCell>
                                <TableCell>{sku}</TableCell>
                                <TableCell>{category}</TableCell>
                                <TableCellMoney value=Signal::derive(move || price) />
                                <TableCell class="text-right">{stock}</TableCell>
                                <TableCell>
                                    <StatusBadge label=status.map(|s| s.label()) tone=status.map(|s| s.tone()) />
                                </TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
        <DetailPagination state=state />
    }
}

#[component]
fn SupplierOrdersTable(supplier_id: String) -> impl IntoView {
    let state = create_list_state::<Order>(page_sizes().supplier_detail);
    load_rows(state, "orders", async move { fetch_orders_by_supplier(&supplier_id).await });

    let sort = Signal::derive(move || state.with(|s| s.sort().clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <h3 class="card__subtitle">"Orders"</h3>
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=false>"Order"</TableHeaderCell>
                    <SortableHeaderCell label="Date" sort_field="orderDate" sort=sort on_sort=on_sort />
                    <TableHeaderCell resizable=false>"Items"</TableHeaderCell>
                    <SortableHeaderCell label="Total" sort_field="totalAmount" sort=sort on_sort=on_sort align="right" />
                    <TableHeaderCell resizable=false>"Delivery"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || state.with(|s| s.visible_rows())
                    key=|item: &Order| item.id.clone()
                    children=move |item: Order| {
                        let order_id = item.id.clone();
                        let date = item.order_date.as_ref().map(format_date).unwrap_or_else(|| "-".to_string());
                        let items = item.item_count().to_string();
                        let amount = item.amount();
                        let delivery = item.delivery_date.as_ref().map(format_date).unwrap_or_else(|| "Pending".to_string());
                        view! {
                            <TableRow>
                                <TableCell>{order_id}</TableCell>
                                <TableCell>{date}</TableCell>
                                <TableCell class="text-right">{items}</TableCell>
                                <TableCellMoney value=Signal::derive(move || Some(amount)) />
                                <TableCell>{delivery}</TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
        <DetailPagination state=state />
    }
}

#[component]
fn DetailPagination<T>(state: RwSignal<ListViewController<T>>) -> impl IntoView
where
    T: ListRow + Send + Sync + 'static,
{
    view! {
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
    }
}
