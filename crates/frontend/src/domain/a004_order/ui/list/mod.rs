use crate::domain::a004_order::api::fetch_orders;
use crate::domain::a004_order::ui::details::OrderDetail;
use crate::domain::a004_order::list::{
    payment_status_options, status_options, DIM_PAYMENT_STATUS, DIM_STATUS,
};
use crate::shared::components::filter_panel::{FilterOptions, FilterPanel};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableCellMoney, TableHeaderCheckbox,
};
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::page_sizes;
use crate::shared::date_utils::format_date;
use crate::shared::list_view::{create_list_state, FilterValue};
use contracts::domain::a004_order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn OrdersTable() -> impl IntoView {
    let state = create_list_state::<Order>(page_sizes().orders);
    let (error, set_error) = signal::<Option<String>>(None);
    let is_filter_expanded = RwSignal::new(false);
    let (opened, set_opened) = signal(None::<Order>);

    spawn_local(async move {
        match fetch_orders().await {
            Ok(items) => state.update(|s| s.set_rows(items)),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    });

    let sort = Signal::derive(move || state.with(|s| s.sort().clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Orders"</h1>
            </div>

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=Signal::derive(move || state.with(|s| s.filter().active_count()))
                search=Signal::derive(move || state.with(|s| s.filter().search().to_string()))
                on_search=Callback::new(move |term: String| state.update(|s| s.set_search(term)))
                on_reset=Callback::new(move |_| state.update(|s| s.reset_filters()))
            >
                <FilterOptions
                    title="Status"
                    options=status_options()
                    is_selected=Callback::new(move |v: FilterValue| state.with(|s| s.filter().is_selected(DIM_STATUS, &v)))
                    on_toggle=Callback::new(move |v: FilterValue| state.update(|s| s.update_filter(|f| f.toggle_value(DIM_STATUS, v))))
                />
                <FilterOptions
                    title="Payment"
                    options=payment_status_options()
                    is_selected=Callback::new(move |v: FilterValue| state.with(|s| s.filter().is_selected(DIM_PAYMENT_STATUS, &v)))
                    on_toggle=Callback::new(move |v: FilterValue| state.update(|s| s.update_filter(|f| f.toggle_value(DIM_PAYMENT_STATUS, v))))
                />
            </FilterPanel>

            {move || opened.get().map(|order| view! {
                <OrderDetail order=order on_close=Callback::new(move |_| set_opened.set(None)) />
            })}

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox
                            state=Signal::derive(move || state.with(|s| s.header_state()))
                            on_toggle=Callback::new(move |_| state.update(|s| s.toggle_all_on_page()))
                        />
                        <SortableHeaderCell label="Order" sort_field="id" sort=sort on_sort=on_sort />
                        <SortableHeaderCell label="Customer" sort_field="customer" sort=sort on_sort=on_sort min_width=160.0 />
                        <SortableHeaderCell label="Date" sort_field="orderDate" sort=sort on_sort=on_sort />
                        <SortableHeaderCell label="Items" sort_field="items" sort=sort on_sort=on_sort align="right" />
                        <SortableHeaderCell label="Total" sort_field="totalAmount" sort=sort on_sort=on_sort align="right" />
                        <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort />
                        <SortableHeaderCell label="Payment" sort_field="paymentStatus" sort=sort on_sort=on_sort />
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.visible_rows())
                        key=|item: &Order| item.id.clone()
                        children=move |item: Order| {
                            let id_for_checked = item.id.clone();
                            let amount = item.amount();
                            let status = item.status;
                            let payment = item.payment_status;
                            let date = item.order_date.as_ref().map(format_date).unwrap_or_else(|| "-".to_string());
                            let order_id = item.id.clone();
                            let customer = item.customer_name().unwrap_or_else(|| "-".to_string());
                            let items = item.item_count().to_string();
                            let for_detail = item.clone();
                            view! {
                                <TableRow>
                                    <TableCellCheckbox
                                        item_id=item.id.clone()
                                        checked=Signal::derive(move || state.with(|s| s.is_selected(&id_for_checked)))
                                        on_toggle=Callback::new(move |id: String| state.update(|s| s.toggle_selected(&id)))
                                    />
                                    <TableCell>
                                        <button
                                            class="link-button"
                                            on:click=move |_| set_opened.set(Some(for_detail.clone()))
                                        >
                                            {order_id}
                                        </button>
                                    </TableCell>
                                    <TableCell>{customer}</TableCell>
                                    <TableCell>{date}</TableCell>
                                    <TableCell class="text-right">{items}</TableCell>
                                    <TableCellMoney value=Signal::derive(move || Some(amount)) />
                                    <TableCell>
                                        <StatusBadge label=status.map(|s| s.label()) tone=status.map(|s| s.tone()) />
                                    </TableCell>
                                    <TableCell>
                                        <StatusBadge label=payment.map(|s| s.label()) tone=payment.map(|s| s.tone()) />
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

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
