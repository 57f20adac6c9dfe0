use crate::domain::a002_supplier::api::fetch_suppliers;
use crate::domain::a002_supplier::ui::details::SupplierDetail;
use crate::domain::a002_supplier::list::{status_options, DIM_STATUS};
use crate::shared::components::filter_panel::{FilterOptions, FilterPanel};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::page_sizes;
use crate::shared::list_view::{create_list_state, FilterValue, LayoutMode};
use contracts::domain::a002_supplier::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn page_size(layout: LayoutMode) -> usize {
    let sizes = page_sizes();
    layout.page_size(sizes.suppliers_table, sizes.suppliers_grid)
}

#[component]
pub fn SuppliersTable() -> impl IntoView {
    let state = create_list_state::<Supplier>(page_size(LayoutMode::Table));
    let (error, set_error) = signal::<Option<String>>(None);
    let (layout, set_layout) = signal(LayoutMode::Table);
    let is_filter_expanded = RwSignal::new(false);
    let (opened, set_opened) = signal(None::<Supplier>);

    spawn_local(async move {
        match fetch_suppliers().await {
            Ok(items) => state.update(|s| s.set_rows(items)),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    });

    let switch_layout = move |mode: LayoutMode| {
        set_layout.set(mode);
        state.update(|s| s.set_page_size(page_size(mode)));
    };

    let sort = Signal::derive(move || state.with(|s| s.sort().clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Suppliers"</h1>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| switch_layout(LayoutMode::Table)>"Table"</button>
                    <button class="button button--secondary" on:click=move |_| switch_layout(LayoutMode::Grid)>"Grid"</button>
                </div>
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
            </FilterPanel>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || opened.get().map(|supplier| view! {
                <SupplierDetail supplier=supplier on_close=Callback::new(move |_| set_opened.set(None)) />
            })}

            {move || match layout.get() {
                LayoutMode::Table => view! {
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    state=Signal::derive(move || state.with(|s| s.header_state()))
                                    on_toggle=Callback::new(move |_| state.update(|s| s.toggle_all_on_page()))
                                />
                                <SortableHeaderCell label="Name" sort_field="name" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Email" sort_field="contactEmail" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Phone" sort_field="phone" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Address" sort_field="address" sort=sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.visible_rows())
                                key=|item: &Supplier| item.id.clone()
                                children=move |item: Supplier| {
                                    let id_for_checked = item.id.clone();
                                    let status = item.status;
                                    let name = item.display_name().to_string();
                                    let email = item.contact_email.clone().unwrap_or_default();
                                    let phone = item.phone.clone().unwrap_or_default();
                                    let address = item.address.clone().unwrap_or_default();
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
                                                    {name}
                                                </button>
                                            </TableCell>
                                            <TableCell>{email}</TableCell>
                                            <TableCell>{phone}</TableCell>
                                            <TableCell>{address}</TableCell>
                                            <TableCell>
                                                <StatusBadge label=status.map(|s| s.label()) tone=status.map(|s| s.tone()) />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                }
                .into_any(),
                LayoutMode::Grid => view! {
                    <div class="supplier-grid">
                        {state.with(|s| s.visible_rows())
                            .into_iter()
                            .map(|item| {
                                let status = item.status;
                                view! {
                                    <div class="supplier-card">
                                        <div class="supplier-card__name">{item.display_name().to_string()}</div>
                                        <div class="supplier-card__email">{item.contact_email.clone().unwrap_or_default()}</div>
                                        <StatusBadge label=status.map(|s| s.label()) tone=status.map(|s| s.tone()) />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
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
