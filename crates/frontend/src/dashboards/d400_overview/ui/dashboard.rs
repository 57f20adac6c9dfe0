use crate::dashboards::d400_overview::activity::recent;
use crate::dashboards::d400_overview::api;
use crate::dashboards::d400_overview::cards::{bar_heights, card_value, OverviewCard};
use crate::dashboards::d400_overview::snapshot::{inventory_snapshot, InventorySnapshotRow};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_count, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::page_sizes;
use crate::shared::date_utils::{format_date, time_ago};
use crate::shared::list_view::create_list_state;
use chrono::Utc;
use contracts::dashboards::d400_overview::{Activity, DashboardOverviewStats, MonthlyOverview};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Overview dashboard: summary cards, monthly sales bars, the inventory
/// snapshot table and the recent activity feed
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (stats, set_stats) = signal(None::<DashboardOverviewStats>);
    let (months, set_months) = signal(Vec::<MonthlyOverview>::new());
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::fetch_overview_stats().await {
            Ok(data) => set_stats.set(Some(data)),
            Err(e) => {
                log::error!("Failed to load overview stats: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    spawn_local(async move {
        match api::fetch_overview().await {
            Ok(data) => set_months.set(data),
            Err(e) => {
                log::error!("Failed to load overview: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Dashboard"</h1>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="stat-card-grid">
                {OverviewCard::all()
                    .into_iter()
                    .map(|card| view! {
                        <StatCard
                            label=card.label()
                            icon_name=card.icon()
                            value=Signal::derive(move || stats.with(|s| s.as_ref().map(|s| card_value(card, Some(s)))))
                        />
                    })
                    .collect_view()}
            </div>

            <div class="dashboard__row">
                <div class="card">
                    <h2 class="card__title">"Overview"</h2>
                    <div class="bar-chart">
                        {move || {
                            let data = months.get();
                            let heights = bar_heights(&data);
                            data.into_iter()
                                .zip(heights)
                                .map(|(month, height)| view! {
                                    <div class="bar-chart__column" title=month.total_amount.to_string()>
                                        <div class="bar-chart__bar" style=format!("height: {:.1}%;", height)></div>
                                        <span class="bar-chart__label">{month.month}</span>
                                    </div>
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
                <RecentActivity />
            </div>

            <InventorySnapshotTable />
        </div>
    }
}

#[component]
fn RecentActivity() -> impl IntoView {
    let (activities, set_activities) = signal(Vec::<Activity>::new());
    let (extended, set_extended) = signal(false);

    spawn_local(async move {
        match api::fetch_recent_activity().await {
            Ok(data) => set_activities.set(data),
            Err(e) => log::error!("Failed to load recent activity: {}", e),
        }
    });

    view! {
        <div class="card">
            <h2 class="card__title">"Recent Activity"</h2>
            <ul class="activity-feed">
                {move || {
                    let now = Utc::now();
                    activities.with(|all| {
                        recent(all, extended.get())
                            .iter()
                            .map(|a| view! {
                                <li class="activity-feed__item">
                                    <span class="activity-feed__avatar">{a.user.initials()}</span>
                                    <div class="activity-feed__body">
                                        <span class="activity-feed__user">{a.user.display_name()}</span>
                                        <span class="activity-feed__message">{a.message.clone()}</span>
                                        <span class="activity-feed__time" title=format_date(&a.timestamp)>
                                            {time_ago(&a.timestamp, &now)}
                                        </span>
                                    </div>
                                </li>
                            })
                            .collect_view()
                    })
                }}
            </ul>
            <Show when=move || activities.with(|a| a.len() > page_sizes().recent_activity)>
                <button
                    class="button button--secondary"
                    on:click=move |_| set_extended.update(|e| *e = !*e)
                >
                    {move || if extended.get() { "Show less" } else { "Show more" }}
                </button>
            </Show>
        </div>
    }
}

#[component]
fn InventorySnapshotTable() -> impl IntoView {
    let state = create_list_state::<InventorySnapshotRow>(page_sizes().inventory_snapshot);
    state.update(|s| s.set_rows(inventory_snapshot()));

    let sort = Signal::derive(move || state.with(|s| s.sort().clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"Inventory"</h2>
                <input
                    type="search"
                    class="form__input"
                    placeholder="Search inventory..."
                    prop:value=move || state.with(|s| s.filter().search().to_string())
                    on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
                />
            </div>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <SortableHeaderCell label="ID" sort_field="id" sort=sort on_sort=on_sort />
                        <SortableHeaderCell label="Name" sort_field="name" sort=sort on_sort=on_sort min_width=180.0 />
                        <SortableHeaderCell label="Category" sort_field="category" sort=sort on_sort=on_sort />
                        <SortableHeaderCell label="Quantity" sort_field="quantity" sort=sort on_sort=on_sort align="right" />
                        <SortableHeaderCell label="Price" sort_field="price" sort=sort on_sort=on_sort align="right" />
                        <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort />
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.visible_rows())
                        key=|row: &InventorySnapshotRow| row.id
                        children=move |row: InventorySnapshotRow| {
                            let price = row.price;
                            view! {
                                <TableRow>
                                    <TableCell>{row.id}</TableCell>
                                    <TableCell>{row.name}</TableCell>
                                    <TableCell>{row.category}</TableCell>
                                    <TableCell class="text-right">{format_count(row.quantity)}</TableCell>
                                    <TableCellMoney value=Signal::derive(move || Some(price)) />
                                    <TableCell>
                                        <StatusBadge label=Some(row.status.label()) tone=Some(row.status.tone()) />
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
