use crate::dashboards::d401_reports::saved::{
    category_options, saved_reports, toggle_favorite, SavedReportRow, DIM_CATEGORY, DIM_FAVORITE,
};
use crate::shared::components::filter_panel::{FilterOptions, FilterPanel};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::Badge;
use crate::shared::config::page_sizes;
use crate::shared::icons::icon;
use crate::shared::list_view::{create_list_state, FilterValue};
use contracts::enums::BadgeTone;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SavedReports() -> impl IntoView {
    let state = create_list_state::<SavedReportRow>(page_sizes().reports);
    state.update(|s| s.set_rows(saved_reports()));
    let is_filter_expanded = RwSignal::new(false);

    let sort = Signal::derive(move || state.with(|s| s.sort().clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    let favorites_only = move || state.with(|s| s.filter().constraint(DIM_FAVORITE).is_some());

    let on_favorite = move |id: &'static str| {
        state.update(|s| {
            let mut rows = s.rows().to_vec();
            if toggle_favorite(&mut rows, id) {
                s.set_rows(rows);
            } else {
                log::warn!("Unknown saved report: {}", id);
            }
        })
    };

    view! {
        <div class="page">
            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=Signal::derive(move || state.with(|s| s.filter().active_count()))
                search=Signal::derive(move || state.with(|s| s.filter().search().to_string()))
                on_search=Callback::new(move |term: String| state.update(|s| s.set_search(term)))
                on_reset=Callback::new(move |_| state.update(|s| s.reset_filters()))
            >
                <FilterOptions
                    title="Category"
                    options=category_options()
                    is_selected=Callback::new(move |v: FilterValue| state.with(|s| s.filter().is_selected(DIM_CATEGORY, &v)))
                    on_toggle=Callback::new(move |v: FilterValue| state.update(|s| s.update_filter(|f| f.toggle_value(DIM_CATEGORY, v))))
                />
                <label class="form__checkbox-wrapper">
                    <input
                        type="checkbox"
                        class="form__checkbox"
                        prop:checked=favorites_only
                        on:change=move |_| state.update(|s| s.update_filter(|f| {
                            if f.constraint(DIM_FAVORITE).is_some() {
                                f.clear_dimension(DIM_FAVORITE);
                            } else {
                                f.set_values(DIM_FAVORITE, [1]);
                            }
                        }))
                    />
                    <span class="form__checkbox-label">"Favorites only"</span>
                </label>
            </FilterPanel>

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false>""</TableHeaderCell>
                        <SortableHeaderCell label="Report ID" sort_field="id" sort=sort on_sort=on_sort />
                        <SortableHeaderCell label="Report Name" sort_field="name" sort=sort on_sort=on_sort min_width=220.0 />
                        <SortableHeaderCell label="Category" sort_field="category" sort=sort on_sort=on_sort />
                        <SortableHeaderCell label="Created" sort_field="created" sort=sort on_sort=on_sort />
                        <SortableHeaderCell label="Last Run" sort_field="lastRun" sort=sort on_sort=on_sort />
                        <SortableHeaderCell label="Schedule" sort_field="scheduled" sort=sort on_sort=on_sort />
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.visible_rows())
                        key=|row: &SavedReportRow| (row.id, row.favorite)
                        children=move |row: SavedReportRow| {
                            let id = row.id;
                            let star_class = if row.favorite { "favorite favorite--active" } else { "favorite" };
                            let schedule_tone = if row.frequency.is_some() { BadgeTone::Info } else { BadgeTone::Neutral };
                            let schedule = row.schedule_label();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <button class=star_class title="Toggle favorite" on:click=move |_| on_favorite(id)>
                                            {icon("star")}
                                        </button>
                                    </TableCell>
                                    <TableCell>{row.id}</TableCell>
                                    <TableCell>{row.name}</TableCell>
                                    <TableCell>{row.category}</TableCell>
                                    <TableCell>{row.created}</TableCell>
                                    <TableCell>{row.last_run}</TableCell>
                                    <TableCell>
                                        <Badge tone=schedule_tone>{schedule}</Badge>
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
