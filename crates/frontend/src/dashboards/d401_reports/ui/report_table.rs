use crate::dashboards::d401_reports::columns::{format_cell, report_controller, CellFormat, ReportColumn};
use crate::dashboards::d401_reports::datasets::{
    percent_of_total, series_heights, MonthlyAmount, QualityRating, Share,
};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_number_with_decimals, SortableHeaderCell};
use crate::shared::components::ui::StatusBadge;
use crate::shared::list_view::{FieldValue, ListRow, SortSpec};
use leptos::prelude::*;
use thaw::*;

/// Sortable, paginated table over a canned dataset
#[component]
pub fn ReportTable<T>(
    #[prop(into)]
    title: String,

    rows: Vec<T>,

    columns: &'static [ReportColumn],

    /// Sort applied before the first render
    #[prop(optional)]
    default_sort: SortSpec,
) -> impl IntoView
where
    T: ListRow + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(report_controller(rows, default_sort));
    let sort = Signal::derive(move || state.with(|s| s.sort().clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <div class="card">
            <h2 class="card__title">{title}</h2>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {columns
                            .iter()
                            .map(|column| {
                                if column.sortable {
                                    view! {
                                        <SortableHeaderCell
                                            label=column.label
                                            sort_field=column.field
                                            sort=sort
                                            on_sort=on_sort
                                            align=column.format.align()
                                        />
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <TableHeaderCell resizable=false>{column.label}</TableHeaderCell>
                                    }
                                    .into_any()
                                }
                            })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.visible_rows())
                        key=|row: &T| row.row_id().to_string()
                        children=move |row: T| {
                            let cells = columns
                                .iter()
                                .map(|column| report_cell(&row, column))
                                .collect_view();
                            view! { <TableRow>{cells}</TableRow> }
                        }
                    />
                </TableBody>
            </Table>
            <Show when=move || state.with(|s| s.total_pages() > 1)>
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
            </Show>
        </div>
    }
}

fn report_cell<T: ListRow>(row: &T, column: &ReportColumn) -> AnyView {
    let value = row.field(column.field);
    let text = format_cell(&value, column.format);
    let class = if column.format.align() == "right" { "text-right" } else { "" };
    match (column.format, value.as_number()) {
        (CellFormat::Rating, Some(score)) => {
            let rating = QualityRating::from_score(score);
            view! {
                <TableCell class=class>
                    {text}" "
                    <StatusBadge label=Some(rating.label()) tone=Some(rating.tone()) />
                </TableCell>
            }
            .into_any()
        }
        _ => view! { <TableCell class=class>{text}</TableCell> }.into_any(),
    }
}

/// Breakdown with each entry's share of the total
#[component]
pub fn ShareTable(
    #[prop(into)]
    title: String,

    shares: &'static [Share],

    #[prop(optional)]
    format: Option<CellFormat>,
) -> impl IntoView {
    let format = format.unwrap_or(CellFormat::Currency);
    let percents = percent_of_total(shares);

    view! {
        <div class="card">
            <h2 class="card__title">{title}</h2>
            <ul class="share-list">
                {shares
                    .iter()
                    .zip(percents)
                    .map(|(share, percent)| view! {
                        <li class="share-list__item">
                            <span class="share-list__name">{share.name}</span>
                            <span class="share-list__value">
                                {format_cell(&FieldValue::Number(share.value), format)}
                            </span>
                            <span class="share-list__percent">
                                {format!("{}%", format_number_with_decimals(percent, 0))}
                            </span>
                            <div class="share-list__bar" style=format!("width: {:.1}%;", percent)></div>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Monthly bar chart
#[component]
pub fn MonthlyBars(
    #[prop(into)]
    title: String,

    series: &'static [MonthlyAmount],
) -> impl IntoView {
    let heights = series_heights(series);

    view! {
        <div class="card">
            <h2 class="card__title">{title}</h2>
            <div class="bar-chart">
                {series
                    .iter()
                    .zip(heights)
                    .map(|(month, height)| view! {
                        <div class="bar-chart__column" title=format_cell(&FieldValue::Number(month.amount), CellFormat::Currency)>
                            <div class="bar-chart__bar" style=format!("height: {:.1}%;", height)></div>
                            <span class="bar-chart__label">{month.month}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
