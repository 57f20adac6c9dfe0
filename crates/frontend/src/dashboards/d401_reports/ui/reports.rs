use super::report_table::{MonthlyBars, ReportTable, ShareTable};
use super::saved_reports::SavedReports;
use crate::dashboards::d401_reports::columns::{
    CellFormat, CATEGORY_MARGIN_COLUMNS, EXCESS_INVENTORY_COLUMNS, LOW_STOCK_COLUMNS,
    MONTHLY_MARGIN_COLUMNS, SUPPLIER_PERFORMANCE_COLUMNS, TOP_PRODUCT_COLUMNS,
};
use crate::dashboards::d401_reports::datasets::*;
use crate::shared::components::table::{format_currency, format_number_with_decimals};
use crate::shared::list_view::SortSpec;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportTab {
    Sales,
    Inventory,
    Financial,
    Suppliers,
    Saved,
}

impl ReportTab {
    const ALL: [ReportTab; 5] = [
        ReportTab::Sales,
        ReportTab::Inventory,
        ReportTab::Financial,
        ReportTab::Suppliers,
        ReportTab::Saved,
    ];

    fn title(self) -> &'static str {
        match self {
            ReportTab::Sales => "Sales",
            ReportTab::Inventory => "Inventory",
            ReportTab::Financial => "Financial",
            ReportTab::Suppliers => "Suppliers",
            ReportTab::Saved => "Saved Reports",
        }
    }
}

/// Reports page: one tab per analytics area plus the saved report list
#[component]
pub fn ReportsPage() -> impl IntoView {
    let (tab, set_tab) = signal(ReportTab::Sales);

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Reports"</h1>
            </div>
            <div class="tabs">
                {ReportTab::ALL
                    .into_iter()
                    .map(|target| view! {
                        <button
                            class=move || if tab.get() == target { "tabs__item tabs__item--active" } else { "tabs__item" }
                            on:click=move |_| set_tab.set(target)
                        >
                            {target.title()}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || match tab.get() {
                ReportTab::Sales => view! { <SalesReports /> }.into_any(),
                ReportTab::Inventory => view! { <InventoryReports /> }.into_any(),
                ReportTab::Financial => view! { <FinancialReports /> }.into_any(),
                ReportTab::Suppliers => view! { <SupplierReports /> }.into_any(),
                ReportTab::Saved => view! { <SavedReports /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SalesReports() -> impl IntoView {
    let growth = growth_percent(&SALES_TREND)
        .map(|g| format!("{}% growth since {}", format_number_with_decimals(g, 1), SALES_TREND[0].month))
        .unwrap_or_default();

    view! {
        <div class="dashboard__row">
            <ShareTable title="Sales by Category" shares=&SALES_BY_CATEGORY />
            <div>
                <MonthlyBars title="Sales Trend" series=&SALES_TREND />
                <p class="card__subtitle">{growth}</p>
            </div>
        </div>
        <ReportTable
            title="Top Selling Products"
            rows=top_products()
            columns=&TOP_PRODUCT_COLUMNS
            default_sort=SortSpec::desc("sales")
        />
        <ShareTable title="Sales by Channel" shares=&SALES_BY_CHANNEL />
    }
}

#[component]
fn InventoryReports() -> impl IntoView {
    let excess = excess_inventory();
    let excess_total = format!("Total excess value: {}", format_currency(excess_total_value(&excess)));

    view! {
        <div class="dashboard__row">
            <ShareTable title="Inventory Aging" shares=&INVENTORY_AGING />
            <ShareTable title="Inventory Turnover" shares=&INVENTORY_TURNOVER format=CellFormat::Decimal />
        </div>
        <ReportTable title="Low Stock Items" rows=low_stock_items() columns=&LOW_STOCK_COLUMNS />
        <ReportTable title="Excess Inventory" rows=excess columns=&EXCESS_INVENTORY_COLUMNS />
        <p class="card__subtitle">{excess_total}</p>
    }
}

#[component]
fn FinancialReports() -> impl IntoView {
    view! {
        <ReportTable title="Profit Margin" rows=monthly_margins() columns=&MONTHLY_MARGIN_COLUMNS />
        <ReportTable
            title="Category Margins"
            rows=category_margins()
            columns=&CATEGORY_MARGIN_COLUMNS
            default_sort=SortSpec::desc("revenue")
        />
        <MonthlyBars title="Inventory Value" series=&INVENTORY_VALUE />
    }
}

#[component]
fn SupplierReports() -> impl IntoView {
    view! {
        <ReportTable
            title="Supplier Performance"
            rows=supplier_performance()
            columns=&SUPPLIER_PERFORMANCE_COLUMNS
            default_sort=SortSpec::desc("orders")
        />
        <div class="dashboard__row">
            <ShareTable title="Supplier Spend" shares=&SUPPLIER_SPEND />
            <ShareTable title="Lead Times (days)" shares=&SUPPLIER_LEAD_TIMES format=CellFormat::Decimal />
        </div>
    }
}
