use crate::dashboards::{OverviewDashboard, ReportsPage};
use crate::domain::a002_supplier::ui::list::SuppliersTable;
use crate::domain::a003_product::ui::list::ProductsTable;
use crate::domain::a004_order::ui::list::OrdersTable;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Dashboard,
    Inventory,
    Orders,
    Suppliers,
    Reports,
}

impl Page {
    const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Inventory,
        Page::Orders,
        Page::Suppliers,
        Page::Reports,
    ];

    fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Inventory => "Inventory",
            Page::Orders => "Orders",
            Page::Suppliers => "Suppliers",
            Page::Reports => "Reports",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "inventory",
            Page::Inventory => "products",
            Page::Orders => "orders",
            Page::Suppliers => "suppliers",
            Page::Reports => "reports",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Dashboard);

    view! {
        <div class="app">
            <nav class="app-nav">
                {Page::ALL
                    .into_iter()
                    .map(|target| view! {
                        <button
                            class=move || {
                                if page.get() == target {
                                    "app-nav__item app-nav__item--active"
                                } else {
                                    "app-nav__item"
                                }
                            }
                            on:click=move |_| set_page.set(target)
                        >
                            {icon(target.icon())}
                            {target.title()}
                        </button>
                    })
                    .collect_view()}
            </nav>
            <main class="app-main">
                {move || match page.get() {
                    Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                    Page::Inventory => view! { <ProductsTable /> }.into_any(),
                    Page::Orders => view! { <OrdersTable /> }.into_any(),
                    Page::Suppliers => view! { <SuppliersTable /> }.into_any(),
                    Page::Reports => view! { <ReportsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
