use crate::domain::a004_order::timeline::timeline;
use crate::shared::components::table::{format_count, format_currency, TableCellMoney};
use crate::shared::components::ui::StatusBadge;
use chrono::Utc;
use contracts::domain::a004_order::Order;
use leptos::prelude::*;
use thaw::*;

/// Order lines and fulfilment timeline
#[component]
pub fn OrderDetail(order: Order, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Order #{}", order.id);
    let status = order.status;
    let payment = order.payment_status;
    let total = format_currency(order.amount());
    let steps = timeline(&order, Utc::now());

    let lines = order
        .order_items
        .into_iter()
        .map(|line| {
            let product = line
                .product
                .as_ref()
                .map(|p| p.display_name().to_string())
                .unwrap_or_else(|| line.product_id.clone());
            let sku = line.product.as_ref().and_then(|p| p.sku.clone()).unwrap_or_default();
            let quantity = line.quantity.map(format_count).unwrap_or_else(|| "-".to_string());
            let unit_price = line.unit_price;
            let line_total = line.line_total();
            view! {
                <TableRow>
                    <TableCell>{product}</TableCell>
                    <TableCell>{sku}</TableCell>
                    <TableCell class="text-right">{quantity}</TableCell>
                    <TableCellMoney value=Signal::derive(move || unit_price) />
                    <TableCellMoney value=Signal::derive(move || Some(line_total)) bold=true />
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="card order-detail">
            <div class="card__header">
                <h2 class="card__title">{title}</h2>
                <StatusBadge label=status.map(|s| s.label()) tone=status.map(|s| s.tone()) />
                <StatusBadge label=payment.map(|s| s.label()) tone=payment.map(|s| s.tone()) />
                <button class="button button--secondary" on:click=move |_| on_close.run(())>"Close"</button>
            </div>
            <div class="dashboard__row">
                <div>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false>"Product"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"SKU"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"Quantity"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"Unit Price"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{lines}</TableBody>
                    </Table>
                    <div class="order-detail__total">"Order total: "{total}</div>
                </div>
                <ol class="timeline">
                    {steps
                        .into_iter()
                        .map(|step| {
                            let class = if step.current { "timeline__step timeline__step--current" } else { "timeline__step" };
                            view! {
                                <li class=class>
                                    <span class="timeline__title">{step.title}</span>
                                    <span class="timeline__time">{step.at.unwrap_or_default()}</span>
                                    <span class="timeline__description">{step.description}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </div>
    }
}
