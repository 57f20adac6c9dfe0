//! Supplier performance indicators shown on the detail panel

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Positive => "kpi__change kpi__change--positive",
            Trend::Negative => "kpi__change kpi__change--negative",
            Trend::Neutral => "kpi__change",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplierKpi {
    pub label: &'static str,
    pub value: &'static str,
    /// Change since the previous period, as displayed
    pub change: &'static str,
    pub trend: Trend,
}

/// Indicators for a supplier. The backend has no performance endpoint yet, so
/// every supplier reports the same canned figures.
pub fn supplier_kpis(_supplier_id: &str) -> [SupplierKpi; 4] {
    [
        SupplierKpi { label: "On-Time Delivery", value: "95%", change: "+2%", trend: Trend::Positive },
        SupplierKpi { label: "Quality Acceptance", value: "98%", change: "+1%", trend: Trend::Positive },
        SupplierKpi { label: "Price Competitiveness", value: "A", change: "Same", trend: Trend::Neutral },
        // Faster responses are an improvement
        SupplierKpi { label: "Response Time", value: "4hrs", change: "-1hr", trend: Trend::Positive },
    ]
}
