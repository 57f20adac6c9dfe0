use contracts::enums::BadgeTone;
use leptos::prelude::*;

/// Status badge colored by its tone
#[component]
pub fn Badge(
    tone: BadgeTone,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", tone.css_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge for an optional status; unknown statuses render as a neutral dash
#[component]
pub fn StatusBadge(
    label: Option<&'static str>,
    tone: Option<BadgeTone>,
) -> impl IntoView {
    let tone = tone.unwrap_or(BadgeTone::Neutral);
    let text = label.unwrap_or("-");
    view! {
        <Badge tone=tone>{text}</Badge>
    }
}
