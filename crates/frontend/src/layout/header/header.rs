use crate::routes::routes::AppRoute;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// (route, label, icon) of every entry in the top bar.
const NAV_ITEMS: [(AppRoute, &str, &str); 4] = [
    (AppRoute::Dashboard, "Dashboard", "dashboard"),
    (AppRoute::SupplierList, "Suppliers", "suppliers"),
    (AppRoute::NewSupplier, "New supplier", "user-plus"),
    (AppRoute::Profile, "Profile", "user"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Suppliers"</span>
                <nav class="header__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(route, label, name)| view! {
                            <A href=route.path() attr:class="header__link">
                                {icon(name)}
                                <span>{label}</span>
                            </A>
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
