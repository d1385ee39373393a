use crate::layout::header::Header;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Header />
        <div class="content">
            <PageHeader title="Dashboard" subtitle={"Overview".to_string()} />
            <Card>
                <A href="/consultas">{icon("suppliers")}" Browse suppliers"</A>
                <A href="/new">{icon("user-plus")}" Register a supplier"</A>
            </Card>
        </div>
    }
}
