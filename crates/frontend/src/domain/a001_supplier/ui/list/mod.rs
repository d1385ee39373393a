use crate::layout::header::Header;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

/// `/consultas`: landing page after a supplier is saved or deleted.
#[component]
pub fn SupplierListPage() -> impl IntoView {
    view! {
        <Header />
        <div class="content">
            <PageHeader title="Suppliers">
                <A href="/new" attr:class="btn btn-primary">
                    {icon("user-plus")}
                    " New supplier"
                </A>
            </PageHeader>
            <Card>
                <p>"Open a supplier at /new/<id> to edit or delete it."</p>
            </Card>
        </div>
    }
}
