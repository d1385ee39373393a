use crate::layout::header::Header;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Header />
        <div class="content">
            <PageHeader title="Profile" />
            <Card>
                <p>"Account details are managed by the account service."</p>
            </Card>
        </div>
    }
}
