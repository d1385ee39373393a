use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="login-container">
            <Card>
                <PageHeader title="Create an account" />
                <p>"Registration is handled by the account service."</p>
                <A href="/login">"Back to sign in"</A>
            </Card>
        </div>
    }
}
