use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

/// Entry page. Sign-in is handled outside this application.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-container">
            <Card>
                <PageHeader title="Sign in" />
                <p>"Sign in to manage energy suppliers."</p>
                <div class="login-links">
                    <A href="/dashboard">"Continue"</A>
                    <A href="/register">"Create an account"</A>
                </div>
            </Card>
        </div>
    }
}
