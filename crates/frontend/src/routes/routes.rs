use crate::domain::a001_supplier::ui::details::SupplierDetailsPage;
use crate::domain::a001_supplier::ui::list::SupplierListPage;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;

/// Where unknown paths end up.
pub const FALLBACK_PATH: &str = "/login";

/// Pages reachable by URL. [`RoutedPage`] renders whatever `resolve` returns,
/// so this is the only route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    SupplierList,
    Dashboard,
    NewSupplier,
    EditSupplier(String),
    Profile,
    NotFound,
}

impl AppRoute {
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["login"] => AppRoute::Login,
            ["register"] => AppRoute::Register,
            ["consultas"] => AppRoute::SupplierList,
            ["dashboard"] => AppRoute::Dashboard,
            ["new"] => AppRoute::NewSupplier,
            ["new", id] => match urlencoding::decode(id) {
                Ok(id) => AppRoute::EditSupplier(id.into_owned()),
                Err(_) => AppRoute::NotFound,
            },
            ["perfil"] => AppRoute::Profile,
            _ => AppRoute::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Login => "/login".to_string(),
            AppRoute::Register => "/register".to_string(),
            AppRoute::SupplierList => "/consultas".to_string(),
            AppRoute::Dashboard => "/dashboard".to_string(),
            AppRoute::NewSupplier => "/new".to_string(),
            AppRoute::EditSupplier(id) => format!("/new/{}", urlencoding::encode(id)),
            AppRoute::Profile => "/perfil".to_string(),
            AppRoute::NotFound => FALLBACK_PATH.to_string(),
        }
    }
}

// Dispatch by hand instead of <Routes>: one table (AppRoute::resolve) for
// both rendering and tests.
#[component]
fn RoutedPage() -> impl IntoView {
    let pathname = use_location().pathname;

    move || match AppRoute::resolve(&pathname.get()) {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::SupplierList => view! { <SupplierListPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NewSupplier => view! { <SupplierDetailsPage /> }.into_any(),
        AppRoute::EditSupplier(id) => view! { <SupplierDetailsPage id=id /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => {
            log::warn!("No page for {}, redirecting", pathname.get_untracked());
            view! { <Redirect path=FALLBACK_PATH /> }.into_any()
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <RoutedPage />
            </main>
        </Router>
    }
}
