use super::model::{HttpSupplierApi, SupplierApi};
use super::view::SupplierDetails;
use super::view_model::SupplierDetailsViewModel;
use crate::layout::header::Header;
use crate::shared::config::AppConfig;
use crate::shared::dialogs::confirm;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_supplier::SupplierId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;

/// Route entry for `/new` and `/new/:id`; `id` is the decoded path segment.
#[component]
pub fn SupplierDetailsPage(#[prop(optional)] id: Option<String>) -> impl IntoView {
    let id = id.and_then(|raw| match SupplierId::from_string(&raw) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("Ignoring route id {:?}: {}", raw, e);
            None
        }
    });

    let config = expect_context::<AppConfig>();
    let api: Rc<dyn SupplierApi> = Rc::new(HttpSupplierApi::new(config.api.resolve_base_url()));

    let navigate = use_navigate();
    let navigate: Rc<dyn Fn(&str)> =
        Rc::new(move |path: &str| navigate(path, NavigateOptions::default()));

    let vm = SupplierDetailsViewModel::new(
        id,
        api,
        use_notifications(),
        navigate,
        Rc::new(confirm),
    );

    view! {
        <Header />
        <div class="content">
            <SupplierDetails vm=vm />
        </div>
    }
}
