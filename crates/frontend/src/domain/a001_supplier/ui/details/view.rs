use super::view_model::{LoadState, SupplierDetailsViewModel};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::a001_supplier::SupplierField;
use leptos::prelude::*;

fn save_label(is_busy: bool, is_edit: bool) -> &'static str {
    match (is_busy, is_edit) {
        (true, _) => "Saving...",
        (false, true) => "Save changes",
        (false, false) => "Save new",
    }
}

#[component]
pub fn SupplierDetails(vm: SupplierDetailsViewModel) -> impl IntoView {
    on_cleanup(vm.disposer());
    vm.load_command();

    let form = vm.form;
    let is_busy = vm.is_busy;
    let load_state = vm.load_state;
    let is_edit = vm.is_edit_mode();
    let title = if is_edit { "Edit supplier" } else { "New supplier" };
    let page_title = if is_edit { "Edit supplier" } else { "Supplier registration" };

    let inputs = SupplierField::ALL
        .into_iter()
        .map(|field| {
            let vm = vm.clone();
            view! {
                <div class="form-group">
                    <label for=field.wire_name()>{field.label()}</label>
                    <input
                        type=field.input_type()
                        id=field.wire_name()
                        name=field.wire_name()
                        step=field.step()
                        prop:value=move || form.with(|f| f.get(field).to_string())
                        on:input=move |ev| {
                            let input = event_target::<web_sys::HtmlInputElement>(&ev);
                            if let Err(e) = vm.apply_input(&input.name(), input.value()) {
                                log::warn!("Unhandled input: {}", e);
                            }
                        }
                        disabled=move || is_busy.get()
                    />
                </div>
            }
        })
        .collect_view();

    let delete_button = is_edit.then(|| {
        let vm = vm.clone();
        view! {
            <button
                class="btn btn-danger"
                on:click=move |_| vm.delete_command()
                disabled=move || is_busy.get()
            >
                "Delete supplier"
                {icon("trash")}
            </button>
        }
    });

    view! {
        <div class="details-container supplier-details">
            <PageHeader title=page_title />

            {move || match load_state.get() {
                LoadState::Loading => {
                    Some(view! { <div class="loading">"Loading..."</div> }.into_any())
                }
                LoadState::Failed(reason) => Some(view! {
                    <div class="error">{format!("Supplier could not be loaded ({})", reason)}</div>
                }.into_any()),
                LoadState::Idle | LoadState::Ready => None,
            }}

            <div class="supplier-card">
                <div class="details-header">
                    {icon("user-plus")}
                    <h2>{title}</h2>
                </div>

                <div class="details-form">{inputs}</div>

                <div class="details-actions">
                    {delete_button}
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command()
                        disabled=move || is_busy.get()
                    >
                        {move || save_label(is_busy.get(), is_edit)}
                        {icon("save")}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_label() {
        assert_eq!(save_label(true, true), "Saving...");
        assert_eq!(save_label(true, false), "Saving...");
        assert_eq!(save_label(false, true), "Save changes");
        assert_eq!(save_label(false, false), "Save new");
    }
}
