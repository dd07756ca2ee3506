use super::view_model::{CoordinatorHandle, FormMode, LossDetailsViewModel};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_production::aggregate::Production;
use contracts::domain::a003_production_loss::{
    option_product_name, production_options, LOSS_TYPES,
};
use leptos::prelude::*;

#[component]
pub fn LossDetails(
    mode: FormMode,
    #[prop(into)] productions: Signal<Vec<Production>>,
    #[prop(into)] products: Signal<Vec<Product>>,
    coordinator: CoordinatorHandle,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = LossDetailsViewModel::new(mode, coordinator);
    let form = vm.form;
    let saving = vm.saving;
    let title = vm.title();
    let submit_label = vm.submit_label();

    let options = Memo::new(move |_| production_options(&productions.get(), &products.get()));

    let product_hint = move || {
        let production_id = form.with(|f| f.production_id.clone());
        if production_id.is_empty() {
            return None;
        }
        let name = options.with(|opts| option_product_name(opts, &production_id).to_string());
        Some(view! { <div class="form-hint">"Producto: " {name}</div> })
    };

    view! {
        <Modal title=title on_close=on_close>
            <div class="details-form">
                <div class="form-group">
                    <label for="loss-production">"Producción *"</label>
                    <select
                        id="loss-production"
                        prop:value=move || form.with(|f| f.production_id.clone())
                        on:change=move |ev| {
                            form.update(|f| f.production_id = event_target_value(&ev));
                        }
                    >
                        <option value="">"Selecciona una producción"</option>
                        {move || options.get().into_iter().map(|opt| {
                            let label = opt.label().to_string();
                            view! { <option value=opt.id>{label}</option> }
                        }).collect_view()}
                    </select>
                    {product_hint}
                </div>

                <div class="form-group">
                    <label for="loss-quantity">"Cantidad *"</label>
                    <input
                        type="number"
                        id="loss-quantity"
                        min="1"
                        prop:value=move || form.with(|f| f.quantity.to_string())
                        on:input=move |ev| {
                            let quantity = event_target_value(&ev).trim().parse::<i64>().unwrap_or(0);
                            form.update(|f| f.quantity = quantity);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="loss-type">"Tipo de pérdida *"</label>
                    <select
                        id="loss-type"
                        prop:value=move || form.with(|f| f.lost_type.clone())
                        on:change=move |ev| {
                            form.update(|f| f.lost_type = event_target_value(&ev));
                        }
                    >
                        {LOSS_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="loss-observations">"Observaciones"</label>
                    <textarea
                        id="loss-observations"
                        rows="3"
                        placeholder="Detalles adicionales (opcional)"
                        prop:value=move || form.with(|f| f.observations.clone())
                        on:input=move |ev| {
                            form.update(|f| f.observations = event_target_value(&ev));
                        }
                    />
                </div>
            </div>

            <div class="modal-footer">
                <button
                    class="button button--secondary"
                    on:click=move |_| on_close.run(())
                    disabled=move || saving.get()
                >
                    "Cancelar"
                </button>
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || saving.get()
                >
                    {icon("save")}
                    {move || if saving.get() { "Guardando..." } else { submit_label }}
                </button>
            </div>
        </Modal>
    }
}
