use crate::domain::a003_production_loss::api;
use crate::domain::a003_production_loss::mutation::{BrowserConfirm, HttpLossApi, MutationCoordinator};
use crate::domain::a003_production_loss::ui::details::{CoordinatorHandle, FormMode, LossDetails};
use crate::shared::components::ui::badge::{loss_type_variant, Badge};
use crate::shared::date_utils::format_timestamp_date;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_production::aggregate::Production;
use contracts::domain::a003_production_loss::{
    filter_with_catalog, loss_types, summarize, ProductCatalog, ProductionLoss, TypeFilter,
    TYPE_FILTER_ALL,
};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

/// Показывать кнопку удаления в строке. Сам сценарий удаления (API, подтверждение,
/// уведомления) доступен всегда.
pub const LOSS_DELETE_ENABLED: bool = false;

/// Состояние одного независимо загружаемого списка
#[derive(Clone, Debug, PartialEq)]
pub enum Load<T> {
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    pub fn error(&self) -> Option<&str> {
        match self {
            Load::Failed(e) => Some(e),
            _ => None,
        }
    }
}

impl<T: Clone + Default> Load<T> {
    /// Загруженное значение; незагруженный или ошибочный список считается пустым
    pub fn value_or_default(&self) -> T {
        match self {
            Load::Ready(v) => v.clone(),
            _ => T::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum PageState {
    Loading,
    Failed(String),
    Ready,
}

/// Страница ждёт только список потерь; любая ошибка загрузки заменяет страницу
fn page_state<A, B, C>(losses: &Load<A>, productions: &Load<B>, products: &Load<C>) -> PageState {
    let failure = losses
        .error()
        .or_else(|| productions.error())
        .or_else(|| products.error());

    match (failure, losses) {
        (Some(e), _) => PageState::Failed(e.to_string()),
        (None, Load::Pending) => PageState::Loading,
        _ => PageState::Ready,
    }
}

#[derive(Clone, Debug, PartialEq)]
struct LossRow {
    record: ProductionLoss,
    product_name: String,
}

fn type_filter_label(value: &str) -> String {
    if value == TYPE_FILTER_ALL {
        "Todos los tipos".to_string()
    } else {
        value.to_string()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductionLossList() -> impl IntoView {
    let notifications = use_notifications();

    let losses = RwSignal::new(Load::<Vec<ProductionLoss>>::Pending);
    let productions = RwSignal::new(Load::<Vec<Production>>::Pending);
    let products = RwSignal::new(Load::<Vec<Product>>::Pending);

    let search = RwSignal::new(String::new());
    let type_filter = RwSignal::new(TYPE_FILTER_ALL.to_string());

    let creating = RwSignal::new(false);
    let editing = RwSignal::new(None::<FormMode>);

    let coordinator: CoordinatorHandle = StoredValue::new_local(Rc::new(
        MutationCoordinator::new(HttpLossApi, notifications),
    ));

    let load_losses = move || {
        leptos::task::spawn_local(async move {
            match api::fetch_losses().await {
                Ok(v) => losses.set(Load::Ready(v)),
                Err(e) => losses.set(Load::Failed(e)),
            }
        });
    };

    let load_reference_data = move || {
        leptos::task::spawn_local(async move {
            match api::fetch_productions().await {
                Ok(v) => productions.set(Load::Ready(v)),
                Err(e) => productions.set(Load::Failed(e)),
            }
        });
        leptos::task::spawn_local(async move {
            match api::fetch_products().await {
                Ok(v) => products.set(Load::Ready(v)),
                Err(e) => products.set(Load::Failed(e)),
            }
        });
    };

    load_losses();
    load_reference_data();

    let state = Memo::new(move |_| {
        losses.with(|l| productions.with(|p| products.with(|x| page_state(l, p, x))))
    });

    let all_losses = Memo::new(move |_| losses.with(|l| l.value_or_default()));
    let production_list = Signal::derive(move || productions.with(|p| p.value_or_default()));
    let product_list = Signal::derive(move || products.with(|p| p.value_or_default()));

    let summary = Memo::new(move |_| all_losses.with(|l| summarize(l)));
    let type_options = Memo::new(move |_| all_losses.with(|l| loss_types(l)));

    let rows = Memo::new(move |_| {
        let records = all_losses.get();
        let production_items = production_list.get();
        let product_items = product_list.get();
        let catalog = ProductCatalog::new(&production_items, &product_items);
        let filter = TypeFilter::from_value(&type_filter.get());

        filter_with_catalog(&records, &catalog, &search.get(), &filter)
            .into_iter()
            .map(|record| LossRow {
                product_name: catalog.display_name(&record.production_id).to_string(),
                record: record.clone(),
            })
            .collect::<Vec<_>>()
    });

    let handle_edit = move |record: ProductionLoss| {
        let production_items = production_list.get_untracked();
        let product_items = product_list.get_untracked();
        let enriched = ProductCatalog::new(&production_items, &product_items).enrich(&record);
        editing.set(Some(FormMode::Edit(enriched)));
    };

    let handle_delete = move |id: String| {
        let coordinator = coordinator.get_value();
        leptos::task::spawn_local(async move {
            let outcome = coordinator.delete(&id, &BrowserConfirm).await;
            if outcome.is_success() {
                load_losses();
            }
        });
    };

    let close_create = Callback::new(move |_| creating.set(false));
    let close_edit = Callback::new(move |_| editing.set(None));
    let saved_create = Callback::new(move |_| {
        creating.set(false);
        load_losses();
    });
    let saved_edit = Callback::new(move |_| {
        editing.set(None);
        load_losses();
    });

    let table = move || {
        let visible = rows.get();
        if visible.is_empty() {
            return view! {
                <tr class="table__row">
                    <td class="table__cell table__cell--empty" colspan="6">
                        "No se encontraron registros de pérdidas"
                    </td>
                </tr>
            }
            .into_any();
        }

        visible
            .into_iter()
            .map(|row| {
                let record_for_edit = row.record.clone();
                let id_for_delete = row.record.id.clone();
                let lost_type = row.record.lost_type.clone();
                let variant = loss_type_variant(&lost_type).to_string();
                let observations = row.record.observations_text().to_string();
                let date = format_timestamp_date(row.record.created_at.as_ref());
                view! {
                    <tr class="table__row">
                        <td class="table__cell">{row.product_name}</td>
                        <td class="table__cell table__cell--number">{row.record.quantity}</td>
                        <td class="table__cell">
                            <Badge variant=variant>{lost_type}</Badge>
                        </td>
                        <td class="table__cell">{observations}</td>
                        <td class="table__cell">{date}</td>
                        <td class="table__cell table__cell--actions">
                            <button
                                class="button button--icon"
                                title="Editar"
                                on:click=move |_| handle_edit(record_for_edit.clone())
                            >
                                {icon("edit")}
                            </button>
                            {LOSS_DELETE_ENABLED.then(|| view! {
                                <button
                                    class="button button--icon button--danger"
                                    title="Eliminar"
                                    on:click=move |_| handle_delete(id_for_delete.clone())
                                >
                                    {icon("delete")}
                                </button>
                            })}
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let content = move || match state.get() {
        PageState::Loading => view! {
            <div class="page-loading">"Cargando datos de pérdidas..."</div>
        }
        .into_any(),
        PageState::Failed(e) => view! {
            <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                <span class="warning-box__icon" style="color: var(--color-error);">{icon("alert")}</span>
                <span class="warning-box__text" style="color: var(--color-error);">"Error: " {e}</span>
            </div>
        }
        .into_any(),
        PageState::Ready => view! {
            <div class="header__filters">
                <Input value=search placeholder="Buscar pérdidas..." />
                <Select value=type_filter size=SelectSize::Small>
                    {move || type_options.get().into_iter().map(|t| {
                        let label = type_filter_label(&t);
                        view! { <option value=t>{label}</option> }
                    }).collect_view()}
                </Select>
            </div>

            <div class="stat-cards">
                <Card>
                    <div class="stat-card__label">"Total Pérdidas"</div>
                    <div class="stat-card__value">{move || summary.with(|s| s.total)}</div>
                </Card>
                <Card>
                    <div class="stat-card__label">"Por Daños"</div>
                    <div class="stat-card__value">{move || summary.with(|s| s.damage())}</div>
                </Card>
                <Card>
                    <div class="stat-card__label">"Por Pérdidas"</div>
                    <div class="stat-card__value">{move || summary.with(|s| s.loss())}</div>
                </Card>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Producción"</th>
                            <th class="table__header-cell">"Cantidad"</th>
                            <th class="table__header-cell">"Tipo"</th>
                            <th class="table__header-cell">"Observaciones"</th>
                            <th class="table__header-cell">"Fecha"</th>
                            <th class="table__header-cell">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>{table}</tbody>
                </table>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Gestión de Pérdidas"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| creating.set(true)>
                        {icon("plus")}
                        "Nueva Pérdida"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            load_losses();
                            load_reference_data();
                        }
                    >
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            {content}

            <Show when=move || creating.get()>
                <LossDetails
                    mode=FormMode::Create
                    productions=production_list
                    products=product_list
                    coordinator=coordinator
                    on_saved=saved_create
                    on_close=close_create
                />
            </Show>

            {move || editing.get().map(|mode| view! {
                <LossDetails
                    mode=mode
                    productions=production_list
                    products=product_list
                    coordinator=coordinator
                    on_saved=saved_edit
                    on_close=close_edit
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_state_waits_for_losses_only() {
        let losses: Load<Vec<ProductionLoss>> = Load::Pending;
        let productions: Load<Vec<Production>> = Load::Ready(vec![]);
        let products: Load<Vec<Product>> = Load::Pending;
        assert_eq!(page_state(&losses, &productions, &products), PageState::Loading);

        let losses: Load<Vec<ProductionLoss>> = Load::Ready(vec![]);
        assert_eq!(page_state(&losses, &productions, &products), PageState::Ready);
    }

    #[test]
    fn test_any_failed_load_fails_the_page() {
        let losses: Load<Vec<ProductionLoss>> = Load::Ready(vec![]);
        let productions: Load<Vec<Production>> = Load::Pending;
        let products: Load<Vec<Product>> = Load::Failed("HTTP 500".into());
        assert_eq!(
            page_state(&losses, &productions, &products),
            PageState::Failed("HTTP 500".into())
        );
    }

    #[test]
    fn test_pending_list_counts_as_empty() {
        let pending: Load<Vec<Production>> = Load::Pending;
        assert!(pending.value_or_default().is_empty());
        assert_eq!(pending.error(), None);
    }

    #[test]
    fn test_type_filter_label() {
        assert_eq!(type_filter_label("all"), "Todos los tipos");
        assert_eq!(type_filter_label("Daño"), "Daño");
    }
}
