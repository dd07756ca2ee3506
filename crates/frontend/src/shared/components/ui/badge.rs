use contracts::domain::a003_production_loss::LOSS_TYPE_DAMAGE;
use leptos::prelude::*;

/// Компонент Badge с разными вариантами
#[component]
pub fn Badge(
    /// Вариант: "primary", "success", "warning", "error", "neutral" (по умолчанию)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Содержимое
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Вариант бейджа для типа потери: повреждение выделяется, остальное нейтрально
pub fn loss_type_variant(lost_type: &str) -> &'static str {
    if lost_type == LOSS_TYPE_DAMAGE {
        "warning"
    } else {
        "neutral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_production_loss::LOSS_TYPE_LOSS;

    #[test]
    fn test_loss_type_variant() {
        assert_eq!(loss_type_variant(LOSS_TYPE_DAMAGE), "warning");
        assert_eq!(loss_type_variant(LOSS_TYPE_LOSS), "neutral");
        assert_eq!(loss_type_variant("Merma"), "neutral");
    }
}
