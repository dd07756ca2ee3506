use crate::domain::common::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Единицы, повреждённые при производстве или после
pub const LOSS_TYPE_DAMAGE: &str = "Daño";

/// Потерянные единицы (недостача)
pub const LOSS_TYPE_LOSS: &str = "Pérdida";

/// Типы потерь в формах создания/редактирования
pub const LOSS_TYPES: [&str; 2] = [LOSS_TYPE_DAMAGE, LOSS_TYPE_LOSS];

/// Потеря производства (a003)
///
/// Количество единиц одной партии, повреждённых или потерянных.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionLoss {
    pub id: String,

    /// Ссылка на производственную партию (a002)
    pub production_id: String,

    /// Количество единиц, строго больше нуля
    pub quantity: i64,

    /// Тип потери, см. [`LOSS_TYPES`]
    pub lost_type: String,

    #[serde(default)]
    pub observations: Option<String>,

    /// Задаётся сервером при создании
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductionLoss {
    /// Новая запись из DTO с новым id и временем создания
    pub fn new_for_insert(dto: &ProductionLossDto) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            production_id: dto.production_id.clone(),
            quantity: dto.quantity,
            lost_type: dto.lost_type.clone(),
            observations: normalize_observations(dto.observations.as_deref()),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Полная замена редактируемых полей
    pub fn update(&mut self, dto: &ProductionLossDto) {
        self.production_id = dto.production_id.clone();
        self.quantity = dto.quantity;
        self.lost_type = dto.lost_type.clone();
        self.observations = normalize_observations(dto.observations.as_deref());
    }

    pub fn touch_updated(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    /// Примечания или пустая строка
    pub fn observations_text(&self) -> &str {
        self.observations.as_deref().unwrap_or("")
    }

    /// Редактируемые поля в виде DTO
    pub fn to_dto(&self) -> ProductionLossDto {
        ProductionLossDto {
            production_id: self.production_id.clone(),
            quantity: self.quantity,
            lost_type: self.lost_type.clone(),
            observations: self.observations.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_fields(&self.production_id, self.quantity, &self.lost_type)
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for ProductionLoss {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "production_loss"
    }

    fn element_name() -> &'static str {
        "Pérdida"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO создания/обновления
///
/// Только редактируемые поля: без id, меток времени и имени продукта
/// для отображения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionLossDto {
    pub production_id: String,
    pub quantity: i64,
    pub lost_type: String,
    #[serde(default)]
    pub observations: Option<String>,
}

impl Default for ProductionLossDto {
    fn default() -> Self {
        Self {
            production_id: String::new(),
            quantity: 0,
            lost_type: LOSS_TYPE_DAMAGE.to_string(),
            observations: None,
        }
    }
}

impl ProductionLossDto {
    /// Проверяются только наличие и знак; существование партии
    /// не проверяется.
    pub fn validate(&self) -> Result<(), String> {
        validate_fields(&self.production_id, self.quantity, &self.lost_type)
    }
}

fn validate_fields(production_id: &str, quantity: i64, lost_type: &str) -> Result<(), String> {
    if production_id.trim().is_empty() {
        return Err("La producción es obligatoria".into());
    }
    if quantity <= 0 {
        return Err("La cantidad debe ser mayor que cero".into());
    }
    if lost_type.trim().is_empty() {
        return Err("El tipo de pérdida es obligatorio".into());
    }
    Ok(())
}

fn normalize_observations(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(production_id: &str, quantity: i64, lost_type: &str) -> ProductionLossDto {
        ProductionLossDto {
            production_id: production_id.into(),
            quantity,
            lost_type: lost_type.into(),
            observations: Some("  roto en transporte ".into()),
        }
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(dto("p1", 5, LOSS_TYPE_DAMAGE).validate().is_ok());
        assert!(dto("", 5, LOSS_TYPE_DAMAGE).validate().is_err());
        assert!(dto("p1", 0, LOSS_TYPE_DAMAGE).validate().is_err());
        assert!(dto("p1", -3, LOSS_TYPE_DAMAGE).validate().is_err());
        assert!(dto("p1", 5, "").validate().is_err());
    }

    #[test]
    fn test_validate_does_not_require_known_production() {
        // любая непустая ссылка проходит
        assert!(dto("deleted-production", 1, LOSS_TYPE_LOSS).validate().is_ok());
    }

    #[test]
    fn test_new_for_insert_assigns_identity() {
        let record = ProductionLoss::new_for_insert(&dto("p1", 5, LOSS_TYPE_DAMAGE));
        assert!(!record.id.is_empty());
        assert!(record.created_at.is_some());
        assert_eq!(record.observations.as_deref(), Some("roto en transporte"));
    }

    #[test]
    fn test_update_replaces_all_editable_fields() {
        let mut record = ProductionLoss::new_for_insert(&dto("p1", 5, LOSS_TYPE_DAMAGE));
        let id = record.id.clone();
        let created_at = record.created_at;

        record.update(&ProductionLossDto {
            production_id: "p2".into(),
            quantity: 9,
            lost_type: LOSS_TYPE_LOSS.into(),
            observations: Some("   ".into()),
        });

        assert_eq!(record.id, id);
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.production_id, "p2");
        assert_eq!(record.quantity, 9);
        assert_eq!(record.lost_type, LOSS_TYPE_LOSS);
        assert_eq!(record.observations, None);
        assert_eq!(record.observations_text(), "");
    }

    #[test]
    fn test_default_dto_is_damage_with_zero_quantity() {
        let d = ProductionLossDto::default();
        assert_eq!(d.lost_type, LOSS_TYPE_DAMAGE);
        assert_eq!(d.quantity, 0);
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"id":"l1","production_id":"p1","quantity":5,"lost_type":"Daño"}"#;
        let record: ProductionLoss = serde_json::from_str(json).unwrap();
        assert_eq!(record.observations, None);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(ProductionLoss::full_name(), "a003_production_loss");
    }
}
