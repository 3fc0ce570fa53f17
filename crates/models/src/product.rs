use sea_orm::{entity::prelude::*, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::validation::{not_blank, Rule, Validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category_id: Uuid,
    pub price: f64,
    /// Units currently in stock.
    pub amount: i32,
    pub date_creation: DateTimeWithTimeZone,
    /// Last time `amount` changed; other edits leave it alone.
    pub date_last_change: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(super::category::Entity)
                .from(Column::CategoryId)
                .to(super::category::Column::Id)
                .into(),
        }
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Unsaved product; creation and last-change stamps both start at `now`.
    pub fn new(
        name: &str,
        description: &str,
        category_id: Uuid,
        price: f64,
        amount: i32,
        now: DateTimeWithTimeZone,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            category_id,
            price,
            amount,
            date_creation: now,
            date_last_change: now,
        }
    }

    /// Overwrite the stock amount, bumping `date_last_change` only when the
    /// value actually differs from the stored one. Returns whether it changed.
    pub fn set_amount(&mut self, amount: i32, now: DateTimeWithTimeZone) -> bool {
        let changed = self.amount != amount;
        if changed {
            self.date_last_change = now;
        }
        self.amount = amount;
        changed
    }

    /// Active model with every column `Set`, usable for both insert and update.
    pub fn to_active_model(&self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            name: Set(self.name.clone()),
            description: Set(self.description.clone()),
            category_id: Set(self.category_id),
            price: Set(self.price),
            amount: Set(self.amount),
            date_creation: Set(self.date_creation),
            date_last_change: Set(self.date_last_change),
        }
    }
}

fn name_present(p: &Model) -> bool { not_blank(&p.name) }
fn description_present(p: &Model) -> bool { not_blank(&p.description) }
// NaN compares false, so it fails too
fn price_non_negative(p: &Model) -> bool { p.price >= 0.0 }
fn amount_non_negative(p: &Model) -> bool { p.amount >= 0 }

static RULES: [Rule<Model>; 4] = [
    Rule { field: "name", check: name_present, message: "Product name can't be null or empty" },
    Rule { field: "description", check: description_present, message: "Product description can't be null or empty" },
    Rule { field: "price", check: price_non_negative, message: "Product price can't be less than 0" },
    Rule { field: "amount", check: amount_non_negative, message: "Product amount can't be less than 0" },
];

impl Validate for Model {
    fn rules() -> &'static [Rule<Self>] { &RULES }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crate::validation::violations;

    fn hammer(price: f64, amount: i32) -> Model {
        Model::new("Hammer", "steel", Uuid::new_v4(), price, amount, Utc::now().into())
    }

    #[test]
    fn new_product_starts_with_equal_stamps() {
        let p = hammer(1000.0, 10);
        assert_eq!(p.date_creation, p.date_last_change);
        assert!(violations(&p).is_empty());
    }

    #[test]
    fn every_broken_field_is_reported() {
        let p = Model::new(" ", "", Uuid::new_v4(), -50.0, -1, Utc::now().into());
        assert_eq!(
            violations(&p),
            vec![
                "Product name can't be null or empty",
                "Product description can't be null or empty",
                "Product price can't be less than 0",
                "Product amount can't be less than 0",
            ]
        );
    }

    #[test]
    fn zero_price_and_amount_are_valid_but_nan_is_not() {
        assert!(violations(&hammer(0.0, 0)).is_empty());
        assert_eq!(violations(&hammer(f64::NAN, 0)), vec!["Product price can't be less than 0"]);
    }

    #[test]
    fn set_amount_only_bumps_stamp_on_change() {
        let mut p = hammer(1000.0, 10);
        let before = p.date_last_change;
        let later: DateTimeWithTimeZone = (Utc::now() + Duration::seconds(5)).into();

        assert!(!p.set_amount(10, later));
        assert_eq!(p.date_last_change, before);

        assert!(p.set_amount(5, later));
        assert_eq!(p.amount, 5);
        assert_eq!(p.date_last_change, later);
        assert_eq!(p.date_creation, before);
    }
}
