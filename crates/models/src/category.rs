use sea_orm::{entity::prelude::*, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::validation::{not_blank, Rule, Validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Product }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::has_many(super::product::Entity).into(),
        }
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Unsaved category with a freshly generated id.
    pub fn new(name: &str) -> Self {
        Self { id: Uuid::new_v4(), name: name.to_string() }
    }

    /// Active model with every column `Set`, usable for both insert and update.
    pub fn to_active_model(&self) -> ActiveModel {
        ActiveModel { id: Set(self.id), name: Set(self.name.clone()) }
    }
}

fn name_present(c: &Model) -> bool { not_blank(&c.name) }

static RULES: [Rule<Model>; 1] = [
    Rule { field: "name", check: name_present, message: "Category name can't be null or empty" },
];

impl Validate for Model {
    fn rules() -> &'static [Rule<Self>] { &RULES }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::violations;

    #[test]
    fn new_category_gets_distinct_ids() {
        let a = Model::new("Tools");
        let b = Model::new("Tools");
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Tools");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(violations(&Model::new("Tools")).is_empty());
        assert_eq!(violations(&Model::new("   ")), vec!["Category name can't be null or empty"]);
        assert_eq!(violations(&Model::new("")).len(), 1);
    }
}
