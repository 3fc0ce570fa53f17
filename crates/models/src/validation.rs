//! Table-driven field validation.
//!
//! Each entity declares a static list of [`Rule`]s; [`violations`] runs all of
//! them so callers can report every problem at once instead of the first one.

use crate::errors::ModelError;

/// One field constraint: the predicate must hold, otherwise `message` is reported.
pub struct Rule<T> {
    pub field: &'static str,
    pub check: fn(&T) -> bool,
    pub message: &'static str,
}

pub trait Validate: Sized + 'static {
    fn rules() -> &'static [Rule<Self>];
}

/// Messages of every rule the entity breaks, in declaration order.
pub fn violations<T: Validate>(entity: &T) -> Vec<String> {
    T::rules()
        .iter()
        .filter(|rule| !(rule.check)(entity))
        .map(|rule| rule.message.to_string())
        .collect()
}

pub fn validate<T: Validate>(entity: &T) -> Result<(), ModelError> {
    let errors = violations(entity);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ModelError::Validation(errors))
    }
}

pub fn not_blank(s: &str) -> bool {
    !s.trim().is_empty()
}
