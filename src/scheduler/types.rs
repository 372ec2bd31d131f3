use crate::model::{day_name, ShiftType};
use chrono::Weekday;
use thiserror::Error;

/// Sous-effectif constaté en phase 3 : le slot (jour, créneau) n'a pas pu
/// atteindre l'effectif minimal. Donnée rapportée, jamais une erreur — la
/// génération continue et produit un planning partiel exploitable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffingShortage {
    pub day: Weekday,
    pub shift_type: ShiftType,
    /// Effectif atteint au moment de l'abandon (< MIN_STAFF).
    pub assigned: usize,
}

impl std::fmt::Display for StaffingShortage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {}/{}",
            day_name(self.day),
            self.shift_type,
            self.assigned,
            crate::grid::MIN_STAFF
        )
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
