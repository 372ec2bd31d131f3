#![forbid(unsafe_code)]
//! Semainier — bibliothèque de planification hebdomadaire d'équipe (sans BD).
//!
//! - Grille fixe 7 jours × 3 créneaux, 2 employés par créneau.
//! - Affectation gloutonne en trois phases : préférences, résolution des
//!   non-placés, complément d'effectif minimal.
//! - Déterministe à entrées identiques ; stockage fichiers (JSON/CSV).

pub mod grid;
pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;
pub mod storage;

pub use grid::{ShiftGrid, ShiftSlot, MIN_STAFF};
pub use model::{
    day_index, day_name, Employee, EmployeeId, Roster, ShiftType, DAYS, MAX_DAYS_PER_WEEK,
};
pub use report::{ScheduleRenderer, TextReport};
pub use scheduler::{SchedError, Scheduler, StaffingShortage};
pub use storage::{JsonStorage, Storage};
