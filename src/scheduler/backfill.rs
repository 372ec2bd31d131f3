use super::StaffingShortage;
use crate::grid::ShiftGrid;
use crate::model::{Roster, ShiftType, DAYS};

/// Phase 3 — complément d'effectif minimal. Pour chaque slot encore sous
/// l'effectif minimal, prend le premier employé du registre qui peut
/// travailler ce jour-là. S'il n'y en a aucun, le sous-effectif est
/// consigné pour ce (jour, créneau) et on passe au slot suivant.
pub(super) fn fill_understaffed(roster: &mut Roster, grid: &mut ShiftGrid) -> Vec<StaffingShortage> {
    let mut shortages = Vec::new();

    for &day in &DAYS {
        for shift_type in ShiftType::ALL {
            while !grid.slot(day, shift_type).has_minimum_staff() {
                let available = roster.employees.iter_mut().find(|e| e.can_work(day));
                match available {
                    Some(employee) => {
                        if !grid.try_add_employee(day, shift_type, employee) {
                            break;
                        }
                    }
                    None => {
                        let shortage = StaffingShortage {
                            day,
                            shift_type,
                            assigned: grid.slot(day, shift_type).assigned_count(),
                        };
                        #[cfg(feature = "logging")]
                        tracing::warn!(%shortage, "unable to meet minimum staffing");
                        shortages.push(shortage);
                        break;
                    }
                }
            }
        }
    }

    shortages
}
