use crate::grid::ShiftGrid;
use crate::model::{Roster, ShiftType, DAYS};

/// Phase 1 — placement par préférences. Pour chaque jour (ordre
/// calendaire) et chaque employé (ordre du registre), parcourt la liste de
/// préférences du jour — déjà triée priorité décroissante, départage par
/// l'ordre des créneaux — et prend le premier slot non complet. Un employé
/// sans préférence ce jour-là, ou dont tous les créneaux préférés sont
/// complets, reste non placé à l'issue de cette phase.
pub(super) fn place_by_preference(roster: &mut Roster, grid: &mut ShiftGrid) {
    for &day in &DAYS {
        for employee in roster.employees.iter_mut() {
            if !employee.can_work(day) {
                continue;
            }
            let prefs = employee.preferences_for_day(day).to_vec();
            for (shift_type, _priority) in prefs {
                if grid.try_add_employee(day, shift_type, employee) {
                    break;
                }
            }
        }
    }
}

/// Phase 2 — résolution des conflits. Les employés encore plaçables après
/// la phase 1 (pas affectés ce jour-là et sous le plafond hebdomadaire)
/// reçoivent un placement au mieux : premier créneau ouvert dans l'ordre
/// de déclaration, sans tenir compte des préférences.
pub(super) fn resolve_unplaced(roster: &mut Roster, grid: &mut ShiftGrid) {
    for &day in &DAYS {
        for employee in roster.employees.iter_mut() {
            if !employee.can_work(day) {
                continue;
            }
            for shift_type in ShiftType::ALL {
                if grid.try_add_employee(day, shift_type, employee) {
                    break;
                }
            }
        }
    }
}
