mod assignment;
mod backfill;
mod types;

pub use types::{SchedError, StaffingShortage};

use crate::grid::ShiftGrid;
use crate::model::{Employee, EmployeeId, Roster, ShiftType};
use chrono::Weekday;

/// Scheduler : encapsule le registre et la grille de la semaine en cours.
///
/// L'algorithme est un glouton sans retour arrière, en trois phases
/// toujours exécutées dans le même ordre : préférences, résolution des
/// non-placés, complément d'effectif minimal. Il garantit seulement les
/// invariants (≤ 5 jours par employé, ≤ 2 employés par slot, un seul
/// créneau par jour et par employé), pas un optimum global. Déterministe
/// à entrées identiques : aucun tirage aléatoire, tous les parcours
/// suivent un ordre fixe.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    roster: Roster,
    grid: ShiftGrid,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            roster: Roster::default(),
            grid: ShiftGrid::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }
    pub fn grid(&self) -> &ShiftGrid {
        &self.grid
    }

    pub fn add_employees(&mut self, employees: Vec<Employee>) {
        self.roster.employees.extend(employees);
    }

    /// Crée un employé (sans préférences) et retourne son identifiant.
    pub fn add_employee(&mut self, name: &str) -> EmployeeId {
        let employee = Employee::new(name);
        let id = employee.id.clone();
        self.roster.employees.push(employee);
        id
    }

    /// Enregistre une préférence pour un employé désigné par son nom.
    pub fn add_preference(
        &mut self,
        name: &str,
        day: Weekday,
        shift_type: ShiftType,
        priority: i32,
    ) -> Result<(), SchedError> {
        let employee = self
            .roster
            .find_employee_mut_by_name(name)
            .ok_or_else(|| SchedError::UnknownEmployee(name.to_string()))?;
        employee.add_preference(day, shift_type, priority);
        Ok(())
    }

    /// Génère le planning de la semaine. Repart toujours d'un état propre
    /// (employés remis à zéro, grille vidée), puis enchaîne les trois
    /// phases. Retourne les sous-effectifs constatés en phase 3 ;
    /// un planning partiel reste exploitable.
    pub fn generate_schedule(&mut self) -> Vec<StaffingShortage> {
        for employee in self.roster.employees.iter_mut() {
            employee.reset();
        }
        self.grid.clear();

        assignment::place_by_preference(&mut self.roster, &mut self.grid);
        assignment::resolve_unplaced(&mut self.roster, &mut self.grid);
        backfill::fill_understaffed(&mut self.roster, &mut self.grid)
    }
}
