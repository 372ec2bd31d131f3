use crate::grid::ShiftGrid;
use crate::model::{day_name, Roster, ShiftType, DAYS};
use crate::scheduler::StaffingShortage;
use std::fmt::Write as _;

/// Permet de customiser le rendu du planning (texte, HTML, etc.).
pub trait ScheduleRenderer {
    fn render(&self, roster: &Roster, grid: &ShiftGrid, shortages: &[StaffingShortage]) -> String;
}

/// Rendu texte console : grille de la semaine, charge par employé,
/// puis sous-effectifs éventuels.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ScheduleRenderer for TextReport {
    fn render(&self, roster: &Roster, grid: &ShiftGrid, shortages: &[StaffingShortage]) -> String {
        let mut out = String::new();
        out.push_str("=== WEEKLY SCHEDULE ===\n");

        for &day in &DAYS {
            let _ = writeln!(out, "\n=== {} ===", day_name(day));
            for shift_type in ShiftType::ALL {
                let slot = grid.slot(day, shift_type);
                let _ = write!(out, "{:<10}: ", shift_type.name());
                let assigned = slot.assigned_employees();
                if assigned.is_empty() {
                    out.push_str("No employees assigned\n");
                } else {
                    let names: Vec<&str> = assigned
                        .iter()
                        .filter_map(|id| roster.find_employee_by_id(id))
                        .map(|e| e.name.as_str())
                        .collect();
                    let _ = writeln!(out, "{} ({} employees)", names.join(" "), assigned.len());
                }
            }
        }

        out.push_str("\n=== EMPLOYEE WORKLOAD SUMMARY ===\n");
        for employee in &roster.employees {
            let _ = writeln!(
                out,
                "{}: {} days assigned",
                employee.name,
                employee.assigned_day_count()
            );
        }

        if !shortages.is_empty() {
            out.push_str("\n=== STAFFING SHORTAGES ===\n");
            for shortage in shortages {
                let _ = writeln!(out, "{shortage}");
            }
        }

        out
    }
}
