use crate::grid::ShiftGrid;
use crate::model::{day_name, Employee, Roster, ShiftType, DAYS};
use anyhow::{bail, Context};
use chrono::Weekday;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import des préférences depuis CSV : header `name,day,shift,priority`.
/// Les employés sont créés à la première apparition de leur nom — l'ordre
/// des lignes fixe donc l'ordre du registre, qui est l'ordre de parcours
/// de l'algorithme.
pub fn import_preferences_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out: Vec<Employee> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid preference row (empty name)");
        }
        let day = parse_day(rec.get(1).context("missing day")?.trim())
            .with_context(|| format!("invalid day for employee {name}"))?;
        let shift: ShiftType = rec
            .get(2)
            .context("missing shift")?
            .trim()
            .parse()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid shift for employee {name}"))?;
        let priority: i32 = rec
            .get(3)
            .context("missing priority")?
            .trim()
            .parse()
            .with_context(|| format!("invalid priority for employee {name}"))?;

        let idx = match out.iter().position(|e| e.name == name) {
            Some(i) => i,
            None => {
                out.push(Employee::new(name));
                out.len() - 1
            }
        };
        out[idx].add_preference(day, shift, priority);
    }
    Ok(out)
}

/// Accepte le nom anglais complet ou abrégé, insensible à la casse.
pub fn parse_day(s: &str) -> anyhow::Result<Weekday> {
    s.parse::<Weekday>()
        .map_err(|_| anyhow::anyhow!("invalid day: {s}"))
}

/// Export JSON du registre (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning : header `day,shift,employees`, noms séparés
/// par `;` dans l'ordre d'affectation.
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
    grid: &ShiftGrid,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "shift", "employees"])?;
    for &day in &DAYS {
        for shift_type in ShiftType::ALL {
            let assigned = grid.slot(day, shift_type).assigned_employees();
            let names: Vec<&str> = assigned
                .iter()
                .filter_map(|id| roster.find_employee_by_id(id))
                .map(|e| e.name.as_str())
                .collect();
            w.write_record([day_name(day), shift_type.name(), &names.join(";")])?;
        }
    }
    w.flush()?;
    Ok(())
}
