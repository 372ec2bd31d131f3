use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use uuid::Uuid;

/// Jours de la semaine, dans l'ordre calendaire (ordre d'itération fixe).
pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Plafond hebdomadaire : au plus 5 jours travaillés par employé.
pub const MAX_DAYS_PER_WEEK: usize = 5;

/// Index 0..7 d'un jour (lundi = 0).
pub fn day_index(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

/// Nom anglais complet du jour, pour l'affichage et les exports.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Type de créneau journalier. L'ordre de déclaration sert de départage
/// déterministe (Morning < Afternoon < Evening).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    Morning,
    Afternoon,
    Evening,
}

impl ShiftType {
    pub const ALL: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Afternoon, ShiftType::Evening];

    pub fn index(self) -> usize {
        match self {
            ShiftType::Morning => 0,
            ShiftType::Afternoon => 1,
            ShiftType::Evening => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShiftType::Morning => "Morning",
            ShiftType::Afternoon => "Afternoon",
            ShiftType::Evening => "Evening",
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ShiftType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morning" => Ok(ShiftType::Morning),
            "afternoon" => Ok(ShiftType::Afternoon),
            "evening" => Ok(ShiftType::Evening),
            other => Err(format!("unknown shift type: {other}")),
        }
    }
}

/// Identifiant fort pour Employee
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Employé : préférences par jour et état d'affectation de la semaine.
///
/// Les préférences d'un jour sont maintenues triées dès l'insertion
/// (priorité décroissante, départage par l'ordre de déclaration des
/// `ShiftType`), ce qui rend l'ordre de parcours des phases testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    preferences: [Vec<(ShiftType, i32)>; 7],
    #[serde(default)]
    assigned: [bool; 7],
}

impl Employee {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: EmployeeId::random(),
            name: name.into(),
            preferences: Default::default(),
            assigned: [false; 7],
        }
    }

    /// Enregistre (ou écrase) la priorité du couple (jour, créneau).
    /// Aucune contrainte de plage sur `priority` : entrée permissive.
    pub fn add_preference(&mut self, day: Weekday, shift: ShiftType, priority: i32) {
        let prefs = &mut self.preferences[day_index(day)];
        prefs.retain(|(s, _)| *s != shift);
        prefs.push((shift, priority));
        prefs.sort_by_key(|(s, p)| (Reverse(*p), s.index()));
    }

    /// Préférences du jour, triées par priorité décroissante. Vide si
    /// l'employé n'a rien déclaré ce jour-là.
    pub fn preferences_for_day(&self, day: Weekday) -> &[(ShiftType, i32)] {
        &self.preferences[day_index(day)]
    }

    /// Vrai si l'employé peut encore prendre ce jour : pas déjà affecté
    /// ce jour-là et sous le plafond hebdomadaire.
    pub fn can_work(&self, day: Weekday) -> bool {
        !self.assigned[day_index(day)] && self.assigned_day_count() < MAX_DAYS_PER_WEEK
    }

    /// Marque le jour comme travaillé. Refuse (sans effet) si `can_work`
    /// est faux ; retourne `true` uniquement quand l'état a changé.
    pub fn assign_to_day(&mut self, day: Weekday) -> bool {
        if !self.can_work(day) {
            return false;
        }
        self.assigned[day_index(day)] = true;
        true
    }

    pub fn works_on(&self, day: Weekday) -> bool {
        self.assigned[day_index(day)]
    }

    pub fn assigned_day_count(&self) -> usize {
        self.assigned.iter().filter(|b| **b).count()
    }

    /// Remet l'état d'affectation à zéro ; les préférences sont conservées.
    /// À appeler avant chaque nouvelle génération de planning.
    pub fn reset(&mut self) {
        self.assigned = [false; 7];
    }
}

/// Registre complet des employés, dans l'ordre d'insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Roster {
    pub employees: Vec<Employee>,
}

impl Roster {
    pub fn find_employee_by_name<'a>(&'a self, name: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.name == name)
    }
    pub fn find_employee_mut_by_name(&mut self, name: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.name == name)
    }
    pub fn find_employee_by_id<'a>(&'a self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
}
