use crate::model::{day_index, Employee, EmployeeId, ShiftType, DAYS};
use chrono::Weekday;

/// Effectif minimal par créneau. Dans ce modèle c'est aussi le plafond :
/// un créneau à 2 employés est à la fois « complet » et « suffisamment
/// pourvu ». Les deux prédicats coïncident volontairement.
pub const MIN_STAFF: usize = 2;

/// Créneau d'un jour donné, avec son effectif (ordonné) d'employés.
/// Jamais sérialisé : le planning est regénéré, pas persisté.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSlot {
    day: Weekday,
    shift_type: ShiftType,
    assigned: Vec<EmployeeId>,
}

impl ShiftSlot {
    fn new(day: Weekday, shift_type: ShiftType) -> Self {
        Self {
            day,
            shift_type,
            assigned: Vec::new(),
        }
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn shift_type(&self) -> ShiftType {
        self.shift_type
    }

    pub fn is_full(&self) -> bool {
        self.assigned.len() >= MIN_STAFF
    }

    /// Même prédicat que `is_full` : effectif minimal == capacité.
    pub fn has_minimum_staff(&self) -> bool {
        self.is_full()
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    /// Copie défensive de l'effectif : l'état de la grille ne doit pas
    /// être mutable à travers cet accesseur.
    pub fn assigned_employees(&self) -> Vec<EmployeeId> {
        self.assigned.clone()
    }
}

/// Grille hebdomadaire fixe : 7 jours × 3 créneaux = 21 slots, créés une
/// seule fois. La forme est garantie par le type, pas par des maps.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftGrid {
    slots: [[ShiftSlot; 3]; 7],
}

impl Default for ShiftGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftGrid {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|d| {
                std::array::from_fn(|s| ShiftSlot::new(DAYS[d], ShiftType::ALL[s]))
            }),
        }
    }

    pub fn slot(&self, day: Weekday, shift_type: ShiftType) -> &ShiftSlot {
        &self.slots[day_index(day)][shift_type.index()]
    }

    /// Vide les effectifs de tous les slots sans les recréer. À appeler
    /// au début de chaque génération de planning.
    pub fn clear(&mut self) {
        for daily in self.slots.iter_mut() {
            for slot in daily.iter_mut() {
                slot.assigned.clear();
            }
        }
    }

    /// Point de passage unique pour toute affectation : vérifie la
    /// capacité du slot puis `can_work`, et seulement ensuite mute les
    /// deux états (effectif du slot + jour de l'employé) d'un seul tenant.
    /// Retourne `false` sans effet de bord si l'une des deux vérifications
    /// échoue.
    pub fn try_add_employee(
        &mut self,
        day: Weekday,
        shift_type: ShiftType,
        employee: &mut Employee,
    ) -> bool {
        let slot = &mut self.slots[day_index(day)][shift_type.index()];
        if slot.is_full() {
            return false;
        }
        if !employee.assign_to_day(day) {
            return false;
        }
        slot.assigned.push(employee.id.clone());
        true
    }

    /// Parcours de tous les slots dans l'ordre jour puis créneau.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftSlot> {
        self.slots.iter().flat_map(|daily| daily.iter())
    }
}
