use crate::model::*;
use crate::storage::Storage;

use super::DirectoryStore;

impl<S: Storage> DirectoryStore<S> {
    // ── Professors ───────────────────────────────────────────

    pub fn list_professors(&self) -> &[Professor] {
        &self.professors
    }

    /// Exact, case-sensitive match.
    pub fn find_professor_by_email(&self, email: &str) -> Option<&Professor> {
        self.professors.iter().find(|p| p.email == email)
    }

    pub fn find_professor_by_id(&self, id: &str) -> Option<&Professor> {
        self.professors.iter().find(|p| p.id == id)
    }

    // ── Resources ────────────────────────────────────────────

    pub fn list_resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn find_resource_by_id(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn resources_by_type(&self, kind: ResourceType) -> Vec<&Resource> {
        self.resources.iter().filter(|r| r.kind == kind).collect()
    }

    // ── Bookings (insertion order) ───────────────────────────

    pub fn list_bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn find_booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn find_bookings_by_date(&self, date: &str) -> Vec<&Booking> {
        self.bookings.iter().filter(|b| b.date == date).collect()
    }

    pub fn find_bookings_by_professor(&self, professor_id: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.professor_id == professor_id)
            .collect()
    }

    pub fn find_bookings_by_resource(&self, resource_id: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.resource_id == resource_id)
            .collect()
    }
}
