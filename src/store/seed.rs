//! Compiled-in defaults used when a collection has never been persisted.

use crate::model::*;

pub fn default_professors() -> Vec<Professor> {
    vec![
        Professor {
            id: "1".into(),
            name: "João Santos".into(),
            email: "joao@escola.com".into(),
            role: Role::Professor,
            department: Some("Matemática".into()),
        },
        Professor {
            id: "2".into(),
            name: "Maria Silva".into(),
            email: "maria@escola.com".into(),
            role: Role::Professor,
            department: Some("Química".into()),
        },
        Professor {
            id: "3".into(),
            name: "Admin Escola".into(),
            email: "admin@escola.com".into(),
            role: Role::Admin,
            department: Some("Administração".into()),
        },
    ]
}

pub fn default_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "1".into(),
            name: "Chromebook Set A".into(),
            kind: ResourceType::Chromebook,
            description: "30 Chromebooks para sala de aula".into(),
            capacity: Some(30),
            location: Some("Laboratório de Informática".into()),
            available: true,
        },
        Resource {
            id: "2".into(),
            name: "Laboratório de Química".into(),
            kind: ResourceType::LabQuimica,
            description: "Laboratório completo com equipamentos".into(),
            capacity: Some(25),
            location: Some("Bloco B - Sala 201".into()),
            available: true,
        },
        Resource {
            id: "3".into(),
            name: "Laboratório de Física".into(),
            kind: ResourceType::LabFisica,
            description: "Laboratório com equipamentos de física".into(),
            capacity: Some(25),
            location: Some("Bloco B - Sala 301".into()),
            available: true,
        },
    ]
}

pub fn default_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "1".into(),
            professor_id: "1".into(),
            resource_id: "1".into(),
            date: "2024-01-15".into(),
            start_time: "08:20".into(),
            end_time: "09:00".into(),
            series: "1º Ano EM".into(),
            purpose: "Aula de programação básica".into(),
            status: BookingStatus::Confirmed,
            created_at: "2024-01-10T10:00:00Z".into(),
        },
        Booking {
            id: "2".into(),
            professor_id: "2".into(),
            resource_id: "2".into(),
            date: "2024-01-16".into(),
            start_time: "14:20".into(),
            end_time: "15:00".into(),
            series: "2º Ano EM".into(),
            purpose: "Experimento de reações químicas".into(),
            status: BookingStatus::Confirmed,
            created_at: "2024-01-11T14:30:00Z".into(),
        },
    ]
}
