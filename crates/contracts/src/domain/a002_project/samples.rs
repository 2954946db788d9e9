//! Demo records shown before anything is added

use chrono::NaiveDate;
use uuid::Uuid;

use super::aggregate::{Priority, Project, ProjectId, ProjectStatus, TeamMember};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn team(names: &[&str]) -> Vec<TeamMember> {
    names
        .iter()
        .map(|name| TeamMember {
            name: name.to_string(),
            avatar: None,
        })
        .collect()
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::new(Uuid::from_u128(1)),
            name: "E-commerce Platform Redesign".into(),
            description: "Complete overhaul of the existing e-commerce platform with modern UI/UX and improved performance.".into(),
            status: ProjectStatus::InProgress,
            priority: Priority::High,
            progress: 75,
            due_date: date(2024, 2, 15),
            spend: 45_000.0,
            budget: 60_000.0,
            team_members: team(&["Sarah Johnson", "Michael Chen", "Emily Rodriguez", "David Kim"]),
            members_count: 6,
        },
        Project {
            id: ProjectId::new(Uuid::from_u128(2)),
            name: "Mobile App Development".into(),
            description: "Native iOS and Android app development for customer engagement and loyalty program.".into(),
            status: ProjectStatus::Planning,
            priority: Priority::Medium,
            progress: 25,
            due_date: date(2024, 3, 30),
            spend: 12_000.0,
            budget: 80_000.0,
            team_members: team(&["Michael Chen", "Emily Rodriguez"]),
            members_count: 4,
        },
        Project {
            id: ProjectId::new(Uuid::from_u128(3)),
            name: "Data Analytics Dashboard".into(),
            description: "Real-time analytics dashboard for business intelligence and reporting capabilities.".into(),
            status: ProjectStatus::InProgress,
            priority: Priority::High,
            progress: 60,
            due_date: date(2024, 1, 20),
            spend: 28_000.0,
            budget: 45_000.0,
            team_members: team(&["Mia Thompson", "David Kim"]),
            members_count: 5,
        },
        Project {
            id: ProjectId::new(Uuid::from_u128(4)),
            name: "Customer Support Portal".into(),
            description: "Self-service portal for customers with ticketing system and knowledge base integration.".into(),
            status: ProjectStatus::Completed,
            priority: Priority::Medium,
            progress: 100,
            due_date: date(2023, 12, 15),
            spend: 35_000.0,
            budget: 40_000.0,
            team_members: team(&["John Doe"]),
            members_count: 3,
        },
        Project {
            id: ProjectId::new(Uuid::from_u128(5)),
            name: "Security Audit & Compliance".into(),
            description: "Comprehensive security audit and implementation of compliance measures for data protection.".into(),
            status: ProjectStatus::OnHold,
            priority: Priority::Low,
            progress: 15,
            due_date: date(2024, 4, 10),
            spend: 8_000.0,
            budget: 25_000.0,
            team_members: Vec::new(),
            members_count: 2,
        },
        Project {
            id: ProjectId::new(Uuid::from_u128(6)),
            name: "Marketing Automation".into(),
            description: "Implementation of marketing automation tools and workflows for lead nurturing.".into(),
            status: ProjectStatus::InProgress,
            priority: Priority::Medium,
            progress: 40,
            due_date: date(2024, 2, 28),
            spend: 18_000.0,
            budget: 35_000.0,
            team_members: team(&["Olivia Brown"]),
            members_count: 3,
        },
    ]
}
