//! Demo records shown before anything is added

use chrono::NaiveDate;
use uuid::Uuid;

use super::aggregate::{Department, Employee, EmployeeId, EmployeeStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn employee(
    n: u128,
    name: &str,
    email: &str,
    phone: &str,
    role: &str,
    department: Department,
    status: EmployeeStatus,
    join_date: NaiveDate,
    salary: f64,
) -> Employee {
    Employee {
        id: EmployeeId::new(Uuid::from_u128(n)),
        name: name.to_string(),
        avatar: None,
        email: email.to_string(),
        phone: phone.to_string(),
        role: role.to_string(),
        department,
        status,
        join_date,
        salary,
    }
}

pub fn sample_employees() -> Vec<Employee> {
    use Department::*;
    use EmployeeStatus::*;

    vec![
        employee(1, "John Doe", "john@example.com", "123-456-7890", "Developer", Engineering, Active, date(2023, 1, 1), 75_000.0),
        employee(2, "Sarah Johnson", "sarah.johnson@example.com", "+1 (555) 201-3344", "Engineering Manager", Engineering, Active, date(2021, 6, 14), 132_000.0),
        employee(3, "Michael Chen", "michael.chen@example.com", "+1 (555) 310-7781", "Backend Engineer", Engineering, OnLeave, date(2022, 3, 7), 98_000.0),
        employee(4, "Emily Rodriguez", "emily.r@example.com", "555-442-1902", "Product Designer", Design, Active, date(2022, 9, 19), 87_500.0),
        employee(5, "David Kim", "david.kim@example.com", "555-118-6620", "Product Manager", Product, Active, date(2020, 11, 2), 118_000.0),
        employee(6, "Olivia Brown", "olivia.brown@example.com", "555-993-4410", "Marketing Lead", Marketing, Active, date(2021, 2, 22), 91_000.0),
        employee(7, "James Wilson", "james.wilson@example.com", "555-771-2038", "Account Executive", Sales, Inactive, date(2019, 8, 5), 64_000.0),
        employee(8, "Ava Martinez", "ava.martinez@example.com", "555-640-8815", "HR Generalist", HumanResources, Active, date(2023, 4, 17), 58_000.0),
        employee(9, "Noah Davis", "noah.davis@example.com", "555-305-2277", "Financial Analyst", Finance, OnLeave, date(2022, 1, 10), 72_000.0),
        employee(10, "Mia Thompson", "mia.thompson@example.com", "555-829-5564", "Data Scientist", Analytics, Active, date(2023, 7, 3), 105_000.0),
    ]
}
