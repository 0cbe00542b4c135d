use anyhow::Result;
use uuid::Uuid;

use crate::db::{DbClient, NewCompany, NewDepartment, NewEmployee, NewProject};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Loads the sample directory: two companies, four departments, five
/// employees, and five projects.
///
/// # Errors
/// Returns an error if any insert fails (for example when the sample emails
/// are already present).
pub async fn run(db: &DbClient) -> Result<()> {
    println!("Inserting sample data...");

    let tech_corp = NewCompany {
        id: new_id(),
        name: "Tech Corp".to_string(),
        email: "info@techcorp.com".to_string(),
        address: Some("123 Tech Street, Silicon Valley".to_string()),
        phone: Some("+1-555-0101".to_string()),
    };
    let innovation = NewCompany {
        id: new_id(),
        name: "Innovation Ltd".to_string(),
        email: "contact@innovation.com".to_string(),
        address: Some("456 Innovation Ave, New York".to_string()),
        phone: Some("+1-555-0102".to_string()),
    };
    db.insert_company(&tech_corp).await?;
    db.insert_company(&innovation).await?;

    let engineering = department(&tech_corp.id, "Engineering", 500_000.0, "John Smith");
    let marketing = department(&tech_corp.id, "Marketing", 200_000.0, "Jane Doe");
    let research = department(&innovation.id, "Research", 300_000.0, "Bob Johnson");
    let sales = department(&innovation.id, "Sales", 150_000.0, "Alice Brown");
    for dept in [&engineering, &marketing, &research, &sales] {
        db.insert_department(dept).await?;
    }

    let mike = employee(
        &engineering.id,
        "Mike",
        "Wilson",
        "mike.wilson@techcorp.com",
        "+1-555-1001",
        75_000.0,
        "Software Engineer",
    );
    let sarah = employee(
        &engineering.id,
        "Sarah",
        "Davis",
        "sarah.davis@techcorp.com",
        "+1-555-1002",
        85_000.0,
        "Senior Developer",
    );
    let tom = employee(
        &marketing.id,
        "Tom",
        "Anderson",
        "tom.anderson@techcorp.com",
        "+1-555-1003",
        60_000.0,
        "Marketing Specialist",
    );
    let lisa = employee(
        &research.id,
        "Lisa",
        "Garcia",
        "lisa.garcia@innovation.com",
        "+1-555-1004",
        90_000.0,
        "Research Scientist",
    );
    let david = employee(
        &sales.id,
        "David",
        "Martinez",
        "david.martinez@innovation.com",
        "+1-555-1005",
        65_000.0,
        "Sales Representative",
    );
    for emp in [&mike, &sarah, &tom, &lisa, &david] {
        db.insert_employee(emp).await?;
    }

    let projects = [
        project(
            "Mobile App Development",
            "Develop a new mobile application",
            "2024-01-15",
            "2024-06-15",
            100_000.0,
            "in_progress",
            &mike.id,
        ),
        project(
            "Website Redesign",
            "Redesign company website",
            "2024-02-01",
            "2024-04-30",
            50_000.0,
            "completed",
            &sarah.id,
        ),
        project(
            "Market Research",
            "Conduct market analysis",
            "2024-03-01",
            "2024-05-31",
            25_000.0,
            "planning",
            &tom.id,
        ),
        project(
            "AI Research Project",
            "Research AI applications",
            "2024-01-01",
            "2024-12-31",
            200_000.0,
            "in_progress",
            &lisa.id,
        ),
        project(
            "Sales Campaign",
            "Q2 sales campaign",
            "2024-04-01",
            "2024-06-30",
            30_000.0,
            "planning",
            &david.id,
        ),
    ];
    for proj in &projects {
        db.insert_project(proj).await?;
    }

    println!("Database seeded successfully!");
    Ok(())
}

fn department(company_id: &str, name: &str, budget: f64, manager_name: &str) -> NewDepartment {
    NewDepartment {
        id: new_id(),
        company_id: company_id.to_string(),
        name: name.to_string(),
        budget: Some(budget),
        manager_name: Some(manager_name.to_string()),
    }
}

fn employee(
    department_id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    salary: f64,
    position: &str,
) -> NewEmployee {
    NewEmployee {
        id: new_id(),
        department_id: department_id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        salary: Some(salary),
        position: Some(position.to_string()),
        password_hash: None,
    }
}

fn project(
    name: &str,
    description: &str,
    start_date: &str,
    end_date: &str,
    budget: f64,
    status: &str,
    assigned_employee_id: &str,
) -> NewProject {
    NewProject {
        id: new_id(),
        name: name.to_string(),
        description: Some(description.to_string()),
        start_date: Some(start_date.to_string()),
        end_date: Some(end_date.to_string()),
        budget: Some(budget),
        status: status.to_string(),
        assigned_employee_id: Some(assigned_employee_id.to_string()),
    }
}
