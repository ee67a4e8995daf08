//! Демо-данные для всех дашбордов.
//!
//! Встроенный набор строится детерминированно; его можно заменить JSON-файлом
//! с той же структурой (`[data] fixtures_path`).

use chrono::{Duration, NaiveDate};
use contracts::domain::a001_student::aggregate::Student;
use contracts::domain::a002_task::aggregate::Task;
use contracts::domain::a003_leave::aggregate::LeaveRequest;
use contracts::domain::a004_document::aggregate::Document;
use contracts::domain::a005_user::aggregate::StaffUser;
use contracts::domain::a006_department::aggregate::Department;
use contracts::domain::a007_subject::aggregate::{
    ContentItem, ProgramType, SpecializationRef, Subject, SubjectModule, Vertical,
};
use contracts::domain::a008_timesheet::aggregate::TimesheetEntry;
use contracts::domain::a009_api_endpoint::aggregate::ApiEndpoint;
use contracts::shared::presentation::{
    ApprovalStatus, ContentKind, DocumentKind, HttpMethod, Presentable, RecordStatus, TaskPriority,
    TaskStatus,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub programs: Vec<ProgramType>,
    pub subjects: Vec<Subject>,
    pub students: Vec<Student>,
    pub tasks: Vec<Task>,
    pub leaves: Vec<LeaveRequest>,
    pub timesheets: Vec<TimesheetEntry>,
    pub documents: Vec<Document>,
    pub users: Vec<StaffUser>,
    pub departments: Vec<Department>,
    pub api_endpoints: Vec<ApiEndpoint>,
}

const FIRST_NAMES: [&str; 12] = [
    "Asha", "Ravi", "Meera", "Kabir", "Ananya", "Vikram", "Priya", "Arjun", "Neha", "Rohan",
    "Isha", "Dev",
];
const LAST_NAMES: [&str; 6] = ["Sharma", "Iyer", "Khan", "Patel", "Reddy", "Das"];
const DEPARTMENTS: [(&str, &str); 5] = [
    ("science", "Science"),
    ("arts", "Arts"),
    ("commerce", "Commerce"),
    ("engineering", "Engineering"),
    ("administration", "Administration"),
];
const DESIGNATIONS: [&str; 6] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "History",
    "Accounting",
    "Office Staff",
];

fn person(i: usize) -> String {
    format!(
        "{} {}",
        FIRST_NAMES[i % FIRST_NAMES.len()],
        LAST_NAMES[(i / FIRST_NAMES.len() + i) % LAST_NAMES.len()]
    )
}

fn department(i: usize) -> &'static str {
    DEPARTMENTS[i % DEPARTMENTS.len()].1
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Fixtures {
    /// Прочитать набор из JSON-файла
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Встроенный демо-набор
    pub fn embedded() -> Self {
        let (programs, subjects) = programs_and_subjects();
        Self {
            programs,
            subjects,
            students: students(),
            tasks: tasks(),
            leaves: leaves(),
            timesheets: timesheets(),
            documents: documents(),
            users: users(),
            departments: departments(),
            api_endpoints: api_endpoints(),
        }
    }
}

fn programs_and_subjects() -> (Vec<ProgramType>, Vec<Subject>) {
    let programs = vec![
        ProgramType {
            id: "btech".to_string(),
            name: "B.Tech".to_string(),
            semesters: 8,
            verticals: Vec::new(),
        },
        ProgramType {
            id: "mba".to_string(),
            name: "MBA".to_string(),
            semesters: 4,
            verticals: vec![
                Vertical {
                    id: "finance".to_string(),
                    name: "Finance".to_string(),
                },
                Vertical {
                    id: "marketing".to_string(),
                    name: "Marketing".to_string(),
                },
            ],
        },
        ProgramType {
            id: "bsc".to_string(),
            name: "B.Sc".to_string(),
            semesters: 6,
            verticals: Vec::new(),
        },
    ];

    let specializations = [
        None,
        Some(("ai-ml", "AI & ML")),
        Some(("cloud", "Cloud Computing")),
        Some(("ai-ml", "AI & ML")),
        None,
        Some(("cyber", "Cyber Security")),
    ];
    let btech_names = [
        "Engineering Mathematics",
        "Machine Learning",
        "Distributed Systems",
        "Deep Learning",
        "Data Structures",
        "Network Security",
    ];
    let mut subjects: Vec<Subject> = btech_names
        .iter()
        .zip(specializations.iter())
        .enumerate()
        .map(|(i, (name, spec))| Subject {
            id: format!("btech-{}", i + 1),
            code: format!("CS{}", 301 + i),
            name: name.to_string(),
            program_id: "btech".to_string(),
            semester: if i < 3 { "3" } else { "5" }.to_string(),
            vertical_id: None,
            specialization: spec.map(|(id, name)| SpecializationRef {
                id: id.to_string(),
                name: name.to_string(),
            }),
            faculty: Some(person(i)),
            modules: sample_modules(i),
        })
        .collect();

    let mba = [
        ("finance", "Corporate Finance"),
        ("finance", "Investment Banking"),
        ("marketing", "Consumer Behaviour"),
        ("marketing", "Digital Marketing"),
    ];
    subjects.extend(mba.iter().enumerate().map(|(i, (vertical, name))| Subject {
        id: format!("mba-{}", i + 1),
        code: format!("MB{}", 101 + i),
        name: name.to_string(),
        program_id: "mba".to_string(),
        semester: "1".to_string(),
        vertical_id: Some(vertical.to_string()),
        specialization: None,
        faculty: Some(person(i + 4)),
        modules: sample_modules(i + 1),
    }));

    subjects.extend(["Organic Chemistry", "Optics"].iter().enumerate().map(|(i, name)| Subject {
        id: format!("bsc-{}", i + 1),
        code: format!("SC{}", 201 + i),
        name: name.to_string(),
        program_id: "bsc".to_string(),
        semester: "2".to_string(),
        vertical_id: None,
        specialization: None,
        faculty: None,
        modules: Vec::new(),
    }));

    (programs, subjects)
}

fn sample_modules(seed: usize) -> Vec<SubjectModule> {
    let kinds = [
        ContentKind::Video,
        ContentKind::Document,
        ContentKind::Quiz,
        ContentKind::Assignment,
        ContentKind::Link,
    ];
    (1..=2)
        .map(|m| SubjectModule {
            id: format!("m{}-{}", seed, m),
            title: format!("Unit {}", m),
            items: (0..3)
                .map(|k| {
                    let kind = kinds[(seed + m + k) % kinds.len()];
                    ContentItem {
                        id: format!("c{}-{}-{}", seed, m, k),
                        title: format!("Unit {} · part {}", m, k + 1),
                        kind,
                        url: match kind {
                            ContentKind::Link | ContentKind::Video => {
                                Some(format!("https://learn.example.edu/{}/{}/{}", seed, m, k))
                            }
                            _ => None,
                        },
                    }
                })
                .collect(),
        })
        .collect()
}

fn students() -> Vec<Student> {
    let programs = ["btech", "mba", "bsc"];
    (0..36)
        .map(|i| Student {
            id: format!("st-{}", i + 1),
            roll_number: format!("2024{:04}", i + 1),
            name: person(i),
            email: if i % 7 == 3 {
                None
            } else {
                Some(format!("student{}@school.edu", i + 1))
            },
            program: programs[i % programs.len()].to_string(),
            semester: ((i % 4) + 1).to_string(),
            section: if i % 5 == 0 { None } else { Some(["A", "B"][i % 2].to_string()) },
            status: if i % 9 == 8 {
                RecordStatus::Inactive
            } else {
                RecordStatus::Active
            },
        })
        .collect()
}

fn tasks() -> Vec<Task> {
    let titles = [
        "Prepare question paper",
        "Submit attendance report",
        "Update lesson plan",
        "Evaluate assignments",
        "Organise lab inventory",
        "Parent meeting notes",
    ];
    let priorities = TaskPriority::ALL;
    let statuses = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Overdue,
    ];
    (0..24)
        .map(|i| Task {
            id: format!("task-{}", i + 1),
            title: format!("{} #{}", titles[i % titles.len()], i + 1),
            description: if i % 4 == 0 {
                None
            } else {
                Some(format!("Follow-up for {}", department(i)))
            },
            assignee: person(i % 5),
            assigned_by: Some(person(i + 7)),
            department: department(i).to_string(),
            priority: priorities[i % priorities.len()],
            status: statuses[(i / 2) % statuses.len()],
            due_date: ymd(2024, 1, 1) + Duration::days((i * 9) as i64),
        })
        .collect()
}

fn leaves() -> Vec<LeaveRequest> {
    let types = ["Casual", "Sick", "Earned", "Duty"];
    let statuses = [
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
    ];
    (0..14)
        .map(|i| {
            let from = ymd(2024, 1, 8) + Duration::days((i * 11) as i64);
            LeaveRequest {
                id: format!("leave-{}", i + 1),
                employee_name: person(i + 2),
                designation: DESIGNATIONS[i % DESIGNATIONS.len()].to_string(),
                department: department(i).to_string(),
                leave_type: types[i % types.len()].to_string(),
                from_date: from,
                to_date: from + Duration::days((i % 3) as i64),
                status: statuses[i % statuses.len()],
                reason: if i % 2 == 0 {
                    Some("Family function".to_string())
                } else {
                    None
                },
            }
        })
        .collect()
}

fn timesheets() -> Vec<TimesheetEntry> {
    let projects = ["Board exams", "Curriculum review", "Admissions", "Sports day"];
    (0..40)
        .map(|i| TimesheetEntry {
            id: format!("ts-{}", i + 1),
            employee_name: person(i % 6),
            department: department(i).to_string(),
            project: projects[i % projects.len()].to_string(),
            date: ymd(2024, 2, 1) + Duration::days((i * 3 / 2) as i64),
            hours: [7.5, 8.0, 6.0, 4.5][i % 4],
            status: if i % 6 == 5 {
                ApprovalStatus::Pending
            } else {
                ApprovalStatus::Approved
            },
        })
        .collect()
}

fn documents() -> Vec<Document> {
    let files = [
        ("Academic calendar", "academic_calendar.pdf", DocumentKind::Pdf),
        ("Fee structure", "fees_2024.xlsx", DocumentKind::Spreadsheet),
        ("Orientation deck", "orientation.pptx", DocumentKind::Slides),
        ("Campus map", "campus_map.png", DocumentKind::Image),
        ("Exam guidelines", "exam_rules.txt", DocumentKind::Text),
        ("Lab manuals", "lab_manuals.zip", DocumentKind::Archive),
    ];
    (0..12)
        .map(|i| {
            let (title, file, kind) = files[i % files.len()];
            Document {
                id: format!("doc-{}", i + 1),
                title: if i < files.len() {
                    title.to_string()
                } else {
                    format!("{} (archive)", title)
                },
                file_name: file.to_string(),
                kind,
                owner: person(i + 3),
                department: department(i).to_string(),
                uploaded_at: ymd(2024, 4, 1) + Duration::days(i as i64 * 5),
                size_bytes: if i % 5 == 4 {
                    None
                } else {
                    Some(48_000 * (i as u64 + 1) * (i as u64 + 1))
                },
            }
        })
        .collect()
}

fn users() -> Vec<StaffUser> {
    let roles = ["teacher", "teacher", "hod", "admin"];
    (0..15)
        .map(|i| StaffUser {
            id: format!("user-{}", i + 1),
            name: person(i + 1),
            email: format!("staff{}@school.edu", i + 1),
            designation: DESIGNATIONS[i % DESIGNATIONS.len()].to_string(),
            department: department(i).to_string(),
            role: roles[i % roles.len()].to_string(),
            status: if i % 6 == 5 {
                RecordStatus::Inactive
            } else {
                RecordStatus::Active
            },
            last_login: if i % 3 == 0 {
                None
            } else {
                Some(format!("2024-05-{:02}T09:{:02}:00Z", i + 1, i * 3))
            },
        })
        .collect()
}

fn departments() -> Vec<Department> {
    DEPARTMENTS
        .iter()
        .enumerate()
        .map(|(i, (id, name))| Department {
            id: id.to_string(),
            name: name.to_string(),
            code: id[..3].to_uppercase(),
            head: if i == 4 { None } else { Some(person(i + 8)) },
            staff_count: 6 + i as u32 * 4,
            status: RecordStatus::Active,
        })
        .collect()
}

fn api_endpoints() -> Vec<ApiEndpoint> {
    let rows = [
        ("List students", HttpMethod::Get, "/api/students"),
        ("List tasks", HttpMethod::Get, "/api/tasks"),
        ("Delete task", HttpMethod::Delete, "/api/tasks/:id"),
        ("List leaves", HttpMethod::Get, "/api/leaves"),
        ("List timesheets", HttpMethod::Get, "/api/timesheets"),
        ("List documents", HttpMethod::Get, "/api/documents"),
        ("Delete document", HttpMethod::Delete, "/api/documents/:id"),
        ("List users", HttpMethod::Get, "/api/users"),
        ("Delete user", HttpMethod::Delete, "/api/users/:id"),
        ("List departments", HttpMethod::Get, "/api/departments"),
        ("List programs", HttpMethod::Get, "/api/programs"),
        ("List subjects", HttpMethod::Get, "/api/subjects"),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (name, method, path))| ApiEndpoint {
            id: format!("api-{}", i + 1),
            name: name.to_string(),
            method: *method,
            path: path.to_string(),
            owner: department(i).to_string(),
            status: RecordStatus::Active,
            description: None,
        })
        .collect()
}
