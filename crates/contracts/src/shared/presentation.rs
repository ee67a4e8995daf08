//! Закрытые перечисления "тип -> иконка/цвет/подпись".
//!
//! Каждый тип сопоставляется через исчерпывающий `match`, поэтому новый
//! вариант без оформления не скомпилируется.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Video,
    FileText,
    Clipboard,
    Edit,
    Link,
    Table,
    Presentation,
    Image,
    Archive,
    ArrowDown,
    ArrowUp,
    Alert,
    Clock,
    Loader,
    Check,
    X,
    UserCheck,
    UserX,
    Download,
    Upload,
    Refresh,
    Trash,
    ChevronLeft,
    ChevronRight,
    Filter,
    Search,
    Users,
    Calendar,
    Building,
    Book,
    Code,
}

/// Цветовой тон бейджа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Neutral,
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub icon: Icon,
    pub tone: Tone,
    pub label: &'static str,
}

impl Presentation {
    const fn new(icon: Icon, tone: Tone, label: &'static str) -> Self {
        Self { icon, tone, label }
    }
}

/// Перечисление, значения которого участвуют в фильтрах и отображении
pub trait Presentable: Sized + Copy + 'static {
    const ALL: &'static [Self];

    /// Значение категориального поля (совпадает с сериализованным)
    fn as_str(&self) -> &'static str;

    fn presentation(&self) -> Presentation;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Video,
    Document,
    Quiz,
    Assignment,
    Link,
}

impl Presentable for ContentKind {
    const ALL: &'static [Self] = &[
        ContentKind::Video,
        ContentKind::Document,
        ContentKind::Quiz,
        ContentKind::Assignment,
        ContentKind::Link,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Video => "video",
            ContentKind::Document => "document",
            ContentKind::Quiz => "quiz",
            ContentKind::Assignment => "assignment",
            ContentKind::Link => "link",
        }
    }

    fn presentation(&self) -> Presentation {
        match self {
            ContentKind::Video => Presentation::new(Icon::Video, Tone::Danger, "Video"),
            ContentKind::Document => Presentation::new(Icon::FileText, Tone::Primary, "Document"),
            ContentKind::Quiz => Presentation::new(Icon::Clipboard, Tone::Warning, "Quiz"),
            ContentKind::Assignment => Presentation::new(Icon::Edit, Tone::Success, "Assignment"),
            ContentKind::Link => Presentation::new(Icon::Link, Tone::Info, "Link"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Spreadsheet,
    Slides,
    Image,
    Text,
    Archive,
}

impl Presentable for DocumentKind {
    const ALL: &'static [Self] = &[
        DocumentKind::Pdf,
        DocumentKind::Spreadsheet,
        DocumentKind::Slides,
        DocumentKind::Image,
        DocumentKind::Text,
        DocumentKind::Archive,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Spreadsheet => "spreadsheet",
            DocumentKind::Slides => "slides",
            DocumentKind::Image => "image",
            DocumentKind::Text => "text",
            DocumentKind::Archive => "archive",
        }
    }

    fn presentation(&self) -> Presentation {
        match self {
            DocumentKind::Pdf => Presentation::new(Icon::FileText, Tone::Danger, "PDF"),
            DocumentKind::Spreadsheet => Presentation::new(Icon::Table, Tone::Success, "Spreadsheet"),
            DocumentKind::Slides => Presentation::new(Icon::Presentation, Tone::Warning, "Slides"),
            DocumentKind::Image => Presentation::new(Icon::Image, Tone::Info, "Image"),
            DocumentKind::Text => Presentation::new(Icon::FileText, Tone::Neutral, "Text"),
            DocumentKind::Archive => Presentation::new(Icon::Archive, Tone::Neutral, "Archive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Presentable for TaskPriority {
    const ALL: &'static [Self] = &[
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Urgent => "urgent",
        }
    }

    fn presentation(&self) -> Presentation {
        match self {
            TaskPriority::Low => Presentation::new(Icon::ArrowDown, Tone::Neutral, "Low"),
            TaskPriority::Medium => Presentation::new(Icon::ArrowUp, Tone::Info, "Medium"),
            TaskPriority::High => Presentation::new(Icon::ArrowUp, Tone::Warning, "High"),
            TaskPriority::Urgent => Presentation::new(Icon::Alert, Tone::Danger, "Urgent"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl Presentable for TaskStatus {
    const ALL: &'static [Self] = &[
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Overdue,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
        }
    }

    fn presentation(&self) -> Presentation {
        match self {
            TaskStatus::Pending => Presentation::new(Icon::Clock, Tone::Neutral, "Pending"),
            TaskStatus::InProgress => Presentation::new(Icon::Loader, Tone::Primary, "In progress"),
            TaskStatus::Completed => Presentation::new(Icon::Check, Tone::Success, "Completed"),
            TaskStatus::Overdue => Presentation::new(Icon::Alert, Tone::Danger, "Overdue"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl Presentable for ApprovalStatus {
    const ALL: &'static [Self] = &[
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    fn presentation(&self) -> Presentation {
        match self {
            ApprovalStatus::Pending => Presentation::new(Icon::Clock, Tone::Warning, "Pending"),
            ApprovalStatus::Approved => Presentation::new(Icon::Check, Tone::Success, "Approved"),
            ApprovalStatus::Rejected => Presentation::new(Icon::X, Tone::Danger, "Rejected"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl Presentable for RecordStatus {
    const ALL: &'static [Self] = &[RecordStatus::Active, RecordStatus::Inactive];

    fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
        }
    }

    fn presentation(&self) -> Presentation {
        match self {
            RecordStatus::Active => Presentation::new(Icon::UserCheck, Tone::Success, "Active"),
            RecordStatus::Inactive => Presentation::new(Icon::UserX, Tone::Neutral, "Inactive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Presentable for HttpMethod {
    const ALL: &'static [Self] = &[
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn presentation(&self) -> Presentation {
        match self {
            HttpMethod::Get => Presentation::new(Icon::Download, Tone::Success, "GET"),
            HttpMethod::Post => Presentation::new(Icon::Upload, Tone::Primary, "POST"),
            HttpMethod::Put => Presentation::new(Icon::Refresh, Tone::Warning, "PUT"),
            HttpMethod::Patch => Presentation::new(Icon::Edit, Tone::Info, "PATCH"),
            HttpMethod::Delete => Presentation::new(Icon::Trash, Tone::Danger, "DELETE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_str_matches_serde<T: Presentable + Serialize>() {
        for value in T::ALL {
            let json = serde_json::to_value(value).unwrap();
            assert_eq!(json.as_str(), Some(value.as_str()));
            assert_eq!(T::parse(value.as_str()).map(|v| v.as_str()), Some(value.as_str()));
        }
    }

    #[test]
    fn test_filter_values_match_wire_format() {
        assert_str_matches_serde::<ContentKind>();
        assert_str_matches_serde::<DocumentKind>();
        assert_str_matches_serde::<TaskPriority>();
        assert_str_matches_serde::<TaskStatus>();
        assert_str_matches_serde::<ApprovalStatus>();
        assert_str_matches_serde::<RecordStatus>();
        assert_str_matches_serde::<HttpMethod>();
    }

    #[test]
    fn test_unknown_value_does_not_parse() {
        assert_eq!(ContentKind::parse("podcast"), None);
        assert!(serde_json::from_str::<ContentKind>("\"podcast\"").is_err());
    }

    #[test]
    fn test_presentation() {
        let p = TaskPriority::Urgent.presentation();
        assert_eq!(p.icon, Icon::Alert);
        assert_eq!(p.tone, Tone::Danger);
        assert_eq!(ContentKind::Video.presentation().label, "Video");
    }
}
