/// Contact topics offered on the contact page (`data-topic`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Internship,
    Project,
    Freelance,
    Question,
    General,
}

impl Topic {
    pub const ALL: [Self; 5] = [
        Self::Internship,
        Self::Project,
        Self::Freelance,
        Self::Question,
        Self::General,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internship => "internship",
            Self::Project => "project",
            Self::Freelance => "freelance",
            Self::Question => "question",
            Self::General => "general",
        }
    }

    /// Unknown topics fall back to [`Topic::General`].
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "internship" => Self::Internship,
            "project" => Self::Project,
            "freelance" => Self::Freelance,
            "question" => Self::Question,
            _ => Self::General,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Internship => "Internship",
            Self::Project => "Project Collaboration",
            Self::Freelance => "Freelance Work",
            Self::Question => "Technical Question",
            Self::General => "General Inquiry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

impl NotificationKind {
    pub const fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Failure => "alert-danger",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Failure => "fa-exclamation-circle",
        }
    }
}

/// Fixed contact strings that can be copied to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Email,
    Phone,
}

impl CopyTarget {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Email => "Email address copied to clipboard!",
            Self::Phone => "Phone number copied to clipboard!",
        }
    }

    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Email => "Failed to copy email address",
            Self::Phone => "Failed to copy phone number",
        }
    }
}
