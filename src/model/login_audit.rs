/// Outcome recorded in the append-only login audit trail. Rows are written
/// on every login attempt and never updated or deleted by the application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginAuditStatus {
    Success,
    Failure,
}

impl LoginAuditStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LoginAuditStatus::Success => "Success",
            LoginAuditStatus::Failure => "Failure",
        }
    }
}
