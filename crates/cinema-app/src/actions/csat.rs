use strum::IntoStaticStr;

/// Satisfaction survey actions
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum CsatAction {
    #[strum(serialize = "CSAT_SUBMIT")]
    Submit(u8),
    #[strum(serialize = "CSAT_SUBMITTED")]
    Submitted(u8),
    #[strum(serialize = "CSAT_ERROR")]
    Error(String),
    /// Close the survey prompt without answering
    #[strum(serialize = "CSAT_DISMISS")]
    Dismiss,
}
