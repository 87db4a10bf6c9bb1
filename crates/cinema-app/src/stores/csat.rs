//! Customer satisfaction survey store
//!
//! Backs both the survey prompt fixture (`RENDER_CSAT`) and the standalone
//! `/csat` page.

use thiserror::Error;

use crate::actions::{Action, CsatAction, RenderAction};
use crate::store::{Store, StoreState};

pub type CsatStore = Store<CsatState>;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsatError {
    #[error("score must be between 1 and 5, got {0}")]
    ScoreOutOfRange(u8),
    #[error("{0}")]
    Server(String),
}

pub fn validate_score(score: u8) -> Result<u8, CsatError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(CsatError::ScoreOutOfRange(score))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CsatStatus {
    #[default]
    Idle,
    Submitting(u8),
    Submitted(u8),
    Failed(CsatError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsatState {
    pub prompt_visible: bool,
    pub status: CsatStatus,
}

impl StoreState for CsatState {
    const NAME: &'static str = "csat";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Render(RenderAction::Csat | RenderAction::CsatPage) => {
                self.prompt_visible = true;
                self.status = CsatStatus::Idle;
            }
            Action::Csat(CsatAction::Submit(score)) => {
                self.status = match validate_score(*score) {
                    Ok(score) => CsatStatus::Submitting(score),
                    Err(e) => CsatStatus::Failed(e),
                };
            }
            Action::Csat(CsatAction::Submitted(score)) => {
                self.status = CsatStatus::Submitted(*score);
                self.prompt_visible = false;
            }
            Action::Csat(CsatAction::Error(error)) => {
                self.status = CsatStatus::Failed(CsatError::Server(error.clone()))
            }
            Action::Csat(CsatAction::Dismiss) => {
                if !self.prompt_visible {
                    return false;
                }
                self.prompt_visible = false;
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_range() {
        assert_eq!(validate_score(1), Ok(1));
        assert_eq!(validate_score(5), Ok(5));
        assert_eq!(validate_score(0), Err(CsatError::ScoreOutOfRange(0)));
        assert_eq!(validate_score(6), Err(CsatError::ScoreOutOfRange(6)));
    }

    #[test]
    fn test_submit_cycle() {
        let mut state = CsatState::default();
        state.reduce(&RenderAction::Csat.into());
        assert!(state.prompt_visible);

        state.reduce(&CsatAction::Submit(9).into());
        assert_eq!(state.status, CsatStatus::Failed(CsatError::ScoreOutOfRange(9)));

        state.reduce(&CsatAction::Submit(4).into());
        assert_eq!(state.status, CsatStatus::Submitting(4));

        state.reduce(&CsatAction::Submitted(4).into());
        assert_eq!(state.status, CsatStatus::Submitted(4));
        assert!(!state.prompt_visible);
        assert!(!state.reduce(&CsatAction::Dismiss.into()));
    }
}
