use std::time::Duration;

use crate::actions::{Action, CsatAction, Popup, PopupAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::{Effects, Middleware};
use crate::stores::csat::validate_score;

/// Sends survey scores to the backend; the csat store rejects invalid ones
pub struct CsatMiddleware {
    effects: Effects,
    popup_duration: Duration,
}

impl CsatMiddleware {
    pub fn new(effects: Effects, popup_duration: Duration) -> Self {
        Self {
            effects,
            popup_duration,
        }
    }
}

impl Middleware for CsatMiddleware {
    fn handle(&self, action: &Action, dispatcher: &Dispatcher) -> anyhow::Result<()> {
        let Action::Csat(CsatAction::Submit(score)) = action else {
            return Ok(());
        };
        let Ok(score) = validate_score(*score) else {
            return Ok(());
        };
        let popup_duration = self.popup_duration;
        self.effects.spawn(dispatcher, move |client| async move {
            match client.submit_csat(score).await {
                Ok(()) => vec![
                    CsatAction::Submitted(score).into(),
                    PopupAction::Show(Popup::success("Thank you for your feedback", popup_duration))
                        .into(),
                ],
                Err(e) => {
                    log::warn!("Failed to submit survey score: {}", e);
                    vec![CsatAction::Error(e.error_code()).into()]
                }
            }
        });
        Ok(())
    }
}
