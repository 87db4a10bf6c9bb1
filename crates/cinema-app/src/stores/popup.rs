use crate::actions::{Action, Popup, PopupAction};
use crate::store::{Store, StoreState};

pub type PopupStore = Store<PopupState>;

/// The transient message currently on screen, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupState {
    pub current: Option<Popup>,
}

impl StoreState for PopupState {
    const NAME: &'static str = "popup";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Popup(PopupAction::Show(popup)) => {
                self.current = Some(popup.clone());
                true
            }
            Action::Popup(PopupAction::Hide { id: None }) => self.current.take().is_some(),
            Action::Popup(PopupAction::Hide { id: Some(id) }) => {
                // Timers of replaced popups must not hide the new one
                if self.current.as_ref().is_some_and(|p| p.id == *id) {
                    self.current = None;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}
