use crate::commands::{CmdMessage, CmdResult};
use crate::components::theme::ThemeState;
use crate::error::Result;
use crate::model::ThemeMode;
use crate::store::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(ThemeMode),
}

pub fn run<P: PreferenceStore>(store: &mut P, action: ThemeAction) -> Result<CmdResult> {
    let mut state = ThemeState::new(store);
    let mode = match action {
        ThemeAction::Show => return Ok(CmdResult::default().with_theme(state.current()?)),
        ThemeAction::Toggle => state.toggle()?,
        ThemeAction::Set(mode) => {
            state.set(mode)?;
            mode
        }
    };

    let mut result = CmdResult::default().with_theme(mode);
    result.add_message(CmdMessage::success(format!("Theme set to {}", mode)));
    Ok(result)
}
