use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ThemePreference;
use crate::preferences::PreferenceStore;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(ThemePreference),
    Toggle,
}

/// Shows or changes the display theme. A failed write keeps the new theme for the
/// session and is reported as a warning.
pub fn run<S: KeyValueStore>(
    prefs: &mut PreferenceStore<S>,
    action: ThemeAction,
) -> Result<CmdResult> {
    let saved = match action {
        ThemeAction::Show => return Ok(CmdResult::default().with_theme(prefs.theme())),
        ThemeAction::Set(theme) => prefs.save(theme),
        ThemeAction::Toggle => prefs.toggle().map(|_| ()),
    };

    let theme = prefs.theme();
    let mut result = CmdResult::default().with_theme(theme);
    match saved {
        Ok(()) => result.add_message(CmdMessage::success(format!("Theme set to {}", theme))),
        Err(e) => result.add_message(CmdMessage::warning(format!(
            "Theme set to {} for this session only: {}",
            theme, e
        ))),
    }
    Ok(result)
}
