use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelSearch,
  Dismiss,
  HideHelp,
  LoadMore,
  None,
  OpenSelected,
  PageDown,
  PageUp,
  Quit,
  ResetSort,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  Sort(SortKey),
  StartSearch,
  SubmitSearch,
}

impl Command {
  pub(crate) fn from_key(key: KeyEvent) -> Self {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
      KeyCode::Char('?') => Self::ShowHelp,
      KeyCode::Char('/') => Self::StartSearch,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Self::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Self::PageUp
      }
      KeyCode::Down | KeyCode::Char('j') => Self::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Self::SelectPrevious,
      KeyCode::PageDown => Self::PageDown,
      KeyCode::PageUp => Self::PageUp,
      KeyCode::Home => Self::SelectFirst,
      KeyCode::End => Self::SelectLast,
      KeyCode::Char('t') => Self::Sort(SortKey::Title),
      KeyCode::Char('a') => Self::Sort(SortKey::Author),
      KeyCode::Char('c') => Self::Sort(SortKey::Comments),
      KeyCode::Char('p') => Self::Sort(SortKey::Points),
      KeyCode::Char('r') => Self::ResetSort,
      KeyCode::Char('x') | KeyCode::Delete => Self::Dismiss,
      KeyCode::Char('m') => Self::LoadMore,
      KeyCode::Enter | KeyCode::Char('o' | 'O') => Self::OpenSelected,
      _ => Self::None,
    }
  }
}
