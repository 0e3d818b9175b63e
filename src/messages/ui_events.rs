//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Page sections, in page order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Section {
    #[default]
    Hero,
    Quote,
    Devices,
    HowItWorks,
    Faq,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Quote,
        Section::Devices,
        Section::HowItWorks,
        Section::Faq,
    ];

    /// Sections that need a loaded, non-empty catalog
    pub fn needs_catalog(&self) -> bool {
        matches!(self, Section::Quote | Section::Devices)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Quote => "Get Offer",
            Section::Devices => "Sell your phone",
            Section::HowItWorks => "How it works",
            Section::Faq => "FAQ",
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Navigation
    JumpTo(Section),
    NextSection,
    PrevSection,

    // Device selection
    NextField,
    PrevField,
    NextOption,
    PrevOption,
    SubmitQuote,

    // Devices grid
    ScrollUp,
    ScrollDown,

    // FAQ
    NextQuestion,
    PrevQuestion,
    ToggleAnswer,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, active_section: Section, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    // Navbar and global keys
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('h') | KeyCode::Home => return Some(UiEvent::JumpTo(Section::Hero)),
        KeyCode::Char('1') => return Some(UiEvent::JumpTo(Section::HowItWorks)),
        KeyCode::Char('2') => return Some(UiEvent::JumpTo(Section::Devices)),
        KeyCode::Char('3') => return Some(UiEvent::JumpTo(Section::Faq)),
        KeyCode::Char('4') | KeyCode::Char('g') => return Some(UiEvent::JumpTo(Section::Quote)),
        KeyCode::PageDown | KeyCode::Char('n') => return Some(UiEvent::NextSection),
        KeyCode::PageUp | KeyCode::Char('p') => return Some(UiEvent::PrevSection),
        _ => {}
    }

    match active_section {
        Section::Hero => match key.code {
            KeyCode::Enter => Some(UiEvent::JumpTo(Section::Quote)),
            _ => None,
        },
        Section::Quote => match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextField),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevField),
            KeyCode::Right => Some(UiEvent::NextOption),
            KeyCode::Left => Some(UiEvent::PrevOption),
            KeyCode::Enter | KeyCode::Char('s') => Some(UiEvent::SubmitQuote),
            _ => None,
        },
        Section::Devices => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::ScrollDown),
            _ => None,
        },
        Section::Faq => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevQuestion),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextQuestion),
            KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::ToggleAnswer),
            _ => None,
        },
        Section::HowItWorks => None,
    }
}
