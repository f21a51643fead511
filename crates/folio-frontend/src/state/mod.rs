//! Application state module

use std::sync::Arc;

use parking_lot::Mutex;

use folio_core::ProjectPager;

/// Page sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Label used in the header navigation
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

/// Actions that can be performed on the app state
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Flip between light and dark
    ToggleTheme,
    /// Reveal the next page of project cards
    ShowMoreProjects,
    /// Scroll a section into view
    ScrollTo(SectionId),
    /// Open an external link or static asset
    OpenUrl(String),
    /// Re-read the site configuration file
    ReloadConfig,
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    /// Project list pagination
    pub pager: ProjectPager,
    /// Section to bring into view on the next frame
    pub scroll_target: Option<SectionId>,
    /// Pending actions
    pending_actions: Vec<AppAction>,
}

impl AppState {
    pub fn new(pager: ProjectPager) -> Self {
        Self {
            pager,
            scroll_target: None,
            pending_actions: Vec::new(),
        }
    }

    /// Queue an action
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Take the pending scroll request
    pub fn take_scroll_target(&mut self) -> Option<SectionId> {
        self.scroll_target.take()
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state
pub fn create_shared_state(pager: ProjectPager) -> SharedAppState {
    Arc::new(Mutex::new(AppState::new(pager)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_actions_drain() {
        let state = create_shared_state(ProjectPager::default());
        state.lock().queue_action(AppAction::ShowMoreProjects);
        state.lock().queue_action(AppAction::ToggleTheme);

        let actions = state.lock().take_pending_actions();
        assert_eq!(
            actions,
            vec![AppAction::ShowMoreProjects, AppAction::ToggleTheme]
        );
        assert!(state.lock().take_pending_actions().is_empty());
    }
}
