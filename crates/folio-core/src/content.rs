//! Portfolio content: profile, projects and project pagination

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PROJECT_STEP, DEFAULT_VISIBLE_PROJECTS};

/// Owner of the portfolio
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub skills: Vec<String>,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    /// Static asset path of the profile picture
    pub avatar: String,
    /// Static asset path of the résumé document
    pub resume: String,
}

impl Profile {
    /// Initials used when the avatar image is not available
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// A portfolio project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub live_demo: String,
    pub github: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Visible-count pagination over the project list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPager {
    /// Number of projects currently shown
    pub visible: usize,
    /// Increment applied by `show_more`
    pub step: usize,
}

impl Default for ProjectPager {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_PROJECTS, DEFAULT_PROJECT_STEP)
    }
}

impl ProjectPager {
    pub fn new(visible: usize, step: usize) -> Self {
        Self {
            visible,
            step: step.max(1),
        }
    }

    /// The first `visible` projects
    pub fn visible_projects<'a>(&self, projects: &'a [Project]) -> &'a [Project] {
        &projects[..self.visible.min(projects.len())]
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Reveal the next `step` projects, saturating at `total`
    pub fn show_more(&mut self, total: usize) {
        self.visible = self.visible.saturating_add(self.step.max(1)).min(total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects(count: u32) -> Vec<Project> {
        (1..=count)
            .map(|id| Project {
                id,
                title: format!("Project {}", id),
                description: String::new(),
                live_demo: String::new(),
                github: String::new(),
                thumbnail: None,
            })
            .collect()
    }

    #[test]
    fn test_pager_slices_in_order() {
        let all = projects(8);
        let pager = ProjectPager::new(3, 2);
        let visible = pager.visible_projects(&all);
        assert_eq!(visible.len(), 3);
        assert_eq!(
            visible.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_show_more_saturates() {
        let all = projects(8);
        let mut pager = ProjectPager::new(4, 3);
        assert!(pager.has_more(all.len()));

        pager.show_more(all.len());
        assert_eq!(pager.visible_projects(&all).len(), 7);
        pager.show_more(all.len());
        assert_eq!(pager.visible_projects(&all).len(), 8);
        assert!(!pager.has_more(all.len()));
    }

    #[test]
    fn test_pager_larger_than_list() {
        let all = projects(2);
        let pager = ProjectPager::new(10, 2);
        assert_eq!(pager.visible_projects(&all).len(), 2);
        assert!(!pager.has_more(all.len()));
    }

    #[test]
    fn test_zero_step_still_advances() {
        let mut pager = ProjectPager::new(0, 0);
        pager.show_more(5);
        assert_eq!(pager.visible, 1);
    }

    #[test]
    fn test_initials() {
        let profile = Profile {
            name: "ada lovelace byron".into(),
            tagline: String::new(),
            about: String::new(),
            skills: Vec::new(),
            email: "ada@example.com".into(),
            github: String::new(),
            linkedin: String::new(),
            avatar: String::new(),
            resume: String::new(),
        };
        assert_eq!(profile.initials(), "AL");
        assert_eq!(profile.mailto(), "mailto:ada@example.com");
    }
}
