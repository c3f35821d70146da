use std::{fmt, str::FromStr};

use leptos::prelude::*;
use thiserror::Error;

/// One of the scrollable regions of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Hero,
    Experience,
    Projects,
    Skills,
    Certifications,
    Education,
    Resume,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section: {0}")]
    Unknown(String),
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Certifications,
        SectionId::Education,
        SectionId::Resume,
        SectionId::Contact,
    ];

    /// The DOM id of the section's region.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Certifications => "certifications",
            SectionId::Education => "education",
            SectionId::Resume => "resume",
            SectionId::Contact => "contact",
        }
    }

    /// Text shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Certifications => "Certifications",
            SectionId::Education => "Education",
            SectionId::Resume => "Resume",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

/// Page-lifetime register of the section considered "in view".
///
/// Written by visibility sensors and navigation clicks, read by the
/// navigation bar and the camera animator. Provided as context by `App`.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSection(RwSignal<SectionId>);

impl ActiveSection {
    pub fn new() -> Self {
        Self(RwSignal::new(SectionId::default()))
    }

    /// Tracked read, for use inside reactive closures.
    pub fn current(&self) -> SectionId {
        self.0.get()
    }

    pub fn current_untracked(&self) -> SectionId {
        self.0.get_untracked()
    }

    /// Subscribers are only notified when the value actually changes.
    pub fn set(&self, id: SectionId) {
        let changed = self.0.try_maybe_update(|current| {
            if *current == id {
                (false, false)
            } else {
                *current = id;
                (true, true)
            }
        });
        if changed == Some(true) {
            log::debug!("active section -> {id}");
        }
    }
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[test]
    fn test_ids_round_trip_through_dom_names() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(SectionError::Unknown("blog".to_string()))
        );
        assert!("".parse::<SectionId>().is_err());
        // ids are case sensitive, like DOM ids
        assert!("Projects".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_unknown_id_falls_back_to_hero() {
        assert_eq!(SectionId::from_str_or_default("nowhere"), SectionId::Hero);
        assert_eq!(
            SectionId::from_str_or_default("skills"),
            SectionId::Skills
        );
    }

    #[test]
    fn test_register_starts_at_first_section() {
        let owner = Owner::new();
        owner.with(|| {
            let active = ActiveSection::new();
            assert_eq!(active.current_untracked(), SectionId::ALL[0]);
            assert_eq!(active.current_untracked(), SectionId::Hero);
        });
    }

    #[test]
    fn test_register_set_and_idempotent_set() {
        let owner = Owner::new();
        owner.with(|| {
            let active = ActiveSection::new();
            active.set(SectionId::Projects);
            assert_eq!(active.current_untracked(), SectionId::Projects);
            active.set(SectionId::Projects);
            assert_eq!(active.current_untracked(), SectionId::Projects);
            active.set(SectionId::Contact);
            assert_eq!(active.current_untracked(), SectionId::Contact);
        });
    }

    #[test]
    fn test_idempotent_set_does_not_notify() {
        let owner = Owner::new();
        owner.with(|| {
            let active = ActiveSection::new();
            let runs = Arc::new(AtomicUsize::new(0));
            let watched = Memo::new({
                let runs = Arc::clone(&runs);
                move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    active.current()
                }
            });

            assert_eq!(watched.get_untracked(), SectionId::Hero);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            active.set(SectionId::Hero);
            assert_eq!(watched.get_untracked(), SectionId::Hero);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            active.set(SectionId::Projects);
            assert_eq!(watched.get_untracked(), SectionId::Projects);
            assert_eq!(runs.load(Ordering::SeqCst), 2);

            active.set(SectionId::Projects);
            assert_eq!(watched.get_untracked(), SectionId::Projects);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels = SectionId::ALL.map(|id| id.label()).to_vec();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), SectionId::ALL.len());
    }
}
