use crate::core::catalogue::Catalogue;

/// Which page a session is on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Listing,
    Detail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// A term chosen from a listing, search result or typed by name.
    Select(String),
    /// A related label clicked inside a detail view.
    FollowRelated(String),
    Back,
}

impl NavState {
    /// Pure transition; the catalogue is only consulted for related labels,
    /// which navigate only when they resolve.
    pub fn apply(self, event: NavEvent, catalogue: &Catalogue) -> NavState {
        match event {
            NavEvent::Select(name) => NavState::Detail(name),
            NavEvent::FollowRelated(label) => {
                if catalogue.resolve_related(&label).is_some() {
                    NavState::Detail(label)
                } else {
                    tracing::debug!("Ignoring dangling related label '{}'", label);
                    self
                }
            }
            NavEvent::Back => NavState::Listing,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            NavState::Listing => None,
            NavState::Detail(name) => Some(name.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Term;
    use chrono::NaiveDate;

    fn catalogue() -> Catalogue {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        Catalogue::from_terms(vec![
            Term::new("Habeas Corpus", "def", "Direito Constitucional", "STF", date)
                .with_related(["Mandado de Segurança", "Liberdade"]),
            Term::new("Mandado de Segurança", "def", "Direito Constitucional", "STF", date)
                .with_related(["Habeas Corpus"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_state_is_listing() {
        assert_eq!(NavState::default(), NavState::Listing);
        assert_eq!(NavState::default().selected(), None);
    }

    #[test]
    fn test_follow_related_between_details() {
        let catalogue = catalogue();
        let state = NavState::Listing.apply(NavEvent::Select("Habeas Corpus".into()), &catalogue);
        let state = state.apply(
            NavEvent::FollowRelated("Mandado de Segurança".into()),
            &catalogue,
        );
        assert_eq!(state, NavState::Detail("Mandado de Segurança".into()));
    }

    #[test]
    fn test_dangling_related_keeps_state() {
        let catalogue = catalogue();
        let state = NavState::Detail("Habeas Corpus".into());
        let next = state
            .clone()
            .apply(NavEvent::FollowRelated("Liberdade".into()), &catalogue);
        assert_eq!(next, state);
    }

    #[test]
    fn test_back_returns_to_listing() {
        let catalogue = catalogue();
        let state = NavState::Detail("Habeas Corpus".into()).apply(NavEvent::Back, &catalogue);
        assert_eq!(state, NavState::Listing);
        assert_eq!(
            NavState::Listing.apply(NavEvent::Back, &catalogue),
            NavState::Listing
        );
    }
}
