//! Per-user browsing state.
//!
//! A `Session` owns the navigation state and the current filters; the engine
//! it reads from is shared and immutable, so sessions never touch each other.

use crate::core::engine::{GlossaryEngine, TermDetail};
use crate::core::navigation::{NavEvent, NavState};
use crate::core::query::{LabelFilter, TermQuery};
use crate::domain::model::Term;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Search(String),
    Category(String),
    Source(String),
    Select(String),
    FollowRelated(String),
    Back,
    /// Clear every filter and return to the listing.
    Reset,
}

/// What the presentation layer should draw.
#[derive(Debug, Clone)]
pub enum View<'a> {
    Listing { terms: Vec<&'a Term>, total: usize },
    Detail(TermDetail<'a>),
    NotFound { name: String },
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    nav: NavState,
    query: TermQuery,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn query(&self) -> &TermQuery {
        &self.query
    }

    pub fn handle(&mut self, event: SessionEvent, engine: &GlossaryEngine) {
        let all_label = engine.options().all_label.as_str();
        match event {
            SessionEvent::Search(text) => self.query.text = text,
            SessionEvent::Category(value) => {
                self.query.category = LabelFilter::parse(&value, all_label)
            }
            SessionEvent::Source(value) => self.query.source = LabelFilter::parse(&value, all_label),
            SessionEvent::Select(name) => self.navigate(NavEvent::Select(name), engine),
            SessionEvent::FollowRelated(label) => {
                self.navigate(NavEvent::FollowRelated(label), engine)
            }
            SessionEvent::Back => self.navigate(NavEvent::Back, engine),
            SessionEvent::Reset => {
                self.query = TermQuery::default();
                self.nav = NavState::Listing;
            }
        }
    }

    fn navigate(&mut self, event: NavEvent, engine: &GlossaryEngine) {
        let current = std::mem::take(&mut self.nav);
        self.nav = current.apply(event, engine.catalogue());
    }

    pub async fn view<'a>(&self, engine: &'a GlossaryEngine) -> View<'a> {
        match &self.nav {
            NavState::Listing => View::Listing {
                terms: engine.query(&self.query),
                total: engine.catalogue().len(),
            },
            NavState::Detail(name) => match engine.detail(name).await {
                Some(detail) => View::Detail(detail),
                None => View::NotFound { name: name.clone() },
            },
        }
    }
}

/// One line typed into the interactive browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(SessionEvent),
    Help,
    Quit,
    Unknown(String),
}

impl Input {
    pub fn parse(line: &str) -> Input {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "search" | "s" => Input::Event(SessionEvent::Search(argument.to_string())),
            "category" | "c" if !argument.is_empty() => {
                Input::Event(SessionEvent::Category(argument.to_string()))
            }
            "source" if !argument.is_empty() => {
                Input::Event(SessionEvent::Source(argument.to_string()))
            }
            "open" | "o" if !argument.is_empty() => {
                Input::Event(SessionEvent::Select(argument.to_string()))
            }
            "follow" | "f" if !argument.is_empty() => {
                Input::Event(SessionEvent::FollowRelated(argument.to_string()))
            }
            "back" | "b" => Input::Event(SessionEvent::Back),
            "reset" => Input::Event(SessionEvent::Reset),
            "help" | "h" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            _ => Input::Unknown(line.to_string()),
        }
    }
}
