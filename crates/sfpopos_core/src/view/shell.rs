//! Page composition: title banner, list, footer.

use crate::view::list_view::{ListView, MountedCard};

pub const TITLE_HEADING: &str = "SFPOPOS";
pub const TITLE_SUBTITLE: &str = "San Francisco Privately Owned Public Spaces";
pub const FOOTER_TEXT: &str = "Privately owned public open spaces are open to everyone.";

/// Static page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleBanner {
    pub heading: &'static str,
    pub subtitle: &'static str,
}

impl Default for TitleBanner {
    fn default() -> Self {
        Self {
            heading: TITLE_HEADING,
            subtitle: TITLE_SUBTITLE,
        }
    }
}

/// Static page footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub text: &'static str,
}

impl Default for Footer {
    fn default() -> Self {
        Self { text: FOOTER_TEXT }
    }
}

/// Snapshot of the list section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListFrame<'v> {
    pub query: &'v str,
    pub cards: &'v [MountedCard],
}

/// Full page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellFrame<'v> {
    pub title: TitleBanner,
    pub list: ListFrame<'v>,
    pub footer: Footer,
}

/// Stateless page composer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shell;

impl Shell {
    pub fn compose<'v>(view: &'v ListView<'_>) -> ShellFrame<'v> {
        ShellFrame {
            title: TitleBanner::default(),
            list: ListFrame {
                query: view.query(),
                cards: view.cards(),
            },
            footer: Footer::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Shell, TITLE_HEADING, TITLE_SUBTITLE};
    use crate::model::place::Place;
    use crate::store::PlaceStore;
    use crate::view::list_view::ListView;

    #[test]
    fn compose_reflects_current_view_state() {
        let store = PlaceStore::from_places(vec![
            Place::new(1, "Empire Park", "Commercial St", "e.jpg", "24h"),
            Place::new(2, "Salesforce Park", "425 Mission St", "s.jpg", "6am-9pm"),
        ])
        .expect("valid store");
        let mut view = ListView::new(&store);
        view.set_query("mission");

        let frame = Shell::compose(&view);
        assert_eq!(frame.title.heading, TITLE_HEADING);
        assert_eq!(frame.title.subtitle, TITLE_SUBTITLE);
        assert_eq!(frame.list.query, "mission");
        assert_eq!(frame.list.cards.len(), 1);
        assert_eq!(frame.list.cards[0].card.name, "Salesforce Park");
        assert!(!frame.footer.text.is_empty());
    }
}
