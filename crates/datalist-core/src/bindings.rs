use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// Keys for one command plus the text a help bar shows for it.
///
/// A binding with no keys is unbound: it never matches and is left out of help.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyEvent>,
    pub help_key: String,
    pub help_desc: String,
}

impl Binding {
    pub fn new(
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
        keys: Vec<KeyEvent>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            help_desc: help_desc.into(),
        }
    }

    /// Code and modifiers must both match exactly.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys
            .iter()
            .any(|k| k.code == event.code && k.modifiers == event.modifiers)
    }

    pub fn is_unbound(&self) -> bool {
        self.keys.is_empty()
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

pub fn key_char(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn key_ctrl(c: char) -> KeyEvent {
    key_char(c).with_modifiers(KeyModifiers::ctrl())
}

/// Commands understood by [`crate::view::DataListView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListCommand {
    Up,
    Down,
    First,
    Last,
    PrevColumn,
    NextColumn,
    Sort,
    NextPage,
    PrevPage,
    MoreRowsPerPage,
    FewerRowsPerPage,
    Activate,
    Edit,
    View,
    Review,
}

/// Remappable key bindings for [`crate::view::DataListView`].
///
/// Each binding also carries its help text so the same value can feed a
/// [`crate::help::HelpBar`].
#[derive(Clone, Debug)]
pub struct DataListBindings {
    pub up: Binding,
    pub down: Binding,
    pub first: Binding,
    pub last: Binding,
    pub prev_column: Binding,
    pub next_column: Binding,
    pub sort: Binding,
    pub next_page: Binding,
    pub prev_page: Binding,
    pub more_rows_per_page: Binding,
    pub fewer_rows_per_page: Binding,
    pub activate: Binding,
    pub edit: Binding,
    pub view: Binding,
    pub review: Binding,
}

impl Default for DataListBindings {
    fn default() -> Self {
        Self {
            up: Binding::new("↑/k", "up", vec![key(KeyCode::Up), key_char('k')]),
            down: Binding::new("↓/j", "down", vec![key(KeyCode::Down), key_char('j')]),
            first: Binding::new("g", "first", vec![key(KeyCode::Home), key_char('g')]),
            last: Binding::new("G", "last", vec![key(KeyCode::End), key_char('G')]),
            prev_column: Binding::new("←/h", "column", vec![key(KeyCode::Left), key_char('h')]),
            next_column: Binding::new("→/l", "column", vec![key(KeyCode::Right), key_char('l')]),
            sort: Binding::new("s", "sort", vec![key_char('s')]),
            next_page: Binding::new(
                "n",
                "next page",
                vec![key(KeyCode::PageDown), key_char('n'), key_ctrl('d')],
            ),
            prev_page: Binding::new(
                "p",
                "prev page",
                vec![key(KeyCode::PageUp), key_char('p'), key_ctrl('u')],
            ),
            more_rows_per_page: Binding::new("+", "rows/page", vec![key_char('+')]),
            fewer_rows_per_page: Binding::new("-", "rows/page", vec![key_char('-')]),
            activate: Binding::new("enter", "open", vec![key(KeyCode::Enter)]),
            edit: Binding::new("e", "edit", vec![key_char('e')]),
            view: Binding::new("v", "view", vec![key_char('v')]),
            review: Binding::new("r", "review", vec![key_char('r')]),
        }
    }
}

impl DataListBindings {
    pub fn command_for(&self, event: &KeyEvent) -> Option<ListCommand> {
        self.table()
            .into_iter()
            .find(|(binding, _)| binding.matches(event))
            .map(|(_, command)| command)
    }

    /// Bindings worth advertising in a help bar, in display order.
    pub fn help(&self) -> Vec<Binding> {
        [
            &self.down,
            &self.sort,
            &self.next_page,
            &self.prev_page,
            &self.more_rows_per_page,
            &self.activate,
            &self.review,
        ]
        .into_iter()
        .filter(|b| !b.is_unbound())
        .cloned()
        .collect()
    }

    fn table(&self) -> [(&Binding, ListCommand); 15] {
        [
            (&self.up, ListCommand::Up),
            (&self.down, ListCommand::Down),
            (&self.first, ListCommand::First),
            (&self.last, ListCommand::Last),
            (&self.prev_column, ListCommand::PrevColumn),
            (&self.next_column, ListCommand::NextColumn),
            (&self.sort, ListCommand::Sort),
            (&self.next_page, ListCommand::NextPage),
            (&self.prev_page, ListCommand::PrevPage),
            (&self.more_rows_per_page, ListCommand::MoreRowsPerPage),
            (&self.fewer_rows_per_page, ListCommand::FewerRowsPerPage),
            (&self.activate, ListCommand::Activate),
            (&self.edit, ListCommand::Edit),
            (&self.view, ListCommand::View),
            (&self.review, ListCommand::Review),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_requires_exact_modifiers() {
        let b = Binding::new("e", "edit", vec![key_char('e')]);
        assert!(b.matches(&key_char('e')));
        assert!(!b.matches(&key_ctrl('e')));
        assert!(!Binding::new("-", "none", vec![]).matches(&key_char('e')));
    }

    #[test]
    fn default_bindings_resolve_commands() {
        let b = DataListBindings::default();
        assert_eq!(b.command_for(&key(KeyCode::PageDown)), Some(ListCommand::NextPage));
        assert_eq!(b.command_for(&key_char('G')), Some(ListCommand::Last));
        assert_eq!(b.command_for(&key_char('z')), None);
    }

    #[test]
    fn unbound_commands_are_hidden_from_help() {
        let mut b = DataListBindings::default();
        b.review.keys.clear();
        assert!(b.help().iter().all(|h| h.help_desc != "review"));
    }
}
