//! Display-time filtering of a normalized catalog.
//!
//! Responsibilities:
//! - Hide disabled entries and user-hidden shortcuts unless "show hidden" is on.
//! - Re-apply the survival cascade to the derived view.
//!
//! Does NOT handle:
//! - Persisting the hidden-id set (owned by the front end).
//! - Selection state such as the active program or group (owned by the front end).
//!
//! Invariants:
//! - The input catalog is never modified; toggling `show_hidden` back and forth
//!   needs no reload.
//! - A group with no visible shortcut and a program with no visible group are
//!   not part of the view.

use std::collections::HashSet;

use crate::types::{Catalog, EntryId, Group, Program, Shortcut};

/// Front-end state that shapes the display view.
#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    /// Show disabled and user-hidden entries anyway.
    pub show_hidden: bool,
    /// Shortcut ids the user chose to hide.
    pub hidden_ids: HashSet<EntryId>,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    pub fn with_hidden_ids<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EntryId>,
    {
        self.hidden_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    fn shows_shortcut(&self, shortcut: &Shortcut) -> bool {
        self.show_hidden || !(shortcut.disabled || self.hidden_ids.contains(&shortcut.id))
    }
}

/// Build the view of `catalog` to display under `options`.
pub fn filter_for_display(catalog: &Catalog, options: &DisplayOptions) -> Catalog {
    let programs = catalog
        .programs
        .iter()
        .filter(|program| options.show_hidden || !program.disabled)
        .filter_map(|program| {
            let groups: Vec<Group> = program
                .groups
                .iter()
                .filter(|group| options.show_hidden || !group.disabled)
                .filter_map(|group| {
                    let shortcuts: Vec<Shortcut> = group
                        .shortcuts
                        .iter()
                        .filter(|shortcut| options.shows_shortcut(shortcut))
                        .cloned()
                        .collect();
                    (!shortcuts.is_empty()).then(|| Group {
                        shortcuts,
                        ..clone_group_header(group)
                    })
                })
                .collect();
            (!groups.is_empty()).then(|| Program {
                groups,
                ..clone_program_header(program)
            })
        })
        .collect();
    Catalog::new(programs)
}

fn clone_group_header(group: &Group) -> Group {
    Group {
        id: group.id.clone(),
        name: group.name.clone(),
        disabled: group.disabled,
        order: group.order.clone(),
        description: group.description.clone(),
        shortcuts: Vec::new(),
    }
}

fn clone_program_header(program: &Program) -> Program {
    Program {
        id: program.id.clone(),
        name: program.name.clone(),
        disabled: program.disabled,
        order: program.order.clone(),
        icon: program.icon.clone(),
        version: program.version.clone(),
        groups: Vec::new(),
    }
}
