//! The normalized shortcut tree.

use serde::Serialize;

use super::{Group, Program, Shortcut};

/// Ordered, validated list of programs.
///
/// Built in full on every load and never patched in place; views such as
/// the display filter produce a new `Catalog`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    pub programs: Vec<Program>,
}

/// Indices locating a shortcut inside a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutPosition {
    pub program: usize,
    pub group: usize,
    pub shortcut: usize,
}

impl Catalog {
    pub fn new(programs: Vec<Program>) -> Self {
        Self { programs }
    }

    /// Concatenate catalogs, keeping each one's internal order.
    pub fn merged(catalogs: impl IntoIterator<Item = Catalog>) -> Self {
        Self {
            programs: catalogs.into_iter().flat_map(|c| c.programs).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn shortcut_count(&self) -> usize {
        self.programs.iter().map(Program::shortcut_count).sum()
    }

    /// Iterate over every shortcut together with its program and group.
    pub fn shortcuts(&self) -> impl Iterator<Item = (&Program, &Group, &Shortcut)> {
        self.programs.iter().flat_map(|program| {
            program.groups.iter().flat_map(move |group| {
                group
                    .shortcuts
                    .iter()
                    .map(move |shortcut| (program, group, shortcut))
            })
        })
    }

    /// Locate the first shortcut whose action contains `needle`.
    ///
    /// Used by front ends to open the program and group of a notable shortcut.
    pub fn find_shortcut(&self, needle: &str) -> Option<ShortcutPosition> {
        if needle.is_empty() {
            return None;
        }
        for (pi, program) in self.programs.iter().enumerate() {
            for (gi, group) in program.groups.iter().enumerate() {
                if let Some(si) = group.shortcuts.iter().position(|s| s.action.contains(needle)) {
                    return Some(ShortcutPosition {
                        program: pi,
                        group: gi,
                        shortcut: si,
                    });
                }
            }
        }
        None
    }

    pub fn get(&self, position: ShortcutPosition) -> Option<&Shortcut> {
        self.programs
            .get(position.program)?
            .groups
            .get(position.group)?
            .shortcuts
            .get(position.shortcut)
    }
}
