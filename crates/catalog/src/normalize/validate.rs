//! Entry validation, cascading drops, and per-level ordering.
//!
//! Responsibilities:
//! - Decode each program, group, shortcut, and step from untyped JSON.
//! - Drop disabled entries (unless kept) before validating them.
//! - Drop malformed entries and any parent left without children.
//! - Sort each sibling list by its order hints.
//!
//! Invariants:
//! - Locations and surrogate ids use input positions, so they do not shift
//!   when a sibling is dropped or the list is reordered.
//! - Every surviving program has at least one group; every surviving group
//!   has at least one shortcut.

use serde_json::Value;

use super::NormalizeOptions;
use super::order::sort_by_hint;
use super::report::{DropReason, DroppedEntry, EntryLevel};
use crate::constants::{DISABLED_FIELDS, GROUP_NAME_FIELDS, PROGRAM_NAME_FIELDS};
use crate::decode::{
    Field, Object, array, flag, identifier, number, required_text, string_list, text, unsigned,
};
use crate::types::{EntryId, Group, Program, Shortcut, Step, StepKind};

pub(crate) struct Validator<'o> {
    options: &'o NormalizeOptions,
    dropped: Vec<DroppedEntry>,
}

impl<'o> Validator<'o> {
    pub(crate) fn new(options: &'o NormalizeOptions) -> Self {
        Self {
            options,
            dropped: Vec::new(),
        }
    }

    pub(crate) fn into_dropped(self) -> Vec<DroppedEntry> {
        self.dropped
    }

    pub(crate) fn programs(&mut self, entries: &[Value]) -> Vec<Program> {
        let mut programs: Vec<Program> = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| self.program(index, entry))
            .collect();
        sort_by_hint(&mut programs, Program::order_hint);
        programs
    }

    fn program(&mut self, index: usize, entry: &Value) -> Option<Program> {
        let location = format!("program-{index}");
        let object = self.object(EntryLevel::Program, &location, entry)?;
        let label = text(object, PROGRAM_NAME_FIELDS).ok();

        let disabled = flag(object, DISABLED_FIELDS);
        if disabled && !self.options.keep_disabled {
            self.exclude(EntryLevel::Program, &location, label, DropReason::Disabled);
            return None;
        }
        let Some(name) = required_text(object, PROGRAM_NAME_FIELDS) else {
            self.exclude(EntryLevel::Program, &location, label, DropReason::MissingName);
            return None;
        };
        let Field::Present(raw_groups) = array(object, "groups") else {
            self.exclude(EntryLevel::Program, &location, Some(name), DropReason::MissingGroups);
            return None;
        };

        let mut groups: Vec<Group> = raw_groups
            .iter()
            .enumerate()
            .filter_map(|(gi, group)| self.group(&location, gi, group))
            .collect();
        if groups.is_empty() {
            self.exclude(
                EntryLevel::Program,
                &location,
                Some(name),
                DropReason::NoSurvivingChildren,
            );
            return None;
        }
        sort_by_hint(&mut groups, Group::order_hint);

        Some(Program {
            id: self.entry_id(object, &location),
            name,
            disabled,
            order: number(object, "order").ok(),
            icon: text(object, &["icon"]).ok(),
            version: text(object, &["version"]).ok(),
            groups,
        })
    }

    fn group(&mut self, parent: &str, index: usize, entry: &Value) -> Option<Group> {
        let location = format!("{parent}/group-{index}");
        let object = self.object(EntryLevel::Group, &location, entry)?;
        let label = text(object, GROUP_NAME_FIELDS).ok();

        let disabled = flag(object, DISABLED_FIELDS);
        if disabled && !self.options.keep_disabled {
            self.exclude(EntryLevel::Group, &location, label, DropReason::Disabled);
            return None;
        }
        let Some(name) = required_text(object, GROUP_NAME_FIELDS) else {
            self.exclude(EntryLevel::Group, &location, label, DropReason::MissingName);
            return None;
        };
        let Field::Present(raw_shortcuts) = array(object, "shortcuts") else {
            self.exclude(EntryLevel::Group, &location, Some(name), DropReason::MissingShortcuts);
            return None;
        };

        let mut shortcuts: Vec<Shortcut> = raw_shortcuts
            .iter()
            .enumerate()
            .filter_map(|(si, shortcut)| self.shortcut(&location, si, shortcut))
            .collect();
        if shortcuts.is_empty() {
            self.exclude(
                EntryLevel::Group,
                &location,
                Some(name),
                DropReason::NoSurvivingChildren,
            );
            return None;
        }
        sort_by_hint(&mut shortcuts, Shortcut::order_hint);

        Some(Group {
            id: self.entry_id(object, &location),
            name,
            disabled,
            order: number(object, "order").ok(),
            description: text(object, &["description"]).ok(),
            shortcuts,
        })
    }

    fn shortcut(&mut self, parent: &str, index: usize, entry: &Value) -> Option<Shortcut> {
        let location = format!("{parent}/shortcut-{index}");
        let object = self.object(EntryLevel::Shortcut, &location, entry)?;
        let label = text(object, &["action"]).ok();

        let disabled = flag(object, DISABLED_FIELDS);
        if disabled && !self.options.keep_disabled {
            self.exclude(EntryLevel::Shortcut, &location, label, DropReason::Disabled);
            return None;
        }
        let Some(action) = required_text(object, &["action"]) else {
            self.exclude(EntryLevel::Shortcut, &location, label, DropReason::MissingAction);
            return None;
        };
        let Some(description) = text(object, &["description"]).ok() else {
            self.exclude(
                EntryLevel::Shortcut,
                &location,
                Some(action),
                DropReason::MissingDescription,
            );
            return None;
        };

        let keys_field = string_list(object, "keys");
        if keys_field.is_invalid() {
            tracing::debug!(location, "Ignoring keys that are not a list of strings");
        }
        let keys = keys_field.ok().unwrap_or_default();
        let steps = self.steps(&location, object);
        if keys.is_empty() && steps.is_empty() {
            self.exclude(EntryLevel::Shortcut, &location, Some(action), DropReason::MissingKeys);
            return None;
        }

        Some(Shortcut {
            id: self.entry_id(object, &location),
            action,
            description,
            disabled,
            order: number(object, "order").ok(),
            context: text(object, &["context"]).ok(),
            os: string_list(object, "os").ok().unwrap_or_default(),
            keys,
            steps,
        })
    }

    fn steps(&mut self, parent: &str, object: &Object) -> Vec<Step> {
        let Field::Present(raw_steps) = array(object, "steps") else {
            return Vec::new();
        };
        let mut steps = Vec::with_capacity(raw_steps.len());
        for (index, entry) in raw_steps.iter().enumerate() {
            let location = format!("{parent}/step-{index}");
            let Some(step) = self.object(EntryLevel::Step, &location, entry) else {
                continue;
            };
            let kind_text = text(step, &["type"]).ok();
            let Some(kind) = kind_text.as_deref().and_then(StepKind::parse) else {
                self.exclude(EntryLevel::Step, &location, kind_text, DropReason::UnknownStepType);
                continue;
            };
            steps.push(Step {
                kind,
                keys: string_list(step, "keys").ok().unwrap_or_default(),
                action: text(step, &["action"]).ok(),
                description: text(step, &["description"]).ok(),
                duration: unsigned(step, "duration").ok(),
            });
        }
        steps
    }

    fn object<'v>(
        &mut self,
        level: EntryLevel,
        location: &str,
        entry: &'v Value,
    ) -> Option<&'v Object> {
        let object = entry.as_object();
        if object.is_none() {
            self.exclude(level, location, None, DropReason::NotAnObject);
        }
        object
    }

    fn entry_id(&self, object: &Object, location: &str) -> EntryId {
        match identifier(object) {
            Some(id) => EntryId::explicit(id),
            None => match &self.options.id_namespace {
                Some(namespace) => EntryId::surrogate(format!("{namespace}:{location}")),
                None => EntryId::surrogate(location),
            },
        }
    }

    fn exclude(&mut self, level: EntryLevel, location: &str, name: Option<String>, reason: DropReason) {
        if reason.is_malformed() {
            tracing::warn!(
                %level,
                location,
                name = name.as_deref().unwrap_or("<unnamed>"),
                %reason,
                "Skipping invalid shortcut document entry"
            );
        } else {
            tracing::debug!(
                %level,
                location,
                name = name.as_deref().unwrap_or("<unnamed>"),
                %reason,
                "Excluding shortcut document entry"
            );
        }
        self.dropped.push(DroppedEntry {
            level,
            location: location.to_string(),
            name,
            reason,
        });
    }
}
