//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

/// The keymap stores all keybindings and resolves keystrokes to commands
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Indices into `bindings`; several bindings may share a keystroke
    /// with different conditions
    lookup: HashMap<Keystroke, Vec<usize>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.command == Command::Unbound {
            return;
        }
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// Look up a keystroke ignoring conditional bindings
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup_with_context(keystroke, None)
    }

    /// Look up a keystroke with context for conditional bindings
    ///
    /// Matching conditional bindings win over unconditional ones; within
    /// each group the first registered binding wins. A keystroke with no
    /// exact binding falls back to bindings whose command ignores extra
    /// modifiers (see [`Command::ignores_extra_modifiers`]).
    pub fn lookup_with_context(
        &self,
        keystroke: &Keystroke,
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        match self.lookup.get(keystroke) {
            Some(indices) => Self::pick(indices.iter().map(|&i| &self.bindings[i]), context),
            None => Self::pick(
                self.bindings.iter().filter(|b| {
                    b.command.ignores_extra_modifiers()
                        && b.keystroke.key == keystroke.key
                        && keystroke.mods.contains(b.keystroke.mods)
                }),
                context,
            ),
        }
    }

    fn pick<'a>(
        candidates: impl Iterator<Item = &'a Keybinding> + Clone,
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        if let Some(ctx) = context {
            let conditional = candidates.clone().find(|b| {
                b.when
                    .as_deref()
                    .is_some_and(|conds| Condition::evaluate_all(conds, ctx))
            });
            if let Some(binding) = conditional {
                return Some(binding.command);
            }
        }

        candidates.filter(|b| !b.is_conditional()).map(|b| b.command).next()
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }
}
