//! Command Registry
//!
//! Name-keyed table of console commands. The interpreter looks every command
//! line's first token up here; anything not registered is an unknown command.

use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::exit_cmd::ExitCommand;
use super::ls::LsCommand;
use super::vfs_save::VfsSaveCommand;

/// Register the console command set.
pub fn register_console_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(VfsSaveCommand));
    registry.register(Box::new(ExitCommand));
}

/// Create a registry holding the console command set.
pub fn create_console_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_console_commands(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_registry_names() {
        let registry = create_console_registry();
        assert_eq!(registry.names(), vec!["cat", "cd", "exit", "ls", "vfs-save"]);
        assert!(registry.contains("vfs-save"));
        assert!(registry.get("frobnicate").is_none());
    }
}
