//! Read-only view of a host program's command tree

/// A node in the host's command hierarchy.
///
/// Only the name and direct children are needed; nodes are owned and built
/// by the host framework.
pub trait CommandNode {
    /// Name used to invoke this command
    fn name(&self) -> &str;

    /// Direct subcommands, in registration order
    fn children(&self) -> impl Iterator<Item = &Self>;

    /// Finds a direct child by name.
    ///
    /// Nested subcommands are not searched.
    fn find_child(&self, name: &str) -> Option<&Self> {
        self.children().find(|child| child.name() == name)
    }
}

impl CommandNode for clap::Command {
    fn name(&self) -> &str {
        self.get_name()
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.get_subcommands()
    }
}
