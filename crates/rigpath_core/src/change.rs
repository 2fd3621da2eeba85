use crate::NodeHandle;

/// A detected path migration for one stable node identity.
///
/// Produced by diffing two snapshots of the same animated root. A rename of
/// an interior node changes the path of every descendant, so one rename
/// yields one record per affected node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub node: NodeHandle,
    pub old_path: String,
    pub new_path: String,
    /// The node's own name changed (as opposed to only an ancestor's).
    pub name_changed: bool,
}

impl ChangeRecord {
    #[must_use]
    pub fn new(
        node: NodeHandle,
        old_path: impl Into<String>,
        new_path: impl Into<String>,
        name_changed: bool,
    ) -> Self {
        Self {
            node,
            old_path: old_path.into(),
            new_path: new_path.into(),
            name_changed,
        }
    }
}

impl std::fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' -> '{}'", self.old_path, self.new_path)
    }
}
