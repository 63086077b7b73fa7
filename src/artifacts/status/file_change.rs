#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnstagedChangeType {
    Modified,
    Deleted,
}

impl From<&UnstagedChangeType> for &str {
    fn from(change: &UnstagedChangeType) -> Self {
        match change {
            UnstagedChangeType::Modified => "modified",
            UnstagedChangeType::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for UnstagedChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{label}")
    }
}
