use super::Error;

#[derive(Debug)]
pub(super) struct ImmutableRelationError {
    alias: Box<str>,
}

impl std::error::Error for ImmutableRelationError {}

impl core::fmt::Display for ImmutableRelationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "relation `{}` is immutable", self.alias)
    }
}

impl Error {
    /// Creates an error for a write attempted through a relation that was
    /// registered as immutable.
    pub fn immutable_relation(alias: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ImmutableRelation(ImmutableRelationError {
            alias: alias.into().into(),
        }))
    }

    /// Returns `true` if this error is an immutable relation error.
    pub fn is_immutable_relation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ImmutableRelation(_))
    }
}
