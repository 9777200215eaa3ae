use super::Error;

#[derive(Debug)]
pub(super) struct UnknownRelationError {
    model: Box<str>,
    alias: Box<str>,
}

impl std::error::Error for UnknownRelationError {}

impl core::fmt::Display for UnknownRelationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "model `{}` has no relation named `{}`",
            self.model, self.alias
        )
    }
}

impl Error {
    /// Creates an error for a relation alias that was never registered on
    /// the declaring model.
    pub fn unknown_relation(model: impl Into<String>, alias: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownRelation(UnknownRelationError {
            model: model.into().into(),
            alias: alias.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown relation error.
    pub fn is_unknown_relation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownRelation(_))
    }
}
