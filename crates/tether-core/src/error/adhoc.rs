/// Error built from a formatted message (see `err!` and `bail!`).
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl Into<String>) -> Self {
        AdhocError {
            message: message.into().into(),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl super::Error {
    /// Creates an error from pre-formatted arguments.
    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> super::Error {
        let message = match args.as_str() {
            Some(s) => s.to_string(),
            None => args.to_string(),
        };
        super::Error::from(super::ErrorKind::Adhoc(AdhocError::new(message)))
    }
}
