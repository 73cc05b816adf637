pub mod commands;
pub mod ui;

pub use ui::Output;

use crate::types::DocError;

/// Category hint for a failed command, when the failure is a [`DocError`]
pub fn failure_hint(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<DocError>()
        .map(|e| e.category().hint())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_hint_for_doc_error() {
        let err = anyhow::Error::from(DocError::Config("bad glob".to_string()));
        assert_eq!(
            failure_hint(&err),
            Some(crate::types::ErrorCategory::ConfigurationFailure.hint())
        );
    }

    #[test]
    fn test_no_hint_for_foreign_error() {
        let err = anyhow::anyhow!("runtime could not start");
        assert_eq!(failure_hint(&err), None);
    }
}
