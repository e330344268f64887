use thiserror::Error;

pub type ContainerResult<T> = Result<T, ContainerError>;

/// Contract violations raised by the containers.
///
/// These are caller bugs, not business failures. A lookup miss or a failed
/// validation is a `Left`/`Absent` value; a `ContainerError` means a container
/// was fed a null-equivalent or a Bottom outcome was collapsed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// A data-bearing state was constructed from a null-equivalent payload.
    #[error("{container} cannot hold a null-equivalent {state} payload")]
    NullPayload {
        container: &'static str,
        state: &'static str,
    },
    /// A checked transform or collapse produced a null-equivalent result.
    #[error("{operation} produced a null-equivalent result")]
    NullResult { operation: &'static str },
    /// A collapse was attempted on an `Outcome` in the Bottom state.
    #[error("{operation} cannot collapse an outcome in the bottom state")]
    BottomState { operation: &'static str },
}

impl ContainerError {
    pub(crate) fn null_payload(container: &'static str, state: &'static str) -> Self {
        tracing::debug!(container, state, "rejected null-equivalent payload");
        ContainerError::NullPayload { container, state }
    }

    pub(crate) fn null_result(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected null-equivalent result");
        ContainerError::NullResult { operation }
    }

    pub(crate) fn bottom_state(operation: &'static str) -> Self {
        tracing::debug!(operation, "refused to collapse bottom outcome");
        ContainerError::BottomState { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_call() {
        let err = ContainerError::null_payload("Outcome", "right");
        assert_eq!(
            err.to_string(),
            "Outcome cannot hold a null-equivalent right payload"
        );

        let err = ContainerError::bottom_state("Outcome::value_or");
        assert_eq!(
            err.to_string(),
            "Outcome::value_or cannot collapse an outcome in the bottom state"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        fn collapse() -> anyhow::Result<()> {
            let checked: ContainerResult<()> = Err(ContainerError::null_result("Maybe::try_match"));
            checked?;
            Ok(())
        }

        let err = collapse().unwrap_err();
        assert!(err.downcast_ref::<ContainerError>().is_some());
    }
}
