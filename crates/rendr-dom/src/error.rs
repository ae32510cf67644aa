//! Mount failures.

use rendr_components::DomError;
use thiserror::Error;

/// Error returned by [`Mounter::render`](crate::Mounter::render).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
	/// No element matches the selector.
	#[error("no element matches selector `{0}`")]
	ElementNotFound(String),
	/// The document rejected a call.
	#[error(transparent)]
	Dom(#[from] DomError),
}
