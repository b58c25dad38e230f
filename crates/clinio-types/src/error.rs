//! Error types shared across the workspace.

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Authentication failed; carries the server's user-facing message.
	Auth(Box<str>),
	/// The bearer credential is missing, expired or revoked.
	Unauthorized,
	PermissionDenied,
	NotFound,
	/// A persisted or remote payload could not be parsed.
	Parse,
	/// Invalid navigation catalog (e.g. duplicate route path).
	Config(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	/// Message suitable for showing to the user, if the error carries one.
	pub fn user_message(&self) -> Option<&str> {
		match self {
			Error::Auth(msg) => Some(msg),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(_err: serde_json::Error) -> Self {
		Self::Parse
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::Auth(msg) => write!(f, "authentication failed: {}", msg),
			Error::Unauthorized => write!(f, "unauthorized"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::NotFound => write!(f, "not found"),
			Error::Parse => write!(f, "parse error"),
			Error::Config(msg) => write!(f, "configuration error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

// vim: ts=4
