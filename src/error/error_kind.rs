/// Describes Roomies specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error caused by the error on the client side.
    ClientError,
    /// Error caused by the lack of privileges to perform an action.
    AccessForbidden,
    /// Requested resource doesn't exist or isn't visible to the caller.
    NotFound,
    /// Unknown error.
    Unknown,
}
