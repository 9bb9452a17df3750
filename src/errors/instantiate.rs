/// Errors raised while a constructor or callable body runs with its arranged arguments
#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error("Argument {index} is missing, {len} arguments were arranged")]
    MissingArgument { index: usize, len: usize },
    #[error("Argument {index} has incorrect type. Actual: {actual}, expected: {expected}")]
    IncorrectType {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Method `{method}` called on incorrect target. Actual: {actual}, expected: {expected}")]
    IncorrectTarget {
        method: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
