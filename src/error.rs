use thiserror::Error;

/// Everything a command handler can fail with. Handlers bubble these up to
/// the session loop, which reports them and keeps prompting.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Missing parameter <id>.")]
    MissingArgument,

    #[error("The <id> parameter is not a number: '{0}'.")]
    InvalidArgument(String),

    #[error("There is no quiz associated to id={0}.")]
    NotFound(i64),

    /// The store rejected a question/answer pair. One message per bad field.
    #[error("The quiz is invalid")]
    Validation(Vec<String>),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
