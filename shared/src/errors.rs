use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("DynamoDB error: {0}")]
    DynamoDBError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<aws_sdk_dynamodb::Error> for SignupError {
    fn from(err: aws_sdk_dynamodb::Error) -> Self {
        SignupError::DynamoDBError(err.to_string())
    }
}

pub type SignupResult<T> = Result<T, SignupError>;
