#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
        assert_eq!(
            ReadError::from(StorageError::Io(std::io::Error::other("disk full"))).to_string(),
            "disk full"
        );
        assert!(matches!(
            DeleteError::from(StorageError::Unavailable),
            DeleteError::Storage(StorageError::Unavailable)
        ));
        assert!(matches!(
            UpdateError::from(Box::<dyn std::error::Error>::from("foo")),
            UpdateError::Other(error) if error.to_string() == "foo"
        ));
    }
}
