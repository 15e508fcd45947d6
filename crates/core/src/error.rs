use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(
        "A literal template needs one more fragment than interpolations: expected {} fragments, found {}",
        .expected,
        .found
    )]
    FragmentCount { expected: usize, found: usize },
}

impl Error {
    pub fn fragment_count(expected: usize, found: usize) -> Self {
        Self::FragmentCount { expected, found }
    }
}
