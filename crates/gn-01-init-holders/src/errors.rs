use genesis_types::MalformedInput;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HolderError {
    #[error("Init holder #{index} is malformed")]
    InvalidEntry {
        index: usize,
        #[source]
        source: MalformedInput,
    },
}
