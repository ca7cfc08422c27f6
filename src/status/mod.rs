mod keys;
mod resolver;
mod snapshot;

pub use keys::{StatusKey, StatusKeyMap, StatusKeyMapBuilder, UnknownStatusKeyError};
pub use resolver::resolve;
pub use snapshot::PrinterStatusSnapshot;
