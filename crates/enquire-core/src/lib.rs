pub mod collection;
pub mod error;
pub mod mapping;
pub mod normalize;
pub mod types;
pub mod view;

pub use collection::{LabelCollection, LabelList, LabelSet};
pub use error::{CollectionError, ViewError};
pub use types::{CallArgs, CollectionKind, Delegated, Value};
pub use view::{Dispatched, QueryableView, Route};
