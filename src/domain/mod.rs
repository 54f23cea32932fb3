pub mod feed_item;
pub mod feed_loader;

pub use feed_item::FeedItem;
pub use feed_loader::{FeedLoader, LoadCompletion, LoadResult};
