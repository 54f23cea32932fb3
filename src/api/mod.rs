mod feed_items_mapper;
mod remote_feed_loader;

pub use feed_items_mapper::{FeedItemsMapper, MapError};
pub use remote_feed_loader::RemoteFeedLoader;
