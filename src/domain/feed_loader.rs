use super::FeedItem;
use crate::errors::LoadError;

/// Outcome of one `load` call: the decoded items in payload order, or the
/// kind of failure.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Callback receiving the single result of a `load` call.
pub type LoadCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

pub trait FeedLoader {
    /// Start loading the feed. Returns immediately; the result is handed to
    /// `completion` on whatever thread the underlying transport reports on.
    fn load(&self, completion: LoadCompletion);
}
