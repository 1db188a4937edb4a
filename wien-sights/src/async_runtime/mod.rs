use std::future::Future;

/// Runs the future on the tokio runtime without waiting for it to finish.
pub fn spawn<T>(future: T)
where
    T: Future + Send + 'static,
    T::Output: Send + 'static,
{
    tokio::spawn(future);
}
