use std::path::Path;

use futures::future::BoxFuture;

use crate::model;

#[cfg(test)]
pub mod mock;
pub mod s3;

/// Remote object store the uploader pushes files into.
pub trait ObjectStore: Send + Sync {
    /// Stores the contents of the local file at `path` under `key` in `bucket`.
    fn put_file<'a>(
        &'a self,
        bucket: &'a str,
        key: &'a str,
        path: &'a Path,
    ) -> BoxFuture<'a, Result<(), model::upload::TransferError>>;
}
