use std::path::Path;

use aws_sdk_s3::{error::DisplayErrorContext, primitives::ByteStream};
use futures::future::BoxFuture;

use crate::{adapters, model};

impl adapters::ObjectStore for aws_sdk_s3::Client {
    fn put_file<'a>(
        &'a self,
        bucket: &'a str,
        key: &'a str,
        path: &'a Path,
    ) -> BoxFuture<'a, Result<(), model::upload::TransferError>> {
        Box::pin(async move {
            let body = ByteStream::from_path(path).await.map_err(|err| {
                model::upload::TransferError {
                    key: key.to_string(),
                    message: format!(
                        "failed to read file at: {}, {}",
                        path.display(),
                        DisplayErrorContext(&err)
                    ),
                }
            })?;

            self.put_object()
                .bucket(bucket)
                .key(key)
                .body(body)
                .send()
                .await
                .map_err(|err| model::upload::TransferError {
                    key: key.to_string(),
                    message: format!(
                        "failed to put_object at: {}, {}",
                        key,
                        DisplayErrorContext(&err)
                    ),
                })?;

            Ok(())
        })
    }
}
