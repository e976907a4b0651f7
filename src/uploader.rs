use std::io::{self, Write};

use tracing::{error, info, span, warn, Instrument, Level};

use crate::{adapters, config::Config, model};

/// Pushes every entry of the source directory to the bucket, one at a time.
pub struct Uploader {
    pub client: Box<dyn adapters::ObjectStore>,
    pub config: Config,
    notices: Box<dyn Write + Send>,
}

impl Uploader {
    pub fn new(client: Box<dyn adapters::ObjectStore>, config: Config) -> Self {
        Self::with_notices(client, config, Box::new(io::stdout()))
    }

    pub fn with_notices(
        client: Box<dyn adapters::ObjectStore>,
        config: Config,
        notices: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            client,
            config,
            notices,
        }
    }

    /// Uploads `<source_dir>/<file_name>` and reports whether the store accepted it.
    ///
    /// `bucket` falls back to the configured bucket. The object key is always
    /// `file_name`; an `object_name` that differs is logged and ignored.
    pub async fn upload(
        &mut self,
        file_name: &str,
        bucket: Option<&str>,
        object_name: Option<&str>,
    ) -> bool {
        let bucket = bucket.unwrap_or(self.config.bucket.as_str()).to_string();
        let span = span!(Level::INFO, "upload", context = "upload");

        async {
            info!(filename = file_name, bucket = %bucket, "called");

            if let Some(object_name) = object_name {
                if object_name != file_name {
                    warn!(
                        filename = file_name,
                        object_name = object_name,
                        "object_name override is ignored, uploading under the file name"
                    );
                }
            }

            let path = self.config.source_dir.join(file_name);
            let res = self.client.put_file(&bucket, file_name, &path).await;

            match res {
                Err(err) => {
                    error!(error_message=%err, error_group="put_object");
                    self.failure_notice(file_name, &err);
                    false
                }
                Ok(_) => {
                    self.notice(format_args!(
                        "The {} was successfully uploaded to the S3 Bucket",
                        file_name
                    ));
                    true
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Uploads every directory entry in listing order, pausing after each success.
    pub async fn run(&mut self) -> Result<(), model::upload::ListError> {
        let span = span!(Level::INFO, "run", context = "run");

        async {
            info!(source_dir=%self.config.source_dir.display(), bucket=%self.config.bucket, "called");

            let entries = self.list_entries()?;

            for entry in entries {
                let file_name = match entry.into_string() {
                    Err(raw) => {
                        let err = model::upload::TransferError {
                            key: raw.to_string_lossy().to_string(),
                            message: format!("file name is not valid UTF-8: {:?}", raw),
                        };
                        error!(error_message=%err, error_group="file_name");
                        self.failure_notice(&err.key, &err);
                        continue;
                    }
                    Ok(file_name) => file_name,
                };

                if self.upload(&file_name, None, None).await {
                    tokio::time::sleep(self.config.delay).await;
                }
            }

            Ok::<(), model::upload::ListError>(())
        }
        .instrument(span)
        .await
    }

    fn list_entries(&self) -> Result<Vec<std::ffi::OsString>, model::upload::ListError> {
        let to_list_error = |err: io::Error| model::upload::ListError {
            path: self.config.source_dir.clone(),
            message: err.to_string(),
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&self.config.source_dir).map_err(to_list_error)? {
            entries.push(entry.map_err(to_list_error)?.file_name());
        }

        Ok(entries)
    }

    fn failure_notice(&mut self, file_name: &str, err: &model::upload::TransferError) {
        self.notice(format_args!(
            "{} experienced an error while uploading to the S3 Bucket: {}",
            file_name, err
        ));
    }

    fn notice(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.notices, "{}", args) {
            error!(error_message=%err, error_group="notice");
        }
    }
}
