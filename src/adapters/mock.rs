use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use futures::future::{self, BoxFuture};
use tokio::time::Instant;

use crate::{adapters, model};

#[derive(Clone, Debug)]
pub struct PutCall {
    pub bucket: String,
    pub key: String,
    pub path: PathBuf,
    pub at: Instant,
}

/// Records every put and fails the ones whose key was registered with `fail_on`.
#[derive(Clone, Default)]
pub struct MockClient {
    pub calls: Arc<Mutex<Vec<PutCall>>>,
    failing_keys: HashSet<String>,
}

impl MockClient {
    pub fn fail_on(mut self, key: &str) -> Self {
        self.failing_keys.insert(key.to_string());
        self
    }

    pub fn calls(&self) -> Vec<PutCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl adapters::ObjectStore for MockClient {
    fn put_file<'a>(
        &'a self,
        bucket: &'a str,
        key: &'a str,
        path: &'a Path,
    ) -> BoxFuture<'a, Result<(), model::upload::TransferError>> {
        self.calls.lock().unwrap().push(PutCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
            path: path.to_path_buf(),
            at: Instant::now(),
        });

        let res = if self.failing_keys.contains(key) {
            Err(model::upload::TransferError {
                key: key.to_string(),
                message: format!("failed to put_object at: {}, AccessDenied", key),
            })
        } else {
            Ok(())
        };

        Box::pin(future::ready(res))
    }
}

/// Cloneable in-memory notice sink.
#[derive(Clone, Default)]
pub struct SharedBuf(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
