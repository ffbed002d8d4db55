use crate::traits::{
    join_url, ObjectInfo, ObjectMetadata, Storage, StorageError, StorageResult, StoredObject,
};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{
    Attribute, AttributeValue, Attributes, ObjectStore, ObjectStoreExt, PutOptions, PutPayload,
    Result as ObjectResult,
};
use std::borrow::Cow;
use std::collections::HashMap;

/// S3-compatible storage (Cloudflare R2, AWS S3, MinIO)
#[derive(Clone)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// Credentials come from the standard `AWS_*` environment variables.
    ///
    /// # Arguments
    /// * `bucket` - Bucket name
    /// * `region` - Region identifier (`auto` for R2)
    /// * `endpoint_url` - Optional custom endpoint for S3-compatible providers
    ///   (e.g., "https://<account>.r2.cloudflarestorage.com", "http://localhost:9000" for MinIO)
    /// * `public_base_url` - Base of the public object URLs (e.g., "https://pub-<account>.r2.dev")
    pub fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
        public_base_url: String,
    ) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region)
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket,
            public_base_url,
        })
    }

    fn attributes_for(metadata: &ObjectMetadata) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert(
            Attribute::ContentType,
            AttributeValue::from(metadata.content_type.clone()),
        );
        for (name, value) in metadata.custom() {
            attributes.insert(
                Attribute::Metadata(Cow::Borrowed(name)),
                AttributeValue::from(value),
            );
        }
        attributes
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put(&self, key: &str, data: Bytes, metadata: &ObjectMetadata) -> StorageResult<()> {
        let size = data.len() as u64;
        let location = Path::from(key.to_string());
        let opts = PutOptions {
            attributes: Self::attributes_for(metadata),
            ..Default::default()
        };

        let start = std::time::Instant::now();

        let result: ObjectResult<_> = self
            .store
            .put_opts(&location, PutPayload::from(data), opts)
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<StoredObject> {
        let start = std::time::Instant::now();
        let location = Path::from(key.to_string());

        let result: ObjectResult<_> = self.store.get(&location).await;

        let result = result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(key.to_string()),
            other => {
                tracing::error!(
                    error = %other,
                    bucket = %self.bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 download failed"
                );
                StorageError::DownloadFailed(other.to_string())
            }
        })?;

        let mut content_type = None;
        let mut metadata = HashMap::new();
        for (attribute, value) in result.attributes.iter() {
            match attribute {
                Attribute::ContentType => content_type = Some(value.to_string()),
                Attribute::Metadata(name) => {
                    metadata.insert(name.to_string(), value.to_string());
                }
                _ => {}
            }
        }

        let data = result
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 download successful"
        );

        Ok(StoredObject {
            data,
            content_type,
            metadata,
        })
    }

    async fn list(&self, prefix: Option<&str>) -> StorageResult<Vec<ObjectInfo>> {
        let start = std::time::Instant::now();
        let prefix_path = prefix.map(|p| Path::from(p.to_string()));

        let objects: Vec<_> = self
            .store
            .list(prefix_path.as_ref())
            .try_collect()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 list failed"
                );
                StorageError::ListFailed(e.to_string())
            })?;

        let entries: Vec<ObjectInfo> = objects
            .into_iter()
            .map(|meta| ObjectInfo {
                key: meta.location.to_string(),
                size: meta.size,
                uploaded: meta.last_modified,
            })
            .collect();

        tracing::info!(
            bucket = %self.bucket,
            count = entries.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 list successful"
        );

        Ok(entries)
    }

    fn public_url(&self, key: &str) -> String {
        join_url(&self.public_base_url, key)
    }

    fn bucket_name(&self) -> &str {
        &self.bucket
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
