//! MongoDB-backed query history store.

use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use super::document::{decode_history, QueryDocument};
use super::settings::MongoSettings;
use crate::domain::QueryRecord;
use crate::error::Result;
use crate::port::RecordStore;

/// Query history in one MongoDB collection.
///
/// The client is created on first use rather than at construction, so a
/// missing or unreachable store only affects history operations.
pub struct MongoRecordStore {
    settings: MongoSettings,
    client: Option<Client>,
    collection: Option<Collection<QueryDocument>>,
}

impl MongoRecordStore {
    #[must_use]
    pub fn new(settings: MongoSettings) -> Self {
        Self {
            settings,
            client: None,
            collection: None,
        }
    }

    /// Whether a client is currently open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    async fn connect(&mut self) -> Result<Collection<QueryDocument>> {
        if let Some(collection) = &self.collection {
            return Ok(collection.clone());
        }

        let target = self.settings.target()?;
        let client = Client::with_uri_str(target.url).await?;
        let collection = client
            .database(target.database)
            .collection::<QueryDocument>(target.collection);
        info!(
            database = target.database,
            collection = target.collection,
            "record store connected"
        );

        self.client = Some(client);
        self.collection = Some(collection.clone());
        Ok(collection)
    }
}

impl RecordStore for MongoRecordStore {
    async fn insert(&mut self, record: &QueryRecord) -> Result<()> {
        let collection = self.connect().await?;
        collection.insert_one(QueryDocument::from(record)).await?;
        debug!(kind = record.query.kind(), "query record inserted");
        Ok(())
    }

    async fn find_newest_first(&mut self) -> Result<Vec<QueryRecord>> {
        let collection = self.connect().await?;
        let documents: Vec<Document> = collection
            .clone_with_type::<Document>()
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .projection(doc! { "_id": 0 })
            .await?
            .try_collect()
            .await?;
        Ok(decode_history(documents))
    }

    async fn close(&mut self) {
        self.collection = None;
        if let Some(client) = self.client.take() {
            client.shutdown().await;
            info!("record store connection closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchQuery;
    use crate::error::{ConfigError, Error};

    #[tokio::test]
    async fn close_without_connection_is_noop() {
        let mut store = MongoRecordStore::new(MongoSettings::default());
        store.close().await;
        store.close().await;
        assert!(!store.is_connected());
    }

    #[tokio::test]
    async fn missing_settings_surface_on_first_use() {
        let mut store = MongoRecordStore::new(MongoSettings::default());
        let record = QueryRecord::now(SearchQuery::keyword("love"), 1);
        let result = store.insert(&record).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "MONGO_URL" }))
        ));
        assert!(!store.is_connected());
    }

    #[tokio::test]
    async fn malformed_url_is_store_error() {
        let mut store = MongoRecordStore::new(MongoSettings {
            url: Some("not-a-mongo-url".into()),
            database: Some("films".into()),
            collection: Some("queries".into()),
        });
        let result = store.find_newest_first().await;
        assert!(matches!(result, Err(Error::RecordStore(_))));
        store.close().await;
    }
}
