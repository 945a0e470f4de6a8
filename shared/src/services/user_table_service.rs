use aws_sdk_dynamodb::{types::AttributeValue, Client as DynamoClient};
use std::collections::HashMap;
use tracing::info;

use crate::{SignupResult, UserRecord};

/// DynamoDB-backed store for confirmed user records.
pub struct UserTableService {
    client: DynamoClient,
    table_name: String,
}

impl UserTableService {
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Write a user record, keyed by UserID.
    ///
    /// The put carries no condition expression, so a redelivered confirmation
    /// for the same `sub` overwrites the existing item rather than being
    /// rejected. That matches the deployed behavior today; making the write
    /// idempotent is a pending product decision.
    pub async fn put_user(&self, record: &UserRecord) -> SignupResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(user_record_item(record)))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        info!("Stored user record for UserID: {}", record.user_id);
        Ok(())
    }
}

/// Map a record to its stored attribute set.
pub fn user_record_item(record: &UserRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("UserID".to_string(), AttributeValue::S(record.user_id.clone()));
    item.insert("Email".to_string(), AttributeValue::S(record.email.clone()));
    item.insert("Name".to_string(), AttributeValue::S(record.name.clone()));
    item.insert(
        "CreatedAt".to_string(),
        AttributeValue::S(record.created_at.to_rfc3339()),
    );
    item.insert(
        "__typename".to_string(),
        AttributeValue::S(record.typename.clone()),
    );
    item
}
