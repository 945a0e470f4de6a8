use aws_config::{BehaviorVersion, Region};
use aws_lambda_events::event::cognito::CognitoEventUserPoolsPostConfirmation;
use chrono::Utc;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{error, info};

use signup_shared::{HandlerConfig, SignupResult, UserRecord, UserTableService};

async fn function_handler(
    event: LambdaEvent<CognitoEventUserPoolsPostConfirmation>,
    service: &UserTableService,
) -> Result<String, Error> {
    let (payload, _context) = event.into_parts();

    // Log the incoming event for debugging purposes
    if let Ok(json) = serde_json::to_string(&payload) {
        info!("EVENT: {}", json);
    }

    match handle_post_confirmation(&payload, service).await {
        Ok(response) => {
            info!("Successfully handled post-confirmation");
            Ok(response)
        }
        Err(e) => {
            error!("Failed to handle post-confirmation: {}", e);
            Err(e.into())
        }
    }
}

async fn handle_post_confirmation(
    event: &CognitoEventUserPoolsPostConfirmation,
    service: &UserTableService,
) -> SignupResult<String> {
    let record = UserRecord::from_user_attributes(&event.request.user_attributes, Utc::now())?;

    service.put_user(&record).await?;

    Ok("success".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    // REGION and TABLE_NAME are required; abort before serving any event
    let config = HandlerConfig::from_env()?;

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&sdk_config);
    let service = UserTableService::new(dynamodb_client, config.table_name.clone());

    info!(
        "Post-confirmation handler ready - region: {}, table: {}",
        config.region, config.table_name
    );

    run(service_fn(|event| function_handler(event, &service))).await
}
