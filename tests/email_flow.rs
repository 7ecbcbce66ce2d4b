mod common;

use std::{sync::Arc, time::Duration};

use inventory_api::{
    dto::email::EmailContent, error::AppError, services::notification_service::notify_supplier,
};
use uuid::Uuid;

use common::{
    FailingNotifier, RecordingNotifier, StalledNotifier, create_product, create_supplier,
    setup_state, setup_state_with_timeout,
};

fn content() -> EmailContent {
    EmailContent {
        message: "Stock is running low, please ship 40 units.".into(),
        subject: "Restock request".into(),
    }
}

#[tokio::test]
async fn email_goes_to_the_products_supplier() -> anyhow::Result<()> {
    let notifier = Arc::new(RecordingNotifier::default());
    let state = setup_state(notifier.clone()).await?;
    let supplier = create_supplier(&state, "Acme", "sales@acme.test").await?;
    create_supplier(&state, "Bystander", "nobody@else.test").await?;
    let product = create_product(&state, supplier.id, "Widget", 0, 10).await?;

    let resp = notify_supplier(&state, product.id, content()).await?;
    assert!(resp.data.is_none());

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.email.to_string(), "sales@acme.test");
    assert_eq!(sent[0].subject, "Restock request");
    assert!(sent[0].html_body.contains("<p>Stock is running low, please ship 40 units.</p>"));
    assert!(sent[0].html_body.contains("Acme Trading"));
    Ok(())
}

#[tokio::test]
async fn unknown_product_is_not_found_and_sends_nothing() -> anyhow::Result<()> {
    let notifier = Arc::new(RecordingNotifier::default());
    let state = setup_state(notifier.clone()).await?;

    let result = notify_supplier(&state, Uuid::new_v4(), content()).await;
    assert!(matches!(result, Err(AppError::NotFound("Product"))));
    assert!(notifier.sent().is_empty());
    Ok(())
}

#[tokio::test]
async fn unusable_supplier_address_is_rejected_before_sending() -> anyhow::Result<()> {
    let notifier = Arc::new(RecordingNotifier::default());
    let state = setup_state(notifier.clone()).await?;
    let supplier = create_supplier(&state, "Acme", "not an email").await?;
    let product = create_product(&state, supplier.id, "Widget", 0, 10).await?;

    let result = notify_supplier(&state, product.id, content()).await;
    match result {
        Err(AppError::Validation(message)) => assert!(message.contains("not an email")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(notifier.sent().is_empty());
    Ok(())
}

#[tokio::test]
async fn relay_failure_is_service_unavailable() -> anyhow::Result<()> {
    let state = setup_state(Arc::new(FailingNotifier)).await?;
    let supplier = create_supplier(&state, "Acme", "sales@acme.test").await?;
    let product = create_product(&state, supplier.id, "Widget", 0, 10).await?;

    let result = notify_supplier(&state, product.id, content()).await;
    assert!(matches!(result, Err(AppError::ServiceUnavailable(_))));
    Ok(())
}

#[tokio::test]
async fn stalled_relay_times_out_as_service_unavailable() -> anyhow::Result<()> {
    let state =
        setup_state_with_timeout(Arc::new(StalledNotifier), Duration::from_millis(50)).await?;
    let supplier = create_supplier(&state, "Acme", "sales@acme.test").await?;
    let product = create_product(&state, supplier.id, "Widget", 0, 10).await?;

    let result = notify_supplier(&state, product.id, content()).await;
    match result {
        Err(AppError::ServiceUnavailable(message)) => assert!(message.contains("did not answer")),
        other => panic!("expected timeout, got {other:?}"),
    }
    Ok(())
}
