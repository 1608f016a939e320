use chrono::Utc;
use uuid::Uuid;

use crate::{
    clients::{
        notification::OrderNotification,
        payment::{IntentLineItem, IntentRequest},
    },
    dto::flows::{ContactRequest, CreateFlowRequest, DateRangeRequest, FlowView},
    error::{AppError, AppResult},
    models::{ContactInfo, RentalFlow},
    pricing,
    response::ApiResponse,
    state::AppState,
};

pub async fn create_flow(
    state: &AppState,
    payload: CreateFlowRequest,
) -> AppResult<ApiResponse<FlowView>> {
    let product = state.content.product(&payload.product_id).await?;

    // The displayed price and the rental rate are independent values; the
    // formula only ever uses the configured rate.
    tracing::debug!(
        product_id = %product.id,
        display_price = product.price,
        daily_rate = state.config.daily_rate,
        "product display price is not an input to the rental total"
    );

    let flow = RentalFlow::new(product, Utc::now().date_naive());
    let view = FlowView::from(&flow);
    tracing::info!(flow_id = %flow.id, product_id = %flow.product.id, "rental flow created");
    state.flows.insert(flow).await;

    Ok(ApiResponse::success("Flow created", view))
}

pub async fn get_flow(state: &AppState, id: Uuid) -> AppResult<ApiResponse<FlowView>> {
    let view = current_view(state, id).await?;
    Ok(ApiResponse::success("Ok", view))
}

/// Applies a date edit. A start-date change only replaces the date; an
/// end-date change recomputes the total and, when the total moved to a new
/// non-zero value, issues a payment intent. An intent failure is recorded
/// on the flow but does not fail the edit.
pub async fn update_dates(
    state: &AppState,
    id: Uuid,
    payload: DateRangeRequest,
) -> AppResult<ApiResponse<FlowView>> {
    let daily_rate = state.config.daily_rate;
    let change = state
        .flows
        .with_mut(&id, |flow| {
            if let Some(start) = payload.start_date {
                flow.set_start(start);
            }
            payload.end_date.map(|end| flow.set_end(end, daily_rate))
        })
        .await
        .ok_or(AppError::NotFound)?;

    if let Some(change) = change {
        if change.needs_intent() {
            if let Err(err) = request_intent(state, id, change.current).await {
                tracing::warn!(flow_id = %id, error = %err, "payment intent could not be created");
            }
        }
    }

    let view = current_view(state, id).await?;
    Ok(ApiResponse::success("Dates updated", view))
}

pub async fn toggle_confirmation(state: &AppState, id: Uuid) -> AppResult<ApiResponse<FlowView>> {
    let confirmed = state
        .flows
        .with_mut(&id, |flow| flow.toggle_confirmation())
        .await
        .ok_or(AppError::NotFound)?;

    let message = if confirmed {
        "Confirmed"
    } else {
        "Confirmation withdrawn"
    };
    let view = current_view(state, id).await?;
    Ok(ApiResponse::success(message, view))
}

pub async fn update_contact(
    state: &AppState,
    id: Uuid,
    payload: ContactRequest,
) -> AppResult<ApiResponse<FlowView>> {
    state
        .flows
        .with_mut(&id, |flow| {
            flow.contact = ContactInfo {
                customer_name: payload.customer_name,
                customer_email: payload.customer_email,
                customer_phone_number: payload.customer_phone_number,
            };
        })
        .await
        .ok_or(AppError::NotFound)?;

    let view = current_view(state, id).await?;
    Ok(ApiResponse::success("Contact updated", view))
}

/// Submits the order notification. Validation blocks the request when the
/// flow is unconfirmed, already submitting, already sent, or the contact
/// info is incomplete.
pub async fn submit_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<FlowView>> {
    let notification = state
        .flows
        .with_mut(&id, begin_submission)
        .await
        .ok_or(AppError::NotFound)??;

    let outcome = state.notifier.send_order(&notification).await;

    state
        .flows
        .with_mut(&id, |flow| {
            flow.submitting = false;
            match outcome {
                Ok(()) => {
                    flow.email_sent = true;
                    flow.submission_error = None;
                    tracing::info!(flow_id = %flow.id, "order notification sent");
                    Ok(())
                }
                Err(err) => {
                    tracing::warn!(flow_id = %flow.id, error = %err, "order notification failed");
                    flow.submission_error = Some(err.to_string());
                    Err(AppError::Notification(err))
                }
            }
        })
        .await
        .ok_or(AppError::NotFound)??;

    let view = current_view(state, id).await?;
    Ok(ApiResponse::success("Order submitted", view))
}

/// Re-issues the payment intent for the current total, for when an earlier
/// attempt failed. A zero total has nothing to pay and issues no request.
pub async fn retry_payment_intent(state: &AppState, id: Uuid) -> AppResult<ApiResponse<FlowView>> {
    let flow = state.flows.get(&id).await.ok_or(AppError::NotFound)?;
    if flow.total_price == 0 {
        return Err(AppError::BadRequest("Total price is zero".into()));
    }

    request_intent(state, id, flow.total_price).await?;

    let view = current_view(state, id).await?;
    Ok(ApiResponse::success("Payment intent created", view))
}

/// Issues one payment-intent request for `total`. Each request carries a
/// sequence number; the response is applied only while its sequence is
/// still the latest issued, so rapid date edits cannot leave a stale
/// client secret behind.
pub async fn request_intent(state: &AppState, id: Uuid, total: i64) -> AppResult<()> {
    let seq = state
        .flows
        .with_mut(&id, |flow| {
            flow.intent_seq += 1;
            flow.intent_seq
        })
        .await
        .ok_or(AppError::NotFound)?;

    let request = IntentRequest {
        items: vec![IntentLineItem {
            id: state.config.payable_item_id.clone(),
        }],
        amount: pricing::minor_units(total),
    };
    tracing::debug!(
        flow_id = %id,
        seq,
        amount = request.amount,
        item_id = %state.config.payable_item_id,
        "requesting payment intent"
    );

    match state.payments.create_intent(&request).await {
        Ok(response) => {
            let applied = state
                .flows
                .with_mut(&id, |flow| {
                    if flow.intent_seq == seq {
                        flow.client_secret = Some(response.client_secret);
                        flow.intent_failed = false;
                        true
                    } else {
                        false
                    }
                })
                .await
                .ok_or(AppError::NotFound)?;

            if !applied {
                tracing::debug!(flow_id = %id, seq, "discarding stale payment intent response");
            }
            Ok(())
        }
        Err(err) => {
            state
                .flows
                .with_mut(&id, |flow| {
                    if flow.intent_seq == seq {
                        flow.intent_failed = true;
                    }
                })
                .await
                .ok_or(AppError::NotFound)?;
            Err(AppError::Payment(err))
        }
    }
}

fn begin_submission(flow: &mut RentalFlow) -> Result<OrderNotification, AppError> {
    if !flow.confirmed {
        return Err(AppError::BadRequest("Order has not been confirmed".into()));
    }
    if flow.submitting {
        return Err(AppError::BadRequest(
            "Submission already in progress".into(),
        ));
    }
    if flow.email_sent {
        return Err(AppError::BadRequest(
            "Order has already been submitted".into(),
        ));
    }
    if !flow.contact.is_complete() {
        return Err(AppError::BadRequest("Name and email are required".into()));
    }

    if flow
        .contact
        .customer_phone_number
        .as_deref()
        .is_some_and(|p| !p.trim().is_empty())
    {
        // Collected on the form, absent from the template. Kept observable
        // until the template grows a field for it.
        tracing::debug!(flow_id = %flow.id, "phone number collected but not sent with the notification");
    }

    flow.submitting = true;
    flow.submission_error = None;

    Ok(OrderNotification {
        customer_name: flow.contact.customer_name.clone(),
        price: flow.total_price.to_string(),
        customer_email: flow.contact.customer_email.clone(),
        start_date: flow.period.start_date.format("%d/%m/%Y").to_string(),
        end_date: flow.period.end_date.format("%d/%m/%Y").to_string(),
    })
}

async fn current_view(state: &AppState, id: Uuid) -> AppResult<FlowView> {
    let flow = state.flows.get(&id).await.ok_or(AppError::NotFound)?;
    Ok(FlowView::from(&flow))
}
