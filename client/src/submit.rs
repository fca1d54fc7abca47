use tracing::{info, warn};

use order::OrderPayload;

use crate::api::{Api, ClientError, CreateOrderResponse};

/// Submission lifecycle of one validated order. Terminal states stay put;
/// a failed submission is retried by starting over with a fresh draft, not
/// by re-driving this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Idle,
    Submitting,
    Submitted { order_id: String },
    Failed { message: String },
}

impl Submission {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Submission::Submitted { .. } | Submission::Failed { .. })
    }
}

/// Where a validated order goes. The HTTP [`Api`] in production; scripted
/// outcomes in tests.
pub trait SubmitTarget {
    fn submit(
        &self,
        payload: &OrderPayload,
    ) -> impl Future<Output = Result<CreateOrderResponse, ClientError>> + Send;
}

impl SubmitTarget for Api {
    async fn submit(&self, payload: &OrderPayload) -> Result<CreateOrderResponse, ClientError> {
        self.create_order(payload).await
    }
}

/// Drives SUBMITTING -> SUBMITTED | FAILED; `on_change` sees every state
/// the machine enters, in order. Any transport or non-2xx outcome lands in
/// `Failed` with a message for the user; nothing here is fatal.
pub async fn submit_order<T: SubmitTarget>(
    target: &T,
    payload: &OrderPayload,
    mut on_change: impl FnMut(&Submission),
) -> Submission {
    on_change(&Submission::Submitting);

    let state = match target.submit(payload).await {
        Ok(response) => {
            info!("Order {} accepted ({:?})", response.order_id, response.status);
            Submission::Submitted {
                order_id: response.order_id,
            }
        }
        Err(error) => {
            warn!("Order submission failed: {error}");
            Submission::Failed {
                message: error.to_string(),
            }
        }
    };
    on_change(&state);
    state
}

#[cfg(test)]
mod tests {
    use menu::{OrderStatus, Shift};
    use order::SandwichEntry;

    use super::*;

    struct Accepting;

    impl SubmitTarget for Accepting {
        async fn submit(
            &self,
            _payload: &OrderPayload,
        ) -> Result<CreateOrderResponse, ClientError> {
            Ok(CreateOrderResponse {
                order_id: "o-1".into(),
                status: OrderStatus::SentToPrint,
            })
        }
    }

    struct Rejecting;

    impl SubmitTarget for Rejecting {
        async fn submit(
            &self,
            _payload: &OrderPayload,
        ) -> Result<CreateOrderResponse, ClientError> {
            Err(ClientError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                path: "orders".into(),
            })
        }
    }

    fn payload() -> OrderPayload {
        OrderPayload {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            department_id: "dep-1".into(),
            wing_id: "wing-1".into(),
            pickup_time: "12:00".parse().unwrap(),
            shift: Shift::Day,
            has_allergies: false,
            allergies_text: None,
            sandwiches: vec![SandwichEntry::Special {
                id: "spec-1".into(),
                quantity: 1,
            }],
            extra_ids: vec![],
            notes: String::new(),
        }
    }

    #[test]
    fn only_submitted_and_failed_are_terminal() {
        assert!(!Submission::Idle.is_terminal());
        assert!(!Submission::Submitting.is_terminal());
        assert!(
            Submission::Submitted {
                order_id: "o-1".into()
            }
            .is_terminal()
        );
        assert!(
            Submission::Failed {
                message: "boom".into()
            }
            .is_terminal()
        );
    }

    #[tokio::test]
    async fn passes_through_submitting_before_landing_submitted() {
        let mut seen = Vec::new();
        let state = submit_order(&Accepting, &payload(), |s| seen.push(s.clone())).await;

        assert_eq!(
            state,
            Submission::Submitted {
                order_id: "o-1".into()
            }
        );
        assert_eq!(
            seen,
            vec![
                Submission::Submitting,
                Submission::Submitted {
                    order_id: "o-1".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn rejection_passes_through_submitting_into_failed() {
        let mut seen = Vec::new();
        let state = submit_order(&Rejecting, &payload(), |s| seen.push(s.clone())).await;

        assert!(matches!(state, Submission::Failed { .. }));
        assert_eq!(seen[0], Submission::Submitting);
        assert_eq!(seen.len(), 2);
        assert!(seen[1].is_terminal());
    }
}
