use serde::{Deserialize, Serialize};

/// Print-pipeline status of a submitted order. Monotonic: once `Printed`,
/// an order never reports `SentToPrint` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    SentToPrint,
    Printed,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Printed)
    }

    /// Merge an incoming report into the current status without ever
    /// regressing from `Printed`.
    pub fn merge(self, incoming: OrderStatus) -> OrderStatus {
        match (self, incoming) {
            (OrderStatus::Printed, _) => OrderStatus::Printed,
            (_, next) => next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printed_is_sticky() {
        let status = OrderStatus::Printed;
        assert_eq!(status.merge(OrderStatus::SentToPrint), OrderStatus::Printed);
        assert_eq!(
            OrderStatus::SentToPrint.merge(OrderStatus::Printed),
            OrderStatus::Printed
        );
    }

    #[test]
    fn wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::SentToPrint).unwrap(),
            "\"SENT_TO_PRINT\""
        );
    }
}
