//! Multi-step checkout flow.

use serde::{Deserialize, Serialize};

use crate::cart::CartLineItem;
use crate::error::StorefrontError;

/// The ordered steps of checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    Shipping,
    Billing,
    Payment,
    Review,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Billing => "billing",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shipping" => Some(CheckoutStep::Shipping),
            "billing" => Some(CheckoutStep::Billing),
            "payment" => Some(CheckoutStep::Payment),
            "review" => Some(CheckoutStep::Review),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Billing => "Billing",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
        }
    }

    /// 1-based position in the flow.
    pub fn number(&self) -> usize {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Billing => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Review => 4,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, CheckoutStep::Review)
    }

    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => Some(CheckoutStep::Billing),
            CheckoutStep::Billing => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review => None,
        }
    }

    pub fn previous(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => None,
            CheckoutStep::Billing => Some(CheckoutStep::Shipping),
            CheckoutStep::Payment => Some(CheckoutStep::Billing),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
        }
    }

    pub fn all() -> [CheckoutStep; 4] {
        [
            CheckoutStep::Shipping,
            CheckoutStep::Billing,
            CheckoutStep::Payment,
            CheckoutStep::Review,
        ]
    }
}

/// Progress through checkout for one cart.
///
/// Forward movement is strictly one step at a time; jumping is allowed
/// only back to steps already completed (or the current one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    pub step: CheckoutStep,
    pub completed: Vec<CheckoutStep>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl CheckoutFlow {
    /// Start checkout for a non-empty cart.
    pub fn begin(items: &[CartLineItem]) -> Result<Self, StorefrontError> {
        if items.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }
        let now = current_timestamp();
        Ok(CheckoutFlow {
            step: CheckoutStep::Shipping,
            completed: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Complete the current step and move to the next one.
    pub fn advance(&mut self) -> Result<CheckoutStep, StorefrontError> {
        let next = self
            .step
            .next()
            .ok_or_else(|| StorefrontError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: "done".to_string(),
            })?;
        if !self.completed.contains(&self.step) {
            self.completed.push(self.step);
        }
        self.step = next;
        self.updated_at = current_timestamp();
        Ok(self.step)
    }

    /// Step back one step. Saturates at the first step.
    pub fn back(&mut self) -> CheckoutStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
            self.updated_at = current_timestamp();
        }
        self.step
    }

    /// Jump directly to `step`. Only the current step or one already
    /// completed is reachable; forward jumps are rejected.
    pub fn go_to(&mut self, step: CheckoutStep) -> Result<CheckoutStep, StorefrontError> {
        if step != self.step && !self.completed.contains(&step) {
            return Err(StorefrontError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: step.as_str().to_string(),
            });
        }
        self.step = step;
        self.updated_at = current_timestamp();
        Ok(self.step)
    }

    pub fn is_step_completed(&self, step: CheckoutStep) -> bool {
        self.completed.contains(&step)
    }

    /// Fraction of the flow reached, for the progress bar.
    pub fn progress_fraction(&self) -> f64 {
        self.step.number() as f64 / CheckoutStep::all().len() as f64
    }
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
