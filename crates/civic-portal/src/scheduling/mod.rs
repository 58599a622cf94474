//! Appointment time slots. The reference site fetched a fixed slot list per
//! (appointment type, date) behind a short mock delay; the same contract is
//! kept here behind an async trait so a real scheduler can slot in later.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bookable time for an appointment date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: u32,
    pub time: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("Failed to load time slots.")]
    Unavailable,
}

/// Async source of available slots for a given appointment type and date.
#[async_trait]
pub trait SlotSource: Send + Sync {
    async fn available(
        &self,
        appointment_type: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, SlotError>;
}

fn standard_slots() -> Vec<TimeSlot> {
    ["09:00 AM", "10:30 AM", "01:00 PM", "03:30 PM"]
        .iter()
        .enumerate()
        .map(|(index, time)| TimeSlot {
            id: index as u32 + 1,
            time: (*time).to_string(),
        })
        .collect()
}

/// Fixed slot book with optional simulated latency. Every date offers the
/// same four slots, matching the reference behavior.
pub struct StandardSlotBook {
    delay: Duration,
}

impl StandardSlotBook {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StandardSlotBook {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl SlotSource for StandardSlotBook {
    async fn available(
        &self,
        _appointment_type: &str,
        _date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, SlotError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(standard_slots())
    }
}
