//! Notification hub configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::websocket::DEFAULT_OUTBOUND_CAPACITY;

const MAX_OUTBOUND_CAPACITY: usize = 65_536;

/// Live dashboard push settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HubConfig {
    /// Frames buffered per connection before it is evicted as a slow consumer
    #[serde(default = "default_capacity")]
    pub outbound_buffer_capacity: usize,
}

impl HubConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.outbound_buffer_capacity == 0 || self.outbound_buffer_capacity > MAX_OUTBOUND_CAPACITY
        {
            return Err(ValidationError::InvalidBufferCapacity);
        }
        Ok(())
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            outbound_buffer_capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_OUTBOUND_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(HubConfig::default().outbound_buffer_capacity, 256);
        assert!(HubConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let config = HubConfig {
            outbound_buffer_capacity: 0,
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBufferCapacity));
    }
}
