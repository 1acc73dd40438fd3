//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - HS256 tokens issued by the account service
//! - `mock` - Test implementation that doesn't require a signing secret

mod jwt;
mod mock;

pub use jwt::{JwtSessionValidator, OwnerClaims};
pub use mock::MockSessionValidator;
