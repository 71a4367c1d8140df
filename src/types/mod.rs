//! Core types for Persona Quiz

mod axis;
mod question;
mod profile;
mod definition;
mod sign_key;
mod score;
mod gauge;
mod session;
mod error;
mod reason;

pub use axis::Axis;
pub use question::{Choice, Question};
pub use profile::ResultProfile;
pub use definition::{QuizDefinition, ResultCatalog, CatalogEntry};
pub use sign_key::{Polarity, SignKey};
pub use score::ScoreVector;
pub use gauge::{Gauge, AxisReading};
pub use session::{Answers, QuizSession};
pub use error::{LoadError, ScoreError, SessionError, SignKeyError};
pub use reason::{WarningCode, DefinitionWarning};
