//! Remote text classification: transport, retry gateway, and response normalization.

pub mod backend;
pub mod client;
pub mod error;
pub mod gateway;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod response;


pub use backend::{BackendResponse, ClassifierBackend, ResponseStatus};
pub use client::HttpClassifier;
pub use error::ClassifyError;
pub use gateway::{ClassificationGateway, RetryPolicy};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockClassifierBackend, MockReply, RecordedCall};
pub use response::{Classification, ClassifierResponse};
