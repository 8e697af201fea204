use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}
