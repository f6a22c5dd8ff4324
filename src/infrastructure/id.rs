use crate::domain::ports::IdGenerator;
use crate::domain::receipt::ReceiptId;
use uuid::Uuid;

/// Generates random (v4) UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ReceiptId {
        ReceiptId::new(Uuid::new_v4().to_string())
    }
}
