use std::fmt;

/// The five calls the processor understands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    Purchase,
    Authorize,
    Capture,
    Refund,
    Void,
}

impl Operation {
    /// Action name sent to the processor.
    pub fn action(&self) -> &'static str {
        match self {
            Operation::Purchase => "credit_card_charges",
            Operation::Authorize => "authonly",
            Operation::Capture => "capture",
            Operation::Refund => "refund",
            Operation::Void => "void",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}
