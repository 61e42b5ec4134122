use crate::domain::intent::PaymentIntent;
use crate::error::Result;
use std::io::{BufRead, BufReader, Read};

/// Reads payment intents from a JSON Lines source.
///
/// Each non-blank line holds one intent object. A line that does not parse
/// yields an error for that line only and reading carries on. A read error
/// from the source is yielded once and ends the stream.
pub struct IntentReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> IntentReader<R> {
    /// Creates a new `IntentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily deserializes one intent per line.
    pub fn intents(self) -> impl Iterator<Item = Result<PaymentIntent>> {
        let mut source_failed = false;
        self.reader
            .lines()
            .map_while(move |line| {
                if source_failed {
                    return None;
                }
                source_failed = line.is_err();
                Some(line)
            })
            .filter(|line| !matches!(line, Ok(line) if line.trim().is_empty()))
            .map(|line| -> Result<PaymentIntent> { Ok(serde_json::from_str(&line?)?) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::domain::intent::Money;

    #[test]
    fn test_reader_single_document() {
        let data = r#"{"amount": 100, "card": {"number": "4111", "month": 1, "year": 2030}}"#;
        let intents: Vec<Result<PaymentIntent>> = IntentReader::new(data.as_bytes()).intents().collect();

        assert_eq!(intents.len(), 1);
        let intent = intents[0].as_ref().unwrap();
        assert_eq!(intent.amount, Money::from_minor(100));
        assert_eq!(intent.card.number, "4111");
    }

    #[test]
    fn test_reader_json_lines() {
        let data = concat!(
            r#"{"amount": 100, "card": {"number": "4111", "month": 1, "year": 2030}}"#,
            "\n",
            r#"{"amount": 250, "card": {"number": "5555", "month": 2, "year": 31}, "currency": "USD"}"#,
        );
        let intents: Vec<PaymentIntent> = IntentReader::new(data.as_bytes())
            .intents()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(intents.len(), 2);
        assert_eq!(intents[1].options.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_reader_continues_after_bad_line() {
        let data = concat!(
            r#"{"amount": "lots", "card": {}}"#,
            "\n\n",
            r#"{"amount": 100, "card": {"number": "4111", "month": 1, "year": 2030}}"#,
            "\n",
            r#"{"amount": 200, "card": {"number": "5555", "month": 2, "year": 2031}}"#,
            "\n",
        );
        let intents: Vec<Result<PaymentIntent>> = IntentReader::new(data.as_bytes()).intents().collect();

        assert_eq!(intents.len(), 3);
        assert!(matches!(intents[0], Err(GatewayError::Json(_))));
        assert_eq!(intents[1].as_ref().unwrap().amount, Money::from_minor(100));
        assert_eq!(intents[2].as_ref().unwrap().amount.minor_units(), 200);
    }

    struct FailingSource;

    impl Read for FailingSource {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device unplugged"))
        }
    }

    #[test]
    fn test_reader_stops_after_source_error() {
        let intents: Vec<Result<PaymentIntent>> = IntentReader::new(FailingSource).intents().collect();

        assert_eq!(intents.len(), 1);
        assert!(matches!(intents[0], Err(GatewayError::Io(_))));
    }

    #[test]
    fn test_reader_malformed_document() {
        let data = r#"{"amount": "lots", "card": {}}"#;
        let intents: Vec<Result<PaymentIntent>> = IntentReader::new(data.as_bytes()).intents().collect();

        assert!(matches!(intents[0], Err(GatewayError::Json(_))));
    }
}
