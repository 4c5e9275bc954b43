use crate::domain::reward::RewardConfirmation;
use crate::error::Result;
use std::io::Write;

/// Writes reward confirmations as CSV to any `Write` sink.
pub struct ConfirmationWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ConfirmationWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes a header row followed by one row per confirmation.
    pub fn write_confirmations(
        &mut self,
        confirmations: impl IntoIterator<Item = RewardConfirmation>,
    ) -> Result<()> {
        self.writer
            .write_record(["confirmation_number", "amount"])?;
        for confirmation in confirmations {
            self.writer.write_record([
                confirmation.confirmation_number().to_string(),
                confirmation.contribution().amount().to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
