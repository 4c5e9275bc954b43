use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

/// Writes a network config with one 80/20 account and one 8% restaurant.
pub fn write_network_config(path: &Path) -> Result<(), Error> {
    let config = serde_json::json!({
        "accounts": [
            {
                "number": "123456789",
                "name": "Keith and Keri Donald",
                "credit_card_number": "1234123412341234",
                "beneficiaries": [
                    { "name": "Annabelle", "allocation_percentage": "80" },
                    { "name": "Corgan", "allocation_percentage": "20" }
                ]
            }
        ],
        "restaurants": [
            {
                "merchant_number": "123456789",
                "name": "AppleBees",
                "benefit_policy": { "kind": "percentage", "rate": "8" }
            }
        ]
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&config)?.as_bytes())?;
    Ok(())
}

/// Writes a dinings CSV with the given (card, merchant, amount) rows.
pub fn write_dinings_csv(path: &Path, rows: &[(&str, &str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["credit_card_number", "merchant_number", "amount"])?;
    for (card, merchant, amount) in rows {
        wtr.write_record([*card, *merchant, *amount])?;
    }

    wtr.flush()?;
    Ok(())
}
