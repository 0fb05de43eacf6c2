use crate::cards::Card;
use crate::models::CountryRecord;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save the card grid as CSV with a `card,value` header.
pub fn save_cards_csv<P: AsRef<Path>>(cards: &[Card], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("card", "value"))?;
    for c in cards {
        wtr.serialize((c.title, c.display_text()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a record as pretty JSON in the API's own field names.
pub fn save_json<P: AsRef<Path>>(record: &CountryRecord, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(record)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::build_cards;
    use crate::models::CountryName;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let rec = CountryRecord {
            name: Some(CountryName {
                common: Some("Chile".into()),
                official: Some("Republic of Chile".into()),
            }),
            population: Some(19_116_209),
            ..Default::default()
        };
        save_cards_csv(&build_cards(&rec, "en"), &csvp).unwrap();
        save_json(&rec, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }
}
