use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes `rows` random bags to `path`.
///
/// Dimensions stay below 80 cm so a fair share of bags lands on each side of
/// the carry-on and dimension-sum limits. Weights have two decimal places.
pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = rand::thread_rng();

    wtr.write_record(["length", "width", "height", "weight"])?;

    for _ in 0..rows {
        let weight = rust_decimal::Decimal::new(rng.gen_range(0..4000), 2);
        wtr.write_record(&[
            rng.gen_range(1..80u32).to_string(),
            rng.gen_range(1..80u32).to_string(),
            rng.gen_range(1..80u32).to_string(),
            weight.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
