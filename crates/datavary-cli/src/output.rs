use std::io::Write;

use datavary_engine::VariationCase;

use crate::CliError;

/// Write cases as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, cases: &[VariationCase]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut writer, cases)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write cases as CSV: `index,pass` followed by one column per field.
pub fn write_csv<W: Write>(
    writer: W,
    fields: &[&str],
    cases: &[VariationCase],
) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec!["index", "pass"];
    header.extend_from_slice(fields);
    writer.write_record(&header)?;

    for case in cases {
        let mut record = vec![(case.index + 1).to_string(), case.pass.to_string()];
        for field in fields {
            let cell = case
                .variation
                .get(field)
                .map(|value| value.to_string())
                .unwrap_or_default();
            record.push(cell);
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
