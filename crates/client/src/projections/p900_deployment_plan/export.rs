use std::io::Write;

/// UTF-8 BOM so spreadsheet tools detect the encoding
const BOM: &[u8] = "\u{FEFF}".as_bytes();

/// Write rows as `;`-separated CSV preceded by a UTF-8 BOM
pub fn write_csv<W: Write>(rows: &[Vec<String>], mut out: W) -> anyhow::Result<()> {
    out.write_all(BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_writer(out);
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
