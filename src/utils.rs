/// Write serializable records as CSV with a header row.
pub fn write_csv<I, R, W>(records: I, writer: W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = R>,
    R: serde::Serialize,
    W: std::io::Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records.into_iter() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Row {
        date: &'static str,
        title: &'static str,
        symbol: &'static str,
    }

    #[test]
    fn writes_header_and_quotes_commas() {
        let rows = [Row {
            date: "2024-01-15",
            title: "Q1, final",
            symbol: "AAPL",
        }];
        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("date,title,symbol"));
        assert_eq!(lines.next(), Some("2024-01-15,\"Q1, final\",AAPL"));
    }
}
