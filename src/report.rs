use chrono::NaiveDate;

use crate::model::*;
use crate::storage::Storage;
use crate::store::DirectoryStore;

/// Column header of the exported report. Written verbatim, unquoted.
pub const CSV_HEADER: &str = "Professor,Email,Recurso,Data,Horário,Finalidade,Status";

/// Report filters. `None` / empty means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    /// Case-insensitive substring of the professor's name.
    pub professor: Option<String>,
    pub resource_type: Option<ResourceType>,
    pub status: Option<BookingStatus>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub date_from: Option<Date>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub date_to: Option<Date>,
}

/// One booking joined with its professor and resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub professor: String,
    pub email: String,
    pub resource: String,
    pub resource_type: Option<ResourceType>,
    pub date: Date,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub purpose: String,
    pub status: BookingStatus,
}

impl ReportFilter {
    fn matches(&self, row: &ReportRow) -> bool {
        if let Some(needle) = self.professor.as_deref().filter(|s| !s.is_empty())
            && !row.professor.to_lowercase().contains(&needle.to_lowercase())
        {
            return false;
        }
        if let Some(kind) = self.resource_type
            && row.resource_type != Some(kind)
        {
            return false;
        }
        if let Some(status) = self.status
            && row.status != status
        {
            return false;
        }
        if let Some(from) = self.date_from.as_deref()
            && row.date.as_str() < from
        {
            return false;
        }
        if let Some(to) = self.date_to.as_deref()
            && row.date.as_str() > to
        {
            return false;
        }
        true
    }
}

/// Join bookings with their professor and resource, then filter.
/// Unknown professor or resource ids render as empty strings.
pub fn report_rows<S: Storage>(store: &DirectoryStore<S>, filter: &ReportFilter) -> Vec<ReportRow> {
    store
        .list_bookings()
        .iter()
        .map(|b| {
            let professor = store.find_professor_by_id(&b.professor_id);
            let resource = store.find_resource_by_id(&b.resource_id);
            ReportRow {
                professor: professor.map(|p| p.name.clone()).unwrap_or_default(),
                email: professor.map(|p| p.email.clone()).unwrap_or_default(),
                resource: resource.map(|r| r.name.clone()).unwrap_or_default(),
                resource_type: resource.map(|r| r.kind),
                date: b.date.clone(),
                start_time: b.start_time.clone(),
                end_time: b.end_time.clone(),
                purpose: b.purpose.clone(),
                status: b.status,
            }
        })
        .filter(|row| filter.matches(row))
        .collect()
}

/// Render rows as CSV: the fixed header, then one line per row with every
/// value double-quoted. The time column is `start-end`. Lines are joined by
/// `\n` with no trailing newline.
pub fn export_csv(rows: &[ReportRow]) -> Result<String, csv::Error> {
    if rows.is_empty() {
        return Ok(CSV_HEADER.to_string());
    }
    let mut out = CSV_HEADER.as_bytes().to_vec();
    out.push(b'\n');

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    for row in rows {
        let window = format!("{}-{}", row.start_time, row.end_time);
        writer.write_record([
            row.professor.as_str(),
            row.email.as_str(),
            row.resource.as_str(),
            row.date.as_str(),
            window.as_str(),
            row.purpose.as_str(),
            row.status.as_str(),
        ])?;
    }
    let mut bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// `relatorio-agendamentos-YYYY-MM-DD.csv`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("relatorio-agendamentos-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStorage;

    fn row(professor: &str, purpose: &str) -> ReportRow {
        ReportRow {
            professor: professor.into(),
            email: "p@escola.com".into(),
            resource: "Laboratório de Química".into(),
            resource_type: Some(ResourceType::LabQuimica),
            date: "2024-01-15".into(),
            start_time: "14:00".into(),
            end_time: "15:30".into(),
            purpose: purpose.into(),
            status: BookingStatus::Confirmed,
        }
    }

    #[test]
    fn two_rows_make_three_lines() {
        let csv = export_csv(&[row("Maria Silva", "Aula"), row("João Santos", "Prova")]).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            r#""Maria Silva","p@escola.com","Laboratório de Química","2024-01-15","14:00-15:30","Aula","confirmed""#
        );
        assert!(lines[2].starts_with("\"João Santos\","));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn empty_report_is_header_only() {
        assert_eq!(export_csv(&[]).unwrap(), CSV_HEADER);
    }

    #[test]
    fn embedded_quotes_and_commas_are_escaped() {
        let csv = export_csv(&[row("Ana", "Feira de \"Ciências\", etapa 1")]).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert!(line.ends_with(r#","Feira de ""Ciências"", etapa 1","confirmed""#));
    }

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(report_file_name(date), "relatorio-agendamentos-2024-03-07.csv");
    }

    #[test]
    fn rows_join_and_filter() {
        let store = DirectoryStore::open(Arc::new(MemoryStorage::new())).unwrap();

        let all = report_rows(&store, &ReportFilter::default());
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].professor, "João Santos");
        assert_eq!(all[0].resource, "Chromebook Set A");
        assert_eq!((all[0].start_time.as_str(), all[0].end_time.as_str()), ("08:20", "09:00"));

        let by_name = ReportFilter {
            professor: Some("maria".into()),
            ..ReportFilter::default()
        };
        let rows = report_rows(&store, &by_name);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email, "maria@escola.com");

        let by_type = ReportFilter {
            resource_type: Some(ResourceType::Chromebook),
            ..ReportFilter::default()
        };
        assert_eq!(report_rows(&store, &by_type).len(), 1);

        let by_range = ReportFilter {
            date_from: Some("2024-01-16".into()),
            date_to: Some("2024-01-16".into()),
            ..ReportFilter::default()
        };
        let rows = report_rows(&store, &by_range);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2024-01-16");

        let by_status = ReportFilter {
            status: Some(BookingStatus::Pending),
            ..ReportFilter::default()
        };
        assert!(report_rows(&store, &by_status).is_empty());
    }
}
