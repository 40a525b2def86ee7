use crate::core::Storage;
use crate::domain::model::Term;
use crate::utils::error::{GlossaryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const LIST_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = GlossaryError;

    fn from_str(s: &str) -> Result<Self> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.extension() == s)
            .ok_or_else(|| GlossaryError::InvalidValueError {
                field: "export.output_formats".to_string(),
                value: s.to_string(),
                reason: "Unsupported format. Valid formats: csv, tsv, json".to_string(),
            })
    }
}

/// Flat row for delimited output; list fields are joined.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    category: &'a str,
    source_label: &'a str,
    last_updated: String,
    definition: &'a str,
    example: &'a str,
    synonyms: String,
    related: String,
    legal_basis: &'a str,
}

impl<'a> From<&'a Term> for ExportRow<'a> {
    fn from(term: &'a Term) -> Self {
        Self {
            name: &term.name,
            category: &term.category,
            source_label: &term.source_label,
            last_updated: term.last_updated.format("%Y-%m-%d").to_string(),
            definition: &term.definition,
            example: term.example.as_deref().unwrap_or_default(),
            synonyms: term.synonyms.join(LIST_SEPARATOR),
            related: term.related.join(LIST_SEPARATOR),
            legal_basis: term.legal_basis.as_deref().unwrap_or_default(),
        }
    }
}

pub fn render_delimited(terms: &[&Term], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    for term in terms {
        writer.serialize(ExportRow::from(*term))?;
    }
    writer
        .into_inner()
        .map_err(|e| GlossaryError::IoError(e.into_error()))
}

pub fn render(terms: &[&Term], format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => render_delimited(terms, b','),
        ExportFormat::Tsv => render_delimited(terms, b'\t'),
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(terms)?),
    }
}

pub struct TermExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> TermExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Write one file per format; returns the file names written.
    pub async fn export(
        &self,
        terms: &[&Term],
        outputs: &[(ExportFormat, String)],
    ) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(outputs.len());
        for (format, filename) in outputs {
            let data = render(terms, *format)?;
            tracing::debug!("Writing {} terms as {} to {}", terms.len(), format, filename);
            self.storage.write_file(filename, &data).await?;
            written.push(filename.clone());
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn term() -> Term {
        Term::new(
            "Coisa Julgada",
            "Qualidade da sentença que não mais admite recurso, tornando-se imutável.",
            "Direito Processual Civil",
            "STJ",
            NaiveDate::from_ymd_opt(2023, 12, 25).unwrap(),
        )
        .with_synonyms(["Res Judicata"])
        .with_related(["Sentença", "Recurso"])
    }

    #[test]
    fn test_csv_joins_lists_and_quotes_commas() {
        let t = term();
        let data = render(&[&t], ExportFormat::Csv).unwrap();
        let text = String::from_utf8(data).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,category,source_label,last_updated,definition,example,synonyms,related,legal_basis"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Coisa Julgada,Direito Processual Civil,STJ,2023-12-25,"));
        assert!(row.contains("\"Qualidade da sentença que não mais admite recurso, tornando-se imutável.\""));
        assert!(row.contains("Sentença; Recurso"));
    }

    #[test]
    fn test_tsv_uses_tabs() {
        let t = term();
        let text = String::from_utf8(render(&[&t], ExportFormat::Tsv).unwrap()).unwrap();
        assert!(text.lines().next().unwrap().starts_with("name\tcategory\t"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
