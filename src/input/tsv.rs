use std::io::BufRead;

use crate::input::InputError;
use crate::model::MutationalCount;

const COL_UNIQUE_SAMPLE_KEY: &str = "uniquesamplekey";
const COL_PATIENT_ID: &str = "patientid";
const COL_UNIQUE_PATIENT_KEY: &str = "uniquepatientkey";
const COL_STUDY_ID: &str = "studyid";
const COL_SAMPLE_ID: &str = "sampleid";
const COL_LABEL: &str = "mutationalsignaturelabel";
const COL_CLASS: &str = "mutationalsignatureclass";
const COL_VERSION: &str = "version";
const COL_VALUE: &str = "value";

#[derive(Debug)]
struct Columns {
    unique_sample_key: Option<usize>,
    patient_id: Option<usize>,
    unique_patient_key: Option<usize>,
    study_id: Option<usize>,
    sample_id: Option<usize>,
    label: usize,
    class: Option<usize>,
    version: Option<usize>,
    value: usize,
}

impl Columns {
    fn from_header(header: &[&str], source: &str) -> Result<Self, InputError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().to_ascii_lowercase() == name)
        };
        let label = find(COL_LABEL).ok_or_else(|| {
            InputError::Parse(format!("{}: header has no mutationalSignatureLabel column", source))
        })?;
        let value = find(COL_VALUE)
            .ok_or_else(|| InputError::Parse(format!("{}: header has no value column", source)))?;
        Ok(Self {
            unique_sample_key: find(COL_UNIQUE_SAMPLE_KEY),
            patient_id: find(COL_PATIENT_ID),
            unique_patient_key: find(COL_UNIQUE_PATIENT_KEY),
            study_id: find(COL_STUDY_ID),
            sample_id: find(COL_SAMPLE_ID),
            label,
            class: find(COL_CLASS),
            version: find(COL_VERSION),
            value,
        })
    }
}

/// Reads a tab-separated counts table with a header row. Column names are
/// matched case-insensitively; only the label and value columns are
/// required.
pub fn parse_counts_tsv<R: BufRead>(
    mut reader: R,
    source: &str,
) -> Result<Vec<MutationalCount>, InputError> {
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse(format!("{}: counts file is empty", source)));
    }
    let header_line = buf.trim_end_matches(['\n', '\r']).to_string();
    let header: Vec<&str> = header_line.split('\t').collect();
    let cols = Columns::from_header(&header, source)?;

    let mut counts = Vec::new();
    let mut line_no = 1usize;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let field = |idx: Option<usize>| -> String {
            idx.and_then(|i| fields.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        let raw_value = field(Some(cols.value));
        let value = raw_value.parse::<f64>().map_err(|_| {
            InputError::Parse(format!(
                "{}: line {} has invalid value '{}'",
                source, line_no, raw_value
            ))
        })?;

        counts.push(MutationalCount {
            unique_sample_key: field(cols.unique_sample_key),
            patient_id: field(cols.patient_id),
            unique_patient_key: field(cols.unique_patient_key),
            study_id: field(cols.study_id),
            sample_id: field(cols.sample_id),
            mutational_signature_label: field(Some(cols.label)),
            mutational_signature_class: field(cols.class),
            version: field(cols.version),
            value,
        });
    }

    Ok(counts)
}
