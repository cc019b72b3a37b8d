//! Raw comparison results and CSV export.

use std::io::Write;
use std::path::Path;

use crate::error::BenchResult;
use crate::utils::timer::VariantResult;

/// Raw timing data for a single variant at one input size
#[derive(Clone, Debug, PartialEq)]
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

impl RawTimingData {
    pub fn from_result(algo_name: &str, input_size: usize, result: &VariantResult) -> Self {
        Self {
            algo_name: algo_name.to_string(),
            variant_name: result.name.clone(),
            input_size,
            avg_nanos: result.avg_nanos_f64.round() as u64,
            result_sample: result.result_sample,
        }
    }
}

/// Write timing rows as CSV
pub fn write_csv<W: Write>(out: &mut W, data: &[RawTimingData]) -> BenchResult<()> {
    writeln!(out, "algorithm,variant,compiler,input_size,avg_time_ns,result")?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}

/// Export timing data to a CSV file
pub fn export_csv(path: &Path, data: &[RawTimingData]) -> BenchResult<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_csv(&mut file, data)?;
    file.flush()?;
    tracing::info!(path = %path.display(), rows = data.len(), "exported CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv() {
        let rows = vec![
            RawTimingData {
                algo_name: "dot_product".into(),
                variant_name: "original".into(),
                input_size: 1024,
                avg_nanos: 120,
                result_sample: Some(1.5),
            },
            RawTimingData {
                algo_name: "dot_product".into(),
                variant_name: "unrolled4".into(),
                input_size: 1024,
                avg_nanos: 80,
                result_sample: None,
            },
        ];

        let mut out = Vec::new();
        write_csv(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "algorithm,variant,compiler,input_size,avg_time_ns,result"
        );
        assert_eq!(lines[1], "dot_product,original,,1024,120,1.5");
        assert_eq!(lines[2], "dot_product,unrolled4,,1024,80,");
    }
}
