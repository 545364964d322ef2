//! Expected-output corpus runner.
//!
//! A corpus is a TOML file of `[[cases]]`, each with an `input`, the
//! `expected` braille and a `category`. `mode = "oumen"` compares against
//! the mirrored output instead.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};
use tenji::Converter;

use crate::CliError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Corpus {
    cases: Vec<CorpusCase>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Tenji,
    Oumen,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CorpusCase {
    input: String,
    expected: String,
    category: String,
    #[serde(default)]
    mode: Mode,
    #[serde(default)]
    skip: bool,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct CaseResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: CaseStatus,
    pub category: String,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CorpusSummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct CorpusReport {
    pub results: Vec<CaseResult>,
    pub summary: CorpusSummary,
}

impl CorpusReport {
    pub fn has_failures(&self) -> bool {
        self.summary.fail > 0
    }
}

/// Run every case of the corpus (optionally one category) through `converter`.
pub fn run_corpus(
    content: &str,
    converter: &Converter<'_>,
    category: Option<&str>,
) -> Result<CorpusReport, CliError> {
    let corpus: Corpus = toml::from_str(content).map_err(|e| CliError::Corpus(e.to_string()))?;

    let mut results = Vec::new();
    for case in corpus.cases {
        if category.is_some_and(|c| c != case.category) {
            continue;
        }

        let (actual, status) = if case.skip {
            (String::new(), CaseStatus::Skip)
        } else {
            let braille = converter.convert_to_string(&case.input);
            let actual = match case.mode {
                Mode::Tenji => braille,
                Mode::Oumen => tenji::mirror_braille(&braille),
            };
            let status = if actual == case.expected {
                CaseStatus::Pass
            } else {
                CaseStatus::Fail
            };
            (actual, status)
        };

        results.push(CaseResult {
            input: case.input,
            expected: case.expected,
            actual,
            status,
            category: case.category,
            mode: case.mode,
            note: case.note,
        });
    }

    let count = |s: CaseStatus| results.iter().filter(|r| r.status == s).count();
    let (pass, fail, skip) = (
        count(CaseStatus::Pass),
        count(CaseStatus::Fail),
        count(CaseStatus::Skip),
    );
    let total = results.len();
    let tested = total - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };
    let summary = CorpusSummary {
        total,
        pass,
        fail,
        skip,
        pass_rate: format!("{:.1}%", rate),
    };

    Ok(CorpusReport { results, summary })
}

/// Human-readable report grouped by category. Passing cases only with `verbose`.
pub fn format_report(report: &CorpusReport, verbose: bool) -> String {
    let mut grouped: BTreeMap<&str, Vec<&CaseResult>> = BTreeMap::new();
    for r in &report.results {
        grouped.entry(&r.category).or_default().push(r);
    }

    let mut out = String::new();
    for (cat, group) in &grouped {
        let _ = writeln!(out, "\n=== {} ({} cases) ===", cat, group.len());
        for r in group {
            match r.status {
                CaseStatus::Pass => {
                    if verbose {
                        let _ = writeln!(out, "  \u{2713} {} \u{2192} {}", r.input, r.expected);
                    }
                }
                CaseStatus::Fail => {
                    let _ = writeln!(
                        out,
                        "  \u{2717} {} \u{2192} {} (got: {})",
                        r.input, r.expected, r.actual
                    );
                }
                CaseStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    let _ = writeln!(out, "  - {} [skip: {}]", r.input, reason);
                }
            }
        }
    }

    let s = &report.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Summary ===");
    let _ = writeln!(out, "  Total:     {}", s.total);
    let _ = writeln!(out, "  Pass:      {:>3}", s.pass);
    let _ = writeln!(out, "  Fail:      {:>3}", s.fail);
    let _ = writeln!(out, "  Skip:      {:>3}", s.skip);
    let _ = writeln!(
        out,
        "  Pass rate: {} ({}/{})",
        s.pass_rate,
        s.pass,
        s.total - s.skip
    );
    out
}
