use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use search_core::{Record, RecordId};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Jsonl,
}

/// Layout of a dataset file judged by its name. A trailing `.gz` means gzip-compressed.
fn format_of(name: &str) -> (Option<Format>, bool) {
    let (stem, gz) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (name, false),
    };
    let format = if stem.ends_with(".jsonl") {
        Some(Format::Jsonl)
    } else if stem.ends_with(".json") {
        Some(Format::Json)
    } else {
        None
    };
    (format, gz)
}

fn file_name(p: &Path) -> &str {
    p.file_name().and_then(|s| s.to_str()).unwrap_or("")
}

/// Where the product catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Source::Url(input.to_string())
        } else {
            Source::Path(PathBuf::from(input))
        }
    }
}

/// Load every record from `source`, assigning ordinal ids in load order.
pub fn load(source: &Source) -> Result<Vec<Record>> {
    let mut loader = Loader::default();
    match source {
        Source::Path(path) => loader.load_path(path)?,
        Source::Url(url) => loader.load_url(url)?,
    }
    tracing::info!(num_records = loader.records.len(), "loaded product data");
    Ok(loader.records)
}

#[derive(Default)]
struct Loader {
    records: Vec<Record>,
}

impl Loader {
    fn push(&mut self, value: &Value) -> Result<()> {
        let id = RecordId::try_from(self.records.len()).context("too many records")?;
        self.records.push(Record::from_json(id, value));
        Ok(())
    }

    fn load_path(&mut self, input: &Path) -> Result<()> {
        if input.is_dir() {
            let mut files: Vec<PathBuf> = WalkDir::new(input)
                .into_iter()
                .filter_map(|e| e.ok())
                .map(|e| e.into_path())
                .filter(|p| p.is_file() && format_of(file_name(p)).0.is_some())
                .collect();
            files.sort();
            for file in files {
                self.load_file(&file)?;
            }
            Ok(())
        } else if input.is_file() {
            self.load_file(input)
        } else {
            bail!("input {} does not exist", input.display())
        }
    }

    fn load_file(&mut self, file: &Path) -> Result<()> {
        let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
        let (format, gz) = format_of(file_name(file));
        let before = self.records.len();
        self.read(f, format.unwrap_or(Format::Json), gz)
            .with_context(|| format!("parsing {}", file.display()))?;
        let count = self.records.len() - before;
        tracing::debug!(file = %file.display(), count, "read records");
        Ok(())
    }

    fn load_url(&mut self, url: &str) -> Result<()> {
        tracing::info!(url, "fetching product data");
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        let resp = client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("fetching {url}"))?;
        let (format, gz) = format_of(resp.url().path());
        self.read(resp, format.unwrap_or(Format::Json), gz)
            .with_context(|| format!("parsing response from {url}"))
    }

    fn read<R: Read + 'static>(&mut self, source: R, format: Format, gz: bool) -> Result<()> {
        let reader: Box<dyn Read> = if gz {
            Box::new(GzDecoder::new(source))
        } else {
            Box::new(source)
        };
        match format {
            Format::Json => self.read_json(BufReader::new(reader)),
            Format::Jsonl => self.read_jsonl(BufReader::new(reader)),
        }
    }

    /// A JSON array of records or a single record object.
    fn read_json<R: Read>(&mut self, reader: R) -> Result<()> {
        let json: Value = serde_json::from_reader(reader)?;
        match json {
            Value::Array(arr) => {
                for v in &arr {
                    self.push(v)?;
                }
            }
            Value::Object(_) => self.push(&json)?,
            other => bail!("expected an array or object of records, found {other}"),
        }
        Ok(())
    }

    /// One record per non-blank line.
    fn read_jsonl<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let v: Value = serde_json::from_str(&line).with_context(|| format!("line {}", n + 1))?;
            self.push(&v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_kind() {
        assert_eq!(Source::parse("https://host/p.json"), Source::Url("https://host/p.json".into()));
        assert_eq!(Source::parse("./data/p.json"), Source::Path(PathBuf::from("./data/p.json")));
    }

    #[test]
    fn format_from_file_name() {
        assert_eq!(format_of("products.json"), (Some(Format::Json), false));
        assert_eq!(format_of("products.json.gz"), (Some(Format::Json), true));
        assert_eq!(format_of("/data/crawl.jsonl.gz"), (Some(Format::Jsonl), true));
        assert_eq!(format_of("notes.txt.gz"), (None, true));
        assert_eq!(format_of("notes.txt"), (None, false));
    }

    #[test]
    fn jsonl_skips_blank_lines() {
        let mut loader = Loader::default();
        let text = "{\"title\":\"a\"}\n\n   \n{\"title\":\"b\"}\n";
        loader.read_jsonl(text.as_bytes()).unwrap();
        let ids: Vec<RecordId> = loader.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn scalar_json_is_rejected() {
        let mut loader = Loader::default();
        assert!(loader.read_json("42".as_bytes()).is_err());
    }
}
