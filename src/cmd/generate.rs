//! Generate command CLI handler.

use schemars::JsonSchema;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use user_list_seeder::{
    assemble_and_write, config::validate_count, Encoding, FileSink, Generator,
    PresentationDescriptor, SeedConfig, SeededSource, Sink, StdoutSink, DEFAULT_COUNT,
};

/// Default output path
pub const DEFAULT_OUTPUT: &str = "user_list.json";

pub struct GenerateArgs {
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub compact: bool,
    pub pretty: bool,
    pub verbose: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// JSON output for generate command
#[derive(Serialize, JsonSchema)]
pub struct GenerateJsonOutput {
    pub output: String,
    pub dry_run: bool,
    pub seed: u64,
    pub encoding: String,
    pub statistics: GenerateStatistics,
    pub config: PresentationDescriptor,
}

#[derive(Serialize, JsonSchema)]
pub struct GenerateStatistics {
    pub records: usize,
    pub bytes_written: usize,
    pub elapsed_secs: f64,
}

/// Settings after merging flags over the config file
#[derive(Debug)]
struct Resolved {
    count: usize,
    seed: Option<u64>,
    output: PathBuf,
    encoding: Encoding,
    descriptor: PresentationDescriptor,
}

fn resolve(args: &GenerateArgs) -> anyhow::Result<Resolved> {
    let file_config = match &args.config {
        Some(path) => SeedConfig::load(path)?,
        None => SeedConfig::default(),
    };

    let count = args.count.or(file_config.count).unwrap_or(DEFAULT_COUNT);
    validate_count(count)?;

    let compact = if args.pretty {
        false
    } else {
        args.compact || file_config.compact.unwrap_or(false)
    };

    Ok(Resolved {
        count,
        seed: args.seed.or(file_config.seed),
        output: args
            .output
            .clone()
            .or(file_config.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        encoding: if compact {
            Encoding::Compact
        } else {
            Encoding::Pretty
        },
        descriptor: file_config.descriptor.unwrap_or_default(),
    })
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let settings = resolve(&args)?;
    let to_stdout = is_stdout(&settings.output);

    if to_stdout && args.json && !args.dry_run {
        anyhow::bail!("--json cannot be combined with --output - (both write to stdout)");
    }

    let quiet = args.json || to_stdout;
    let start_time = Instant::now();

    let (source, seed) = match settings.seed {
        Some(seed) => (SeededSource::seeded(seed), seed),
        None => SeededSource::from_os_entropy()?,
    };

    if args.verbose {
        eprintln!(
            "Generating {} users (seed: {}, encoding: {})",
            settings.count, seed, settings.encoding
        );
    }

    let records = Generator::new(source).generate(settings.count)?;

    let mut memory: Vec<u8> = Vec::new();
    let mut file_sink;
    let mut stdout_sink = StdoutSink;
    let sink: &mut dyn Sink = if args.dry_run {
        &mut memory
    } else if to_stdout {
        &mut stdout_sink
    } else {
        file_sink = FileSink::new(&settings.output);
        &mut file_sink
    };

    let report = assemble_and_write(
        records,
        settings.descriptor.clone(),
        sink,
        settings.encoding,
    )?;
    let elapsed = start_time.elapsed();

    if args.json {
        let output_json = GenerateJsonOutput {
            output: settings.output.display().to_string(),
            dry_run: args.dry_run,
            seed,
            encoding: settings.encoding.to_string(),
            statistics: GenerateStatistics {
                records: report.records,
                bytes_written: report.bytes_written,
                elapsed_secs: elapsed.as_secs_f64(),
            },
            config: settings.descriptor,
        };
        println!("{}", serde_json::to_string_pretty(&output_json)?);
    } else if !quiet {
        if args.dry_run {
            eprintln!(
                "Dry run: would write {} users ({} bytes) to {}",
                report.records,
                report.bytes_written,
                settings.output.display()
            );
        } else {
            eprintln!(
                "Wrote {} users ({} bytes) to {} in {:.3?}",
                report.records, report.bytes_written, report.target, elapsed
            );
        }
    }

    if args.verbose && !args.json {
        eprintln!("Replay with: --seed {}", seed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> GenerateArgs {
        GenerateArgs {
            count: None,
            seed: None,
            output: None,
            config: None,
            compact: false,
            pretty: false,
            verbose: false,
            dry_run: false,
            json: false,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = resolve(&args()).unwrap();
        assert_eq!(settings.count, DEFAULT_COUNT);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.output, PathBuf::from("user_list.json"));
        assert_eq!(settings.encoding, Encoding::Pretty);
        assert_eq!(settings.descriptor, PresentationDescriptor::user_list());
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("seed.yaml");
        fs::write(&config_path, "count: 50\nseed: 1\ncompact: true\n").unwrap();

        let mut a = args();
        a.config = Some(config_path);
        a.count = Some(5);

        let settings = resolve(&a).unwrap();
        assert_eq!(settings.count, 5);
        assert_eq!(settings.seed, Some(1));
        assert_eq!(settings.encoding, Encoding::Compact);
    }

    #[test]
    fn test_pretty_flag_overrides_compact_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("seed.yaml");
        fs::write(&config_path, "compact: true\n").unwrap();

        let mut a = args();
        a.config = Some(config_path);
        assert_eq!(resolve(&a).unwrap().encoding, Encoding::Compact);

        a.pretty = true;
        assert_eq!(resolve(&a).unwrap().encoding, Encoding::Pretty);
    }

    #[test]
    fn test_count_over_limit_rejected() {
        let mut a = args();
        a.count = Some(user_list_seeder::config::MAX_COUNT + 1);
        assert!(resolve(&a).is_err());
    }

    #[test]
    fn test_run_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");

        let mut a = args();
        a.count = Some(3);
        a.seed = Some(42);
        a.output = Some(path.clone());
        run(a).unwrap();

        let doc = user_list_seeder::Document::from_json(&fs::read_to_string(&path).unwrap())
            .unwrap();
        assert_eq!(doc.data.len(), 3);
        assert_eq!(doc.data[2].name, "User3");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");

        let mut a = args();
        a.count = Some(3);
        a.output = Some(path.clone());
        a.dry_run = true;
        run(a).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_is_stdout() {
        assert!(is_stdout(Path::new("-")));
        assert!(!is_stdout(Path::new("user_list.json")));
    }
}
