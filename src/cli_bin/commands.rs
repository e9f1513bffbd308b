//! CLI command handlers that bridge CLI arguments to library operations

use crate::cli_bin::args::*;
use anyhow::{bail, Result};
use flatmatter::io::{resolve_files, FrontMatterReader, FrontMatterWriter, WriterConfig};
use flatmatter::{Document, FlatMatterError, Metadata, OutputOptions, WriteOptions};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Execute the get command
pub fn get_command(args: GetArgs) -> Result<()> {
    debug!("Executing get command with args: {:?}", args);

    let files = resolve_files(&args.files)?;
    if files.is_empty() {
        warn!("No files found to process");
        return Ok(());
    }

    let reader = FrontMatterReader::new();
    let mut results = BTreeMap::new();

    for file in &files {
        debug!("Processing file: {}", file.display());
        let document = reader.read_file(file)?;
        let selected = select_keys(&document, &args.keys);
        if !selected.is_empty() {
            results.insert(file.to_string_lossy().to_string(), selected);
        }
    }

    if results.is_empty() {
        info!("No matching values found");
        return Ok(());
    }

    if files.len() == 1 {
        if let Some(metadata) = results.values().next() {
            output_metadata(metadata, args.format)?;
        }
    } else {
        output_multiple(&results, args.format)?;
    }
    Ok(())
}

/// Execute the set command
pub fn set_command(args: SetArgs) -> Result<()> {
    debug!("Executing set command: {} = {}", args.key, args.value);

    update_files(&args.files, &args.write, |document| {
        if document.has(&args.key) && document.get(&args.key) == args.value {
            return false;
        }
        document.set(args.key.as_str(), args.value.as_str());
        true
    })
}

/// Execute the remove command
pub fn remove_command(args: RemoveArgs) -> Result<()> {
    debug!("Executing remove command: {}", args.key);

    update_files(&args.files, &args.write, |document| {
        document.remove(&args.key).is_some()
    })
}

/// Execute the validate command
pub fn validate_command(args: ValidateArgs) -> Result<()> {
    debug!("Executing validate command, required keys: {:?}", args.required);

    let files = resolve_files(&args.files)?;
    if files.is_empty() {
        warn!("No files found to process");
        return Ok(());
    }

    let reader = FrontMatterReader::new();
    let mut failures = Vec::new();

    for file in &files {
        let outcome = reader
            .read_file(file)
            .and_then(|document| document.validate_required(&args.required));

        match outcome {
            Ok(()) => info!("{}: ok", file.display()),
            Err(err) => {
                println!("{}: {}", file.display(), err);
                // unreadable files stop the run even without --fail-fast
                if args.fail_fast || !err.is_recoverable() {
                    return Err(err.into());
                }
                failures.push(err);
            }
        }
    }

    match failures.len() {
        0 => Ok(()),
        1 => Err(failures.remove(0).into()),
        _ => Err(FlatMatterError::multiple(failures).into()),
    }
}

/// Execute the body command
pub fn body_command(args: BodyArgs) -> Result<()> {
    let reader = FrontMatterReader::new();
    for file in &args.files {
        let document = reader.read_file(file)?;
        print!("{}", document.content());
    }
    Ok(())
}

/// Apply `mutate` to every resolved file and write back those it changed
fn update_files<F>(paths: &[PathBuf], write: &WriteArgs, mutate: F) -> Result<()>
where
    F: Fn(&mut Document) -> bool,
{
    let files = resolve_files(paths)?;
    if files.is_empty() {
        warn!("No files found to process");
        return Ok(());
    }
    if write.stdout && files.len() > 1 {
        bail!("--stdout can only be used with a single file");
    }

    let reader = FrontMatterReader::new();
    let writer = create_writer(write);
    let options = write_options(write);

    for file in &files {
        let mut document = reader.read_file(file)?;
        if !mutate(Arc::make_mut(&mut document)) && !write.stdout {
            debug!("No change for {}", file.display());
            continue;
        }

        let result = writer.write_file(&document, file, Some(options.clone()))?;
        if let Some(rendered) = result.rendered.as_deref().filter(|_| write.stdout) {
            print!("{}", rendered);
        } else if write.dry_run {
            println!(
                "{}: {}",
                file.display(),
                if result.modified { "would modify" } else { "unchanged" }
            );
        } else if result.modified {
            info!("Updated {}", file.display());
            if let Some(backup) = &result.backup_path {
                info!("Backup written to {}", backup.display());
            }
        }
    }
    Ok(())
}

fn create_writer(write: &WriteArgs) -> FrontMatterWriter {
    FrontMatterWriter::with_config(WriterConfig {
        backup_enabled: write.backup_suffix.is_some() || write.backup_dir.is_some(),
        backup_suffix: write.backup_suffix.clone(),
        backup_dir: write.backup_dir.clone(),
        atomic_writes: !write.no_atomic,
    })
}

fn write_options(write: &WriteArgs) -> WriteOptions {
    WriteOptions {
        backup: None,
        output: write.stdout.then_some(OutputOptions::Stdout),
        dry_run: write.dry_run,
    }
}

/// Pick the requested keys, or all of them when none are requested
fn select_keys(document: &Document, keys: &[String]) -> Metadata {
    if keys.is_empty() {
        return document.metadata().clone();
    }
    keys.iter()
        .filter_map(|key| {
            let value = document.metadata().get(key);
            if value.is_none() {
                debug!("Key {} not present", key);
            }
            value.map(|value| (key.as_str(), value))
        })
        .collect()
}

fn output_metadata(metadata: &Metadata, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (key, value) in metadata.iter() {
                println!("{}: {}", key, value);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(metadata)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(metadata)?),
    }
    Ok(())
}

fn output_multiple(results: &BTreeMap<String, Metadata>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (file, metadata) in results {
                for (key, value) in metadata.iter() {
                    println!("{}\t{}: {}", file, key, value);
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(results)?),
    }
    Ok(())
}
