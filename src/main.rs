use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use midifix::{NAME_FILTER, Patcher, candidates};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to scan for files whose names contain `.MID`
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Report the lengths that would be written without touching any file
    #[arg(long)]
    dry_run: bool,

    /// Copy each file to `<name>.bak` before patching it
    #[arg(long)]
    backup: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let files = match candidates(&cli.dir) {
        Ok(files) => files,
        Err(e) => {
            log::error!("failed to list {}: {e}", cli.dir.display());
            return ExitCode::FAILURE;
        }
    };
    if files.is_empty() {
        log::info!("no {NAME_FILTER} files in {}", cli.dir.display());
        return ExitCode::SUCCESS;
    }

    let patcher = Patcher::new().dry_run(cli.dry_run).backup(cli.backup);
    let mut failed = 0usize;
    for path in &files {
        match patcher.patch(path) {
            Ok(patched) => {
                let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
                let verb = if patched.written { "Updated" } else { "Would update" };
                println!(
                    "{verb} {name} track length to {} bytes",
                    patched.length.event_bytes()
                );
            }
            Err(e) => {
                log::error!("{e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        log::warn!("failed to patch {failed} of {} files", files.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
