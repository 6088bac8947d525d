use std::io::ErrorKind;
use std::path::Path;

use rayon::prelude::*;

use crate::color::sweep::{color_pairs, hue_sweep};
use crate::config::CardConfig;
use crate::export::card::{ExportReport, export_card};
use crate::foundation::error::{CardError, CardResult};
use crate::scene::model::build_card;

/// What happened when preparing the output directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputDirStatus {
    /// The directory was created by this run.
    Created,
    /// The directory was already there.
    AlreadyExists,
    /// Creation failed for another reason. Writes will be attempted anyway.
    Failed(String),
}

/// Create `dir` (non-recursively). Never fails; anything other than a fresh directory is logged.
pub fn ensure_output_dir(dir: &Path) -> OutputDirStatus {
    match std::fs::create_dir(dir) {
        Ok(()) => OutputDirStatus::Created,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::info!(dir = %dir.display(), "output folder already exists");
            OutputDirStatus::AlreadyExists
        }
        Err(e) => {
            tracing::info!(dir = %dir.display(), error = %e, "could not create output folder");
            OutputDirStatus::Failed(e.to_string())
        }
    }
}

/// Totals for one generator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Result of the output directory guard.
    pub dir_status: OutputDirStatus,
    /// Cards exported.
    pub cards: usize,
    /// Files that reached disk.
    pub files_written: usize,
    /// Files that failed to encode or write.
    pub files_failed: usize,
    /// Per-card reports in card index order.
    pub reports: Vec<ExportReport>,
}

/// Generate every card described by `cfg` and write all of its files.
///
/// Returns after every encode/write has finished. Failed files are logged one by one and turn
/// the whole run into [`CardError::Export`]; a bad configuration fails before anything is
/// written.
#[tracing::instrument(skip(cfg), fields(out_dir = %cfg.out_dir.display(), count = cfg.count))]
pub fn generate_cards(cfg: &CardConfig) -> CardResult<RunSummary> {
    cfg.validate()?;

    let dir_status = ensure_output_dir(&cfg.out_dir);

    let colors = hue_sweep(cfg.base, cfg.count)?;
    let pairs = color_pairs(&colors, cfg.darken);

    let pool = build_thread_pool(cfg.threads)?;
    let reports = pool.install(|| {
        pairs
            .par_iter()
            .enumerate()
            .map(|(i, pair)| {
                let scene = build_card(pair);
                export_card(&i.to_string(), &scene, &cfg.out_dir, &cfg.export)
            })
            .collect::<CardResult<Vec<ExportReport>>>()
    })?;

    let files_written: usize = reports.iter().map(|r| r.written().count()).sum();
    let mut files_failed = 0usize;
    for a in reports.iter().flat_map(ExportReport::failures) {
        files_failed += 1;
        if let Err(e) = &a.outcome {
            tracing::error!(path = %a.path.display(), error = %e, "failed to write card file");
        }
    }

    let summary = RunSummary {
        dir_status,
        cards: reports.len(),
        files_written,
        files_failed,
        reports,
    };

    if summary.files_failed > 0 {
        return Err(CardError::Export {
            failed: summary.files_failed,
            total: summary.files_written + summary.files_failed,
        });
    }

    tracing::info!(
        cards = summary.cards,
        files = summary.files_written,
        "generated cards"
    );
    Ok(summary)
}

fn build_thread_pool(threads: Option<usize>) -> CardResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        CardError::invalid_argument(format!("failed to build rayon thread pool: {e}"))
    })
}
