//! Seed data for an empty records table.
//!
//! One record per line: `resource_id|resource_type|context`. The context is
//! optional; an empty one is stored as absent.

use crate::{error::RepositoryError, repository::RecordRepository};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRecord {
    pub resource_id: String,
    pub resource_type: String,
    pub context: Option<String>,
}

/// Parses sample lines. Blank lines are skipped; lines with fewer than two
/// fields are logged and skipped.
pub fn parse_sample_data(content: &str) -> Vec<SampleRecord> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('|').collect();
            if parts.len() < 2 {
                warn!(
                    "Invalid sample line '{}': expected resource_id|resource_type|context",
                    line
                );
                return None;
            }

            let context = parts
                .get(2)
                .filter(|ctx| !ctx.is_empty())
                .map(|ctx| ctx.to_string());

            Some(SampleRecord {
                resource_id: parts[0].to_string(),
                resource_type: parts[1].to_string(),
                context,
            })
        })
        .collect()
}

pub async fn load_sample_file(path: impl AsRef<Path>) -> Result<Vec<SampleRecord>, RepositoryError> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(parse_sample_data(&content))
}

/// Inserts `records` when the table is empty and returns how many were
/// stored. Failed inserts are logged and skipped.
pub async fn populate_sample_data(
    repo: &RecordRepository,
    records: &[SampleRecord],
) -> Result<usize, RepositoryError> {
    if !repo.is_empty().await? {
        info!(
            "Table '{}' already contains records, skipping sample data",
            repo.table()
        );
        return Ok(0);
    }

    info!("Inserting {} sample records", records.len());
    let mut inserted = 0;
    for record in records {
        match repo
            .insert(
                &record.resource_id,
                &record.resource_type,
                record.context.as_deref(),
            )
            .await
        {
            Ok(_) => inserted += 1,
            Err(err) => warn!(
                "Failed to insert sample record {}/{}: {}",
                record.resource_type, record.resource_id, err
            ),
        }
    }

    info!("Sample data insertion completed ({} inserted)", inserted);
    Ok(inserted)
}
