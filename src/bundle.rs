use crate::archive;
use crate::context::Context;
use crate::manifest::Manifest;
use crate::result::Result;
use crate::utils;
use std::fs;
use std::path::PathBuf;

/// Bundle the extension described by `ctx` and return the absolute path of
/// the written archive.
pub fn bundle(ctx: &Context) -> Result<PathBuf> {
    let manifest = Manifest::load(&ctx.manifest_path())?;

    let file_name = match &ctx.archive_name {
        Some(name) => name.clone(),
        None => manifest.archive_file_name(),
    };

    if ctx.verbose {
        cliclack::log::info(format!(
            "Bundling {} v{} from {}",
            manifest.name,
            manifest.version,
            ctx.source_dir.display()
        ))?;
    }

    utils::ensure_dir(&ctx.output_dir)?;
    let archive_path = ctx.output_dir.join(file_name);

    let entries = archive::create_zip(ctx, &ctx.source_dir, &archive_path)?;

    if ctx.verbose {
        cliclack::log::success(format!("{} files archived", entries.len()))?;
    }

    Ok(fs::canonicalize(&archive_path)?)
}
