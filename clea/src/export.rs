//! Writes the rendered page and static assets to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clea_site::meta::PageMeta;
use clea_site::{Catalog, render_page};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const INDEX_FILE: &str = "index.html";

/// What a build produced.
#[derive(Debug)]
pub struct ExportSummary {
    pub index: PathBuf,
    pub html_bytes: usize,
    pub assets_copied: usize,
}

/// Render the page into `out_dir/index.html` and mirror `public_dir` next to it.
///
/// Fails before touching the disk when `out_dir` is `public_dir` or lies
/// inside it. A root-level `index.html` in `public_dir` is not copied.
pub fn export_site(
    catalog: &Catalog,
    meta: &PageMeta,
    out_dir: &Path,
    public_dir: &Path,
) -> Result<ExportSummary> {
    let has_public = public_dir.is_dir();
    if has_public {
        ensure_disjoint(out_dir, public_dir)?;
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let html = render_page(catalog, meta);
    let index = out_dir.join(INDEX_FILE);
    fs::write(&index, &html).with_context(|| format!("failed to write {}", index.display()))?;
    info!("Wrote {} ({} bytes)", index.display(), html.len());

    let assets_copied = if has_public {
        copy_assets(public_dir, out_dir)?
    } else {
        warn!(
            "Static asset directory {} not found, skipping copy",
            public_dir.display()
        );
        0
    };

    Ok(ExportSummary {
        index,
        html_bytes: html.len(),
        assets_copied,
    })
}

/// Reject an output directory that is, or sits inside, the asset directory.
fn ensure_disjoint(out_dir: &Path, public_dir: &Path) -> Result<()> {
    let out = resolve_dir(out_dir)?;
    let public = public_dir
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", public_dir.display()))?;

    if out == public {
        bail!(
            "output directory {} is the static asset directory",
            out_dir.display()
        );
    }
    if out.starts_with(&public) {
        bail!(
            "output directory {} is inside the static asset directory {}",
            out_dir.display(),
            public_dir.display()
        );
    }
    Ok(())
}

/// Canonical form of `path`, which may not exist yet.
fn resolve_dir(path: &Path) -> Result<PathBuf> {
    let mut existing = path;
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }

    let base = if existing.as_os_str().is_empty() {
        Path::new(".")
    } else {
        existing
    };
    let mut resolved = base
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", path.display()))?;
    resolved.extend(missing.into_iter().rev());
    Ok(resolved)
}

fn copy_assets(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(from).follow_links(false) {
        let entry = entry.with_context(|| format!("failed to walk {}", from.display()))?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .with_context(|| format!("{} escapes {}", entry.path().display(), from.display()))?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("failed to create {}", target.display()))?;
        } else if entry.file_type().is_file() {
            if relative == Path::new(INDEX_FILE) {
                warn!(
                    "Skipping {}: the rendered page takes its place",
                    entry.path().display()
                );
                continue;
            }
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
            debug!("Copied {}", relative.display());
            copied += 1;
        }
    }
    info!("Copied {} static assets from {}", copied, from.display());
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_index_without_public_dir() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        let summary = export_site(
            Catalog::builtin(),
            &PageMeta::default(),
            &out,
            &temp.path().join("missing"),
        )
        .expect("export");

        assert_eq!(summary.index, out.join("index.html"));
        assert_eq!(summary.assets_copied, 0);
        let html = fs::read_to_string(&summary.index).expect("read index");
        assert_eq!(html.len(), summary.html_bytes);
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn mirrors_public_tree() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        fs::create_dir_all(public.join("img")).expect("mkdir");
        fs::write(public.join("favicon.ico"), b"ico").expect("write");
        fs::write(public.join("img").join("screen-1.png"), b"png").expect("write");
        let out = temp.path().join("dist");

        let summary =
            export_site(Catalog::builtin(), &PageMeta::default(), &out, &public).expect("export");

        assert_eq!(summary.assets_copied, 2);
        assert_eq!(fs::read(out.join("favicon.ico")).expect("read"), b"ico");
        assert_eq!(
            fs::read(out.join("img").join("screen-1.png")).expect("read"),
            b"png"
        );
    }

    #[test]
    fn refuses_to_export_into_public_dir() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        fs::create_dir_all(&public).expect("mkdir");
        fs::write(public.join("screen-1.png"), b"PNGDATA").expect("write");

        let err = export_site(Catalog::builtin(), &PageMeta::default(), &public, &public)
            .expect_err("same directory");

        assert!(format!("{err:#}").contains("is the static asset directory"));
        assert_eq!(fs::read(public.join("screen-1.png")).expect("read"), b"PNGDATA");
        assert!(!public.join("index.html").exists());
    }

    #[test]
    fn refuses_output_nested_in_public_dir() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("site");
        fs::create_dir_all(&public).expect("mkdir");
        fs::write(public.join("screen-1.png"), b"png").expect("write");
        let out = public.join("dist");

        let err = export_site(Catalog::builtin(), &PageMeta::default(), &out, &public)
            .expect_err("nested output");

        assert!(format!("{err:#}").contains("inside the static asset directory"));
        assert!(!out.exists());
    }

    #[test]
    fn nested_output_is_detected_through_dot_dot() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        fs::create_dir_all(public.join("img")).expect("mkdir");

        let out = public.join("img").join("..").join("dist");
        let err = export_site(Catalog::builtin(), &PageMeta::default(), &out, &public)
            .expect_err("nested output");

        assert!(format!("{err:#}").contains("inside the static asset directory"));
    }

    #[test]
    fn public_dir_inside_output_is_allowed() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");
        let public = out.join("assets");
        fs::create_dir_all(&public).expect("mkdir");
        fs::write(public.join("logo.png"), b"png").expect("write");

        let summary =
            export_site(Catalog::builtin(), &PageMeta::default(), &out, &public).expect("export");

        assert_eq!(summary.assets_copied, 1);
        assert!(out.join("logo.png").exists());
    }

    #[test]
    fn public_index_does_not_replace_rendered_page() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        fs::create_dir_all(public.join("docs")).expect("mkdir");
        fs::write(public.join("index.html"), "stale").expect("write");
        fs::write(public.join("docs").join("index.html"), "nested").expect("write");
        let out = temp.path().join("dist");

        let summary =
            export_site(Catalog::builtin(), &PageMeta::default(), &out, &public).expect("export");

        assert_eq!(summary.assets_copied, 1);
        let html = fs::read_to_string(out.join("index.html")).expect("read index");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(
            fs::read_to_string(out.join("docs").join("index.html")).expect("read nested"),
            "nested"
        );
    }
}
