//! Depth-first mirroring of a source tree into a destination tree.
//!
//! Directories are recreated, `.rst` files are converted to `.pug`, and every
//! other file is copied with its permissions and timestamps. Nothing under the
//! destination is ever removed.

use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::pug::LineConverter;

const MARKUP_EXT: &str = ".rst";
const TEMPLATE_EXT: &str = ".pug";
const INDEX_SOURCE: &str = "content.rst";
const INDEX_TEMPLATE: &str = "index.pug";

/// Mirror `src` into `dst`, converting markup files with `converter`.
///
/// `src` may be a directory or a single file. A markup file's template name
/// is derived from `dst`. Any I/O failure aborts the walk.
pub fn mirror(src: &Path, dst: &Path, converter: &dyn LineConverter) -> Result<()> {
    if src.is_dir() {
        mirror_dir(src, dst, converter)
    } else if template_path(src).is_some() {
        let target = template_path(dst).unwrap_or_else(|| dst.to_path_buf());
        convert_file(src, &target, converter)
    } else {
        copy_file(src, dst)
    }
}

fn mirror_dir(src: &Path, dst: &Path, converter: &dyn LineConverter) -> Result<()> {
    // Succeeds when dst is already a directory, fails when it is anything else
    fs::create_dir_all(dst)?;
    debug!(src = %src.display(), dst = %dst.display(), "directory");

    let mut names = Vec::new();
    for entry in fs::read_dir(src)? {
        names.push(entry?.file_name());
    }
    names.sort();

    for name in names {
        mirror(&src.join(&name), &dst.join(&name), converter)?;
    }
    Ok(())
}

fn convert_file(src: &Path, dst: &Path, converter: &dyn LineConverter) -> Result<()> {
    let source = fs::read_to_string(src)?;
    fs::write(dst, converter.convert(&source))?;
    debug!(src = %src.display(), dst = %dst.display(), "converted");
    Ok(())
}

fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    // fs::copy carries the permission bits over
    fs::copy(src, dst)?;

    let meta = fs::metadata(src)?;
    let times = FileTimes::new()
        .set_accessed(meta.accessed()?)
        .set_modified(meta.modified()?);
    File::open(dst)?.set_times(times)?;

    debug!(src = %src.display(), dst = %dst.display(), "copied");
    Ok(())
}

/// Destination of a markup file, or `None` if `path` is not markup.
///
/// `content.rst` maps to `index.pug` in the same directory.
pub fn template_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    if name == INDEX_SOURCE {
        return Some(path.with_file_name(INDEX_TEMPLATE));
    }
    let stem = name.strip_suffix(MARKUP_EXT)?;
    Some(path.with_file_name(format!("{stem}{TEMPLATE_EXT}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_extension_is_swapped() {
        assert_eq!(
            template_path(Path::new("foo/bar.rst")),
            Some(PathBuf::from("foo/bar.pug"))
        );
    }

    #[test]
    fn content_becomes_index() {
        assert_eq!(
            template_path(Path::new("foo/content.rst")),
            Some(PathBuf::from("foo/index.pug"))
        );
        assert_eq!(
            template_path(Path::new("content.rst")),
            Some(PathBuf::from("index.pug"))
        );
    }

    #[test]
    fn only_exact_content_name_is_index() {
        assert_eq!(
            template_path(Path::new("foo/mycontent.rst")),
            Some(PathBuf::from("foo/mycontent.pug"))
        );
        assert_eq!(
            template_path(Path::new("content/notes.rst")),
            Some(PathBuf::from("content/notes.pug"))
        );
    }

    #[test]
    fn other_files_are_not_markup() {
        assert_eq!(template_path(Path::new("foo/image.png")), None);
        assert_eq!(template_path(Path::new("foo/bar.rst.bak")), None);
        assert_eq!(template_path(Path::new("foo/index.pug")), None);
    }

    #[test]
    fn multi_dot_names_keep_inner_dots() {
        assert_eq!(
            template_path(Path::new("a/2019-01.notes.rst")),
            Some(PathBuf::from("a/2019-01.notes.pug"))
        );
    }
}
