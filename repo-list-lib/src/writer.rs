use crate::error::RepoListError;
use crate::object_model::RepoEntry;
use crate::result::RepoListResult;
use anyhow::anyhow;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Writes `entries` to `path` as a 4-space-indented JSON array, replacing any
/// existing file.
pub fn write_repo_list<P>(path: P, entries: &[RepoEntry]) -> RepoListResult<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let io_error = |source: std::io::Error| RepoListError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    write_entries(&mut writer, entries).map_err(|e| {
        if e.is_io() {
            io_error(std::io::Error::from(e))
        } else {
            RepoListError::Other(anyhow!(e))
        }
    })?;
    writer.flush().map_err(io_error)?;
    Ok(())
}

fn write_entries<W>(writer: W, entries: &[RepoEntry]) -> serde_json::Result<()>
where
    W: Write,
{
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    entries.serialize(&mut serializer)
}

#[cfg(test)]
mod tests {
    use super::{write_entries, write_repo_list};
    use crate::object_model::RepoEntry;
    use crate::RepoListError;
    use pretty_assertions::assert_eq;
    use std::fs::{read_to_string, write};
    use tempfile::tempdir;

    fn entry(full_name: &str, branch: &str) -> RepoEntry {
        RepoEntry {
            full_name: String::from(full_name),
            branch: String::from(branch),
        }
    }

    fn render(entries: &[RepoEntry]) -> String {
        let mut buffer = Vec::new();
        write_entries(&mut buffer, entries).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn empty_list() {
        assert_eq!("[]", render(&[]));
    }

    #[test]
    fn four_space_indent() {
        assert_eq!(
            "[\n    {\n        \"full_name\": \"acme/widgets\",\n        \"branch\": \"main\"\n    },\n    {\n        \"full_name\": \"acme/gadgets\",\n        \"branch\": \"dev\"\n    }\n]",
            render(&[entry("acme/widgets", "main"), entry("acme/gadgets", "dev")])
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("repo_list.json");
        write(&path, "[{\"full_name\": \"old/repo\", \"branch\": \"main\"}, \"leftover\"]").unwrap();

        write_repo_list(&path, &[]).unwrap();

        assert_eq!("[]", read_to_string(&path).unwrap());
    }

    #[test]
    fn missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("repo_list.json");

        let Err(RepoListError::Io { path: p, .. }) = write_repo_list(&path, &[]) else {
            panic!("expected Io error")
        };
        assert_eq!(path, p);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_device() {
        let entries = (0..2000)
            .map(|i| entry(&format!("acme/repo-{i}"), "main"))
            .collect::<Vec<_>>();

        let Err(RepoListError::Io { path, source }) = write_repo_list("/dev/full", &entries) else {
            panic!("expected Io error")
        };
        assert_eq!(std::path::Path::new("/dev/full"), path);
        assert_eq!(Some(28), source.raw_os_error());
    }
}
