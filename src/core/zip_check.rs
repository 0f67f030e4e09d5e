//! ZIP integrity check

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;
use zip::read::read_zipfile_from_stream;
use zip::ZipArchive;

use super::outcome::{Outcome, Reason};
use super::validator::FileCheck;

pub struct ZipCheck;

impl FileCheck for ZipCheck {
    fn check(&self, path: &Path) -> Outcome {
        check_zip(path)
    }
}

/// Open an archive and read every member to verify its CRC-32
///
/// # Returns
/// `Outcome::Usable` when every member reads cleanly,
/// `Reason::BadMember` naming the first member that fails,
/// `Reason::Underlying` when the archive itself cannot be opened
pub fn check_zip(path: &Path) -> Outcome {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => return Outcome::underlying(e),
    };

    let mut archive = match ZipArchive::new(BufReader::new(file)) {
        Ok(archive) => archive,
        Err(e) => return Outcome::underlying(e),
    };

    let bad_member = match first_bad_member(&mut archive) {
        Some(name) => Some(name),
        None => first_bad_local_entry(archive.into_inner()),
    };

    match bad_member {
        Some(name) => {
            log::debug!("first bad member in {} is {}", path.display(), name);
            Outcome::Corrupted(Reason::BadMember(name))
        }
        None => Outcome::Usable,
    }
}

/// Name of the first member, in central directory order, that fails to read
fn first_bad_member<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Option<String> {
    let names: Vec<String> = archive.file_names().map(str::to_owned).collect();

    for (index, name) in names.into_iter().enumerate() {
        if let Err(e) = read_member(archive, index) {
            log::debug!("member {} failed: {:#}", name, e);
            return Some(name);
        }
    }

    None
}

fn read_member<R: Read + Seek>(archive: &mut ZipArchive<R>, index: usize) -> Result<()> {
    let mut entry = archive.by_index(index).context("cannot open member header")?;
    // The CRC is checked by the reader once the stream reaches its end
    io::copy(&mut entry, &mut io::sink()).context("member data failed verification")?;
    Ok(())
}

/// Walk the local headers front to back and verify every stored entry.
///
/// The central directory keeps one entry per name, so an earlier member
/// shadowed by a later one with the same name is only reachable this way.
/// Entries the stream reader cannot follow (data descriptors, prefixed
/// archives) end the walk without a verdict.
fn first_bad_local_entry<R: Read + Seek>(mut reader: R) -> Option<String> {
    if let Err(e) = reader.rewind() {
        log::debug!("cannot rewind archive: {}", e);
        return None;
    }

    loop {
        match read_zipfile_from_stream(&mut reader) {
            Ok(Some(mut entry)) => {
                let name = entry.name().to_owned();
                if let Err(e) = io::copy(&mut entry, &mut io::sink()) {
                    log::debug!("local entry {} failed: {}", name, e);
                    return Some(name);
                }
            }
            Ok(None) => return None,
            Err(e) => {
                log::debug!("stopped walking local headers: {}", e);
                return None;
            }
        }
    }
}
