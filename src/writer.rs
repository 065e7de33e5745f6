//! Writer construction from output destinations

use std::io;

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

use crate::error::{Error, Result};

// Worker guards only exist when the file sink is compiled in; the alias
// keeps the signatures identical either way.
#[cfg(feature = "file")]
pub(crate) type WriterGuards = Vec<tracing_appender::non_blocking::WorkerGuard>;

#[cfg(not(feature = "file"))]
pub(crate) type WriterGuards = Vec<()>;

/// Create one writer covering every configured destination
///
/// Destinations are "stderr", "stdout", or a file path; multiple
/// destinations are tee'd together. File destinations need the `file`
/// feature and go through a non-blocking appender whose worker guard is
/// returned alongside the writer.
pub(crate) fn make_writer(paths: &[String]) -> Result<(BoxMakeWriter, WriterGuards)> {
    let mut guards = WriterGuards::new();

    let mut writers = Vec::with_capacity(paths.len());
    for path in paths {
        writers.push(single_writer(path, &mut guards)?);
    }

    let mut writers = writers.into_iter();
    let first = writers.next().ok_or_else(|| {
        Error::construction("configuration names no output destination")
    })?;
    let writer = writers.fold(first, |acc, next| BoxMakeWriter::new(acc.and(next)));

    Ok((writer, guards))
}

fn single_writer(path: &str, _guards: &mut WriterGuards) -> Result<BoxMakeWriter> {
    match path {
        "stderr" => Ok(BoxMakeWriter::new(io::stderr)),
        "stdout" => Ok(BoxMakeWriter::new(io::stdout)),
        #[cfg(feature = "file")]
        path => file_writer(path, _guards),
        #[cfg(not(feature = "file"))]
        path => Err(Error::construction(format!(
            "file output '{path}' requires the `file` feature"
        ))),
    }
}

#[cfg(feature = "file")]
fn file_writer(path: &str, guards: &mut WriterGuards) -> Result<BoxMakeWriter> {
    let path = std::path::Path::new(path);
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => std::path::Path::new("."),
    };
    let name = path.file_name().ok_or_else(|| {
        Error::construction(format!(
            "invalid file path (no filename): '{}'",
            path.display()
        ))
    })?;

    let appender = tracing_appender::rolling::never(dir, name);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    guards.push(guard);
    Ok(BoxMakeWriter::new(non_blocking))
}
