use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage:
  microb-export <auth.conf> <output.file> <bench_name> <tab>

  auth.conf    file with a single `server:token` line
  output.file  nosqlbench output containing the final report table
  bench_name   metric name to store the value under
  tab          dashboard tab (metric group)";

/// Positional command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    pub auth_conf: PathBuf,
    pub report: PathBuf,
    pub metric_name: String,
    pub tab: String,
}

impl ExportArgs {
    /// Parse arguments that follow the program name.
    ///
    /// Returns `None` when fewer than four are given. Extra arguments are ignored.
    /// Paths are kept as given; name and tab are converted lossily.
    pub fn parse<I, S>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        Some(Self {
            auth_conf: PathBuf::from(args.next()?),
            report: PathBuf::from(args.next()?),
            metric_name: args.next()?.to_string_lossy().into_owned(),
            tab: args.next()?.to_string_lossy().into_owned(),
        })
    }
}
