use stderrlog::{LogLevelNum, Timestamp};

/// Timestamp precision of log lines.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogTimestamp {
    /// No timestamps.
    #[default]
    Off,

    /// Seconds.
    Sec,

    /// Milliseconds.
    Ms,
}

impl From<LogTimestamp> for Timestamp {
    fn from(ts: LogTimestamp) -> Self {
        match ts {
            LogTimestamp::Off => Timestamp::Off,
            LogTimestamp::Sec => Timestamp::Second,
            LogTimestamp::Ms => Timestamp::Millisecond,
        }
    }
}

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// More log output (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log timestamp precision.
    #[arg(long, value_enum, default_value_t = LogTimestamp::Off)]
    timestamp: LogTimestamp,
}

impl LogArgs {
    /// Install the stderr logger.
    ///
    /// `base` is the level with no ``-v`` flags: 0 is errors only, and each
    /// step adds warn, info, debug, trace.
    pub fn setup_logging(
        &self,
        base: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let log_level = match base.saturating_add(self.verbose) {
            0 => LogLevelNum::Error,
            1 => LogLevelNum::Warn,
            2 => LogLevelNum::Info,
            3 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(self.timestamp.into())
            .init()?;

        Ok(())
    }
}
