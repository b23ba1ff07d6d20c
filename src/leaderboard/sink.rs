//! Typed destination for finished-game records.

use thiserror::Error;

use super::record::ScoreRecord;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Player name must not be empty")]
    InvalidName,
    #[error("Score was rejected: {0}")]
    Rejected(String),
    #[error("Could not encode or decode leaderboard data")]
    Codec(#[from] bincode::Error),
}

/// Anything that can store a finished game.
///
/// The transport (HTTP, database, file) lives behind the implementation.
pub trait ScoreSink {
    fn submit(&mut self, record: ScoreRecord) -> Result<(), SinkError>;
}

impl<S: ScoreSink + ?Sized> ScoreSink for &mut S {
    fn submit(&mut self, record: ScoreRecord) -> Result<(), SinkError> {
        (**self).submit(record)
    }
}

impl<S: ScoreSink + ?Sized> ScoreSink for Box<S> {
    fn submit(&mut self, record: ScoreRecord) -> Result<(), SinkError> {
        (**self).submit(record)
    }
}

/// Collects every record as-is.
impl ScoreSink for Vec<ScoreRecord> {
    fn submit(&mut self, record: ScoreRecord) -> Result<(), SinkError> {
        self.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    impl ScoreSink for Offline {
        fn submit(&mut self, _record: ScoreRecord) -> Result<(), SinkError> {
            Err(SinkError::Rejected("backend unavailable".to_string()))
        }
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<ScoreRecord> = Vec::new();
        sink.submit(ScoreRecord::new("Ada", 900, 12, 40)).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].player_name, "Ada");
    }

    #[test]
    fn test_boxed_sink_reports_failure() {
        let mut sink: Box<dyn ScoreSink> = Box::new(Offline);
        let err = sink.submit(ScoreRecord::new("Ada", 900, 12, 40)).unwrap_err();

        assert_eq!(err.to_string(), "Score was rejected: backend unavailable");
    }
}
