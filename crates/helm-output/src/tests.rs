//! Integration tests for helm-output.

use helm_agent::{AgentConfig, AgentState, Helm};
use helm_control::{ControlResult, Controller, ThresholdController};
use helm_core::Step;

use crate::row::StateRow;

fn state(x: f64, y: f64) -> AgentState {
    AgentState {
        x,
        y,
        speed:                    1.0,
        heading:                  45.0,
        turn_rate:                -0.3,
        turn_rate_target:         -1.0,
        instantaneous_deflection: false,
    }
}

fn row(step: u64, x: f64, y: f64) -> StateRow {
    StateRow::new(Step(step), state(x, y))
}

/// Steers like the threshold policy, then gives an invalid command.
struct GivesUpAfter {
    calls: u32,
    limit: u32,
}

impl Controller for GivesUpAfter {
    fn steer(&mut self, helm: &mut Helm<'_>) -> ControlResult<()> {
        self.calls += 1;
        if self.calls > self.limit {
            helm.command_turn_rate(99.0)?;
        }
        ThresholdController.steer(helm)
    }

    fn name(&self) -> &str {
        "gives-up"
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::error::OutputError;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("states.csv").exists());
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("states.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["step", "x", "y", "speed", "heading", "turn_rate", "turn_rate_target", "instantaneous_deflection"]
        );
    }

    #[test]
    fn csv_fields_parse_back_exactly() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let written = row(7, 0.1 + 0.2, -19.292_893_218_813_45);
        w.write_state(&written).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("states.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(&r[0], "7");
        assert_eq!(r[1].parse::<f64>().unwrap(), written.state.x);
        assert_eq!(r[2].parse::<f64>().unwrap(), written.state.y);
        assert_eq!(r[3].parse::<f64>().unwrap(), 1.0);
        assert_eq!(r[4].parse::<f64>().unwrap(), 45.0);
        assert_eq!(r[5].parse::<f64>().unwrap(), -0.3);
        assert_eq!(r[6].parse::<f64>().unwrap(), -1.0);
        assert_eq!(&r[7], "false");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_directory_errors() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("nope"));
        assert!(matches!(result, Err(OutputError::Csv(_))));
    }
}

#[cfg(test)]
mod trace_tests {
    use super::*;
    use crate::csv::TraceWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn trace_is_space_delimited_without_header() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = TraceWriter::new(dir.path()).unwrap();
        w.write_state(&row(0, 0.0, -20.0)).unwrap();
        w.write_state(&row(1, 0.7071067811865475, -19.292893218813454)).unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(dir.path().join("trace.dat")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["0 -20", "0.7071067811865475 -19.292893218813454"]);
    }

    #[test]
    fn drop_without_finish_still_writes() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut w = TraceWriter::new(dir.path()).unwrap();
            w.write_state(&row(0, 1.0, 2.0)).unwrap();
        }
        let text = std::fs::read_to_string(dir.path().join("trace.dat")).unwrap();
        assert_eq!(text.trim(), "1 2");
    }
}

#[cfg(test)]
mod pair_tests {
    use super::*;
    use crate::csv::{CsvWriter, TraceWriter};
    use crate::writer::OutputWriter;

    #[test]
    fn pair_feeds_both_writers() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = (
            CsvWriter::new(dir.path()).unwrap(),
            TraceWriter::new(dir.path()).unwrap(),
        );
        for i in 0..3 {
            w.write_state(&row(i, i as f64, -(i as f64))).unwrap();
        }
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("states.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3);
        let text = std::fs::read_to_string(dir.path().join("trace.dat")).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}

#[cfg(test)]
mod observer_tests {
    use helm_core::SimConfig;
    use helm_sim::{SimBuilder, SimError};

    use super::*;
    use crate::csv::{CsvWriter, TraceWriter};
    use crate::observer::SimOutputObserver;

    #[test]
    fn integration_csv_and_trace() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(SimConfig::new(50), ThresholdController)
            .agent_config(AgentConfig::default())
            .build()
            .unwrap();

        let writer = (
            CsvWriter::new(dir.path()).unwrap(),
            TraceWriter::new(dir.path()).unwrap(),
        );
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.rows_written(), 51);

        let mut rdr = csv::Reader::from_path(dir.path().join("states.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 51, "initial state plus 50 steps");
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][2], "-20");
        assert_eq!(&rows[50][0], "50");
        let last_y: f64 = rows[50][2].parse().unwrap();
        assert_eq!(last_y, sim.agent().y());

        let text = std::fs::read_to_string(dir.path().join("trace.dat")).unwrap();
        assert_eq!(text.lines().count(), 51);
        assert_eq!(text.lines().last().unwrap(), sim.agent().state_trace());
    }

    #[test]
    fn aborted_run_keeps_rows_up_to_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(SimConfig::new(50), GivesUpAfter { calls: 0, limit: 10 })
            .build()
            .unwrap();

        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let err = sim.run(&mut obs).unwrap_err();
        assert!(matches!(err, SimError::Control(_)));
        drop(obs);

        let mut rdr = csv::Reader::from_path(dir.path().join("states.csv")).unwrap();
        assert_eq!(rdr.records().count(), 11, "initial state plus 10 steps");
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn sqlite_db_created() {
        let dir = tempfile::tempdir().unwrap();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_rows_committed_on_finish() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        for i in 0..4 {
            w.write_state(&row(i, i as f64, 0.5)).unwrap();
        }
        w.finish().unwrap();
        drop(w);

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM states", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 4);
    }

    #[test]
    fn sqlite_values_stored() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_state(&row(3, 1.25, -7.5)).unwrap();
        w.finish().unwrap();
        drop(w);

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (y, heading, inst): (f64, f64, i64) = conn
            .query_row(
                "SELECT y, heading, instantaneous_deflection FROM states WHERE step = 3",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(y, -7.5);
        assert_eq!(heading, 45.0);
        assert_eq!(inst, 0);
    }

    #[test]
    fn sqlite_drop_without_finish_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut w = SqliteWriter::new(dir.path()).unwrap();
            w.write_state(&row(0, 0.0, 0.0)).unwrap();
        }
        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM states", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn sqlite_reopen_truncates() {
        let dir = tempfile::tempdir().unwrap();
        for run in 0..2 {
            let mut w = SqliteWriter::new(dir.path()).unwrap();
            w.write_state(&row(0, 0.0, run as f64)).unwrap();
            w.write_state(&row(1, 1.0, run as f64)).unwrap();
            w.finish().unwrap();
        }

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (count, max_y): (i64, f64) = conn
            .query_row("SELECT COUNT(*), MAX(y) FROM states", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })
            .unwrap();
        assert_eq!(count, 2, "second writer starts from an empty table");
        assert_eq!(max_y, 1.0);
    }

    #[test]
    fn sqlite_aborted_run_commits_partial_trace() {
        use helm_core::SimConfig;
        use helm_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(SimConfig::new(50), GivesUpAfter { calls: 0, limit: 10 })
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        assert!(sim.run(&mut obs).is_err());
        drop(obs);

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM states", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 11, "initial state plus 10 steps");
    }
}
