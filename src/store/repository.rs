use super::domain::{
    LogLevel, RunLogRecord, RunRecord, RunStatus, StepConfig, StepRecord, StepSource,
    WorkflowRecord, WorkflowSummary,
};
use super::error::StoreError;
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// SQLite-backed store for workflows, their ordered steps, and run history.
/// Every operation opens its own connection; multi-statement mutations run
/// inside one transaction.
pub struct WorkflowStore {
    db_path: PathBuf,
}

impl WorkflowStore {
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateParent {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let store = Self {
            db_path: db_path.to_path_buf(),
        };

        // Ensure open is valid now to fail fast.
        let _ = store.connect()?;
        Ok(store)
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        let connection = self.connect()?;
        connection
            .execute_batch(
                "
                CREATE TABLE IF NOT EXISTS workflows (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    description TEXT,
                    created_at INTEGER NOT NULL
                );

                CREATE TABLE IF NOT EXISTS steps (
                    id INTEGER PRIMARY KEY,
                    workflow_id INTEGER NOT NULL,
                    position INTEGER NOT NULL,
                    kind TEXT NOT NULL,
                    config TEXT NOT NULL,
                    FOREIGN KEY (workflow_id) REFERENCES workflows(id)
                        ON DELETE CASCADE
                );

                CREATE TABLE IF NOT EXISTS runs (
                    id INTEGER PRIMARY KEY,
                    workflow_id INTEGER NOT NULL,
                    status TEXT NOT NULL,
                    started_at INTEGER NOT NULL,
                    finished_at INTEGER,
                    FOREIGN KEY (workflow_id) REFERENCES workflows(id)
                        ON DELETE CASCADE
                );

                CREATE TABLE IF NOT EXISTS run_logs (
                    id INTEGER PRIMARY KEY,
                    run_id INTEGER NOT NULL,
                    step_id INTEGER,
                    level TEXT NOT NULL,
                    message TEXT NOT NULL,
                    logged_at INTEGER NOT NULL,
                    FOREIGN KEY (run_id) REFERENCES runs(id)
                        ON DELETE CASCADE,
                    FOREIGN KEY (step_id) REFERENCES steps(id)
                        ON DELETE SET NULL
                );

                CREATE INDEX IF NOT EXISTS idx_steps_workflow_position
                    ON steps(workflow_id, position);
                CREATE INDEX IF NOT EXISTS idx_runs_workflow_started
                    ON runs(workflow_id, started_at DESC);
                CREATE INDEX IF NOT EXISTS idx_run_logs_run_logged
                    ON run_logs(run_id, logged_at);
                ",
            )
            .map_err(|source| StoreError::Sql { source })?;
        Ok(())
    }

    pub fn create_workflow(
        &self,
        name: &str,
        description: Option<&str>,
        now: i64,
    ) -> Result<WorkflowRecord, StoreError> {
        let connection = self.connect()?;
        connection
            .execute(
                "INSERT INTO workflows (name, description, created_at) VALUES (?1, ?2, ?3)",
                params![name, description, now],
            )
            .map_err(|source| StoreError::Sql { source })?;
        Ok(WorkflowRecord {
            id: connection.last_insert_rowid(),
            name: name.to_string(),
            description: description.map(str::to_string),
            created_at: now,
        })
    }

    pub fn get_workflow(&self, workflow_id: i64) -> Result<WorkflowRecord, StoreError> {
        let connection = self.connect()?;
        connection
            .query_row(
                "SELECT id, name, description, created_at FROM workflows WHERE id = ?1",
                params![workflow_id],
                |row| {
                    Ok(WorkflowRecord {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(|source| StoreError::Sql { source })?
            .ok_or(StoreError::WorkflowNotFound { workflow_id })
    }

    /// Newest-first workflow listing with step and run counts.
    pub fn list_workflows(&self) -> Result<Vec<WorkflowSummary>, StoreError> {
        let connection = self.connect()?;
        let mut statement = connection
            .prepare(
                "
                SELECT w.id, w.name, w.description, w.created_at,
                       (SELECT COUNT(*) FROM steps s WHERE s.workflow_id = w.id),
                       (SELECT COUNT(*) FROM runs r WHERE r.workflow_id = w.id)
                FROM workflows w
                ORDER BY w.created_at DESC, w.id DESC
                ",
            )
            .map_err(|source| StoreError::Sql { source })?;

        let rows = statement
            .query_map([], |row| {
                Ok(WorkflowSummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    created_at: row.get(3)?,
                    step_count: row.get(4)?,
                    run_count: row.get(5)?,
                })
            })
            .map_err(|source| StoreError::Sql { source })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(|source| StoreError::Sql { source })?);
        }
        Ok(out)
    }

    pub fn update_workflow(
        &self,
        workflow_id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<WorkflowRecord, StoreError> {
        let connection = self.connect()?;
        let affected = connection
            .execute(
                "UPDATE workflows SET name = ?1, description = ?2 WHERE id = ?3",
                params![name, description, workflow_id],
            )
            .map_err(|source| StoreError::Sql { source })?;
        if affected == 0 {
            return Err(StoreError::WorkflowNotFound { workflow_id });
        }
        self.get_workflow(workflow_id)
    }

    /// Deletes the workflow; steps, runs, and run logs go with it through the
    /// cascade rules.
    pub fn delete_workflow(&self, workflow_id: i64) -> Result<(), StoreError> {
        let connection = self.connect()?;
        let affected = connection
            .execute("DELETE FROM workflows WHERE id = ?1", params![workflow_id])
            .map_err(|source| StoreError::Sql { source })?;
        if affected == 0 {
            return Err(StoreError::WorkflowNotFound { workflow_id });
        }
        Ok(())
    }

    /// Inserts the step at the end of the workflow's sequence.
    pub fn append_step(
        &self,
        workflow_id: i64,
        config: &StepConfig,
    ) -> Result<StepRecord, StoreError> {
        let mut connection = self.connect()?;
        let tx = connection
            .transaction()
            .map_err(|source| StoreError::Sql { source })?;
        if !workflow_exists(&tx, workflow_id)? {
            return Err(StoreError::WorkflowNotFound { workflow_id });
        }
        let position: i64 = tx
            .query_row(
                "SELECT COALESCE(MAX(position), 0) + 1 FROM steps WHERE workflow_id = ?1",
                params![workflow_id],
                |row| row.get(0),
            )
            .map_err(|source| StoreError::Sql { source })?;
        tx.execute(
            "INSERT INTO steps (workflow_id, position, kind, config) VALUES (?1, ?2, ?3, ?4)",
            params![
                workflow_id,
                position,
                config.kind().as_str(),
                config.config_json()
            ],
        )
        .map_err(|source| StoreError::Sql { source })?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(|source| StoreError::Sql { source })?;
        Ok(StepRecord {
            id,
            workflow_id,
            position,
            config: config.clone(),
        })
    }

    pub fn get_step(&self, step_id: i64) -> Result<StepRecord, StoreError> {
        let connection = self.connect()?;
        let row = connection
            .query_row(
                "SELECT id, workflow_id, position, kind, config FROM steps WHERE id = ?1",
                params![step_id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, i64>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()
            .map_err(|source| StoreError::Sql { source })?
            .ok_or(StoreError::StepNotFound { step_id })?;

        let (id, workflow_id, position, kind, config) = row;
        let config = StepConfig::from_parts(&kind, &config)
            .map_err(|detail| StoreError::InvalidStepConfig { step_id: id, detail })?;
        Ok(StepRecord {
            id,
            workflow_id,
            position,
            config,
        })
    }

    /// Decoded steps in position order, for display and editing surfaces.
    pub fn list_steps(&self, workflow_id: i64) -> Result<Vec<StepRecord>, StoreError> {
        let sources = self.list_step_sources(workflow_id)?;
        let mut out = Vec::with_capacity(sources.len());
        for source in sources {
            let config = StepConfig::from_parts(&source.kind, &source.config).map_err(|detail| {
                StoreError::InvalidStepConfig {
                    step_id: source.id,
                    detail,
                }
            })?;
            out.push(StepRecord {
                id: source.id,
                workflow_id,
                position: source.position,
                config,
            });
        }
        Ok(out)
    }

    /// Raw step rows in position order, for the run engine.
    pub fn list_step_sources(&self, workflow_id: i64) -> Result<Vec<StepSource>, StoreError> {
        let connection = self.connect()?;
        if !workflow_exists(&connection, workflow_id)? {
            return Err(StoreError::WorkflowNotFound { workflow_id });
        }
        let mut statement = connection
            .prepare(
                "
                SELECT id, position, kind, config
                FROM steps
                WHERE workflow_id = ?1
                ORDER BY position, id
                ",
            )
            .map_err(|source| StoreError::Sql { source })?;

        let rows = statement
            .query_map(params![workflow_id], |row| {
                Ok(StepSource {
                    id: row.get(0)?,
                    position: row.get(1)?,
                    kind: row.get(2)?,
                    config: row.get(3)?,
                })
            })
            .map_err(|source| StoreError::Sql { source })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(|source| StoreError::Sql { source })?);
        }
        Ok(out)
    }

    /// Removes the step and renumbers the survivors back to a contiguous
    /// 1..N sequence.
    pub fn delete_step(&self, step_id: i64) -> Result<(), StoreError> {
        let mut connection = self.connect()?;
        let tx = connection
            .transaction()
            .map_err(|source| StoreError::Sql { source })?;
        let workflow_id: i64 = tx
            .query_row(
                "SELECT workflow_id FROM steps WHERE id = ?1",
                params![step_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|source| StoreError::Sql { source })?
            .ok_or(StoreError::StepNotFound { step_id })?;
        tx.execute("DELETE FROM steps WHERE id = ?1", params![step_id])
            .map_err(|source| StoreError::Sql { source })?;
        renumber_steps(&tx, workflow_id)?;
        tx.commit().map_err(|source| StoreError::Sql { source })
    }

    /// Swaps the step with its predecessor. Returns false when it is already
    /// first.
    pub fn move_step_up(&self, step_id: i64) -> Result<bool, StoreError> {
        self.swap_with_neighbor(step_id, NeighborDirection::Before)
    }

    /// Swaps the step with its successor. Returns false when it is already
    /// last.
    pub fn move_step_down(&self, step_id: i64) -> Result<bool, StoreError> {
        self.swap_with_neighbor(step_id, NeighborDirection::After)
    }

    /// Applies a caller-supplied full ordering: every id must belong to the
    /// workflow and appear exactly once. Positions become 1..N in the given
    /// sequence.
    pub fn reorder_steps(&self, workflow_id: i64, ordered_ids: &[i64]) -> Result<(), StoreError> {
        let mut connection = self.connect()?;
        let tx = connection
            .transaction()
            .map_err(|source| StoreError::Sql { source })?;
        if !workflow_exists(&tx, workflow_id)? {
            return Err(StoreError::WorkflowNotFound { workflow_id });
        }

        let existing: BTreeSet<i64> = {
            let mut statement = tx
                .prepare("SELECT id FROM steps WHERE workflow_id = ?1")
                .map_err(|source| StoreError::Sql { source })?;
            let rows = statement
                .query_map(params![workflow_id], |row| row.get::<_, i64>(0))
                .map_err(|source| StoreError::Sql { source })?;
            let mut ids = BTreeSet::new();
            for row in rows {
                ids.insert(row.map_err(|source| StoreError::Sql { source })?);
            }
            ids
        };

        let mut seen = BTreeSet::new();
        for id in ordered_ids {
            if !existing.contains(id) {
                return Err(StoreError::InvalidReorder(format!(
                    "step `{id}` does not belong to workflow `{workflow_id}`"
                )));
            }
            if !seen.insert(*id) {
                return Err(StoreError::InvalidReorder(format!(
                    "step `{id}` appears more than once"
                )));
            }
        }
        if seen.len() != existing.len() {
            return Err(StoreError::InvalidReorder(format!(
                "ordering must list all {} steps of workflow `{workflow_id}`",
                existing.len()
            )));
        }

        for (index, id) in ordered_ids.iter().enumerate() {
            tx.execute(
                "UPDATE steps SET position = ?1 WHERE id = ?2",
                params![index as i64 + 1, id],
            )
            .map_err(|source| StoreError::Sql { source })?;
        }
        tx.commit().map_err(|source| StoreError::Sql { source })
    }

    pub fn create_run(&self, workflow_id: i64, now: i64) -> Result<RunRecord, StoreError> {
        let mut connection = self.connect()?;
        let tx = connection
            .transaction()
            .map_err(|source| StoreError::Sql { source })?;
        if !workflow_exists(&tx, workflow_id)? {
            return Err(StoreError::WorkflowNotFound { workflow_id });
        }
        tx.execute(
            "INSERT INTO runs (workflow_id, status, started_at) VALUES (?1, ?2, ?3)",
            params![workflow_id, RunStatus::Running.as_str(), now],
        )
        .map_err(|source| StoreError::Sql { source })?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(|source| StoreError::Sql { source })?;
        Ok(RunRecord {
            id,
            workflow_id,
            status: RunStatus::Running,
            started_at: now,
            finished_at: None,
        })
    }

    pub fn get_run(&self, run_id: i64) -> Result<RunRecord, StoreError> {
        let connection = self.connect()?;
        let row = connection
            .query_row(
                "SELECT id, workflow_id, status, started_at, finished_at FROM runs WHERE id = ?1",
                params![run_id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, i64>(3)?,
                        row.get::<_, Option<i64>>(4)?,
                    ))
                },
            )
            .optional()
            .map_err(|source| StoreError::Sql { source })?
            .ok_or(StoreError::RunNotFound { run_id })?;

        let (id, workflow_id, status_raw, started_at, finished_at) = row;
        Ok(RunRecord {
            id,
            workflow_id,
            status: run_status_from_db(&status_raw)?,
            started_at,
            finished_at,
        })
    }

    /// Newest-first runs for one workflow. A negative or absent limit means
    /// all of them.
    pub fn list_runs(
        &self,
        workflow_id: i64,
        limit: Option<u32>,
    ) -> Result<Vec<RunRecord>, StoreError> {
        let connection = self.connect()?;
        if !workflow_exists(&connection, workflow_id)? {
            return Err(StoreError::WorkflowNotFound { workflow_id });
        }
        let limit = limit.map(i64::from).unwrap_or(-1);
        let mut statement = connection
            .prepare(
                "
                SELECT id, workflow_id, status, started_at, finished_at
                FROM runs
                WHERE workflow_id = ?1
                ORDER BY started_at DESC, id DESC
                LIMIT ?2
                ",
            )
            .map_err(|source| StoreError::Sql { source })?;

        let rows = statement
            .query_map(params![workflow_id, limit], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, Option<i64>>(4)?,
                ))
            })
            .map_err(|source| StoreError::Sql { source })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, workflow_id, status_raw, started_at, finished_at) =
                row.map_err(|source| StoreError::Sql { source })?;
            out.push(RunRecord {
                id,
                workflow_id,
                status: run_status_from_db(&status_raw)?,
                started_at,
                finished_at,
            });
        }
        Ok(out)
    }

    /// Moves the run to a terminal status and stamps `finished_at`. The run
    /// must still be running.
    pub fn finalize_run(
        &self,
        run_id: i64,
        status: RunStatus,
        now: i64,
    ) -> Result<RunRecord, StoreError> {
        let mut connection = self.connect()?;
        let tx = connection
            .transaction()
            .map_err(|source| StoreError::Sql { source })?;
        let row = tx
            .query_row(
                "SELECT workflow_id, status, started_at FROM runs WHERE id = ?1",
                params![run_id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            )
            .optional()
            .map_err(|source| StoreError::Sql { source })?
            .ok_or(StoreError::RunNotFound { run_id })?;

        let (workflow_id, status_raw, started_at) = row;
        let current = run_status_from_db(&status_raw)?;
        if !current.can_transition_to(status) {
            return Err(StoreError::InvalidRunTransition {
                run_id,
                from: current,
                to: status,
            });
        }
        tx.execute(
            "UPDATE runs SET status = ?1, finished_at = ?2 WHERE id = ?3",
            params![status.as_str(), now, run_id],
        )
        .map_err(|source| StoreError::Sql { source })?;
        tx.commit().map_err(|source| StoreError::Sql { source })?;
        Ok(RunRecord {
            id: run_id,
            workflow_id,
            status,
            started_at,
            finished_at: Some(now),
        })
    }

    pub fn append_run_log(
        &self,
        run_id: i64,
        step_id: Option<i64>,
        level: LogLevel,
        message: &str,
        logged_at: i64,
    ) -> Result<RunLogRecord, StoreError> {
        let connection = self.connect()?;
        connection
            .execute(
                "
                INSERT INTO run_logs (run_id, step_id, level, message, logged_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ",
                params![run_id, step_id, level.as_str(), message, logged_at],
            )
            .map_err(|source| StoreError::Sql { source })?;
        Ok(RunLogRecord {
            id: connection.last_insert_rowid(),
            run_id,
            step_id,
            level,
            message: message.to_string(),
            logged_at,
        })
    }

    /// Logs for one run in the order they happened.
    pub fn list_run_logs(&self, run_id: i64) -> Result<Vec<RunLogRecord>, StoreError> {
        let connection = self.connect()?;
        let run_known = connection
            .query_row("SELECT 1 FROM runs WHERE id = ?1", params![run_id], |row| {
                row.get::<_, i64>(0)
            })
            .optional()
            .map_err(|source| StoreError::Sql { source })?
            .is_some();
        if !run_known {
            return Err(StoreError::RunNotFound { run_id });
        }

        let mut statement = connection
            .prepare(
                "
                SELECT id, run_id, step_id, level, message, logged_at
                FROM run_logs
                WHERE run_id = ?1
                ORDER BY logged_at, id
                ",
            )
            .map_err(|source| StoreError::Sql { source })?;

        let rows = statement
            .query_map(params![run_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, Option<i64>>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, i64>(5)?,
                ))
            })
            .map_err(|source| StoreError::Sql { source })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, run_id, step_id, level_raw, message, logged_at) =
                row.map_err(|source| StoreError::Sql { source })?;
            out.push(RunLogRecord {
                id,
                run_id,
                step_id,
                level: log_level_from_db(&level_raw)?,
                message,
                logged_at,
            });
        }
        Ok(out)
    }

    fn swap_with_neighbor(
        &self,
        step_id: i64,
        direction: NeighborDirection,
    ) -> Result<bool, StoreError> {
        let mut connection = self.connect()?;
        let tx = connection
            .transaction()
            .map_err(|source| StoreError::Sql { source })?;
        let (workflow_id, position): (i64, i64) = tx
            .query_row(
                "SELECT workflow_id, position FROM steps WHERE id = ?1",
                params![step_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(|source| StoreError::Sql { source })?
            .ok_or(StoreError::StepNotFound { step_id })?;

        let neighbor_sql = match direction {
            NeighborDirection::Before => {
                "
                SELECT id, position FROM steps
                WHERE workflow_id = ?1 AND position < ?2
                ORDER BY position DESC
                LIMIT 1
                "
            }
            NeighborDirection::After => {
                "
                SELECT id, position FROM steps
                WHERE workflow_id = ?1 AND position > ?2
                ORDER BY position ASC
                LIMIT 1
                "
            }
        };
        let neighbor: Option<(i64, i64)> = tx
            .query_row(neighbor_sql, params![workflow_id, position], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()
            .map_err(|source| StoreError::Sql { source })?;

        let Some((neighbor_id, neighbor_position)) = neighbor else {
            return Ok(false);
        };
        tx.execute(
            "UPDATE steps SET position = ?1 WHERE id = ?2",
            params![neighbor_position, step_id],
        )
        .map_err(|source| StoreError::Sql { source })?;
        tx.execute(
            "UPDATE steps SET position = ?1 WHERE id = ?2",
            params![position, neighbor_id],
        )
        .map_err(|source| StoreError::Sql { source })?;
        tx.commit().map_err(|source| StoreError::Sql { source })?;
        Ok(true)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let connection = Connection::open(&self.db_path).map_err(|source| StoreError::Open {
            path: self.db_path.display().to_string(),
            source,
        })?;
        connection
            .execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .map_err(|source| StoreError::Sql { source })?;
        Ok(connection)
    }
}

#[derive(Debug, Clone, Copy)]
enum NeighborDirection {
    Before,
    After,
}

fn workflow_exists(connection: &Connection, workflow_id: i64) -> Result<bool, StoreError> {
    let exists = connection
        .query_row(
            "SELECT 1 FROM workflows WHERE id = ?1",
            params![workflow_id],
            |row| row.get::<_, i64>(0),
        )
        .optional()
        .map_err(|source| StoreError::Sql { source })?
        .is_some();
    Ok(exists)
}

fn renumber_steps(tx: &Transaction<'_>, workflow_id: i64) -> Result<(), StoreError> {
    let ids: Vec<i64> = {
        let mut statement = tx
            .prepare("SELECT id FROM steps WHERE workflow_id = ?1 ORDER BY position, id")
            .map_err(|source| StoreError::Sql { source })?;
        let rows = statement
            .query_map(params![workflow_id], |row| row.get::<_, i64>(0))
            .map_err(|source| StoreError::Sql { source })?;
        let mut ids = Vec::new();
        for row in rows {
            ids.push(row.map_err(|source| StoreError::Sql { source })?);
        }
        ids
    };

    for (index, id) in ids.iter().enumerate() {
        tx.execute(
            "UPDATE steps SET position = ?1 WHERE id = ?2",
            params![index as i64 + 1, id],
        )
        .map_err(|source| StoreError::Sql { source })?;
    }
    Ok(())
}

fn run_status_from_db(value: &str) -> Result<RunStatus, StoreError> {
    match value {
        "running" => Ok(RunStatus::Running),
        "succeeded" => Ok(RunStatus::Succeeded),
        "failed" => Ok(RunStatus::Failed),
        other => Err(StoreError::InvalidRunStatus {
            value: other.to_string(),
        }),
    }
}

fn log_level_from_db(value: &str) -> Result<LogLevel, StoreError> {
    match value {
        "info" => Ok(LogLevel::Info),
        "warn" => Ok(LogLevel::Warn),
        "error" => Ok(LogLevel::Error),
        other => Err(StoreError::InvalidLogLevel {
            value: other.to_string(),
        }),
    }
}
