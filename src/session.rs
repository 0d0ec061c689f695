//! Request-driven session around a single task store.
//!
//! The session is the presentation-side owner of a `TaskStore`:
//! - Dispatches protocol requests to store operations
//! - Maps store errors onto protocol responses
//! - Serves a JSON-lines conversation over any reader/writer pair

use crate::config::Config;
use crate::dashboard::{Dashboard, labelled_trend};
use crate::protocol::{Request, Response};
use crate::store::{StoreError, TaskStore};
use crate::trend::{MAX_TREND_DAYS, is_valid_window};
use chrono::{Local, NaiveDate};
use eyre::{Context, Result};
use std::io::{BufRead, Write};

/// A replayed request that did not succeed.
#[derive(Debug, Clone)]
pub struct ReplayFailure {
    pub line: usize,
    pub response: Response,
}

/// A taskflow session.
pub struct Session {
    config: Config,
    store: TaskStore,
    shutdown: bool,
}

impl Session {
    /// Create a session with an empty store.
    pub fn new(config: Config) -> Self {
        Self::with_store(config, TaskStore::new())
    }

    /// Create a session around an existing store.
    pub fn with_store(config: Config, store: TaskStore) -> Self {
        Self {
            config,
            store,
            shutdown: false,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True once a shutdown request has been handled.
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }

    /// Snapshot the dashboard as of the local calendar day.
    pub fn dashboard(&self) -> Dashboard {
        self.dashboard_on(today())
    }

    pub fn dashboard_on(&self, today: NaiveDate) -> Dashboard {
        Dashboard::from_store(&self.store, &self.config, today)
    }

    /// Serve one request per line until EOF or a shutdown request.
    ///
    /// Malformed lines get an error response and do not end the session.
    pub fn serve<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<()> {
        log::info!("Session started");

        for line in reader.lines() {
            let line = line.context("Failed to read line")?;
            if line.trim().is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<Request>(&line) {
                Ok(request) => self.handle_request(request),
                Err(e) => {
                    log::warn!("Malformed request: {}", e);
                    Response::error(format!("malformed request: {}", e))
                }
            };

            let response_json = serde_json::to_string(&response).context("Failed to encode response")?;
            writeln!(writer, "{}", response_json).context("Failed to write response")?;
            writer.flush().context("Failed to flush response")?;

            if self.shutdown {
                break;
            }
        }

        log::info!("Session ended with {} task(s)", self.store.len());
        Ok(())
    }

    /// Apply every request in `reader`, collecting the ones that did not succeed.
    ///
    /// Stops early after a shutdown request. Lines are numbered from 1.
    pub fn replay<R: BufRead>(&mut self, reader: R) -> Result<Vec<ReplayFailure>> {
        let mut failures = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
            if line.trim().is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<Request>(&line) {
                Ok(request) => self.handle_request(request),
                Err(e) => Response::error(format!("malformed request: {}", e)),
            };

            if matches!(
                response,
                Response::NotFound { .. } | Response::Invalid { .. } | Response::Error { .. }
            ) {
                log::debug!("Replay line {} failed: {:?}", index + 1, response);
                failures.push(ReplayFailure {
                    line: index + 1,
                    response,
                });
            }

            if self.shutdown {
                break;
            }
        }

        Ok(failures)
    }

    /// Handle a single request.
    pub fn handle_request(&mut self, request: Request) -> Response {
        match request {
            Request::Create { title, description } => match self.store.create(&title, &description) {
                Ok(task) => Response::Task { task },
                Err(e) => error_response(e),
            },

            Request::Update { id, patch } => match self.store.update(&id, &patch) {
                Ok(task) => Response::Task { task },
                Err(e) => error_response(e),
            },

            Request::Delete { id } => {
                self.store.delete(&id);
                Response::Ok
            }

            Request::Toggle { id } => match self.store.toggle_complete(&id) {
                Ok(task) => Response::Task { task },
                Err(e) => error_response(e),
            },

            Request::Get { id } => match self.store.get(&id) {
                Some(task) => Response::Task { task: task.clone() },
                None => Response::NotFound { id },
            },

            Request::List { filter } => Response::Tasks {
                tasks: self.store.list(filter),
            },

            Request::Recent { n } => Response::Tasks {
                tasks: self.store.list_recent(n.unwrap_or(self.config.recent_limit)),
            },

            Request::Stats => Response::Stats {
                stats: self.store.stats(),
            },

            Request::Trend { days } => {
                let days = days.unwrap_or(self.config.trend_days);
                if !is_valid_window(days) {
                    return Response::Invalid {
                        message: format!("days must be between 1 and {}", MAX_TREND_DAYS),
                    };
                }
                Response::Trend {
                    trend: labelled_trend(&self.store, self.config.trend_mode, days, today()),
                }
            }

            Request::Dashboard => Response::Dashboard {
                dashboard: Box::new(self.dashboard()),
            },

            Request::Seed => match self.store.seed_welcome() {
                Ok(count) => Response::Seeded { count },
                Err(e) => error_response(e),
            },

            Request::Ping => Response::Pong,

            Request::Shutdown => {
                self.shutdown = true;
                Response::Ok
            }
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn error_response(e: StoreError) -> Response {
    match e {
        StoreError::NotFound(id) => Response::NotFound { id },
        StoreError::InvalidInput(e) => Response::Invalid { message: e.to_string() },
    }
}
