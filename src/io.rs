// io.rs
// Ingestion of the three replay datasets: the iteration log (line-delimited
// or JSON), the obstacle list, and the area list. All normalization happens
// here; the rest of the crate only ever sees clean, ordered entities.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::ViewerConfig;
use crate::scene::{Agent, Area, Iteration, Obstacle, Scene};
use ultraviolet::Vec2;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed record at line {line}: expected {expected}, got {got:?}")]
    MalformedRecord {
        line: usize,
        expected: &'static str,
        got: String,
    },
    #[error("unexpected end of file: expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("duplicate iteration number {number}")]
    DuplicateIteration { number: u32 },
    #[error("duplicate agent id {agent_id} in iteration {number}")]
    DuplicateAgent { number: u32, agent_id: i64 },
    #[error("non-finite coordinate in iteration {number} for agent {agent_id}")]
    NonFiniteCoordinate { number: u32, agent_id: i64 },
    #[error("iteration log is empty")]
    EmptyLog,
}

/// Normalize a recorded float field. Some logs come from locales that write
/// decimal commas; the core only ever sees dot-separated floats.
fn normalize_float(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

struct LineReader<R: BufRead> {
    inner: R,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(inner: R) -> Self {
        Self { inner, line_no: 0 }
    }

    /// Next non-empty line, trimmed. `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, LoadError> {
        let mut buf = String::new();
        loop {
            buf.clear();
            let n = self.inner.read_line(&mut buf).map_err(|source| LoadError::Io {
                path: "<iteration log>".to_string(),
                source,
            })?;
            if n == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let trimmed = buf.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<String, LoadError> {
        self.next_line()?.ok_or(LoadError::UnexpectedEof { expected })
    }

    fn parse_int<T: std::str::FromStr>(
        &mut self,
        expected: &'static str,
    ) -> Result<T, LoadError> {
        let raw = self.expect_line(expected)?;
        raw.trim().parse().map_err(|_| LoadError::MalformedRecord {
            line: self.line_no,
            expected,
            got: raw,
        })
    }

    fn parse_float(&mut self, expected: &'static str) -> Result<f32, LoadError> {
        let raw = self.expect_line(expected)?;
        normalize_float(&raw)
            .parse()
            .map_err(|_| LoadError::MalformedRecord {
                line: self.line_no,
                expected,
                got: raw,
            })
    }
}

/// Parse the line-delimited iteration log. Field order per record:
/// iteration number, agent count, then per agent: deleted flag, id, x, y,
/// one value per line. Returns iterations sorted by number.
pub fn iterations_from_lines<R: BufRead>(reader: R) -> Result<Vec<Iteration>, LoadError> {
    let mut lines = LineReader::new(reader);
    let mut iterations: Vec<Iteration> = Vec::new();

    while let Some(first) = lines.next_line()? {
        let number: u32 = first.trim().parse().map_err(|_| LoadError::MalformedRecord {
            line: lines.line_no,
            expected: "iteration number",
            got: first.clone(),
        })?;

        let agent_count: usize = lines.parse_int("agent count")?;
        let mut agents = Vec::with_capacity(agent_count);
        for _ in 0..agent_count {
            let deleted_flag: i32 = lines.parse_int("deleted flag")?;
            let id: i64 = lines.parse_int("agent id")?;
            let x = lines.parse_float("agent x")?;
            let y = lines.parse_float("agent y")?;
            agents.push(Agent {
                id,
                pos: Vec2::new(x, y),
                is_deleted: deleted_flag != 0,
            });
        }
        iterations.push(Iteration { number, agents });
    }

    finish_iterations(iterations)
}

// Serde mirrors for the JSON encodings. The recordings spell fields the way
// the producing tools did ("agentID", "X"/"Y"), so aliases cover both cases.

#[derive(Deserialize)]
struct RawAgent {
    #[serde(alias = "agentID", alias = "agentId")]
    agent_id: i64,
    #[serde(alias = "X")]
    x: f32,
    #[serde(alias = "Y")]
    y: f32,
    #[serde(default, alias = "isDeleted")]
    is_deleted: bool,
}

#[derive(Deserialize)]
struct RawIteration {
    iteration: u32,
    agents: Vec<RawAgent>,
}

#[derive(Deserialize)]
struct RawPoint {
    #[serde(alias = "X")]
    x: f32,
    #[serde(alias = "Y")]
    y: f32,
}

#[derive(Deserialize)]
struct RawObstacle {
    points: Vec<RawPoint>,
}

#[derive(Deserialize)]
struct RawArea {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    #[serde(alias = "horizontalIndent")]
    horizontal_indent: f32,
    #[serde(alias = "verticalIndent")]
    vertical_indent: f32,
}

/// Parse the JSON encoding of the iteration log (the alternate recording
/// format). Returns iterations sorted by number.
pub fn iterations_from_json(json: &str) -> Result<Vec<Iteration>, LoadError> {
    let raw: Vec<RawIteration> = serde_json::from_str(json).map_err(|source| LoadError::Json {
        path: "<iteration log>".to_string(),
        source,
    })?;

    let iterations = raw
        .into_iter()
        .map(|it| Iteration {
            number: it.iteration,
            agents: it
                .agents
                .into_iter()
                .map(|a| Agent {
                    id: a.agent_id,
                    pos: Vec2::new(a.x, a.y),
                    is_deleted: a.is_deleted,
                })
                .collect(),
        })
        .collect();

    finish_iterations(iterations)
}

/// Sort by iteration number and enforce the loader contract: at least one
/// iteration, no duplicate numbers, unique agent ids per iteration, finite
/// coordinates.
fn finish_iterations(mut iterations: Vec<Iteration>) -> Result<Vec<Iteration>, LoadError> {
    if iterations.is_empty() {
        return Err(LoadError::EmptyLog);
    }

    iterations.sort_by_key(|it| it.number);
    for pair in iterations.windows(2) {
        if pair[0].number == pair[1].number {
            return Err(LoadError::DuplicateIteration {
                number: pair[0].number,
            });
        }
    }

    let mut seen = HashSet::new();
    for iteration in &iterations {
        seen.clear();
        for agent in &iteration.agents {
            if !seen.insert(agent.id) {
                return Err(LoadError::DuplicateAgent {
                    number: iteration.number,
                    agent_id: agent.id,
                });
            }
            if !agent.pos.x.is_finite() || !agent.pos.y.is_finite() {
                return Err(LoadError::NonFiniteCoordinate {
                    number: iteration.number,
                    agent_id: agent.id,
                });
            }
        }
    }

    Ok(iterations)
}

pub fn obstacles_from_json(json: &str) -> Result<Vec<Obstacle>, LoadError> {
    let raw: Vec<RawObstacle> = serde_json::from_str(json).map_err(|source| LoadError::Json {
        path: "<obstacle list>".to_string(),
        source,
    })?;
    Ok(raw
        .into_iter()
        .map(|o| Obstacle {
            points: o.points.into_iter().map(|p| Vec2::new(p.x, p.y)).collect(),
        })
        .collect())
}

pub fn areas_from_json(json: &str) -> Result<Vec<Area>, LoadError> {
    let raw: Vec<RawArea> = serde_json::from_str(json).map_err(|source| LoadError::Json {
        path: "<area list>".to_string(),
        source,
    })?;
    Ok(raw
        .into_iter()
        .map(|a| Area {
            x1: a.x1,
            y1: a.y1,
            x2: a.x2,
            y2: a.y2,
            horizontal_indent: a.horizontal_indent,
            vertical_indent: a.vertical_indent,
        })
        .collect())
}

fn read_to_string(path: &str) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })
}

/// Load all three datasets named by the config. The iteration log format is
/// picked by extension-free sniffing: a leading '[' means JSON, anything
/// else is the line-delimited encoding.
pub fn load_scene(config: &ViewerConfig) -> Result<Scene, LoadError> {
    let iterations = if looks_like_json(&config.sim_data_path)? {
        iterations_from_json(&read_to_string(&config.sim_data_path)?)?
    } else {
        let file = File::open(&config.sim_data_path).map_err(|source| LoadError::Io {
            path: config.sim_data_path.clone(),
            source,
        })?;
        iterations_from_lines(BufReader::new(file))?
    };

    let obstacles = obstacles_from_json(&read_to_string(&config.obstacles_path)?)?;
    let areas = areas_from_json(&read_to_string(&config.areas_path)?)?;

    log::info!(
        "loaded {} iterations, {} obstacles, {} areas",
        iterations.len(),
        obstacles.len(),
        areas.len()
    );

    Ok(Scene {
        iterations,
        obstacles,
        areas,
    })
}

fn looks_like_json<P: AsRef<Path>>(path: P) -> Result<bool, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let mut first = String::new();
    loop {
        first.clear();
        let n = reader.read_line(&mut first).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        if n == 0 {
            return Ok(false);
        }
        let trimmed = first.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.starts_with('['));
        }
    }
}
