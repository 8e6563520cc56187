//! Sequence interpreter.
//!
//! A sequence is an ordered list of command descriptors of shape
//! `{"<command>": {<param>: <value>, ...}}`, replayed top to bottom. Each
//! descriptor is validated into a typed parameter struct at the dispatch
//! boundary; unrecognized command names are logged and skipped, while an
//! error raised by a recognized command halts the run.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{info, warn};

use super::actions::{ActionOptions, GetOptions, Pilot, SendKeysOptions};
use super::errors::PilotError;
use crate::session::{Locator, RemoteSession, Strategy};

/// One command descriptor: a name and its parameter mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct SequenceStep {
    pub name: String,
    pub params: Map<String, Value>,
}

impl SequenceStep {
    pub fn new(name: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

impl TryFrom<Map<String, Value>> for SequenceStep {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut entries = map.into_iter();
        let (name, value) = entries
            .next()
            .ok_or_else(|| "empty command descriptor".to_string())?;
        if entries.next().is_some() {
            return Err("command descriptor must hold exactly one command".to_string());
        }
        let params = match value {
            Value::Object(params) => params,
            Value::Null => Map::new(),
            other => {
                return Err(format!(
                    "parameters for '{name}' must be an object, got {other}"
                ))
            }
        };
        Ok(Self { name, params })
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct GetParams {
    url: String,
    #[serde(default = "default_true")]
    url_match: bool,
    #[serde(default)]
    wait: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TargetParams {
    by: Strategy,
    value: String,
    #[serde(default)]
    wait: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SendKeysParams {
    by: Strategy,
    value: String,
    text: String,
    #[serde(default)]
    append: bool,
    #[serde(default)]
    wait: Option<f64>,
}

fn parse<T: DeserializeOwned>(command: &str, params: &Map<String, Value>) -> Result<T, PilotError> {
    serde_json::from_value(Value::Object(params.clone())).map_err(|e| {
        PilotError::MissingParameter {
            command: command.to_string(),
            detail: e.to_string(),
        }
    })
}

/// Wire-level waits are float seconds; non-positive values mean no wait.
fn wait_duration(wait: Option<f64>) -> Option<Duration> {
    wait.filter(|w| *w > 0.0).map(Duration::from_secs_f64)
}

impl<S: RemoteSession> Pilot<S> {
    /// Replay a sequence, propagating the first failure and abandoning the
    /// remaining steps.
    pub async fn execute(&self, sequence: &[SequenceStep]) -> Result<(), PilotError> {
        info!(steps = sequence.len(), "execute");
        for step in sequence {
            self.dispatch(step).await?;
        }
        Ok(())
    }

    /// Non-raising variant: returns the first failure, if any, with the
    /// remaining steps abandoned.
    pub async fn try_execute(&self, sequence: &[SequenceStep]) -> Option<PilotError> {
        self.execute(sequence).await.err()
    }

    async fn dispatch(&self, step: &SequenceStep) -> Result<(), PilotError> {
        match step.name.to_ascii_lowercase().as_str() {
            "get" => {
                let p: GetParams = parse("get", &step.params)?;
                let options = GetOptions {
                    url_match: p.url_match,
                    wait: wait_duration(p.wait),
                    ..Default::default()
                };
                self.get(&p.url, &options).await
            }
            "click" => {
                let p: TargetParams = parse("click", &step.params)?;
                let options = ActionOptions {
                    wait: wait_duration(p.wait),
                    ..Default::default()
                };
                self.click(&Locator::new(p.by, p.value), &options).await
            }
            "submit" => {
                let p: TargetParams = parse("submit", &step.params)?;
                let options = ActionOptions {
                    wait: wait_duration(p.wait),
                    ..Default::default()
                };
                self.submit(&Locator::new(p.by, p.value), &options).await
            }
            "clear" => {
                let p: TargetParams = parse("clear", &step.params)?;
                let options = ActionOptions {
                    wait: wait_duration(p.wait),
                    ..Default::default()
                };
                self.clear(&Locator::new(p.by, p.value), &options).await
            }
            "send_keys" => {
                let p: SendKeysParams = parse("send_keys", &step.params)?;
                let options = SendKeysOptions {
                    append: p.append,
                    wait: wait_duration(p.wait),
                    ..Default::default()
                };
                self.send_keys(&Locator::new(p.by, p.value), &p.text, &options)
                    .await
            }
            other => {
                warn!(command = other, "unknown command, skipping");
                Ok(())
            }
        }
    }
}
