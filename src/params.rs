//! Host-facing parameter descriptors.
//!
//! A [`Parameter`] is a value plus the rule for changing it: integer and
//! float ranges clamp, choices wrap around. Hosts either nudge a parameter by
//! a direction (encoders, arrow keys) or set it absolutely.

use std::fmt;

use tracing::debug;

/// Increment used when a float range is given none: 1/50 of the range.
const DEFAULT_FLOAT_STEPS: f32 = 50.0;

/// Absolute value for [`Parameter::set`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Choice(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    Int {
        value: i32,
        min: i32,
        max: i32,
    },
    Float {
        value: f32,
        min: f32,
        max: f32,
        increment: f32, // applied per unit of direction
    },
    Choice {
        index: usize,
        labels: &'static [&'static str],
    },
}

impl Parameter {
    pub fn int(value: i32, min: i32, max: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Parameter::Int {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    /// A zero increment selects 1/50 of the range.
    pub fn float(value: f32, min: f32, max: f32, increment: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let increment = if increment == 0.0 {
            (max - min) / DEFAULT_FLOAT_STEPS
        } else {
            increment.abs()
        };
        Parameter::Float {
            value: value.clamp(min, max),
            min,
            max,
            increment,
        }
    }

    /// `labels` must not be empty; the index wraps into range.
    pub fn choice(index: usize, labels: &'static [&'static str]) -> Self {
        let count = labels.len().max(1);
        Parameter::Choice {
            index: index % count,
            labels,
        }
    }

    /// Step by `direction` units: ranges clamp, choices wrap.
    pub fn update(&mut self, direction: i32) {
        match self {
            Parameter::Int { value, min, max } => {
                *value = value.saturating_add(direction).clamp(*min, *max);
            }
            Parameter::Float {
                value,
                min,
                max,
                increment,
            } => {
                *value = (*value + direction as f32 * *increment).clamp(*min, *max);
            }
            Parameter::Choice { index, labels } => {
                let count = labels.len().max(1) as i64;
                *index = (*index as i64 + direction as i64).rem_euclid(count) as usize;
            }
        }
    }

    /// Set an absolute value. Returns false if `value` is the wrong kind.
    pub fn set(&mut self, value: Value) -> bool {
        match (self, value) {
            (Parameter::Int { value, min, max }, Value::Int(v)) => {
                *value = v.clamp(*min, *max);
            }
            (Parameter::Float { value, min, max, .. }, Value::Float(v)) => {
                if v.is_nan() {
                    return false;
                }
                *value = v.clamp(*min, *max);
            }
            (Parameter::Choice { index, labels }, Value::Choice(i)) => {
                *index = i % labels.len().max(1);
            }
            (param, value) => {
                debug!(?param, ?value, "parameter kind mismatch");
                return false;
            }
        }
        true
    }

    pub fn value(&self) -> Value {
        match self {
            Parameter::Int { value, .. } => Value::Int(*value),
            Parameter::Float { value, .. } => Value::Float(*value),
            Parameter::Choice { index, .. } => Value::Choice(*index),
        }
    }

    /// Numeric view: ints and choice indices convert, floats pass through.
    pub fn as_f32(&self) -> f32 {
        match self {
            Parameter::Int { value, .. } => *value as f32,
            Parameter::Float { value, .. } => *value,
            Parameter::Choice { index, .. } => *index as f32,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Int { value, .. } => write!(f, "{}", value),
            Parameter::Float { value, .. } => write!(f, "{:.2}", value),
            Parameter::Choice { index, labels } => {
                write!(f, "{}", labels.get(*index).copied().unwrap_or("--"))
            }
        }
    }
}

/// Named parameters with an edit cursor.
#[derive(Debug, Clone, Default)]
pub struct ParameterPage {
    entries: Vec<(&'static str, Parameter)>,
    cursor: usize,
}

impl ParameterPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, parameter: Parameter) -> Self {
        self.entries.push((name, parameter));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move the cursor forward, wrapping.
    pub fn next(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + self.entries.len() - 1) % self.entries.len();
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Step the parameter under the cursor; returns its name.
    pub fn update_current(&mut self, direction: i32) -> Option<&'static str> {
        let (name, parameter) = self.entries.get_mut(self.cursor)?;
        parameter.update(direction);
        Some(*name)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, p)| p)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.entries
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Parameter)> {
        self.entries.iter().map(|(n, p)| (*n, p))
    }
}
