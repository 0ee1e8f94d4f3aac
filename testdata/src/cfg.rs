//! Data configuration of a UI element.

use crate::raw::ValueRange;
use crate::{DataGenError, DataGenResult, FormatGenerator};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use scenaria_core::{UiElement, UiPropertyKind, Value, ValueType, DATE_FORMAT, DATE_TIME_FORMAT, TIME_FORMAT};

/// What an element declares about its data: type, bounds, format, value set,
/// and whether it is required or computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Cfg {
    pub data_type: ValueType,
    /// Declared value (not a list).
    pub value: Option<Value>,
    /// Accepted values; empty when no set is declared.
    pub value_set: Vec<Value>,
    pub min_value: Option<Value>,
    pub max_value: Option<Value>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Regular expression the whole value must match.
    pub format: Option<String>,
    pub required: bool,
    pub computed: bool,
}

impl Cfg {
    pub fn new(data_type: ValueType) -> Self {
        Self {
            data_type,
            value: None,
            value_set: Vec::new(),
            min_value: None,
            max_value: None,
            min_length: None,
            max_length: None,
            format: None,
            required: false,
            computed: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_value_set(mut self, values: Vec<Value>) -> Self {
        self.value_set = values;
        self
    }

    pub fn with_min_value(mut self, value: impl Into<Value>) -> Self {
        self.min_value = Some(value.into());
        self
    }

    pub fn with_max_value(mut self, value: impl Into<Value>) -> Self {
        self.max_value = Some(value.into());
        self
    }

    pub fn with_min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn with_max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn with_format(mut self, pattern: impl Into<String>) -> Self {
        self.format = Some(pattern.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn has_value_bounds(&self) -> bool {
        self.min_value.is_some() || self.max_value.is_some()
    }

    pub fn has_length_bounds(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some()
    }

    pub fn has_value_set(&self) -> bool {
        !self.value_set.is_empty()
    }

    /// Builds the configuration from the element's properties and validates it.
    ///
    /// Without a `datatype` property the type is inferred from the declared
    /// value, then the value set, then the minimum and maximum values, and
    /// defaults to string. Declared values are converted to that type.
    pub fn from_ui_element(uie: &UiElement) -> DataGenResult<Cfg> {
        let prop = |kind: UiPropertyKind| uie.property(kind).map(|p| &p.value);

        let (value, value_set) = match prop(UiPropertyKind::Value) {
            Some(Value::List(items)) => (None, items.clone()),
            Some(other) => (Some(other.clone()), Vec::new()),
            None => (None, Vec::new()),
        };
        let min_value = prop(UiPropertyKind::MinValue).cloned();
        let max_value = prop(UiPropertyKind::MaxValue).cloned();

        let data_type = match prop(UiPropertyKind::DataType) {
            Some(declared) => declared
                .as_text()
                .parse::<ValueType>()
                .map_err(|_| invalid(UiPropertyKind::DataType, declared))?,
            None => infer_data_type([
                value.as_ref(),
                value_set.first(),
                min_value.as_ref(),
                max_value.as_ref(),
            ]),
        };

        let coerce_opt = |value: Option<Value>, kind: UiPropertyKind| -> DataGenResult<Option<Value>> {
            value.map(|v| coerce(&v, data_type, kind)).transpose()
        };
        let cfg = Cfg {
            data_type,
            value: coerce_opt(value, UiPropertyKind::Value)?,
            value_set: value_set
                .iter()
                .map(|v| coerce(v, data_type, UiPropertyKind::Value))
                .collect::<DataGenResult<Vec<_>>>()?,
            min_value: coerce_opt(min_value, UiPropertyKind::MinValue)?,
            max_value: coerce_opt(max_value, UiPropertyKind::MaxValue)?,
            min_length: length(prop(UiPropertyKind::MinLength), UiPropertyKind::MinLength)?,
            max_length: length(prop(UiPropertyKind::MaxLength), UiPropertyKind::MaxLength)?,
            format: prop(UiPropertyKind::Format).map(Value::as_text),
            required: flag(prop(UiPropertyKind::Required)),
            computed: flag(prop(UiPropertyKind::Computed)),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that the declarations are consistent with each other.
    pub fn validate(&self) -> DataGenResult<()> {
        if let Some(pattern) = &self.format {
            if self.data_type != ValueType::String {
                return Err(DataGenError::IncompatibleFormat {
                    data_type: self.data_type,
                });
            }
            FormatGenerator::new(pattern)?;
        }
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(DataGenError::InvalidLengthRange { min, max });
            }
        }
        ValueRange::for_cfg(self, None)?;
        Ok(())
    }
}

fn infer_data_type<const N: usize>(candidates: [Option<&Value>; N]) -> ValueType {
    let declared: Vec<&Value> = candidates.into_iter().flatten().collect();
    match declared.first().map(|v| v.value_type()) {
        Some(ValueType::Integer) if declared.iter().any(|v| matches!(v, Value::Float(_))) => ValueType::Real,
        Some(data_type) => data_type,
        None => ValueType::String,
    }
}

fn invalid(kind: UiPropertyKind, value: &Value) -> DataGenError {
    DataGenError::InvalidValue {
        property: kind.to_string(),
        value: value.to_string(),
    }
}

fn coerce(value: &Value, data_type: ValueType, kind: UiPropertyKind) -> DataGenResult<Value> {
    let text = value.as_text();
    let text = text.trim();
    let coerced = match data_type {
        ValueType::String => Some(Value::String(value.as_text())),
        ValueType::Integer => value.as_int().or_else(|| text.parse().ok()).map(Value::Int),
        ValueType::Real => value.as_float().or_else(|| text.parse().ok()).map(Value::Float),
        ValueType::Boolean => value.as_bool().or_else(|| text.parse().ok()).map(Value::Bool),
        ValueType::Date => value
            .as_date()
            .or_else(|| NaiveDate::parse_from_str(text, DATE_FORMAT).ok())
            .map(Value::Date),
        ValueType::Time => value
            .as_time()
            .or_else(|| NaiveTime::parse_from_str(text, TIME_FORMAT).ok())
            .or_else(|| NaiveTime::parse_from_str(text, "%H:%M").ok())
            .map(Value::Time),
        ValueType::DateTime => value
            .as_date_time()
            .or_else(|| NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT).ok())
            .or_else(|| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").ok())
            .map(Value::DateTime),
    };
    coerced.ok_or_else(|| invalid(kind, value))
}

fn length(value: Option<&Value>, kind: UiPropertyKind) -> DataGenResult<Option<usize>> {
    value
        .map(|v| {
            v.as_int()
                .or_else(|| v.as_text().trim().parse().ok())
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| invalid(kind, v))
        })
        .transpose()
}

/// A flag property counts as set unless it is explicitly false.
fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(v) => v.as_bool().unwrap_or(true),
        None => false,
    }
}
