use anyhow::{Context, Result};
use serde_json::{Map, Value};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, specs_for_kind};

fn kind_label<K>(kind: K) -> String
where
    K: Copy + Into<&'static str> + EnumMessage,
{
    let label = kind.get_message().unwrap_or_else(|| kind.into());
    match kind.get_detailed_message() {
        Some(desc) if !desc.is_empty() => format!("{label}  ({desc})"),
        _ => label.to_string(),
    }
}

/// Walks the user through picking a kind of `C` and each of its parameters.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let kinds: Vec<C::Kind> = C::Kind::iter().collect();
    let labels: Vec<String> = kinds.iter().map(|&k| kind_label(k)).collect();
    let picked = driver.ask_select(C::prompt_label(), C::prompt_help(), &labels)?;
    let kind = *kinds
        .get(picked)
        .with_context(|| format!("no option at index {picked}"))?;

    let key: &'static str = kind.into();
    let fields = specs_for_kind(&C::schema(), key)?;
    let defaults = C::default_params(kind);

    let mut params = Map::new();
    for field in &fields {
        let init = field
            .default
            .clone()
            .or_else(|| defaults.get(&field.name).cloned())
            .unwrap_or(Value::Null);
        params.insert(field.name.clone(), prompt_field(driver, field, &init)?);
    }
    C::from_parts(kind, Value::Object(params))
}

fn prompt_field<D: PromptDriver>(driver: &D, field: &FieldSpec, init: &Value) -> Result<Value> {
    let help = field.help();
    if field.nullable {
        return prompt_optional(driver, field, init);
    }
    Ok(match field.kind {
        FieldKind::Flag => {
            Value::Bool(driver.ask_bool(&field.title, help, init.as_bool().unwrap_or(false))?)
        }
        FieldKind::Text => {
            Value::String(driver.ask_string(&field.title, help, init.as_str().unwrap_or(""))?)
        }
        FieldKind::Integer => loop {
            let n = driver.ask_u64(
                &field.title,
                help,
                init.as_u64().unwrap_or(0),
                field.min.map(|x| x as u64),
                field.max.map(|x| x as u64),
            )?;
            match field.exclusive_min {
                Some(lo) if n as f64 <= lo => eprintln!("✗ {} must be greater than {lo}", field.title),
                _ => break Value::from(n),
            }
        },
        FieldKind::Number => loop {
            let x = driver.ask_f64(
                &field.title,
                help,
                init.as_f64().unwrap_or(0.0),
                field.min,
                field.max,
            )?;
            match field.exclusive_min {
                Some(lo) if x <= lo => eprintln!("✗ {} must be greater than {lo}", field.title),
                _ => break Value::from(x),
            }
        },
    })
}

/// Blank answers map to `null`.
fn prompt_optional<D: PromptDriver>(driver: &D, field: &FieldSpec, init: &Value) -> Result<Value> {
    let current = match init {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let answer = driver.ask_string(
        &field.title,
        &format!("{}\n(leave blank for none)", field.help()),
        &current,
    )?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(Value::Null);
    }
    Ok(match field.kind {
        FieldKind::Integer => Value::from(
            answer
                .parse::<u64>()
                .with_context(|| format!("invalid integer for {}", field.title))?,
        ),
        FieldKind::Number => Value::from(
            answer
                .parse::<f64>()
                .with_context(|| format!("invalid number for {}", field.title))?,
        ),
        FieldKind::Flag => Value::Bool(
            answer
                .parse::<bool>()
                .with_context(|| format!("invalid flag for {}", field.title))?,
        ),
        FieldKind::Text => Value::String(answer.to_string()),
    })
}
