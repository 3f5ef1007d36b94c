//! Extraction plans: `int:ge1,str,double` describes one extraction per step.

use anyhow::{Result, bail};
use argcursor_engine::{ArgsCursor, ArgsResult, ExtractFlags, StopWordList, Token};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    U64,
    U32,
    I32,
    Double,
    Str,
    /// Read a string and report whether it is a stopword.
    Stop,
    /// Plain `advance()`.
    Skip,
}

impl Kind {
    fn parse(name: &str) -> Result<Self> {
        Ok(match name {
            "int" => Kind::Int,
            "u64" => Kind::U64,
            "u32" => Kind::U32,
            "i32" => Kind::I32,
            "double" => Kind::Double,
            "str" => Kind::Str,
            "stop" => Kind::Stop,
            "skip" => Kind::Skip,
            other => bail!("unknown step kind `{other}`"),
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Int => "int",
            Kind::U64 => "u64",
            Kind::U32 => "u32",
            Kind::I32 => "i32",
            Kind::Double => "double",
            Kind::Str => "str",
            Kind::Stop => "stop",
            Kind::Skip => "skip",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: Kind,
    pub flags: ExtractFlags,
}

pub fn parse_plan(plan: &str) -> Result<Vec<Step>> {
    if plan.trim().is_empty() {
        bail!("empty plan");
    }

    plan.split(',')
        .map(|step| {
            let mut parts = step.trim().split(':');
            let kind = Kind::parse(parts.next().unwrap_or_default())?;
            let mut flags = ExtractFlags::NONE;
            for flag in parts {
                flags = flags
                    | match flag {
                        "noadvance" => ExtractFlags::NO_ADVANCE,
                        "ge0" => ExtractFlags::REQUIRE_NONNEGATIVE,
                        "ge1" => ExtractFlags::REQUIRE_AT_LEAST_ONE,
                        "coalesce" => ExtractFlags::COALESCE_FRACTIONAL,
                        other => bail!("unknown flag `{other}` on `{kind}` step"),
                    };
            }
            Ok(Step { kind, flags })
        })
        .collect()
}

/// Runs every step against a fresh cursor; one report line per step, then
/// the final position.
pub fn run_plan<T: Token>(steps: &[Step], tokens: &[T], stopwords: &StopWordList) -> Vec<String> {
    let mut ac = ArgsCursor::new(tokens);
    let mut lines: Vec<String> = steps
        .iter()
        .map(|step| match run_step(&mut ac, step, stopwords) {
            Ok(value) => format!("{} {value}", step.kind),
            Err(err) => format!("{} error: {err}", step.kind),
        })
        .collect();
    lines.push(format!("position {}/{}", ac.position(), ac.count()));
    lines
}

fn run_step<T: Token>(
    ac: &mut ArgsCursor<'_, T>,
    step: &Step,
    stopwords: &StopWordList,
) -> ArgsResult<String> {
    let flags = step.flags;
    Ok(match step.kind {
        Kind::Int => ac.get_i64(flags)?.to_string(),
        Kind::U64 => ac.get_u64(flags)?.to_string(),
        Kind::U32 => ac.get_u32(flags)?.to_string(),
        Kind::I32 => ac.get_i32(flags)?.to_string(),
        Kind::Double => ac.get_f64(flags)?.to_string(),
        Kind::Str => String::from_utf8_lossy(ac.get_string(flags)?).into_owned(),
        Kind::Stop => {
            let term = ac.get_str(flags)?;
            format!("{term} {}", stopwords.contains(term))
        }
        Kind::Skip => {
            ac.advance()?;
            "ok".to_string()
        }
    })
}
