//! `missions-query`: the eight queries from the command line.
//!
//! Arguments arrive as raw text and are validated here. Anything that does
//! not parse becomes the operation's zero value rather than an error, so
//! the process only fails when the dataset itself cannot be loaded.

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use crate::config::DataSource;
use crate::data::input::{parse_int, parse_year, InputError};
use crate::data::query::QueryEngine;

#[derive(Debug, Clone, Parser)]
#[command(name = "missions-query", version, about = "Query the space missions dataset")]
pub struct QueryCli {
    #[command(flatten)]
    pub source: DataSource,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum QueryCommand {
    /// Total missions for a company
    CountByCompany {
        #[arg(allow_hyphen_values = true)]
        company: Option<String>,
    },

    /// Success percentage for a company
    SuccessRate {
        #[arg(allow_hyphen_values = true)]
        company: Option<String>,
    },

    /// Mission names between two dates (inclusive), oldest first
    MissionsByDateRange {
        #[arg(allow_hyphen_values = true)]
        start: Option<String>,
        #[arg(allow_hyphen_values = true)]
        end: Option<String>,
    },

    /// Companies ranked by mission count
    TopCompanies {
        #[arg(allow_hyphen_values = true)]
        n: Option<String>,
    },

    /// Counts of the four canonical mission outcomes
    StatusCount,

    /// Missions launched in a year
    MissionsByYear {
        #[arg(allow_hyphen_values = true)]
        year: Option<String>,
    },

    /// Rocket with the most launches
    MostUsedRocket,

    /// Average missions per year over an inclusive span of years
    AveragePerYear {
        #[arg(allow_hyphen_values = true)]
        start_year: Option<String>,
        #[arg(allow_hyphen_values = true)]
        end_year: Option<String>,
    },
}

fn int_arg(raw: &Option<String>) -> Result<i64, InputError> {
    raw.as_deref().map_or(Err(InputError::Missing), parse_int)
}

fn year_arg(raw: &Option<String>) -> Result<i32, InputError> {
    raw.as_deref().map_or(Err(InputError::Missing), parse_year)
}

/// Log a rejected argument and substitute the zero value.
fn or_zero<T>(arg: Result<T, InputError>, name: &str, zero: Value, run: impl FnOnce(T) -> Value) -> Value {
    match arg {
        Ok(v) => run(v),
        Err(e) => {
            log::debug!("{name}: {e}; returning zero value");
            zero
        }
    }
}

/// Run one command and return its result as JSON.
pub fn execute(engine: &QueryEngine<'_>, command: &QueryCommand) -> Value {
    match command {
        QueryCommand::CountByCompany { company } => {
            json!(engine.mission_count_by_company(company.as_deref().unwrap_or("")))
        }
        QueryCommand::SuccessRate { company } => {
            json!(engine.success_rate(company.as_deref().unwrap_or("")))
        }
        QueryCommand::MissionsByDateRange { start, end } => json!(engine
            .missions_by_date_range_str(
                start.as_deref().unwrap_or(""),
                end.as_deref().unwrap_or("")
            )),
        QueryCommand::TopCompanies { n } => or_zero(int_arg(n), "n", json!([]), |n| {
            json!(engine.top_companies_by_mission_count(n))
        }),
        QueryCommand::StatusCount => json!(engine.mission_status_count()),
        QueryCommand::MissionsByYear { year } => {
            or_zero(year_arg(year), "year", json!(0), |y| {
                json!(engine.missions_by_year(y))
            })
        }
        QueryCommand::MostUsedRocket => json!(engine.most_used_rocket()),
        QueryCommand::AveragePerYear {
            start_year,
            end_year,
        } => {
            let span = year_arg(start_year).and_then(|s| Ok((s, year_arg(end_year)?)));
            or_zero(span, "year span", json!(0.0), |(s, e)| {
                json!(engine.average_missions_per_year(s, e))
            })
        }
    }
}
