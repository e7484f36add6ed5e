//! One interactive TaxImpact session.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use taximpact_core::{ScenarioComparison, TaxInputs, compare_scenarios};
use thiserror::Error;
use tracing::info;

use crate::prompt::{PromptError, Prompter, Question};
use crate::report;

/// Errors that abort a session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

pub const INCOME: Question = Question {
    title: "T4 – Box 14: Employment Income",
    explanation: "This is your TOTAL employment income for the year.\n\
                  You can find this on your T4 slip, Box 14.",
    default: None,
};

pub const TAX_DEDUCTED: Question = Question {
    title: "T4 – Box 22: Income Tax Deducted",
    explanation: "This is the TOTAL income tax your employer already deducted\n\
                  from your paycheques during the year.",
    default: None,
};

pub const RRSP_CONTRIBUTION: Question = Question {
    title: "RRSP Contribution",
    explanation: "RRSP reduces your TAXABLE income.\n\
                  If you contributed during the year, enter the total amount.",
    default: Some(Decimal::ZERO),
};

pub const DONATIONS: Question = Question {
    title: "Charitable Donations",
    explanation: "Donations do NOT reduce income.\n\
                  They give you a TAX CREDIT that reduces tax payable.",
    default: Some(Decimal::ZERO),
};

pub const TAX_RATE: Question = Question {
    title: "Estimated Total Tax Rate (Federal + Ontario)",
    explanation: "This is an approximation used for simulation.\n\
                  For Ontario employees, 0.30 is a reasonable average.",
    default: Some(DEFAULT_TAX_RATE),
};

/// 30%, offered when the rate question is left empty.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Runs a full session: banner, the five questions, summary and farewell.
///
/// Returns the comparison that was shown.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: W,
) -> Result<ScenarioComparison, AppError> {
    let mut prompter = Prompter::new(input, output);
    report::write_banner(prompter.output())?;

    let inputs = collect_inputs(&mut prompter)?;
    info!(?inputs, "inputs collected");

    let comparison = compare_scenarios(&inputs);

    let (_, mut output) = prompter.into_inner();
    report::write_summary(&mut output, &comparison)?;
    report::write_farewell(&mut output)?;
    output.flush()?;

    Ok(comparison)
}

fn collect_inputs<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>
) -> Result<TaxInputs, PromptError> {
    Ok(TaxInputs {
        income: prompter.ask(&INCOME)?,
        tax_deducted: prompter.ask(&TAX_DEDUCTED)?,
        rrsp_contribution: prompter.ask(&RRSP_CONTRIBUTION)?,
        donation_amount: prompter.ask(&DONATIONS)?,
        tax_rate: prompter.ask(&TAX_RATE)?,
    })
}
