//! Console rendering of the session banner and the comparison summary.

use std::io::{self, Write};

use taximpact_core::{ImpactOutcome, ScenarioComparison, TaxResult};

use crate::utils::money;

const RULE: &str = "==============================";

pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, " TaxImpact – Guided Tax Simulator (MVP)")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "This tool helps you SEE the tax impact of your decisions.")?;
    writeln!(out, "It is an estimation tool, not official tax filing.")
}

/// Writes both scenarios and the impact line.
pub fn write_summary(
    out: &mut impl Write,
    comparison: &ScenarioComparison,
) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, " SUMMARY")?;
    writeln!(out, "{RULE}")?;

    write_scenario(
        out,
        "Current situation (no RRSP, no donation)",
        &comparison.baseline,
    )?;
    write_scenario(
        out,
        "After your decisions (RRSP + donation)",
        &comparison.with_decisions,
    )?;

    writeln!(out, "\n--- Impact of your decisions ---")?;
    writeln!(out, "{}", impact_line(comparison.outcome()))
}

pub fn write_farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nThank you for using TaxImpact.")?;
    writeln!(out, "Remember: this is an estimate, not CRA filing.")
}

fn write_scenario(
    out: &mut impl Write,
    heading: &str,
    result: &TaxResult,
) -> io::Result<()> {
    writeln!(out, "\n--- {heading} ---")?;
    writeln!(out, "Estimated tax payable: {}", money(result.final_tax))?;
    writeln!(out, "Refund:                {}", money(result.refund))?;
    writeln!(out, "Amount owing:          {}", money(result.owing))
}

fn impact_line(outcome: ImpactOutcome) -> String {
    match outcome {
        ImpactOutcome::Improved(amount) => {
            format!("✅ Your tax position improved by {}", money(amount))
        }
        ImpactOutcome::Worsened(amount) => {
            format!("⚠️ Your tax position worsened by {}", money(amount))
        }
        ImpactOutcome::Unchanged => "No change in tax position.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use taximpact_core::{TaxInputs, compare_scenarios};

    use super::*;

    fn render(inputs: TaxInputs) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, &compare_scenarios(&inputs)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn impact_line_wording() {
        assert_eq!(
            impact_line(ImpactOutcome::Improved(dec!(1860))),
            "✅ Your tax position improved by $1,860.00"
        );
        assert_eq!(
            impact_line(ImpactOutcome::Worsened(dec!(300))),
            "⚠️ Your tax position worsened by $300.00"
        );
        assert_eq!(
            impact_line(ImpactOutcome::Unchanged),
            "No change in tax position."
        );
    }

    #[test]
    fn summary_lists_both_scenarios() {
        let output = render(TaxInputs::new(
            dec!(80000),
            dec!(15000),
            dec!(5000),
            dec!(1000),
            dec!(0.30),
        ));

        let expected = "
==============================
 SUMMARY
==============================

--- Current situation (no RRSP, no donation) ---
Estimated tax payable: $24,000.00
Refund:                $0.00
Amount owing:          $9,000.00

--- After your decisions (RRSP + donation) ---
Estimated tax payable: $22,140.00
Refund:                $0.00
Amount owing:          $7,140.00

--- Impact of your decisions ---
✅ Your tax position improved by $1,860.00
";
        assert_eq!(output, expected);
    }

    #[test]
    fn summary_shows_refund() {
        let output = render(TaxInputs::new(
            dec!(30000),
            dec!(9500),
            dec!(10000),
            dec!(0),
            dec!(0.30),
        ));

        assert!(output.contains("Refund:                $3,500.00"));
        assert!(output.contains("Your tax position improved by $3,000.00"));
    }

    #[test]
    fn banner_and_farewell_text() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();
        write_farewell(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains(" TaxImpact – Guided Tax Simulator (MVP)\n"));
        assert!(output.contains("It is an estimation tool, not official tax filing."));
        assert!(output.ends_with("Remember: this is an estimate, not CRA filing.\n"));
    }
}
