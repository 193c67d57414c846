//! Command handlers shared by one-shot invocations and the interactive
//! session.

use pregoeiro_core::deadline::current_time_display;
use pregoeiro_core::{
    Clock, DeadlineCalculator, SessionState, TenderConfig, evaluate, render_announcement,
};
use serde_json::json;
use tracing::info;

use crate::cli::{AnnounceArgs, DeadlineArgs, EligibilityArgs};
use crate::display;

/// Everything one session needs: the tender, the clock and the scratch state.
pub struct Cockpit {
    config: TenderConfig,
    calculator: DeadlineCalculator<Box<dyn Clock>>,
    session: SessionState,
    json: bool,
}

impl Cockpit {
    pub fn new(config: TenderConfig, clock: Box<dyn Clock>, json: bool) -> Self {
        Self {
            config,
            calculator: DeadlineCalculator::new(clock),
            session: SessionState::new(),
            json,
        }
    }

    pub fn info(&self) -> anyhow::Result<()> {
        if self.json {
            return display::print_json(&json!({
                "config": &self.config,
                "min_net_worth": self.config.min_net_worth(),
            }));
        }
        display::print_header(&self.config);
        Ok(())
    }

    pub fn eligibility(&self, args: &EligibilityArgs) -> anyhow::Result<()> {
        let financial = args.financial_profile();
        let technical = args.technical_profile();
        let verdict = evaluate(&financial, &technical, &self.config);
        info!(
            financial = verdict.financial_pass,
            technical = verdict.technical_pass,
            overall = verdict.overall_pass,
            "habilitação checked"
        );

        if self.json {
            return display::print_json(&verdict);
        }
        display::print_verdict(&verdict, &technical, &args.unset_ratios());
        Ok(())
    }

    /// Compute action: the only writer of the session's deadline fields.
    pub fn deadline(&mut self, args: &DeadlineArgs) -> anyhow::Result<()> {
        let result = self.calculator.compute(args.preset(), &mut self.session);
        if self.json {
            return display::print_json(&result);
        }
        self.show()
    }

    /// Display action: reads back whatever the last compute stored.
    pub fn show(&self) -> anyhow::Result<()> {
        let current_time = current_time_display(self.calculator.clock());
        if self.json {
            return display::print_json(&json!({
                "current_time": current_time,
                "last_deadline": self.session.last_deadline(),
                "last_message": self.session.last_message(),
            }));
        }
        display::print_deadline(&self.session, &current_time);
        Ok(())
    }

    pub fn announce(&self, args: &AnnounceArgs) -> anyhow::Result<()> {
        let text = render_announcement(Some(args.scenario), &args.params(), &self.config.citations);
        if self.json {
            return display::print_json(&json!({
                "scenario": args.scenario,
                "text": text,
            }));
        }
        display::print_announcement(args.scenario, &text);
        Ok(())
    }

    pub fn scenarios(&self) -> anyhow::Result<()> {
        if self.json {
            let list: Vec<_> = pregoeiro_core::Scenario::ALL
                .iter()
                .map(|s| {
                    json!({
                        "name": s.name(),
                        "label": s.label(),
                        "parameters": s.parameters(),
                    })
                })
                .collect();
            return display::print_json(&list);
        }
        display::print_scenarios();
        Ok(())
    }
}
