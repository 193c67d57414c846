//! Habilitação checks: financial ratios with a net-worth fallback, and the
//! technical/team attestation checklist.
//!
//! # Financial rule (edital)
//!
//! - LG, LC and SG all strictly above 1.0 → approved, net worth ignored.
//! - Otherwise the bidder's net worth must be at least the configured share
//!   of the estimated value (equality passes).
//!
//! Unset figures are zero. A zero ratio routes the bidder to the net-worth
//! branch and an absent net worth then fails it. Both cases are logged at
//! warn level since a 0.00 may be a missing input.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::TenderConfig;

/// Ratio every index must strictly exceed for the shortcut approval.
pub const RATIO_FLOOR: f64 = 1.0;

/// SICAF/balance-sheet figures of a bidder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// Liquidez Geral (LG).
    pub general_liquidity: f64,
    /// Liquidez Corrente (LC).
    pub current_liquidity: f64,
    /// Solvência Geral (SG).
    pub general_solvency: f64,
    /// Patrimônio Líquido in BRL; only read when the ratios fail.
    pub net_worth: Option<f64>,
}

impl FinancialProfile {
    pub fn new(general_liquidity: f64, current_liquidity: f64, general_solvency: f64) -> Self {
        Self {
            general_liquidity,
            current_liquidity,
            general_solvency,
            net_worth: None,
        }
    }

    pub fn with_net_worth(mut self, net_worth: f64) -> Self {
        self.net_worth = Some(net_worth);
        self
    }

    /// All three indices strictly above [`RATIO_FLOOR`].
    pub fn indices_ok(&self) -> bool {
        self.general_liquidity > RATIO_FLOOR
            && self.current_liquidity > RATIO_FLOOR
            && self.general_solvency > RATIO_FLOOR
    }
}

/// Which branch of the financial rule decided the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FinancialOutcome {
    IndicesAboveOne,
    NetWorthSufficient { net_worth: f64, minimum: f64 },
    NetWorthInsufficient { net_worth: f64, minimum: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialAssessment {
    pub pass: bool,
    pub net_worth_checked: bool,
    pub outcome: FinancialOutcome,
}

/// Apply the financial rule against `min_net_worth`.
pub fn evaluate_financial(profile: &FinancialProfile, min_net_worth: f64) -> FinancialAssessment {
    if profile.indices_ok() {
        debug!(
            lg = profile.general_liquidity,
            lc = profile.current_liquidity,
            sg = profile.general_solvency,
            "indices above floor, net worth not consulted"
        );
        return FinancialAssessment {
            pass: true,
            net_worth_checked: false,
            outcome: FinancialOutcome::IndicesAboveOne,
        };
    }

    let zero_ratios = [
        profile.general_liquidity,
        profile.current_liquidity,
        profile.general_solvency,
    ]
    .iter()
    .filter(|r| **r == 0.0)
    .count();
    if zero_ratios > 0 {
        warn!(zero_ratios, "ratio left at 0.00, falling back to net worth");
    }

    let net_worth = match profile.net_worth {
        Some(v) => v,
        None => {
            warn!("net worth not provided, treating as 0.00");
            0.0
        }
    };

    let pass = net_worth >= min_net_worth;
    debug!(net_worth, min_net_worth, pass, "net worth checked");
    let outcome = if pass {
        FinancialOutcome::NetWorthSufficient {
            net_worth,
            minimum: min_net_worth,
        }
    } else {
        FinancialOutcome::NetWorthInsufficient {
            net_worth,
            minimum: min_net_worth,
        }
    };

    FinancialAssessment {
        pass,
        net_worth_checked: true,
        outcome,
    }
}

/// The eight attestations of the technical/team checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalProfile {
    /// Attestation issued by a bank whose total assets reach the edital minimum.
    pub bank_asset_threshold: bool,
    /// Scope cites IFRS 9 / CMN Resolution 4.966.
    pub scope_ifrs9: bool,
    /// Scope cites credit risk / pricing review.
    pub scope_credit_risk: bool,
    pub ifrs9_specialist: bool,
    pub accounting_consultant: bool,
    pub tax_consultant: bool,
    pub risk_consultant: bool,
    pub modeling_specialist: bool,
}

impl TechnicalProfile {
    /// Every attestation confirmed.
    pub fn all_confirmed() -> Self {
        Self {
            bank_asset_threshold: true,
            scope_ifrs9: true,
            scope_credit_risk: true,
            ifrs9_specialist: true,
            accounting_consultant: true,
            tax_consultant: true,
            risk_consultant: true,
            modeling_specialist: true,
        }
    }

    /// `(label, confirmed)` for each attestation, in checklist order.
    pub fn items(&self) -> [(&'static str, bool); 8] {
        [
            (
                "Atestado emitido por Banco com Ativo Total ≥ R$ 14 Bilhões",
                self.bank_asset_threshold,
            ),
            ("Escopo cita IFRS 9 / Resolução CMN 4.966", self.scope_ifrs9),
            (
                "Escopo cita revisão de Risco de Crédito/Precificação",
                self.scope_credit_risk,
            ),
            (
                "Especialista IFRS 9 (10 anos + 3 projetos pós-2014)",
                self.ifrs9_specialist,
            ),
            (
                "Consultor Contábil (5 anos IFRS bancário)",
                self.accounting_consultant,
            ),
            ("Consultor Tributário (5 anos + CRC)", self.tax_consultant),
            ("Consultor de Riscos (5 anos)", self.risk_consultant),
            ("Especialista Modelagem (5 anos)", self.modeling_specialist),
        ]
    }

    /// Labels of the attestations still pending.
    pub fn missing(&self) -> Vec<&'static str> {
        self.items()
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(label, _)| label)
            .collect()
    }
}

/// All eight attestations must hold; no partial credit.
pub fn evaluate_technical(profile: &TechnicalProfile) -> bool {
    profile.items().iter().all(|(_, ok)| *ok)
}

pub fn evaluate_overall(financial_pass: bool, technical_pass: bool) -> bool {
    financial_pass && technical_pass
}

/// Advisory verdict for one bidder. The officer decides; nothing here binds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub financial_pass: bool,
    pub technical_pass: bool,
    pub overall_pass: bool,
    pub financial: FinancialAssessment,
    pub missing_attestations: Vec<String>,
}

/// Run both tracks against the tender's thresholds.
pub fn evaluate(
    financial: &FinancialProfile,
    technical: &TechnicalProfile,
    config: &TenderConfig,
) -> EligibilityVerdict {
    let assessment = evaluate_financial(financial, config.min_net_worth());
    let technical_pass = evaluate_technical(technical);
    let overall_pass = evaluate_overall(assessment.pass, technical_pass);
    debug!(
        financial_pass = assessment.pass,
        technical_pass, overall_pass, "eligibility evaluated"
    );

    EligibilityVerdict {
        financial_pass: assessment.pass,
        technical_pass,
        overall_pass,
        financial: assessment,
        missing_attestations: technical.missing().into_iter().map(String::from).collect(),
    }
}
