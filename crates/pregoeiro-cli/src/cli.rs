use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use pregoeiro_core::deadline::{APPEAL_DEFAULT_MINUTES, CUSTOM_DEFAULT_MINUTES};
use pregoeiro_core::{
    AnnouncementParams, DeadlinePreset, FinancialProfile, Scenario, TechnicalProfile,
    brasilia_offset,
};

#[derive(Parser, Debug)]
#[command(
    name = "pregoeiro",
    version,
    about = "Cockpit do Pregoeiro: habilitação, prazos e mensagens padrão"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "More log output on stderr")]
    pub verbose: u8,
    #[arg(
        long,
        global = true,
        env = "PREGOEIRO_CONFIG",
        help = "Tender config JSON (defaults to PE 90019/2025)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        hide = true,
        value_parser = parse_now,
        help = "Pin the clock to an RFC 3339 instant"
    )]
    pub now: Option<DateTime<FixedOffset>>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the tender header and thresholds.
    Info,
    /// Check a bidder against the financial and technical requirements.
    Eligibility(EligibilityArgs),
    /// Compute a deadline from now in Brasília time.
    Deadline(DeadlineArgs),
    /// Render a standard announcement for the session chat.
    Announce(AnnounceArgs),
    /// List the announcement scenarios.
    Scenarios,
    /// Interactive session keeping the last computed deadline.
    Session,
}

/// One line typed inside `pregoeiro session`.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "session", disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommands,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    Info,
    Eligibility(EligibilityArgs),
    /// Compute a deadline and keep it as the session's last deadline.
    Deadline(DeadlineArgs),
    /// Show the last computed deadline and message.
    Show,
    Announce(AnnounceArgs),
    Scenarios,
    /// Leave the session.
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EligibilityArgs {
    #[arg(long, allow_negative_numbers = true, help = "Liquidez Geral (LG)")]
    pub lg: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Liquidez Corrente (LC)")]
    pub lc: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Solvência Geral (SG)")]
    pub sg: Option<f64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Patrimônio Líquido (R$), read when a ratio is ≤ 1.0"
    )]
    pub net_worth: Option<f64>,

    #[arg(long, help = "Atestado emitido por banco com Ativo Total acima do mínimo")]
    pub bank_assets: bool,
    #[arg(long, help = "Escopo cita IFRS 9 / Resolução CMN 4.966")]
    pub scope_ifrs9: bool,
    #[arg(long, help = "Escopo cita revisão de Risco de Crédito/Precificação")]
    pub scope_credit_risk: bool,
    #[arg(long)]
    pub ifrs9_specialist: bool,
    #[arg(long)]
    pub accounting_consultant: bool,
    #[arg(long)]
    pub tax_consultant: bool,
    #[arg(long)]
    pub risk_consultant: bool,
    #[arg(long)]
    pub modeling_specialist: bool,
    #[arg(long, help = "Confirm all eight technical attestations")]
    pub all_technical: bool,
}

impl EligibilityArgs {
    /// Unset figures become 0.00, matching the form defaults.
    pub fn financial_profile(&self) -> FinancialProfile {
        FinancialProfile {
            general_liquidity: self.lg.unwrap_or(0.0),
            current_liquidity: self.lc.unwrap_or(0.0),
            general_solvency: self.sg.unwrap_or(0.0),
            net_worth: self.net_worth,
        }
    }

    /// Names of the ratio flags left unset.
    pub fn unset_ratios(&self) -> Vec<&'static str> {
        [("lg", self.lg), ("lc", self.lc), ("sg", self.sg)]
            .into_iter()
            .filter(|(_, v)| v.is_none())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn technical_profile(&self) -> TechnicalProfile {
        if self.all_technical {
            return TechnicalProfile::all_confirmed();
        }
        TechnicalProfile {
            bank_asset_threshold: self.bank_assets,
            scope_ifrs9: self.scope_ifrs9,
            scope_credit_risk: self.scope_credit_risk,
            ifrs9_specialist: self.ifrs9_specialist,
            accounting_consultant: self.accounting_consultant,
            tax_consultant: self.tax_consultant,
            risk_consultant: self.risk_consultant,
            modeling_specialist: self.modeling_specialist,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DeadlineKind {
    /// Envio de Proposta (2h)
    Proposal,
    /// Envio de Documentos (2h)
    Documents,
    /// Intenção de Recurso (10 a 60 min)
    Appeal,
    /// Personalizado (mínimo 1 min)
    Custom,
}

#[derive(Args, Debug, Clone)]
pub struct DeadlineArgs {
    #[arg(value_enum)]
    pub kind: DeadlineKind,
    #[arg(long, help = "Minutes for appeal (10-60, default 20) or custom (default 30)")]
    pub minutes: Option<u32>,
}

impl DeadlineArgs {
    pub fn preset(&self) -> DeadlinePreset {
        match self.kind {
            DeadlineKind::Proposal => DeadlinePreset::ProposalSubmission,
            DeadlineKind::Documents => DeadlinePreset::DocumentSubmission,
            DeadlineKind::Appeal => {
                DeadlinePreset::AppealIntent(self.minutes.unwrap_or(APPEAL_DEFAULT_MINUTES))
            }
            DeadlineKind::Custom => {
                DeadlinePreset::Custom(self.minutes.unwrap_or(CUSTOM_DEFAULT_MINUTES))
            }
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AnnounceArgs {
    /// Scenario name, see `pregoeiro scenarios`.
    pub scenario: Scenario,
    #[arg(long, help = "Data prevista de retorno (suspension-for-review)")]
    pub return_date: Option<String>,
    #[arg(long, help = "Tempo concedido em minutos (appeal-window)")]
    pub minutes: Option<String>,
    #[arg(long, help = "Motivo da recusa (deny-appeal)")]
    pub reason: Option<String>,
}

impl AnnounceArgs {
    pub fn params(&self) -> AnnouncementParams {
        AnnouncementParams {
            return_date: self.return_date.clone(),
            granted_minutes: self.minutes.clone(),
            denial_reason: self.reason.clone(),
        }
    }
}

fn parse_now(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&brasilia_offset()))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}
